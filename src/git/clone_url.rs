//! Clone URL helpers.

use url::Url;

/// Build an HTTPS clone URL with the username and token embedded.
///
/// `https://{user}:{token}@{host}/{owner}/{name}.git`
pub fn authenticated_clone_url(
    host: &str,
    username: &str,
    token: &str,
    owner: &str,
    name: &str,
) -> String {
    format!(
        "https://{}:{}@{}/{}/{}.git",
        urlencoding::encode(username),
        urlencoding::encode(token),
        host,
        owner,
        name
    )
}

/// Mask any `user:password@` userinfo in URLs found in `text`.
pub fn redact_credentials(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("://") {
        let authority_start = start + 3;
        result.push_str(&rest[..authority_start]);
        rest = &rest[authority_start..];

        let authority_end = rest
            .find(|c: char| c == '/' || c.is_whitespace())
            .unwrap_or(rest.len());
        if let Some(at) = rest[..authority_end].rfind('@') {
            result.push_str("***");
            rest = &rest[at..];
        }
    }

    result.push_str(rest);
    result
}

/// Derive the folder `git clone` creates for a URL: the last path segment
/// without a trailing `.git`.
pub fn folder_name_from_url(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        // scp-like syntax: git@github.com:owner/repo.git
        Err(_) => url.rsplit(':').next().unwrap_or(url).to_string(),
    };

    let segment = path.trim_end_matches('/').rsplit('/').next()?;
    let name = segment.strip_suffix(".git").unwrap_or(segment);

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
