//! Line-oriented console used for menus and prompts.

use crate::error::{GitAutoError, Result};
use std::io::{self, BufRead, Write};

/// Interactive input and user-facing output.
pub trait Console {
    /// Print a prompt and read one line of input, without the trailing newline.
    ///
    /// Returns [`GitAutoError::InputClosed`] once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Print a line of output.
    fn say(&mut self, message: &str) -> Result<()>;

    /// Ask a yes/no question. Only `yes` (any case) counts as yes.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.trim().eq_ignore_ascii_case("yes"))
    }
}

/// Console over any reader/writer pair.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GitAutoError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
