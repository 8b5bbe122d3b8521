//! Line-oriented terminal I/O behind a trait so flows can run against
//! scripted input in tests.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Everything the interactive flow needs from a terminal.
pub trait Console {
    /// Print `line` followed by a newline.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Print `prompt` (no newline) and block until a line is entered.
    ///
    /// The returned line has its line terminator removed. End of input is an
    /// [`io::ErrorKind::UnexpectedEof`] error.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// [`Console`] over any buffered reader and writer.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl LineConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
