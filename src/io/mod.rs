//! Input/output abstractions
//!
//! The console session talks to these traits instead of stdin/stdout so the
//! form-filling flow can be driven by scripted input in tests.

use std::io::{self, BufRead, Write};

use crate::models::errors::RosterResult;

/// Trait for reading user input
pub trait InputReader {
    /// Read a line after showing `prompt`. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> RosterResult<Option<String>>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> RosterResult<Option<String>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted input; runs dry after the last response
    pub struct MockInput {
        responses: VecDeque<String>,
    }

    impl MockInput {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl InputReader for MockInput {
        fn read_line(&mut self, _prompt: &str) -> RosterResult<Option<String>> {
            Ok(self.responses.pop_front())
        }
    }

    /// Captures every line written
    #[derive(Default)]
    pub struct MockOutput {
        pub lines: Vec<String>,
    }

    impl MockOutput {
        pub fn contains(&self, needle: &str) -> bool {
            self.lines.iter().any(|line| line.contains(needle))
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.lines.push(message.to_string());
        }
    }
}
