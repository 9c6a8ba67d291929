//! Stdin abstraction for testability.
//!
//! The binary decides between reading piped input and demanding a file
//! argument based on whether stdin is a terminal. Tests drive both
//! branches through a mock instead of re-wiring the process's stdin.

use std::io::{self, IsTerminal, Read};

/// Abstraction over stdin state and content.
pub trait StdinReader {
    /// True when stdin is an interactive terminal rather than a pipe.
    fn is_terminal(&self) -> bool;

    /// Read all piped content. Only called when `is_terminal` is false.
    fn read_to_string(&self) -> io::Result<String>;
}

// === Real implementation ===

/// Reader backed by the process's actual stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

// === Mock implementation for testing ===

/// Mock stdin simulating a terminal or piped content.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: String,
}

#[cfg(test)]
impl MockStdin {
    /// Simulate an interactive terminal with nothing piped.
    pub fn terminal() -> Self {
        MockStdin {
            is_terminal: true,
            content: String::new(),
        }
    }

    /// Simulate piped input with the given content.
    pub fn piped(content: impl Into<String>) -> Self {
        MockStdin {
            is_terminal: false,
            content: content.into(),
        }
    }
}

#[cfg(test)]
impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.content.clone())
    }
}
