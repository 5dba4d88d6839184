//! Line-oriented terminal I/O
//!
//! Every prompt is a blocking read of one line. The console is generic over
//! its reader and writer so sessions can be driven from a script in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use thiserror::Error;

/// Width of heading and separator rules
const RULE_WIDTH: usize = 50;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Terminal input closed")]
    Closed,
}

/// Prompt/print wrapper around a reader and a writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; `clear_screen` enables [`Console::clear`]
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        Self {
            reader,
            writer,
            clear_screen,
        }
    }

    /// Writes one line
    pub fn println(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.writer, "{}", text.as_ref()).context("Failed to write to terminal")
    }

    /// Writes a horizontal rule of `ch`
    pub fn rule(&mut self, ch: char) -> Result<()> {
        let line: String = std::iter::repeat(ch).take(RULE_WIDTH).collect();
        self.println(line)
    }

    /// Writes a framed section title
    pub fn heading(&mut self, title: &str) -> Result<()> {
        self.println("")?;
        self.rule('=')?;
        self.println(format!("        {}", title))?;
        self.rule('=')
    }

    /// Shows `label` and reads one line, without its line terminator
    pub fn prompt(&mut self, label: impl AsRef<str>) -> Result<String> {
        write!(self.writer, "{}", label.as_ref()).context("Failed to write to terminal")?;
        self.writer.flush().context("Failed to flush terminal")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            return Err(ConsoleError::Closed.into());
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Clears the screen and homes the cursor, if enabled
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear terminal")?;
        }
        Ok(())
    }

    /// Consumes the console, returning the writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}
