//! Interactive query loop.
//!
//! The loop is a small state machine:
//!
//! ```text
//!            ┌──────────── yes ────────────┐
//!            ▼                             │
//! start → Query ──answered──→ PromptContinue ──no──→ Done
//!                                  │  ▲
//!                                  └──┘ anything else
//! ```
//!
//! End of input at either prompt moves straight to `Done`.

use std::io::{BufRead, Write};

use log::{debug, info};

use super::index::RecordIndex;
use super::query;
use super::types::error::Result;

pub const IDS_PROMPT: &str = "Enter ids: ";
pub const CONTINUE_PROMPT: &str = "Do you want to continue? (yes/no): ";
pub const INVALID_ANSWER: &str = "Invalid entry. Please enter yes or no.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Ask for an id list and print the answers.
    Query,
    /// Ask whether to run another query.
    PromptContinue,
    /// Finished; further steps do nothing.
    Done,
}

/// A yes/no reply to the continue prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Case-insensitive `yes`/`no`, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("yes") {
            Some(Answer::Yes)
        } else if input.eq_ignore_ascii_case("no") {
            Some(Answer::No)
        } else {
            None
        }
    }
}

/// Drives query cycles over a line-oriented input and an output sink.
pub struct Shell<'a, R, W> {
    index: &'a RecordIndex,
    input: R,
    output: W,
    state: ShellState,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a shell that starts by asking for an id list.
    pub fn new(index: &'a RecordIndex, input: R, output: W) -> Self {
        Self {
            index,
            input,
            output,
            state: ShellState::Query,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Runs until the user answers `no` or the input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? != ShellState::Done {}
        info!("Interactive session finished");
        Ok(())
    }

    /// Performs one prompt/response exchange and returns the new state.
    pub fn step(&mut self) -> Result<ShellState> {
        self.state = match self.state {
            ShellState::Query => self.query_cycle()?,
            ShellState::PromptContinue => self.continue_cycle()?,
            ShellState::Done => ShellState::Done,
        };
        Ok(self.state)
    }

    /// Consumes the shell and hands back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn query_cycle(&mut self) -> Result<ShellState> {
        let Some(line) = self.prompt(IDS_PROMPT)? else {
            return Ok(ShellState::Done);
        };
        let requested = line.trim_end_matches(['\r', '\n']);
        writeln!(self.output, "Requested ids: {}", requested)?;
        for answer in query::run_query(self.index, requested).lines {
            writeln!(self.output, "{}", answer)?;
        }
        Ok(ShellState::PromptContinue)
    }

    fn continue_cycle(&mut self) -> Result<ShellState> {
        let Some(line) = self.prompt(CONTINUE_PROMPT)? else {
            return Ok(ShellState::Done);
        };
        match Answer::parse(&line) {
            Some(Answer::Yes) => Ok(ShellState::Query),
            Some(Answer::No) => Ok(ShellState::Done),
            None => {
                debug!("Unrecognised continue answer: {:?}", line.trim());
                writeln!(self.output, "{}", INVALID_ANSWER)?;
                Ok(ShellState::PromptContinue)
            }
        }
    }

    /// Writes a prompt and reads one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed at prompt {:?}", text.trim());
            return Ok(None);
        }
        Ok(Some(line))
    }
}
