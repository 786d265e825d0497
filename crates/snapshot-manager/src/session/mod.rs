//! Interactive prune and restore flows.
//!
//! The flows only talk to the operator through [`Prompt`], so they can be driven by a script in
//! tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

use crate::{ListError, PruneError, RestoreError};

mod prune;
mod restore;

pub use prune::{PruneOutcome, prune_session};
pub use restore::{RestoreOutcome, restore_session};

/// A way to show lines to and read answers from the operator.
pub trait Prompt {
    /// Show a line.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Show `question` and read the answer, without the line ending. An exhausted input reads as
    /// an empty answer.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// A prompt over a reader and writer.
pub struct Terminal<Input, Output> {
    input: Input,
    output: Output,
}

impl<Input: BufRead, Output: Write> Terminal<Input, Output> {
    /// Create a prompt reading answers from `input` and writing to `output`.
    pub fn new(input: Input, output: Output) -> Self {
        Self { input, output }
    }

    /// The output written so far.
    pub fn output(&self) -> &Output {
        &self.output
    }
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A prompt on stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<Input: BufRead, Output: Write> Prompt for Terminal<Input, Output> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Ask for a yes/no confirmation, anything but `y` or `yes` is a no.
pub fn confirm<P: Prompt>(prompt: &mut P) -> io::Result<bool> {
    let answer = prompt.ask("Are you sure? (y/N): ")?;
    let answer = answer.trim();

    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

fn is_quit(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("q")
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to talk to the operator: {0}")]
    Prompt(#[from] io::Error),

    #[error(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    Prune(#[from] PruneError),

    #[error(transparent)]
    Restore(#[from] RestoreError),
}
