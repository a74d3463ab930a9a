use stagehand_core::error::Error;
use stagehand_core::play::{Act, CANCELLATION_TOKEN};
use std::io::{BufRead, StdinLock, Write};

/// How a playback session ended. A user abort is a first-class outcome,
/// not an error: callers match on it and print resume guidance instead
/// of a failure report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Aborted while awaiting confirmation for the act at `act_index`
    /// (0-based). The act to resume from is `act_index + 1`, 1-based.
    Aborted { act_index: usize },
}

/// Which prompt variant to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// First ask for the current act.
    Confirm,
    /// Re-ask after input that matched neither token.
    Reconfirm,
}

/// The operator-input seam. One prompter is acquired per playback
/// session and released on every exit path when it drops.
pub trait Prompter {
    /// Show one prompt and read one line of input, trimmed.
    fn ask(&mut self, kind: PromptKind, confirmation: &str) -> Result<String, Error>;
}

/// Interactive prompter over the process stdin. Holds the stdin lock
/// for the whole session so nothing else interleaves reads.
pub struct StdinPrompter {
    input: StdinLock<'static>,
}

impl StdinPrompter {
    pub fn new() -> Self {
        Self {
            input: std::io::stdin().lock(),
        }
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for StdinPrompter {
    fn ask(&mut self, kind: PromptKind, confirmation: &str) -> Result<String, Error> {
        match kind {
            PromptKind::Confirm => {
                print!("  ▸ type '{confirmation}' to continue, or '{CANCELLATION_TOKEN}' to abort: ");
            }
            PromptKind::Reconfirm => {
                print!("  ↻ unrecognized answer, type '{confirmation}' or '{CANCELLATION_TOKEN}': ");
            }
        }
        std::io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Map the operator's 1-based "continue from" argument onto the act
/// list. Rejects an empty act list and out-of-range numbers before any
/// act output or prompt is produced.
pub fn start_index(
    acts: &[Act],
    name_or_file_name: &str,
    continue_from: Option<usize>,
) -> Result<usize, Error> {
    if acts.is_empty() {
        return Err(Error::NoActs(name_or_file_name.to_string()));
    }
    match continue_from {
        None => Ok(0),
        Some(n) if (1..=acts.len()).contains(&n) => Ok(n - 1),
        Some(n) => Err(Error::InvalidActNumber(n)),
    }
}

/// Drive the sequential, confirmable playback loop.
///
/// Each act's title and scenes go to `out` in order, then the prompter
/// is asked until the answer equals the confirmation token (advance) or
/// the cancellation token (abort, carrying the current act index). Any
/// other answer re-asks with the reconfirm variant, indefinitely. There
/// is never more than one outstanding prompt.
pub fn run(
    acts: &[Act],
    start_at: usize,
    confirmation: &str,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<Outcome, Error> {
    let total = acts.len();

    for (index, act) in acts.iter().enumerate().skip(start_at) {
        writeln!(out)?;
        writeln!(out, "▶ [{}/{}] {}", index + 1, total, act.title)?;
        for scene in &act.scenes {
            writeln!(out, "  {scene}")?;
        }

        let mut kind = PromptKind::Confirm;
        loop {
            let answer = prompter.ask(kind, confirmation)?;
            if answer == confirmation {
                break;
            }
            if answer == CANCELLATION_TOKEN {
                tracing::debug!(act_index = index, "operator aborted the play");
                return Ok(Outcome::Aborted { act_index: index });
            }
            kind = PromptKind::Reconfirm;
        }
    }

    Ok(Outcome::Completed)
}
