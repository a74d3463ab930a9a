use anyhow::Result;
use stagehand_core::{resolve, EntityKind, Play};
use stagehand_director::git::{self, GitCli};
use stagehand_director::playback::{self, Outcome, StdinPrompter};
use std::path::Path;

use crate::Exit;

/// Execute `stagehand [run] [PLAY] [-c ACT_NUMBER]`.
///
/// Everything that can fail is checked before the first act is shown:
/// resolution, act-list validation, the continue argument, and the
/// play's git preconditions.
pub fn execute(root: &Path, query: Option<&str>, continue_from: Option<usize>) -> Result<Exit> {
    let play = Play::from_entity(resolve(EntityKind::Play, root, query)?)?;
    let acts = play.acts()?;
    let start_at = playback::start_index(&acts, play.name_or_file_name(), continue_from)?;

    git::validate(play.git(), &GitCli::new(root))?;

    println!("Starting play '{}'.", play.name_or_file_name());

    let mut prompter = StdinPrompter::new();
    let outcome = playback::run(
        &acts,
        start_at,
        play.confirmation(),
        &mut prompter,
        &mut std::io::stdout(),
    )?;

    match outcome {
        Outcome::Completed => {
            println!("\nPlay '{}' completed.", play.name_or_file_name());
            Ok(Exit::Success)
        }
        Outcome::Aborted { act_index } => {
            // Guidance goes to stdout: an abort is an operator decision,
            // not a failure report.
            println!("{}", resume_hint(play.file_name(), act_index));
            Ok(Exit::Aborted)
        }
    }
}

/// The command to re-run the play from the first unplayed act.
fn resume_hint(file_name: &str, act_index: usize) -> String {
    let act_number = act_index + 1;
    format!("\nTo resume from act #{act_number}, use 'stagehand {file_name} -c {act_number}'.")
}
