use anyhow::Result;
use stagehand_core::error::Error;
use stagehand_core::{resolve, EntityKind, Play};
use std::path::Path;

/// Execute `stagehand validate [PLAY]`.
///
/// Runs the same validation as `run` — resolution, act-list shape, and
/// the no-acts check — without playing anything.
pub fn execute(root: &Path, query: Option<&str>) -> Result<()> {
    let play = Play::from_entity(resolve(EntityKind::Play, root, query)?)?;
    let acts = play.acts()?;

    if acts.is_empty() {
        return Err(Error::NoActs(play.name_or_file_name().to_string()).into());
    }

    println!("The play '{}' is valid.", play.name_or_file_name());
    Ok(())
}
