use anyhow::Result;
use stagehand_core::{Catalog, EntityKind};
use std::path::Path;

/// Execute `stagehand list`.
///
/// An empty-but-present plays directory is not an error; a missing one
/// still is.
pub fn execute(root: &Path) -> Result<()> {
    let catalog = Catalog::scan(EntityKind::Play, root)?;

    if catalog.is_empty() {
        println!(
            "No plays found in the '{}' directory.",
            EntityKind::Play.directory()
        );
        return Ok(());
    }

    println!(
        "Found {} {}:",
        catalog.len(),
        pluralize(catalog.len(), "play")
    );

    for entity in catalog.all() {
        let marker = if catalog.is_default(entity) { '*' } else { '-' };
        match &entity.name {
            Some(name) => println!("  {marker} {} (name: {name})", entity.file_name),
            None => println!("  {marker} {}", entity.file_name),
        }
    }

    Ok(())
}

fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
