use crate::entity::EntityKind;
use crate::error::{Error, LoadCause};
use serde_json::Value;
use std::path::Path;

/// A parsed document: the raw value plus the optional declared name.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: Option<String>,
    pub content: Value,
}

/// Read and parse one play/act file.
///
/// This is the only place raw file bytes are parsed; callers never
/// re-parse. The syntax is JSON5, so comments, unquoted keys, and
/// trailing commas are all tolerated. A declared `name` must be a
/// string; an empty one is treated as absent.
pub fn load(kind: EntityKind, path: &Path) -> Result<Document, Error> {
    let wrap = |cause| Error::Load {
        kind,
        path: path.to_path_buf(),
        cause,
    };

    let text = std::fs::read_to_string(path).map_err(|e| wrap(LoadCause::Read(e)))?;
    let content: Value = json5::from_str(&text).map_err(|e| wrap(LoadCause::Parse(e)))?;

    let name = match content.get("name") {
        None => None,
        Some(Value::String(name)) if name.is_empty() => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(_) => return Err(wrap(LoadCause::NameNotAString)),
    };

    Ok(Document { name, content })
}
