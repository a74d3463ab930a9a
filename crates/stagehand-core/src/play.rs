use crate::entity::{Entity, EntityKind};
use crate::error::Error;
use serde::Deserialize;
use serde_json::Value;

/// Token the operator types to advance past an act, unless the play
/// declares its own.
pub const DEFAULT_CONFIRMATION_TOKEN: &str = "done";

/// Token that aborts a run at any confirmation prompt. Not overridable.
pub const CANCELLATION_TOKEN: &str = "stop";

/// One step of a play: a title plus ordered scene instructions.
///
/// The shape is strict: anything beyond `title` and `scenes` is rejected
/// at validation time, never at playback time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Act {
    pub title: String,
    pub scenes: Vec<String>,
}

/// Repository-state requirements a play may declare. An absent field
/// means "do not check this condition".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GitValidation {
    pub branch: Option<String>,
    pub clean: Option<bool>,
}

impl GitValidation {
    /// True when nothing is meaningfully set (every field absent or
    /// `false`). A no-op spec must not trigger a single status query.
    pub fn is_noop(&self) -> bool {
        self.branch.is_none() && self.clean != Some(true)
    }
}

/// A resolved play: the underlying entity plus its playback metadata.
///
/// The top level of a play file is permissive (unknown keys are
/// ignored); only the act entries are strict.
#[derive(Debug, Clone)]
pub struct Play {
    entity: Entity,
    confirmation: String,
    git: GitValidation,
}

impl Play {
    pub fn from_entity(entity: Entity) -> Result<Self, Error> {
        let confirmation = match entity.content.get("confirmation") {
            None => DEFAULT_CONFIRMATION_TOKEN.to_string(),
            Some(Value::String(token)) if !token.is_empty() => token.clone(),
            Some(_) => {
                return Err(validation_error(
                    &entity,
                    "'confirmation' must be a non-empty string".to_string(),
                ))
            }
        };

        let git = match entity.content.get("git") {
            None => GitValidation::default(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| validation_error(&entity, format!("git: {e}")))?,
        };

        Ok(Self {
            entity,
            confirmation,
            git,
        })
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn file_name(&self) -> &str {
        &self.entity.file_name
    }

    pub fn name_or_file_name(&self) -> &str {
        self.entity.name_or_file_name()
    }

    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    pub fn git(&self) -> &GitValidation {
        &self.git
    }

    /// Decode and validate the act list. A missing `acts` key is an
    /// empty list; a malformed entry is rejected here with the file and
    /// the failing index in the message. Emptiness is the caller's
    /// concern (`Error::NoActs`) so that listing and playback can treat
    /// it differently.
    pub fn acts(&self) -> Result<Vec<Act>, Error> {
        let raw = match self.entity.content.get("acts") {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(validation_error(
                    &self.entity,
                    "'acts' must be an array".to_string(),
                ))
            }
        };

        let mut acts = Vec::with_capacity(raw.len());
        for (index, item) in raw.iter().enumerate() {
            let act: Act = serde_json::from_value(item.clone())
                .map_err(|e| validation_error(&self.entity, format!("acts[{index}]: {e}")))?;
            acts.push(act);
        }
        Ok(acts)
    }
}

fn validation_error(entity: &Entity, detail: String) -> Error {
    Error::Validation {
        kind: EntityKind::Play,
        file_name: entity.file_name.clone(),
        detail,
    }
}
