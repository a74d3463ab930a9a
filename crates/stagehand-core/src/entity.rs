use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// The two discoverable file kinds. Each kind owns a fixed
/// project-root-relative directory and a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Play,
    Act,
}

impl EntityKind {
    /// Directory holding files of this kind, relative to the project root.
    pub fn directory(self) -> &'static str {
        match self {
            Self::Play => "plays",
            Self::Act => "acts",
        }
    }

    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Act => "act",
        }
    }

    /// File name of the explicit default entity.
    pub fn default_file_name(self) -> String {
        format!("default.{}", self.extension())
    }

    /// Indefinite article for user-facing messages ("a play", "an act").
    pub fn article(self) -> &'static str {
        match self {
            Self::Play => "a",
            Self::Act => "an",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Play => "play",
            Self::Act => "act",
        })
    }
}

/// One discovered play or act file, loaded and ready to resolve against.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Base name including the extension, fixed at discovery time.
    pub file_name: String,
    /// Canonical absolute path of the discovered file.
    pub path: PathBuf,
    /// Human-readable name declared inside the file, when present.
    /// Never an empty string.
    pub name: Option<String>,
    /// Raw parsed document value.
    pub content: Value,
}

impl Entity {
    /// Declared name when present, file name otherwise. This is how the
    /// entity is referred to in user-facing messages.
    pub fn name_or_file_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.file_name)
    }
}
