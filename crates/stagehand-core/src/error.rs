use crate::entity::EntityKind;
use std::path::PathBuf;

/// Everything that can go wrong while resolving or validating a play.
///
/// Variants fall into four families: structural (filesystem), validation
/// (schema), resolution (user query), and precondition (repository
/// state), plus the interactive-channel failures at the bottom. A user
/// abort is deliberately *not* an error; see
/// `stagehand_director::playback::Outcome`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── Structural ──
    #[error("Could not locate the '{}' directory. It should be at the root of your project.", dir.display())]
    DirectoryMissing { dir: PathBuf },

    #[error("Could not read the {kind} file at '{}'.", path.display())]
    Load {
        kind: EntityKind,
        path: PathBuf,
        #[source]
        cause: LoadCause,
    },

    // ── Validation ──
    #[error("Invalid {kind} file '{file_name}': {detail}.")]
    Validation {
        kind: EntityKind,
        file_name: String,
        detail: String,
    },

    // ── Resolution ──
    #[error("No default {kind} found in the '{}' directory. It should be a '{default_file}' file.", dir.display())]
    NoDefault {
        kind: EntityKind,
        dir: PathBuf,
        default_file: String,
    },

    /// Deliberately generic: the message does not reveal which lookup
    /// strategies were attempted, and is worded identically for both
    /// kinds apart from the kind word.
    #[error("Could not find {} {kind} matching the given path, file name or name.", kind.article())]
    NotFound { kind: EntityKind },

    #[error("The act number '{0}' is not valid.")]
    InvalidActNumber(usize),

    #[error("No acts found in the '{0}' play.")]
    NoActs(String),

    // ── Preconditions ──
    #[error("Cannot run a play with git validations outside of a git repository.")]
    NotARepository,

    #[error("The working tree is not clean. Clean it before running this play.")]
    DirtyWorkingTree,

    #[error("This play should only be run on the '{expected}' branch. Switch before running this play.")]
    BranchMismatch { expected: String, actual: String },

    #[error("Could not get the status of the repository.")]
    GitStatus(#[source] std::io::Error),

    // ── Interactive channel ──
    #[error("Operator input closed before the play finished.")]
    InputClosed,

    #[error("Could not write play output.")]
    Io(#[from] std::io::Error),
}

/// Why a document failed to load, preserved as an inspectable cause.
#[derive(Debug, thiserror::Error)]
pub enum LoadCause {
    #[error("unreadable file")]
    Read(#[source] std::io::Error),
    #[error("syntax error")]
    Parse(#[source] json5::Error),
    #[error("the top-level 'name' field must be a string")]
    NameNotAString,
}
