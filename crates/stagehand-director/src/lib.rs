//! The runtime side of stagehand: validating a play's repository
//! preconditions and driving the interactive, confirmable playback loop.

pub mod git;
pub mod playback;

pub use git::{GitCli, RepoStatus, StatusProvider};
pub use playback::{Outcome, PromptKind, Prompter, StdinPrompter};
