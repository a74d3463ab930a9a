//! Entity model, catalog construction, and resolution for stagehand
//! plays and acts.
//!
//! A *play* is a JSON5 file under `plays/` describing a guided procedure:
//! optional metadata plus an ordered list of *acts*, each a title and a
//! list of human-readable *scenes*. This crate discovers those files,
//! resolves a user query to exactly one of them, and validates their
//! shape. Actually walking an operator through a play lives in
//! `stagehand-director`.

pub mod catalog;
pub mod content;
pub mod entity;
pub mod error;
pub mod play;
pub mod resolve;

pub use catalog::Catalog;
pub use entity::{Entity, EntityKind};
pub use error::Error;
pub use play::{Act, GitValidation, Play};
pub use resolve::resolve;
