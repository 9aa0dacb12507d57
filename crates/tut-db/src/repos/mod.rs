//! Repository modules implementing CRUD operations.
//!
//! Each module adds methods to `TutorialService` via `impl TutorialService` blocks.

pub mod tutorial;
