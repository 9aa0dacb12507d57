//! Entity structs for the tutorials domain.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod tutorial;

pub use tutorial::{NewTutorial, Tutorial};
