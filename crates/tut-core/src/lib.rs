//! # tut-core
//!
//! Core types shared across the tutorials workspace.
//!
//! - Entity structs for the `Tutorial` model, in its transient
//!   ([`entities::NewTutorial`]) and persisted ([`entities::Tutorial`]) forms
//! - CLI response types

pub mod entities;
pub mod responses;
