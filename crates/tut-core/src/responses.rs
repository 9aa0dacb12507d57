//! CLI response types returned as JSON by `tut` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `tut exists`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExistsResponse {
    pub exists: bool,
    pub count: u64,
}

/// Response from `tut delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}

/// Response from `tut reverse`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReverseResponse {
    pub name: String,
    pub path: String,
}
