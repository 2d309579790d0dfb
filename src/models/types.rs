//! Model listing types.

use std::fmt;

use serde::Deserialize;

/// One entry of the `/v1/models` response.
///
/// Fields are taken as the server sends them; empty ids or negative
/// timestamps are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    #[serde(rename = "object")]
    pub kind: String,
    pub created: i64,
    pub owned_by: String,
}

impl fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Model ID: {}, Object: {}, Created: {}, OwnedBy: {}",
            self.id, self.kind, self.created, self.owned_by
        )
    }
}

/// Response envelope: `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelList {
    pub data: Vec<ModelDescriptor>,
}
