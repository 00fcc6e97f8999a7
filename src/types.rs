use serde::{Deserialize, Serialize};

/// A single chat turn.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Chat roles, spelled lowercase on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Model parameters for `/api/generate`.
///
/// Absent fields are left out of the payload entirely, so the server falls
/// back to its own defaults for them.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    /// Sampling temperature; lower values make output more deterministic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Nucleus sampling cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Sequences that end generation when the model emits them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl GenerateOptions {
    /// The tuning the code-assistance helpers send when the caller supplies no
    /// options: low temperature, tight nucleus, stop at the first blank line.
    pub fn code_defaults() -> Self {
        Self {
            temperature: Some(0.2),
            top_p: Some(0.9),
            stop: Some(vec!["\n\n".to_string()]),
        }
    }
}
