//! Structured errors at the shard boundary
//!
//! Every failure a shard can hand back to its host carries a stable
//! machine-readable code, a human-readable message, and optionally a
//! suggestion. An activation error is fatal for that call only: the shard
//! mutates no state on the failing path and stays usable for the next call.

use crate::ValueKind;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    /// `activate` received a value whose kind violates the declared input kind.
    pub const INPUT_KIND: &str = "INPUT_KIND";
    /// `set_param` received a value of a kind the parameter does not accept.
    pub const PARAM_KIND: &str = "PARAM_KIND";
    /// `set_param`/`get_param` named a parameter the shard does not declare.
    pub const UNKNOWN_PARAM: &str = "UNKNOWN_PARAM";
    /// Registry lookup failed: no shard registered under the given name.
    pub const UNKNOWN_SHARD: &str = "UNKNOWN_SHARD";
}

/// Structured error reported across the shard boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShardError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ShardError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn input_kind(shard: &str, expected: ValueKind, got: ValueKind) -> Self {
        Self::new(
            codes::INPUT_KIND,
            format!("{} requires {} input, got {}", shard, expected, got),
        )
        .with_suggestion(format!("Feed this shard {} values", expected))
    }

    pub fn param_kind(shard: &str, param: &str, accepted: &[ValueKind], got: ValueKind) -> Self {
        let accepted: Vec<&str> = accepted.iter().map(|k| k.name()).collect();
        Self::new(
            codes::PARAM_KIND,
            format!(
                "{} parameter '{}' accepts {}, got {}",
                shard,
                param,
                accepted.join(" or "),
                got
            ),
        )
    }

    pub fn unknown_param(shard: &str, param: &str) -> Self {
        Self::new(
            codes::UNKNOWN_PARAM,
            format!("{} has no parameter named '{}'", shard, param),
        )
        .with_suggestion("Check the shard's parameter schema in its metadata")
    }

    pub fn unknown_shard(name: &str) -> Self {
        Self::new(
            codes::UNKNOWN_SHARD,
            format!("No shard registered under '{}'", name),
        )
    }
}

impl std::fmt::Display for ShardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ShardError {}
