//! Tessera Core - Fundamental types
//!
//! This crate provides the core types used throughout Tessera:
//! - `Value` / `ValueKind`: tagged runtime values crossing the shard boundary
//! - `ShardError`: structured errors with stable machine-readable codes

mod error;
mod value;

pub use error::{codes, ShardError};
pub use value::{Value, ValueKind};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{ShardError, Value, ValueKind};
}
