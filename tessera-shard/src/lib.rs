//! Tessera Shard Contract
//!
//! Everything a shard author or host needs to speak the contract:
//! - `Shard`: the operation trait (kinds, parameters, lifecycle, activation)
//! - `ShardMeta` / `ParamMeta`: the descriptor a registry stores per name
//! - `ShardRegistry`: explicit name-to-factory mapping built at process start
//! - `ShardContext`: per-session handle passed to `warmup` and `activate`

mod context;
mod registry;
mod traits;

pub use context::ShardContext;
pub use registry::ShardRegistry;
pub use traits::{ParamMeta, Shard, ShardMeta};

/// Re-export core types for shard authors
pub mod prelude {
    pub use crate::{ParamMeta, Shard, ShardContext, ShardMeta, ShardRegistry};
    pub use tessera_core::prelude::*;
}
