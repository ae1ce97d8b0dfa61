//! Tessera - stateful operation plugins ("shards") with a host-side driver

mod session;

pub use session::Session;

pub use tessera_core::{codes, ShardError, Value, ValueKind};
pub use tessera_shard::{ParamMeta, Shard, ShardContext, ShardMeta, ShardRegistry};

use std::sync::Arc;

/// Host side of the shard contract.
///
/// Owns the registry and spawns one [`Session`] per resolved shard. The
/// registry is shared, instances never are: every spawn constructs a fresh
/// default-state instance.
pub struct Host {
    registry: Arc<ShardRegistry>,
}

impl Host {
    pub fn new(registry: ShardRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Host preloaded with the calculator pack
    pub fn with_calculator() -> Self {
        Self::new(tessera_calc::calculator_registry())
    }

    /// Descriptor for one registered shard
    pub fn meta(&self, name: &str) -> Option<&'static ShardMeta> {
        self.registry.meta(name)
    }

    /// All registered descriptors, sorted by name
    pub fn shards(&self) -> Vec<&'static ShardMeta> {
        self.registry.list()
    }

    /// Resolve `name`, construct a fresh instance and wrap it in a session
    pub fn spawn(&self, name: &str) -> Result<Session, ShardError> {
        let shard = self.registry.produce(name)?;
        let ctx = ShardContext::new().with_session(name);
        Ok(Session::new(shard, ctx))
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::with_calculator()
    }
}
