//! Session: one shard instance driven through its lifecycle

use tessera_core::{ShardError, Value};
use tessera_shard::{Shard, ShardContext, ShardMeta};

/// Drives a single shard instance.
///
/// A session owns exactly one instance and its context, and upholds the
/// ordering the contract asks of hosts: warmup runs before the first
/// activation (lazily if the host never calls it), and cleanup runs exactly
/// once, at [`close`](Session::close) or at drop.
///
/// One session serves one host-side user; instances are never shared.
pub struct Session {
    shard: Box<dyn Shard>,
    ctx: ShardContext,
    warmed: bool,
    closed: bool,
}

impl Session {
    pub(crate) fn new(shard: Box<dyn Shard>, ctx: ShardContext) -> Self {
        Self {
            shard,
            ctx,
            warmed: false,
            closed: false,
        }
    }

    /// Metadata of the instance this session drives
    pub fn meta(&self) -> &'static ShardMeta {
        self.shard.meta()
    }

    /// Registered name of the instance this session drives
    pub fn name(&self) -> &'static str {
        self.shard.meta().name
    }

    /// Activations completed so far
    pub fn steps(&self) -> u64 {
        self.ctx.steps
    }

    /// Set a parameter by name.
    ///
    /// Allowed at any time, before or between activations. When it takes
    /// effect is the shard's business; both calculator shards re-read their
    /// parameters on every activation.
    pub fn set_param(&mut self, name: &str, value: Value) -> Result<(), ShardError> {
        self.shard.set_param(name, value)
    }

    /// Read back a parameter's current value
    pub fn get_param(&self, name: &str) -> Result<Value, ShardError> {
        self.shard.get_param(name)
    }

    /// Run the warmup hook.
    ///
    /// Calling this again re-runs the hook; shards like `Calculator.Add`
    /// restart their transient state when that happens.
    pub fn warmup(&mut self) -> Result<(), ShardError> {
        self.shard.warmup(&self.ctx)?;
        self.warmed = true;
        Ok(())
    }

    /// Feed one input through the shard.
    ///
    /// Warms the instance up first if the host never did. On success the
    /// step counter advances; on error nothing is recorded and the session
    /// stays usable.
    pub fn activate(&mut self, input: &Value) -> Result<Value, ShardError> {
        if !self.warmed {
            self.warmup()?;
        }
        let output = self.shard.activate(&self.ctx, input)?;
        self.ctx.advance();
        Ok(output)
    }

    /// Run the cleanup hook and consume the session
    pub fn close(mut self) -> Result<(), ShardError> {
        self.closed = true;
        self.shard.cleanup()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.closed {
            // A destructor has nowhere to report a teardown failure.
            let _ = self.shard.cleanup();
        }
    }
}
