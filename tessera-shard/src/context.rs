//! Host context
//!
//! The context a host hands to `warmup` and `activate`. Neither calculator
//! shard reads it; it is the contract's extension point for host services
//! and bookkeeping.

/// Per-session context passed to shard hooks
#[derive(Debug, Clone, Default)]
pub struct ShardContext {
    /// Host-chosen label for the session driving this instance
    pub session: String,
    /// Activations completed so far in this session
    pub steps: u64,
}

impl ShardContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    /// Record one completed activation
    pub fn advance(&mut self) {
        self.steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_activations() {
        let mut ctx = ShardContext::new().with_session("demo");
        assert_eq!(ctx.steps, 0);
        ctx.advance();
        ctx.advance();
        assert_eq!(ctx.steps, 2);
        assert_eq!(ctx.session, "demo");
    }
}
