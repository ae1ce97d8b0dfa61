//! Tessera Calculator Pack
//!
//! The two demonstration shards every host walkthrough uses:
//! - `Calculator.Add`: running accumulator over float inputs
//! - `Calculator.Memory`: single-cell store/recall/clear register
//!
//! Both declare Float in / Float out and carry one Text parameter. They are
//! deliberately tiny; the point is the contract they exercise, not the
//! arithmetic.

mod add;
mod helpers;
mod memory;

pub use add::Add;
pub use memory::Memory;

use tessera_shard::ShardRegistry;

/// Register both calculator shards
pub fn load_calculator_shards(registry: ShardRegistry) -> ShardRegistry {
    registry.with_shard::<Add>().with_shard::<Memory>()
}

/// Registry preloaded with the calculator pack
pub fn calculator_registry() -> ShardRegistry {
    load_calculator_shards(ShardRegistry::new())
}
