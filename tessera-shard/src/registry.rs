//! Shard Registry
//!
//! An explicit mapping from unique name strings to shard descriptors, built
//! at process start. The registry stores metadata plus a factory for each
//! entry; `produce` hands every caller a fresh, default-state instance, so
//! no shard state is ever shared between host sessions.

use crate::{Shard, ShardMeta};
use std::collections::HashMap;
use tessera_core::ShardError;

struct ShardEntry {
    meta: &'static ShardMeta,
    make: Box<dyn Fn() -> Box<dyn Shard> + Send + Sync>,
}

/// Central shard registry
pub struct ShardRegistry {
    shards: HashMap<String, ShardEntry>,
}

impl ShardRegistry {
    pub fn new() -> Self {
        Self {
            shards: HashMap::new(),
        }
    }

    /// Register a shard type under its metadata name.
    ///
    /// Registering a second shard under the same name replaces the first.
    pub fn with_shard<S: Shard + Default + 'static>(mut self) -> Self {
        let meta = S::default().meta();
        self.shards.insert(
            meta.name.to_string(),
            ShardEntry {
                meta,
                make: Box::new(|| Box::new(S::default())),
            },
        );
        self
    }

    /// Construct a fresh instance of the shard registered under `name`.
    pub fn produce(&self, name: &str) -> Result<Box<dyn Shard>, ShardError> {
        match self.shards.get(name) {
            Some(entry) => Ok((entry.make)()),
            None => {
                // Find similar shard names for a better error message
                let similar = self.find_similar(name);
                let mut err = ShardError::unknown_shard(name);
                if !similar.is_empty() {
                    err = err.with_suggestion(format!("Similar: {}", similar.join(", ")));
                }
                Err(err)
            }
        }
    }

    /// Descriptor for the shard registered under `name`, if any
    pub fn meta(&self, name: &str) -> Option<&'static ShardMeta> {
        self.shards.get(name).map(|entry| entry.meta)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shards.contains_key(name)
    }

    /// All registered descriptors, sorted by name
    pub fn list(&self) -> Vec<&'static ShardMeta> {
        let mut metas: Vec<&'static ShardMeta> =
            self.shards.values().map(|entry| entry.meta).collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    /// Registered names similar to `name` (for error suggestions)
    fn find_similar(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .shards
            .keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&query, &candidate.to_lowercase());
                if score > 0 {
                    Some((candidate.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score = more similar
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().take(3).map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) || query.starts_with(candidate) {
            score += 100;
        } else if candidate.contains(query) || query.contains(candidate) {
            score += 50;
        }

        let query_chars: std::collections::HashSet<char> = query.chars().collect();
        let candidate_chars: std::collections::HashSet<char> = candidate.chars().collect();
        score += query_chars.intersection(&candidate_chars).count() * 2;

        score
    }
}

impl Default for ShardRegistry {
    fn default() -> Self {
        Self::new()
    }
}
