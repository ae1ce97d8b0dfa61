//! Shard contract
//!
//! A shard is one self-contained, stateful operation that a host resolves by
//! name and drives through a fixed lifecycle: construct, set parameters,
//! warm up, activate once per input value, clean up on release.

use crate::ShardContext;
use serde::Serialize;
use tessera_core::{ShardError, Value, ValueKind};

/// Metadata about one configuration parameter
#[derive(Debug, Clone, Serialize)]
pub struct ParamMeta {
    pub name: &'static str,
    pub description: &'static str,
    /// Value kinds `set_param` accepts for this parameter
    pub kinds: &'static [ValueKind],
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ParamMeta {
    pub const fn required(
        name: &'static str,
        description: &'static str,
        kinds: &'static [ValueKind],
    ) -> Self {
        Self {
            name,
            description,
            kinds,
            optional: false,
            default: None,
        }
    }

    pub const fn optional(
        name: &'static str,
        description: &'static str,
        kinds: &'static [ValueKind],
        default: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            kinds,
            optional: true,
            default: Some(default),
        }
    }
}

/// Metadata for a shard: the descriptor a host sees in the registry
#[derive(Debug, Clone, Serialize)]
pub struct ShardMeta {
    /// Unique registration name, e.g. `"Calculator.Add"`
    pub name: &'static str,
    pub description: &'static str,
    /// Kind of value `activate` consumes
    pub input: ValueKind,
    /// Kind of value `activate` produces
    pub output: ValueKind,
    pub params: &'static [ParamMeta],
}

impl ShardMeta {
    /// Parameter schema lookup by name
    pub fn param(&self, name: &str) -> Option<&ParamMeta> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// A named, stateful operation driven by a host.
///
/// The host calls the methods in this order: `set_param`/`get_param` any
/// number of times, `warmup` once before the first `activate` (and again
/// after each re-setup), `activate` once per input value, `cleanup` once
/// when the instance is released. `warmup` and `cleanup` are optional
/// hooks with no-op defaults.
///
/// Access precondition: one instance belongs to one host session and is
/// driven sequentially. Instances may move between threads (`Send`) but
/// must never be shared concurrently; registries hand every session its
/// own fresh instance.
pub trait Shard: Send {
    /// Descriptor for this shard: name, kind constraints, parameter schema.
    fn meta(&self) -> &'static ShardMeta;

    /// Set a configuration parameter by name.
    ///
    /// Fails with `UNKNOWN_PARAM` for names the shard does not declare and
    /// `PARAM_KIND` for values of a kind the parameter does not accept.
    fn set_param(&mut self, name: &str, _value: Value) -> Result<(), ShardError> {
        Err(ShardError::unknown_param(self.meta().name, name))
    }

    /// Read a configuration parameter back, verbatim as stored.
    fn get_param(&self, name: &str) -> Result<Value, ShardError> {
        Err(ShardError::unknown_param(self.meta().name, name))
    }

    /// Setup hook, run once before the first activation.
    fn warmup(&mut self, _ctx: &ShardContext) -> Result<(), ShardError> {
        Ok(())
    }

    /// Teardown hook, run once when the host releases the instance.
    fn cleanup(&mut self) -> Result<(), ShardError> {
        Ok(())
    }

    /// Transform one input value.
    ///
    /// An error here is fatal for this call only: the shard mutates no state
    /// on the failing path and remains usable for the next call.
    fn activate(&mut self, ctx: &ShardContext, input: &Value) -> Result<Value, ShardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    static PARAMS: [ParamMeta; 2] = [
        ParamMeta::required("Target", "Where results go", &[ValueKind::Text]),
        ParamMeta::optional("Scale", "Multiplier applied to outputs", &[ValueKind::Float], "1.0"),
    ];

    static META: ShardMeta = ShardMeta {
        name: "Test.Emit",
        description: "Descriptor for the lookup tests",
        input: ValueKind::Float,
        output: ValueKind::Float,
        params: &PARAMS,
    };

    #[test]
    fn test_param_lookup() {
        let target = META.param("Target").unwrap();
        assert!(!target.optional);
        assert_eq!(target.default, None);

        let scale = META.param("Scale").unwrap();
        assert!(scale.optional);
        assert_eq!(scale.default, Some("1.0"));
        assert_eq!(scale.kinds, &[ValueKind::Float]);

        assert!(META.param("Nope").is_none());
    }
}
