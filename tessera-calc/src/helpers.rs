//! Shared payload extraction

use tessera_core::{ShardError, Value, ValueKind};

/// Extract the float payload of an activation input, enforcing the declared
/// input kind. Fails without touching shard state.
pub fn float_input(shard: &str, input: &Value) -> Result<f64, ShardError> {
    match input {
        Value::Float(x) => Ok(*x),
        other => Err(ShardError::input_kind(
            shard,
            ValueKind::Float,
            other.kind(),
        )),
    }
}

/// Extract a Text payload for a parameter, enforcing its accepted kinds
pub fn text_param(shard: &str, param: &str, value: Value) -> Result<String, ShardError> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(ShardError::param_kind(
            shard,
            param,
            &[ValueKind::Text],
            other.kind(),
        )),
    }
}
