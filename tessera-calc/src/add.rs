//! Running accumulator shard

use crate::helpers::{float_input, text_param};
use tessera_core::{ShardError, Value, ValueKind};
use tessera_shard::{ParamMeta, Shard, ShardContext, ShardMeta};

/// Running sum over successive float inputs.
///
/// Warmup resets the sum to 0.0, so re-running setup restarts it. The
/// `Description` parameter is documentation only: stored verbatim, returned
/// verbatim, never read by the arithmetic. Owns no external resources, so
/// the default teardown hook suffices.
#[derive(Debug, Default)]
pub struct Add {
    accumulator: f64,
    description: String,
}

static ADD_PARAMS: [ParamMeta; 1] = [ParamMeta::optional(
    "Description",
    "Optional note on what this accumulator tracks",
    &[ValueKind::Text],
    "",
)];

static ADD_META: ShardMeta = ShardMeta {
    name: "Calculator.Add",
    description: "Adds each float input to a running sum and returns the new total",
    input: ValueKind::Float,
    output: ValueKind::Float,
    params: &ADD_PARAMS,
};

impl Shard for Add {
    fn meta(&self) -> &'static ShardMeta {
        &ADD_META
    }

    fn set_param(&mut self, name: &str, value: Value) -> Result<(), ShardError> {
        match name {
            "Description" => {
                self.description = text_param(ADD_META.name, "Description", value)?;
                Ok(())
            }
            _ => Err(ShardError::unknown_param(ADD_META.name, name)),
        }
    }

    fn get_param(&self, name: &str) -> Result<Value, ShardError> {
        match name {
            "Description" => Ok(Value::Text(self.description.clone())),
            _ => Err(ShardError::unknown_param(ADD_META.name, name)),
        }
    }

    fn warmup(&mut self, _ctx: &ShardContext) -> Result<(), ShardError> {
        self.accumulator = 0.0;
        Ok(())
    }

    fn activate(&mut self, _ctx: &ShardContext, input: &Value) -> Result<Value, ShardError> {
        let x = float_input(ADD_META.name, input)?;
        self.accumulator += x;
        Ok(Value::Float(self.accumulator))
    }
}
