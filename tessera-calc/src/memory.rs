//! Single-cell memory register shard

use crate::helpers::{float_input, text_param};
use tessera_core::{ShardError, Value, ValueKind};
use tessera_shard::{ParamMeta, Shard, ShardContext, ShardMeta};

/// Single-cell float register driven by the `Operation` parameter.
///
/// `"store"` writes the input into the cell, `"clear"` zeroes it,
/// `"recall"` reads it; any other text behaves as `"recall"` (documented
/// default, not an error). The parameter is re-read on every activation,
/// never cached at warmup, so flipping it between calls changes the very
/// next call.
///
/// Unlike [`Add`](crate::Add), warmup does not reset anything: the cell
/// survives re-setup and only `"clear"` (or a fresh instance) empties it.
#[derive(Debug)]
pub struct Memory {
    operation: String,
    memory: f64,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            operation: "recall".to_string(),
            memory: 0.0,
        }
    }
}

static MEMORY_PARAMS: [ParamMeta; 1] = [ParamMeta::optional(
    "Operation",
    "Operation to perform: \"store\", \"recall\", or \"clear\"; any other text behaves as \"recall\"",
    &[ValueKind::Text],
    "recall",
)];

static MEMORY_META: ShardMeta = ShardMeta {
    name: "Calculator.Memory",
    description: "Stores, recalls, or clears a single float cell",
    input: ValueKind::Float,
    output: ValueKind::Float,
    params: &MEMORY_PARAMS,
};

impl Shard for Memory {
    fn meta(&self) -> &'static ShardMeta {
        &MEMORY_META
    }

    fn set_param(&mut self, name: &str, value: Value) -> Result<(), ShardError> {
        match name {
            "Operation" => {
                // Stored verbatim; unrecognized strings fall back to recall
                // at activation time.
                self.operation = text_param(MEMORY_META.name, "Operation", value)?;
                Ok(())
            }
            _ => Err(ShardError::unknown_param(MEMORY_META.name, name)),
        }
    }

    fn get_param(&self, name: &str) -> Result<Value, ShardError> {
        match name {
            "Operation" => Ok(Value::Text(self.operation.clone())),
            _ => Err(ShardError::unknown_param(MEMORY_META.name, name)),
        }
    }

    fn activate(&mut self, _ctx: &ShardContext, input: &Value) -> Result<Value, ShardError> {
        // Kind check first: no operation mode mutates on a bad input
        let x = float_input(MEMORY_META.name, input)?;
        match self.operation.as_str() {
            "store" => {
                self.memory = x;
                Ok(Value::Float(x))
            }
            "clear" => {
                self.memory = 0.0;
                Ok(Value::Float(self.memory))
            }
            // "recall" and any unrecognized operation
            _ => Ok(Value::Float(self.memory)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::codes;

    fn ctx() -> ShardContext {
        ShardContext::new()
    }

    fn set_operation(memory: &mut Memory, operation: &str) {
        memory
            .set_param("Operation", Value::Text(operation.to_string()))
            .unwrap();
    }

    #[test]
    fn test_default_operation_is_recall() {
        let memory = Memory::default();
        assert_eq!(
            memory.get_param("Operation").unwrap(),
            Value::Text("recall".to_string())
        );
    }

    #[test]
    fn test_fresh_cell_recalls_zero() {
        let mut memory = Memory::default();
        let out = memory.activate(&ctx(), &Value::Float(9.0)).unwrap();
        assert_eq!(out, Value::Float(0.0));
    }

    #[test]
    fn test_store_returns_input_then_recall_returns_it() {
        let mut memory = Memory::default();
        set_operation(&mut memory, "store");
        let out = memory.activate(&ctx(), &Value::Float(5.0)).unwrap();
        assert_eq!(out, Value::Float(5.0));

        set_operation(&mut memory, "recall");
        let out = memory.activate(&ctx(), &Value::Float(123.0)).unwrap();
        assert_eq!(out, Value::Float(5.0));
    }

    #[test]
    fn test_clear_then_recall_returns_zero() {
        let mut memory = Memory::default();
        set_operation(&mut memory, "store");
        memory.activate(&ctx(), &Value::Float(7.0)).unwrap();

        set_operation(&mut memory, "clear");
        let out = memory.activate(&ctx(), &Value::Float(1.0)).unwrap();
        assert_eq!(out, Value::Float(0.0));

        set_operation(&mut memory, "recall");
        let out = memory.activate(&ctx(), &Value::Float(1.0)).unwrap();
        assert_eq!(out, Value::Float(0.0));
    }

    #[test]
    fn test_unrecognized_operation_behaves_as_recall() {
        let mut memory = Memory::default();
        set_operation(&mut memory, "store");
        memory.activate(&ctx(), &Value::Float(7.5)).unwrap();

        set_operation(&mut memory, "bogus");
        let out = memory.activate(&ctx(), &Value::Float(3.0)).unwrap();
        assert_eq!(out, Value::Float(7.5));

        // The cell itself was not modified either
        set_operation(&mut memory, "recall");
        let out = memory.activate(&ctx(), &Value::Float(0.0)).unwrap();
        assert_eq!(out, Value::Float(7.5));
    }

    #[test]
    fn test_store_then_clear_scenario() {
        let mut memory = Memory::default();
        set_operation(&mut memory, "store");
        let out = memory.activate(&ctx(), &Value::Float(10.0)).unwrap();
        assert_eq!(out, Value::Float(10.0));

        set_operation(&mut memory, "clear");
        let out = memory.activate(&ctx(), &Value::Float(0.0)).unwrap();
        assert_eq!(out, Value::Float(0.0));
    }

    #[test]
    fn test_input_kind_checked_in_every_mode() {
        for operation in ["store", "recall", "clear", "bogus"] {
            let mut memory = Memory::default();
            set_operation(&mut memory, "store");
            memory.activate(&ctx(), &Value::Float(4.0)).unwrap();

            set_operation(&mut memory, operation);
            let err = memory
                .activate(&ctx(), &Value::Text("4".to_string()))
                .unwrap_err();
            assert_eq!(err.code, codes::INPUT_KIND, "mode {}", operation);

            // The failing call must not have touched the cell
            set_operation(&mut memory, "recall");
            let out = memory.activate(&ctx(), &Value::Float(0.0)).unwrap();
            assert_eq!(out, Value::Float(4.0), "mode {}", operation);
        }
    }

    #[test]
    fn test_cell_survives_rewarmup() {
        let mut memory = Memory::default();
        set_operation(&mut memory, "store");
        memory.activate(&ctx(), &Value::Float(4.5)).unwrap();

        memory.warmup(&ctx()).unwrap();

        set_operation(&mut memory, "recall");
        let out = memory.activate(&ctx(), &Value::Float(0.0)).unwrap();
        assert_eq!(out, Value::Float(4.5));
    }

    #[test]
    fn test_operation_param_kind_checked() {
        let mut memory = Memory::default();
        let err = memory.set_param("Operation", Value::Int(1)).unwrap_err();
        assert_eq!(err.code, codes::PARAM_KIND);
        // Invalid set leaves the previous value in place
        assert_eq!(
            memory.get_param("Operation").unwrap(),
            Value::Text("recall".to_string())
        );
    }

    #[test]
    fn test_unknown_param_rejected() {
        let mut memory = Memory::default();
        let err = memory
            .set_param("Description", Value::Text("note".to_string()))
            .unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_PARAM);
    }

    #[test]
    fn test_meta() {
        let memory = Memory::default();
        let meta = memory.meta();
        assert_eq!(meta.name, "Calculator.Memory");
        assert_eq!(meta.input, ValueKind::Float);
        assert_eq!(meta.output, ValueKind::Float);
        assert_eq!(meta.params.len(), 1);
        assert_eq!(meta.params[0].name, "Operation");
        assert_eq!(meta.params[0].default, Some("recall"));
        assert!(meta.param("Operation").is_some());
        assert!(meta.param("Description").is_none());
    }
}
