use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// A module owns leaf `Value`s (its parameters) and wires its inputs through the
/// primitive operations to produce outputs. Gradients reach the parameters
/// purely through the operand graph; a module has no backward logic of its own.
pub trait Module: std::fmt::Debug {
    /// What `forward` consumes, e.g. `[Value]` or a 2-D grid of values.
    type Input: ?Sized;
    /// What `forward` produces.
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns a `ScalarGradError` if `input` does not have the size the module
    /// was built for. Inputs are never truncated or padded.
    fn forward(&self, input: &Self::Input) -> Result<Self::Output, ScalarGradError>;

    /// Returns handles to every learnable parameter, including those of sub-modules.
    ///
    /// The handles share the module's nodes: reading `grad()` after a backward
    /// pass, or updating data through them, acts on the module itself.
    fn parameters(&self) -> Vec<Value>;

    /// Returns every parameter along with a hierarchical name (e.g. "layer_0.neuron_1.weight_2").
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to exactly `0.0`.
    ///
    /// Typically called once per training iteration, since `backward()` accumulates.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock Module pour les tests
    #[derive(Debug)]
    struct MockModule {
        param: Value,
    }

    impl Module for MockModule {
        type Input = [Value];
        type Output = Value;

        fn forward(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
            if input.len() != 1 {
                return Err(ScalarGradError::InputLengthMismatch {
                    expected: 1,
                    actual: input.len(),
                    operation: "MockModule::forward".to_string(),
                });
            }
            Ok(&input[0] * &self.param)
        }

        fn parameters(&self) -> Vec<Value> {
            vec![self.param.clone()]
        }

        fn named_parameters(&self) -> Vec<(String, Value)> {
            vec![("param".to_string(), self.param.clone())]
        }
    }

    #[test]
    fn test_module_parameters_share_nodes() -> Result<(), ScalarGradError> {
        let module = MockModule {
            param: Value::new(2.0),
        };
        let out = module.forward(&[Value::new(3.0)])?;
        out.backward();
        let params = module.parameters();
        assert_eq!(params.len(), 1);
        assert!(params[0].ptr_eq(&module.param));
        assert_eq!(params[0].grad(), 3.0);
        assert_eq!(module.num_parameters(), 1);
        Ok(())
    }

    #[test]
    fn test_module_zero_grad_default() -> Result<(), ScalarGradError> {
        let module = MockModule {
            param: Value::new(2.0),
        };
        module.forward(&[Value::new(3.0)])?.backward();
        assert_ne!(module.param.grad(), 0.0);
        module.zero_grad();
        assert_eq!(module.param.grad(), 0.0);
        Ok(())
    }

    #[test]
    fn test_module_rejects_wrong_input_count() {
        let module = MockModule {
            param: Value::new(2.0),
        };
        let err = module.forward(&[]).unwrap_err();
        assert!(matches!(
            err,
            ScalarGradError::InputLengthMismatch { expected: 1, actual: 0, .. }
        ));
    }
}
