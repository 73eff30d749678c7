use crate::value::Value;

/// The operation that produced a node, together with its operands.
///
/// Every non-leaf `Value` stores one `Op`. The tag is all the backward pass
/// needs: `Op::backward` applies the chain rule of the specific operation,
/// reading the operands' current data and the node's own output and gradient.
/// Composite operations (`sub`, `div`, `neg`) do not get a tag of their own,
/// they are built out of these primitives.
#[derive(Debug, Clone)]
pub enum Op {
    /// Created directly from a number. No operands, nothing to propagate.
    Leaf,
    /// `a + b`
    Add([Value; 2]),
    /// `a * b`
    Mul([Value; 2]),
    /// `a ^ n` with a constant exponent `n`. The exponent is not differentiated.
    Pow(Value, f64),
    /// `e ^ a`
    Exp(Value),
    /// `(e^a - 1) / (e^a + 1)`
    Tanh(Value),
}

impl Op {
    /// Returns the operand nodes in order. Empty for leaves.
    pub fn operands(&self) -> &[Value] {
        match self {
            Op::Leaf => &[],
            Op::Add(operands) | Op::Mul(operands) => &operands[..],
            Op::Pow(base, _) => std::slice::from_ref(base),
            Op::Exp(input) | Op::Tanh(input) => std::slice::from_ref(input),
        }
    }

    /// Short tag used by diagnostics.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(_) => "+",
            Op::Mul(_) => "*",
            Op::Pow(..) => "pow",
            Op::Exp(_) => "exp",
            Op::Tanh(_) => "tanh",
        }
    }

    /// Pushes `grad_output` (d(root)/d(output)) onto the operands.
    ///
    /// `output` is the forward value of the node owning this op. Contributions
    /// are added to the operands' gradients, never assigned.
    pub(crate) fn backward(&self, output: f64, grad_output: f64) {
        match self {
            Op::Leaf => {}
            Op::Add([a, b]) => {
                a.accumulate_grad(grad_output);
                b.accumulate_grad(grad_output);
            }
            Op::Mul([a, b]) => {
                let (a_data, b_data) = (a.data(), b.data());
                a.accumulate_grad(b_data * grad_output);
                b.accumulate_grad(a_data * grad_output);
            }
            Op::Pow(base, exponent) => {
                let n = *exponent;
                let local = n * base.data().powf(n - 1.0);
                base.accumulate_grad(local * grad_output);
            }
            Op::Exp(input) => input.accumulate_grad(output * grad_output),
            Op::Tanh(input) => input.accumulate_grad((1.0 - output * output) * grad_output),
        }
    }
}
