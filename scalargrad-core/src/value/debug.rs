// src/value/debug.rs
use crate::value::Value;
use std::fmt;

// Manual implementation of Debug: operands are summarised, not followed,
// a deep graph would otherwise print every ancestor.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("data", &self.data())
            .field("grad", &self.grad())
            .field("op", &self.op().symbol())
            .field("operands", &self.operands().len())
            .field("label", &self.label())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}
