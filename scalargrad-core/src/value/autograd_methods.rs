use crate::autograd::backward;
use crate::value::Value;

impl<'g> Value<'g> {
    /// Performs the backward pass starting from this node.
    ///
    /// Adds the seed `1.0` to `self.grad` and propagates gradients to every node reachable
    /// through operands, running each node's local rule exactly once and only
    /// after all of its consumers have contributed to its gradient.
    ///
    /// Non-leaf gradients are recomputed from scratch on every call. Leaf
    /// gradients accumulate across calls until [`zero_grad`](Value::zero_grad)
    /// clears them.
    pub fn backward(&self) {
        backward::backward(self.graph(), self.id());
    }

    /// Resets the gradient of this node and every node reachable from it to zero.
    pub fn zero_grad(&self) {
        backward::zero_grad(self.graph(), self.id());
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
