// Leaf creation: constants, labelled inputs and randomly initialized values.

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Normal};

impl Graph {
    /// Creates a leaf node holding `x`.
    pub fn constant(&self, x: f64) -> Value<'_> {
        let id = self.push(x, Op::Leaf);
        Value::new(self, id)
    }

    /// Creates a labelled leaf node, typically an input or a parameter.
    pub fn leaf(&self, x: f64, label: impl Into<String>) -> Value<'_> {
        let value = self.constant(x);
        value.set_label(label);
        value
    }

    /// Creates a leaf drawn uniformly from `[low, high)`.
    pub fn uniform<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        low: f64,
        high: f64,
    ) -> Result<Value<'_>, ScalarGradError> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(ScalarGradError::InvalidDistribution(format!(
                "uniform range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        Ok(self.constant(rng.gen_range(low..high)))
    }

    /// Creates a leaf drawn from a normal distribution `N(mean, std_dev^2)`.
    pub fn randn<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mean: f64,
        std_dev: f64,
    ) -> Result<Value<'_>, ScalarGradError> {
        if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
            return Err(ScalarGradError::InvalidDistribution(format!(
                "normal distribution needs a finite mean and a finite std_dev >= 0, got N({}, {})",
                mean, std_dev
            )));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| ScalarGradError::InvalidDistribution(e.to_string()))?;
        Ok(self.constant(normal.sample(rng)))
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
