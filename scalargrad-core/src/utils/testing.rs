use crate::value::Value;

/// Checks that a node's value is within `tolerance` of `expected`.
/// Panics with the node's provenance otherwise.
pub fn check_value_near(actual: Value<'_>, expected: f64, tolerance: f64) {
    let diff = (actual.value() - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch for {:?} ('{}'): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            actual.op_symbol(),
            actual.value(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks that a node's accumulated gradient is within `tolerance` of `expected`.
pub fn check_grad_near(actual: Value<'_>, expected: f64, tolerance: f64) {
    let diff = (actual.grad() - expected).abs();
    if diff > tolerance {
        panic!(
            "Gradient mismatch for {:?} ('{}'): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.id(),
            actual.op_symbol(),
            actual.grad(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Installs `env_logger` once for unit tests. Honors `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
