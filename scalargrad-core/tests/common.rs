use scalargrad_core::Value;

// Installs env_logger once per test binary; honors RUST_LOG.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds `w . x + b` squashed by tanh: the shape of a single scalar neuron.
#[allow(dead_code)]
pub fn tanh_neuron<'g>(weights: &[Value<'g>], inputs: &[f64], bias: Value<'g>) -> Value<'g> {
    let mut activation = bias;
    for (w, &x) in weights.iter().zip(inputs) {
        activation += *w * x;
    }
    activation.tanh()
}
