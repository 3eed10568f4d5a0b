// Builds a few small expressions, runs the backward pass and prints the gradients.
//
// Run with `RUST_LOG=debug cargo run --example expression_gradients` to see the
// traversal logs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    // --- c = a*b + b^2 ---
    let graph = Graph::new();
    let a = graph.leaf(2.0, "a");
    let b = graph.leaf(3.0, "b");
    let c = a * b + b.pow(2.0);
    c.set_label("c");
    c.backward();
    println!("c = {}", c);
    println!("dc/da = {:.3}, dc/db = {:.3}", a.grad(), b.grad());

    // --- A single tanh neuron with random weights ---
    let mut rng = StdRng::seed_from_u64(42);
    let graph = Graph::new();
    let inputs = [1.0, -2.0];
    let weights = [graph.randn(&mut rng, 0.0, 1.0)?, graph.randn(&mut rng, 0.0, 1.0)?];
    let bias = graph.uniform(&mut rng, -0.5, 0.5)?;

    let mut activation = bias;
    for (w, x) in weights.iter().zip(inputs) {
        activation += *w * x;
    }
    let out = activation.tanh();
    out.backward();
    println!("neuron output = {}", out);
    for (i, w) in weights.iter().enumerate() {
        println!("d(out)/d(w{}) = {:.4}", i, w.grad());
    }
    println!("d(out)/d(bias) = {:.4}", bias.grad());

    // --- Walk the recorded graph ---
    let mut pending = vec![out];
    while let Some(node) = pending.pop() {
        println!(
            "{:?} op='{}' value={:.4} grad={:.4}",
            node.id(),
            node.op_symbol(),
            node.value(),
            node.grad()
        );
        pending.extend(node.operands());
    }

    // Exponents must be constants.
    if let Err(e) = a.try_pow(b) {
        println!("expected error: {}", e);
    }
    Ok(())
}
