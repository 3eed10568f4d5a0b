mod common;

use approx::assert_relative_eq;
use scalargrad_core::{Graph, ScalarGradError};

#[test]
fn diamond_gradients_are_additive() {
    common::init_logger();
    for a_value in [-2.0, 0.0, 0.5, 3.0] {
        let graph = Graph::new();
        let a = graph.leaf(a_value, "a");
        let b = a * a;
        let c = a + b;
        c.backward();
        assert_eq!(a.grad(), 1.0 + 2.0 * a_value);
    }
}

#[test]
fn tanh_chain_rule() {
    let graph = Graph::new();
    let x = graph.leaf(0.7, "x");
    let y = x.tanh();
    y.backward();
    assert_relative_eq!(x.grad(), 1.0 - 0.7_f64.tanh().powi(2), epsilon = 1e-12);
}

#[test]
fn relu_boundary_has_zero_subgradient() {
    let graph = Graph::new();
    let x = graph.constant(0.0);
    let y = x.relu();
    y.backward();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn zero_grad_is_idempotent_and_clears_backward() {
    let graph = Graph::new();
    let a = graph.leaf(2.0, "a");
    let b = graph.leaf(-3.0, "b");
    let c = (a * b + b.pow(2.0)).tanh();

    c.zero_grad();
    c.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);

    c.backward();
    assert_ne!(a.grad(), 0.0);
    c.zero_grad();
    let mut pending = vec![c];
    while let Some(node) = pending.pop() {
        assert_eq!(node.grad(), 0.0, "{:?} kept its gradient", node);
        pending.extend(node.operands());
    }
}

#[test]
fn node_exponent_is_rejected_without_allocation() {
    let graph = Graph::new();
    let a = graph.leaf(2.0, "a");
    let b = graph.leaf(3.0, "b");
    let len_before = graph.len();

    let result = a.try_pow(b);
    assert!(matches!(result, Err(ScalarGradError::InvalidExponent { .. })));
    assert_eq!(graph.len(), len_before);
}

#[test]
fn end_to_end_expression() {
    common::init_logger();
    let graph = Graph::new();
    let a = graph.constant(2.0);
    let b = graph.constant(3.0);
    let c = a * b + b.pow(2.0);
    c.backward();

    assert_eq!(c.value(), 15.0);
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 8.0);
    assert_eq!(format!("{}", c), "Value(data=15.000)");
}

#[test]
fn fallible_api_matches_operators() {
    let graph = Graph::new();
    let a = graph.leaf(2.0, "a");
    let b = graph.leaf(3.0, "b");

    let ab = graph.mul(a, b).unwrap();
    let b2 = graph.pow(b, 2.0).unwrap();
    let c = graph.add(ab, b2).unwrap();
    let d = graph.div(graph.sub(c, 1.0).unwrap(), 2.0).unwrap();
    let e = graph.relu(graph.neg(d).unwrap()).unwrap();
    let f = graph.tanh(d).unwrap();
    let out = graph.add(e, f).unwrap();
    out.backward();

    // d = (ab + b^2 - 1) / 2 = 7, relu(-7) = 0, so only tanh contributes.
    let t = 7.0_f64.tanh();
    assert_relative_eq!(d.value(), 7.0, epsilon = 1e-12);
    assert_relative_eq!(out.value(), t, epsilon = 1e-12);
    let dd = 1.0 - t * t;
    assert_relative_eq!(a.grad(), dd * 3.0 / 2.0, epsilon = 1e-12);
    assert_relative_eq!(b.grad(), dd * (2.0 + 6.0) / 2.0, epsilon = 1e-12);
}
