use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_value_with_value_operators() {
    let graph = Graph::new();
    let a = graph.constant(6.0);
    let b = graph.constant(3.0);

    assert_eq!((a + b).value(), 9.0);
    assert_eq!((a - b).value(), 3.0);
    assert_eq!((a * b).value(), 18.0);
    assert_relative_eq!((a / b).value(), 2.0, epsilon = 1e-12);
    assert_eq!((-a).value(), -6.0);
}

#[test]
fn test_reflected_operators_with_numbers() {
    let graph = Graph::new();
    let x = graph.leaf(4.0, "x");

    let sum = 1.0 + x;
    let diff = 10.0 - x;
    let prod = 2.0 * x;
    let quot = 1.0 / x;
    assert_eq!(sum.value(), 5.0);
    assert_eq!(diff.value(), 6.0);
    assert_eq!(prod.value(), 8.0);
    assert_relative_eq!(quot.value(), 0.25, epsilon = 1e-12);

    let total = sum + diff + prod + quot;
    total.backward();
    // d/dx [(1 + x) + (10 - x) + 2x + 1/x] = 1 - 1 + 2 - 1/x^2
    assert_relative_eq!(x.grad(), 2.0 - 1.0 / 16.0, epsilon = 1e-12);
}

#[test]
fn test_operators_with_numbers_on_right() {
    let graph = Graph::new();
    let x = graph.leaf(3.0, "x");
    let y = (x + 1.0) * (x - 1.0) / 2.0;
    assert_relative_eq!(y.value(), 4.0, epsilon = 1e-12);
    y.backward();
    // y = (x^2 - 1) / 2, dy/dx = x
    assert_relative_eq!(x.grad(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_assign_operators() {
    let graph = Graph::new();
    let x = graph.leaf(2.0, "x");
    let mut acc = graph.constant(0.0);
    for _ in 0..3 {
        acc += x * x;
    }
    acc -= 1.0;
    acc *= 2.0;
    assert_eq!(acc.value(), 22.0);
    acc.backward();
    // acc = 2 * (3x^2 - 1), d/dx = 12x
    assert_eq!(x.grad(), 24.0);
}

#[test]
fn test_each_primitive_allocates_one_node() {
    let graph = Graph::new();
    let a = graph.constant(1.0);
    let b = graph.constant(2.0);
    let before = graph.len();
    let _ = a + b;
    assert_eq!(graph.len(), before + 1);
    let _ = a * b;
    assert_eq!(graph.len(), before + 2);
    // The bare number becomes its own constant leaf.
    let _ = a + 5.0;
    assert_eq!(graph.len(), before + 4);
}

#[test]
fn test_operands_are_not_mutated() {
    let graph = Graph::new();
    let a = graph.leaf(1.5, "a");
    let b = graph.leaf(-2.0, "b");
    let _ = (a * b).tanh().relu() - a / b;
    assert_eq!(a.value(), 1.5);
    assert_eq!(b.value(), -2.0);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
}

#[test]
fn test_identity_equality() {
    let graph = Graph::new();
    let a = graph.constant(1.0);
    let b = graph.constant(1.0);
    assert_eq!(a, a);
    assert_ne!(a, b);
    assert_eq!(graph.get(a.id()).unwrap(), a);

    let other = Graph::new();
    let c = other.constant(1.0);
    assert_eq!(a.id(), c.id());
    assert_ne!(a, c, "same index in another graph is another node");
}

#[test]
fn test_display_and_debug() {
    let graph = Graph::new();
    let a = graph.constant(2.0);
    let b = a * 7.5;
    assert_eq!(format!("{}", b), "Value(data=15.000)");
    let debug = format!("{:?}", b);
    assert!(debug.contains("value: 15.0"));
    assert!(debug.contains("op: \"*\""));
}

#[test]
#[should_panic(expected = "different graph")]
fn test_mixing_graphs_panics() {
    let first = Graph::new();
    let second = Graph::new();
    let a = first.constant(1.0);
    let b = second.constant(2.0);
    let _ = a + b;
}
