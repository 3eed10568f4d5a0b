use crate::graph::Graph;
use crate::utils::testing::{check_grad_near, init_test_logger};

#[test]
fn test_backward_diamond_accumulates_both_paths() {
    init_test_logger();
    let graph = Graph::new();
    let a = graph.leaf(3.0, "a");
    let b = a * a;
    let c = a + b;
    c.backward();

    // dc/da = 1 (direct) + 2a (through b)
    assert_eq!(a.grad(), 1.0 + 2.0 * 3.0);
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 1.0);
}

#[test]
fn test_backward_consumer_discovered_late() {
    init_test_logger();
    // `h` feeds the output directly and through a long detour; a breadth-first
    // walk would finalize `h` before the detour reaches it.
    let graph = Graph::new();
    let x = graph.leaf(0.5, "x");
    let h = x * 2.0;
    let mut detour = h;
    for _ in 0..5 {
        detour = detour + 1.0;
    }
    let out = h * detour;
    out.backward();

    // out = h * (h + 5), d(out)/dh = 2h + 5 = 7, dh/dx = 2
    check_grad_near(h, 7.0, 1e-12);
    check_grad_near(x, 14.0, 1e-12);
}

#[test]
fn test_backward_on_leaf_seeds_one() {
    let graph = Graph::new();
    let a = graph.constant(4.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_backward_on_leaf_adds_to_accumulated_grad() {
    let graph = Graph::new();
    let a = graph.leaf(4.0, "a");
    let b = a * 2.0;
    b.backward();
    assert_eq!(a.grad(), 2.0);
    a.backward();
    assert_eq!(a.grad(), 3.0);

    a.zero_grad();
    a.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_backward_leaves_unrelated_nodes_untouched() {
    let graph = Graph::new();
    let a = graph.leaf(1.0, "a");
    let b = graph.leaf(2.0, "b");
    let used = a * 3.0;
    let unused = b * 5.0;
    used.backward();

    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(unused.grad(), 0.0);
}

#[test]
fn test_repeated_backward_accumulates_leaves_only() {
    let graph = Graph::new();
    let a = graph.leaf(2.0, "a");
    let b = a * a;
    let c = a + b;

    c.backward();
    assert_eq!(a.grad(), 5.0);
    assert_eq!(b.grad(), 1.0);

    c.backward();
    assert_eq!(a.grad(), 10.0, "leaf gradients accumulate across traversals");
    assert_eq!(b.grad(), 1.0, "intermediate gradients are recomputed");
}

#[test]
fn test_zero_grad_clears_after_backward() {
    let graph = Graph::new();
    let a = graph.leaf(2.0, "a");
    let b = graph.leaf(-1.0, "b");
    let c = (a * b).tanh() + a;
    c.backward();
    assert_ne!(a.grad(), 0.0);

    c.zero_grad();
    for node in [a, b, c] {
        assert_eq!(node.grad(), 0.0);
    }
    for operand in c.operands() {
        assert_eq!(operand.grad(), 0.0);
    }
}

#[test]
fn test_zero_grad_is_idempotent() {
    let graph = Graph::new();
    let a = graph.leaf(2.0, "a");
    let c = a * a + a;
    c.backward();

    c.zero_grad();
    c.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(c.grad(), 0.0);

    // A fresh traversal after clearing gives the single-pass result again.
    c.backward();
    assert_eq!(a.grad(), 5.0);
}

#[test]
fn test_zero_grad_only_reaches_upstream() {
    let graph = Graph::new();
    let a = graph.leaf(2.0, "a");
    let b = a * 3.0;
    let c = b + 1.0;
    c.backward();

    b.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
    // `c` consumes `b` but is not reachable from it.
    assert_eq!(c.grad(), 1.0);
}
