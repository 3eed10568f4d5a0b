use crate::autograd::graph::{collect_reachable, topological_sort};
use crate::graph::{Graph, NodeId};
use log::{debug, trace};

/// Backward pass driver.
///
/// 1. Topologically sorts the subgraph reachable from `output`.
/// 2. Resets the gradient of every reachable non-leaf node, so intermediate
///    gradients only ever describe the current traversal. Leaf gradients keep
///    accumulating across calls until cleared with [`zero_grad`].
/// 3. Seeds `output` by adding `d(output)/d(output) = 1`. A leaf output keeps
///    what it had accumulated; any other output was just reset to 0.
/// 4. Runs each node's local rule once, consumers before operands.
pub(crate) fn backward(graph: &Graph, output: NodeId) {
    let mut nodes = graph.nodes_mut();
    let order = topological_sort(&nodes, output);
    debug!(
        "backward: {} reachable nodes from {:?} (graph size {})",
        order.len(),
        output,
        nodes.len()
    );

    for &id in &order {
        let node = &mut nodes[id.index()];
        if !node.op.is_leaf() {
            node.grad = 0.0;
        }
    }
    nodes[output.index()].grad += 1.0;

    for &id in order.iter().rev() {
        let op = nodes[id.index()].op;
        trace!(
            "backward: applying '{}' rule of {:?} (grad {})",
            op.symbol(),
            id,
            nodes[id.index()].grad
        );
        op.propagate(&mut nodes, id);
    }
}

/// Resets the gradient of every node reachable from `root` to zero.
pub(crate) fn zero_grad(graph: &Graph, root: NodeId) {
    let mut nodes = graph.nodes_mut();
    let reachable = collect_reachable(&nodes, root);
    for &id in &reachable {
        nodes[id.index()].grad = 0.0;
    }
    debug!("zero_grad: cleared {} nodes reachable from {:?}", reachable.len(), root);
}
