use crate::graph::{Node, NodeId};
use std::collections::{HashSet, VecDeque};

/// Builds a topological order of the subgraph reachable from `root` through
/// the operand relation.
///
/// The returned list is a depth-first post-order: every node appears after all
/// of its operands, and `root` comes last. Iterating it in reverse therefore
/// visits each node only after all of its consumers.
///
/// Uses an explicit stack, so arbitrarily long chains do not grow the call stack.
pub(crate) fn topological_sort(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted = Vec::new();
    // (node, operands_pushed)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((id, operands_pushed)) = stack.pop() {
        if operands_pushed {
            sorted.push(id);
            continue;
        }
        if !visited.insert(id) {
            continue;
        }
        stack.push((id, true));
        for &operand in nodes[id.index()].op.operands().iter().rev() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }
    sorted
}

/// Collects every node reachable from `root`, each exactly once.
///
/// Order is breadth-first and carries no dependency guarantee; use
/// [`topological_sort`] when order matters.
pub(crate) fn collect_reachable(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut reachable = Vec::new();
    let mut queue = VecDeque::from([root]);

    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        reachable.push(id);
        queue.extend(nodes[id.index()].op.operands().iter().copied());
    }
    reachable
}
