//! DFS shortcut links.
//!
//! A depth-first walk that records, for every vertex that finishes (runs out of
//! undiscovered neighbours), the next vertex discovered after it. Following the links
//! from a leaf jumps straight to the next unexplored branch, which gives a flattened
//! iteration order over a hierarchy without re-walking finished subtrees.
//!
//! The walk keeps its own frame stack, so graph depth is bounded by heap memory rather
//! than by the thread's call stack.

use std::collections::HashMap;

use crate::{graph::NodeId, utils::BitSet};

/// One level of the explicit DFS stack.
struct Frame {
    node: NodeId,
    adjacent: Vec<NodeId>,
    next: usize,
}

/// Computes shortcut links for a depth-first walk from `start`.
///
/// Every vertex reached from `start` appears as a key exactly once. Its value is the
/// first vertex discovered after it finished, or `None` if the walk ended without
/// discovering anything further. Finished vertices wait in an "upward queue" until the
/// next discovery, so a whole run of vertices finishing back-to-back maps to the same
/// target.
///
/// # Arguments
///
/// * `bound` - Exclusive upper bound of node indices
/// * `start` - Root of the walk; an index at or above `bound` yields an empty map
/// * `neighbours` - Returns the vertices adjacent to a given vertex, in exploration order
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the frame stack
///
/// # Examples
///
/// ```rust
/// use ontograph::{graph::algorithms::dfs_shortcut_links, NodeId};
///
/// // 0 -> 1, 0 -> 2
/// let adjacency = vec![vec![NodeId::new(1), NodeId::new(2)], vec![], vec![]];
/// let links = dfs_shortcut_links(3, NodeId::new(0), |n| adjacency[n.index()].clone());
///
/// // leaf 1 finishes, then 2 is discovered
/// assert_eq!(links[&NodeId::new(1)], Some(NodeId::new(2)));
/// assert_eq!(links[&NodeId::new(2)], None);
/// assert_eq!(links[&NodeId::new(0)], None);
/// ```
pub fn dfs_shortcut_links<F, I>(
    bound: usize,
    start: NodeId,
    mut neighbours: F,
) -> HashMap<NodeId, Option<NodeId>>
where
    F: FnMut(NodeId) -> I,
    I: IntoIterator<Item = NodeId>,
{
    let mut links = HashMap::new();
    if start.index() >= bound {
        return links;
    }

    let mut visited = BitSet::new(bound);
    let mut upward: Vec<NodeId> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut discovered = Some(start);

    loop {
        if let Some(node) = discovered.take() {
            visited.insert(node.index());
            for finished in upward.drain(..) {
                links.insert(finished, Some(node));
            }
            stack.push(Frame {
                node,
                adjacent: neighbours(node).into_iter().collect(),
                next: 0,
            });
            continue;
        }

        let Some(frame) = stack.last_mut() else {
            break;
        };

        if let Some(&candidate) = frame.adjacent.get(frame.next) {
            frame.next += 1;
            if candidate.index() < bound && !visited.contains(candidate.index()) {
                discovered = Some(candidate);
            }
        } else {
            upward.push(frame.node);
            stack.pop();
        }
    }

    for terminal in upward {
        links.insert(terminal, None);
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<NodeId>> {
        let mut adj = vec![Vec::new(); n];
        for &(s, d) in edges {
            adj[s].push(NodeId::new(d));
        }
        adj
    }

    fn links_of(n: usize, edges: &[(usize, usize)], start: usize) -> HashMap<usize, Option<usize>> {
        let adj = adjacency(n, edges);
        dfs_shortcut_links(n, NodeId::new(start), |node| adj[node.index()].clone())
            .into_iter()
            .map(|(k, v)| (k.index(), v.map(NodeId::index)))
            .collect()
    }

    #[test]
    fn test_single_vertex() {
        let links = links_of(1, &[], 0);
        assert_eq!(links.len(), 1);
        assert_eq!(links[&0], None);
    }

    #[test]
    fn test_chain_has_no_shortcuts() {
        let links = links_of(3, &[(0, 1), (1, 2)], 0);
        assert_eq!(links.len(), 3);
        assert!(links.values().all(Option::is_none));
    }

    #[test]
    fn test_branches_link_to_next_discovery() {
        // 0 -> 1 -> 3, 1 -> 4, 0 -> 2
        let links = links_of(5, &[(0, 1), (1, 3), (1, 4), (0, 2)], 0);
        assert_eq!(links[&3], Some(4));
        // 4 and 1 finish back-to-back and both jump to 2
        assert_eq!(links[&4], Some(2));
        assert_eq!(links[&1], Some(2));
        assert_eq!(links[&2], None);
        assert_eq!(links[&0], None);
    }

    #[test]
    fn test_cycle_and_shared_child() {
        // 0 -> 1 -> 0, 0 -> 2, 1 -> 2
        let links = links_of(3, &[(0, 1), (1, 0), (1, 2), (0, 2)], 0);
        assert_eq!(links.len(), 3);
        assert_eq!(links[&2], None);
        assert_eq!(links[&1], None);
    }

    #[test]
    fn test_unreachable_vertices_are_absent() {
        let links = links_of(4, &[(0, 1), (2, 3)], 0);
        assert_eq!(links.len(), 2);
        assert!(!links.contains_key(&2));
    }

    #[test]
    fn test_out_of_range_start() {
        assert!(links_of(2, &[], 5).is_empty());
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let n = 100_000;
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let links = links_of(n, &edges, 0);
        assert_eq!(links.len(), n);
    }
}
