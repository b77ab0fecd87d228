use super::Node;
use crate::point::LabeledPoint;

// One entry in a query result: the squared distance to a stored point and
// that point's label, closest first.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub distance: f64,
    pub label: usize,
}

// The k best candidates seen so far, sorted ascending by distance.
// Unfilled slots hold an infinite sentinel distance and no node, so any
// real candidate displaces them. One list exists per query call; it is
// never shared between queries.
struct BestList {
    entries: Vec<(f64, Option<u32>)>,
}

impl BestList {
    fn new(k: usize) -> Self {
        Self {
            entries: vec![(f64::INFINITY, None); k],
        }
    }

    // Distance of the current k-th best, the pruning bound
    fn worst(&self) -> f64 {
        // The list always holds exactly k >= 1 entries
        self.entries[self.entries.len() - 1].0
    }

    // True once all k slots hold real candidates
    fn is_full(&self) -> bool {
        self.entries[self.entries.len() - 1].1.is_some()
    }

    fn best(&self) -> f64 {
        self.entries[0].0
    }

    // Offer a candidate: if it beats the current worst entry it replaces
    // it, and the list is re-sorted. k is small, so a full sort per
    // replacement is cheap enough.
    fn offer(&mut self, distance: f64, index: u32) {
        if distance < self.worst() {
            let last = self.entries.len() - 1;
            self.entries[last] = (distance, Some(index));
            self.entries.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
        }
    }
}

// Branch-and-bound k-nearest-neighbor traversal.
//
// Iterative with an explicit stack rather than recursive, so a degenerate
// tree can never exhaust the call stack. The stack is LIFO: at each node
// the near child is pushed last (visited first) and the far child is pushed
// with the squared distance from the target to the splitting plane. That
// bound is checked when the far entry is popped - if the plane is already
// at least as far as the current k-th best, nothing in that subtree can
// improve the result and the whole branch is skipped.
pub(super) fn nearest(
    nodes: &[Node],
    root: u32,
    target: &LabeledPoint,
    k: usize,
    dims: usize,
) -> Vec<Neighbor> {
    let mut best = BestList::new(k);

    // (node index, depth, lower bound on any distance in the subtree)
    let mut stack: Vec<(u32, usize, f64)> = Vec::with_capacity(64);
    stack.push((root, 0, 0.0));

    while let Some((index, depth, bound)) = stack.pop() {
        if bound >= best.worst() {
            continue;
        }
        let node = &nodes[index as usize];

        let distance = node.point.squared_distance(target);
        best.offer(distance, index);

        // An exact match cannot be improved upon, but only stop once every
        // slot holds a real neighbor
        if best.best() == 0.0 && best.is_full() {
            break;
        }

        let axis = depth % dims;
        let delta = node.point.get(axis) - target.get(axis);
        let (near, far) = if delta > 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };
        if let Some(far) = far {
            stack.push((far, depth + 1, delta * delta));
        }
        if let Some(near) = near {
            stack.push((near, depth + 1, 0.0));
        }
    }

    best.entries
        .into_iter()
        .filter_map(|(distance, index)| {
            index.map(|index| Neighbor {
                distance,
                label: nodes[index as usize].point.label(),
            })
        })
        .collect()
}
