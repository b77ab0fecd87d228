use super::Node;

// Recursively partition nodes[begin..end] into a subtree and return the
// index of its root, or None for an empty range.
//
// Each level places the lower median of the range (by the coordinate on the
// level's axis) at the middle index via a linear-time selection, with
// smaller coordinates somewhere before it and larger ones somewhere after.
// Neither side is sorted, and equal coordinates may land on either side;
// the search's pruning bound is valid either way.
//
// The split index is always the midpoint of the range, so recursion depth
// is at most ceil(log2(n)) + 1 no matter how the coordinates are
// distributed - duplicate-heavy inputs cannot skew the shape.
pub(super) fn build_range(
    nodes: &mut [Node],
    begin: usize,
    end: usize,
    depth: usize,
    dims: usize,
) -> Option<u32> {
    if end <= begin {
        return None;
    }
    let axis = depth % dims;
    let mid = begin + (end - begin) / 2;

    nodes[begin..end].select_nth_unstable_by(mid - begin, |a, b| {
        a.point.get(axis).total_cmp(&b.point.get(axis))
    });

    let left = build_range(nodes, begin, mid, depth + 1, dims);
    let right = build_range(nodes, mid + 1, end, depth + 1, dims);
    nodes[mid].left = left;
    nodes[mid].right = right;
    Some(mid as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::LabeledPoint;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn nodes_from(coords: &[&[f64]]) -> Vec<Node> {
        coords
            .iter()
            .map(|c| Node::new(LabeledPoint::new(c.to_vec(), 0)))
            .collect()
    }

    // Walk the tree and check the median-split invariant at every node:
    // all left descendants are <= the pivot on the node's axis, all right
    // descendants are >= it.
    fn check_partition(nodes: &[Node], index: u32, depth: usize, dims: usize) {
        let axis = depth % dims;
        let pivot = nodes[index as usize].point.get(axis);
        if let Some(left) = nodes[index as usize].left {
            for_each_descendant(nodes, left, &mut |p| {
                assert!(p.get(axis) <= pivot);
            });
            check_partition(nodes, left, depth + 1, dims);
        }
        if let Some(right) = nodes[index as usize].right {
            for_each_descendant(nodes, right, &mut |p| {
                assert!(p.get(axis) >= pivot);
            });
            check_partition(nodes, right, depth + 1, dims);
        }
    }

    fn for_each_descendant(nodes: &[Node], index: u32, f: &mut impl FnMut(&LabeledPoint)) {
        f(&nodes[index as usize].point);
        if let Some(left) = nodes[index as usize].left {
            for_each_descendant(nodes, left, f);
        }
        if let Some(right) = nodes[index as usize].right {
            for_each_descendant(nodes, right, f);
        }
    }

    #[test]
    fn test_empty_range_has_no_root() {
        let mut nodes = nodes_from(&[&[1.0]]);
        assert_eq!(build_range(&mut nodes, 0, 0, 0, 1), None);
    }

    #[test]
    fn test_single_node_is_root_and_leaf() {
        let mut nodes = nodes_from(&[&[1.0, 2.0]]);
        let root = build_range(&mut nodes, 0, 1, 0, 2).unwrap();
        assert_eq!(root, 0);
        assert_eq!(nodes[0].left, None);
        assert_eq!(nodes[0].right, None);
    }

    #[test]
    fn test_partition_invariant_holds() {
        let mut rng = SmallRng::seed_from_u64(5);
        for dims in [1, 2, 5] {
            let mut nodes: Vec<Node> = (0..101)
                .map(|_| {
                    let coords = (0..dims).map(|_| rng.gen::<f64>()).collect();
                    Node::new(LabeledPoint::new(coords, 0))
                })
                .collect();
            let count = nodes.len();
            let root = build_range(&mut nodes, 0, count, 0, dims).unwrap();
            check_partition(&nodes, root, 0, dims);
        }
    }

    #[test]
    fn test_every_node_is_reachable() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut nodes: Vec<Node> = (0..64)
            .map(|_| Node::new(LabeledPoint::new(vec![rng.gen(), rng.gen()], 0)))
            .collect();
        let root = build_range(&mut nodes, 0, 64, 0, 2).unwrap();
        let mut seen = 0;
        for_each_descendant(&nodes, root, &mut |_| seen += 1);
        assert_eq!(seen, 64);
    }
}
