// A k-d tree over labeled points, built once and queried read-only.
//
// Nodes live in one contiguous Vec and link to their children by index,
// so there is no per-node allocation and a finished tree can be read
// from many threads at once.

mod build;
mod search;

pub use search::Neighbor;

use crate::error::{KnnError, Result};
use crate::majority;
use crate::point::LabeledPoint;

#[derive(Debug)]
struct Node {
    point: LabeledPoint,
    left: Option<u32>,
    right: Option<u32>,
}

impl Node {
    fn new(point: LabeledPoint) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug)]
pub struct KdTree {
    // All nodes, allocated once at build time and never resized
    nodes: Vec<Node>,
    root: Option<u32>,
    // Coordinates per point, fixed for the whole tree
    dims: usize,
    // Size of the label domain, fixed at build time
    num_labels: usize,
}

impl KdTree {
    // Build a tree from a set of labeled points. The points are copied into
    // node storage and partitioned in place; the input set is consumed.
    // All validation happens before any node storage is created, so a failed
    // build never produces a partially constructed tree.
    pub fn build(points: Vec<LabeledPoint>, num_labels: usize) -> Result<Self> {
        if points.is_empty() {
            return Err(KnnError::EmptyDataset);
        }
        if num_labels == 0 {
            return Err(KnnError::InvalidParameter(
                "num_labels must be at least 1".to_string(),
            ));
        }
        let dims = points[0].dims();
        if dims == 0 {
            return Err(KnnError::InvalidParameter(
                "points must have at least one coordinate".to_string(),
            ));
        }
        for point in &points {
            if point.dims() != dims {
                return Err(KnnError::InvalidParameter(format!(
                    "expected {} coordinates, found {}",
                    dims,
                    point.dims()
                )));
            }
            if point.label() >= num_labels {
                return Err(KnnError::InvalidParameter(format!(
                    "label {} is outside the domain [0, {})",
                    point.label(),
                    num_labels
                )));
            }
        }

        let mut nodes: Vec<Node> = points.into_iter().map(Node::new).collect();
        let count = nodes.len();
        let root = build::build_range(&mut nodes, 0, count, 0, dims);
        Ok(Self {
            nodes,
            root,
            dims,
            num_labels,
        })
    }

    // Number of points stored in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    // The k nearest stored points to the target, closest first.
    // Each call runs on its own best-list, so concurrent queries against
    // one tree are safe.
    pub fn nearest(&self, target: &LabeledPoint, k: usize) -> Result<Vec<Neighbor>> {
        let root = self.root.ok_or(KnnError::EmptyTree)?;
        if k < 1 || k > self.nodes.len() {
            return Err(KnnError::InvalidParameter(format!(
                "k must be in [1, {}], got {}",
                self.nodes.len(),
                k
            )));
        }
        if target.dims() != self.dims {
            return Err(KnnError::InvalidParameter(format!(
                "query has {} coordinates, tree expects {}",
                target.dims(),
                self.dims
            )));
        }
        Ok(search::nearest(&self.nodes, root, target, k, self.dims))
    }

    // Predict a label for the target by majority vote among its k nearest
    // neighbors.
    pub fn predict(&self, target: &LabeledPoint, k: usize) -> Result<usize> {
        let neighbors = self.nearest(target, k)?;
        let labels: Vec<usize> = neighbors.iter().map(|n| n.label).collect();
        Ok(majority::vote(&labels, self.num_labels))
    }
}
