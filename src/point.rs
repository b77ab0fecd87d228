// A labeled sample: one flattened grayscale image plus its class label.

#[derive(Clone, Debug)]
pub struct LabeledPoint {
    coords: Vec<f64>,
    label: usize,
}

impl LabeledPoint {
    pub fn new(coords: Vec<f64>, label: usize) -> Self {
        Self { coords, label }
    }

    // Coordinate i of the point. Panics if i is out of range.
    pub fn get(&self, index: usize) -> f64 {
        self.coords[index]
    }

    // Number of coordinates (784 for MNIST)
    pub fn dims(&self) -> usize {
        self.coords.len()
    }

    pub fn label(&self) -> usize {
        self.label
    }

    // Squared euclidean distance to another point.
    // We never take the square root - ordering by squared distance is the
    // same as ordering by distance, and the root costs time for nothing.
    pub fn squared_distance(&self, other: &LabeledPoint) -> f64 {
        debug_assert_eq!(self.coords.len(), other.coords.len());
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum()
    }
}
