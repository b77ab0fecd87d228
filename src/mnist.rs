use crate::error::Result;
use crate::point::LabeledPoint;

// Load MNIST images from a csv file.
// The expected format is:
// - No headers
// - One image per row
// - Each row starts with the class label 0-9
// - The rest of the row consists of 28x28 pixel values
// - The pixel values are represented as integers, 0-255
// Pixels are scaled into [0, 1] so distances do not depend on the raw range.
pub fn load_mnist(path: &str, limit: usize) -> Result<Vec<LabeledPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    reader
        .records()
        .take(limit)
        .map(|result| {
            let record = result?;
            let label = record[0].parse::<usize>()?;
            let coords = record
                .iter()
                .skip(1) // Skip the label
                .map(|x| Ok(x.parse::<f64>()? / 255.0))
                .collect::<Result<Vec<f64>>>()?;
            Ok(LabeledPoint::new(coords, label))
        })
        .collect()
}
