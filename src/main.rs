use clap::Parser;
use rayon::prelude::*;

// Needed to write partial lines to the console
use std::io::{self, Write};
use std::time::Instant;

use kd_mnist::kdtree::KdTree;
use kd_mnist::mnist::load_mnist;
use kd_mnist::render::render_glyph;
use kd_mnist::{KnnError, Result};

// MNIST digits
const NUM_LABELS: usize = 10;
const IMAGE_WIDTH: usize = 28;

#[derive(Parser)]
#[command(about = "MNIST digit classification by k-nearest-neighbor search in a k-d tree")]
struct Args {
    /// Training data CSV: one image per row, label first, then 784 pixels
    #[arg(long, default_value = "mnist_train.csv")]
    train: String,

    /// Test data CSV in the same format
    #[arg(long, default_value = "mnist_test.csv")]
    test: String,

    /// Number of nearest neighbors per prediction
    #[arg(short, default_value_t = 3)]
    k: usize,

    /// Number of test images to classify
    #[arg(long, default_value_t = 100)]
    test_len: usize,

    /// Cap on the number of training examples to load
    #[arg(long, default_value_t = usize::MAX)]
    train_len: usize,

    /// Print each test image as an ASCII glyph with its prediction
    #[arg(long)]
    show_images: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load the training data
    print!("Loading training data... ");
    let _ = io::stdout().flush();
    let now = Instant::now();
    let train = load_mnist(&args.train, args.train_len)?;
    println!(
        "Loaded {} examples from {} [{}ms]",
        train.len(),
        args.train,
        now.elapsed().as_millis()
    );

    // Build the tree - done once, queried read-only from here on
    print!("Building k-d tree... ");
    let _ = io::stdout().flush();
    let now = Instant::now();
    let tree = KdTree::build(train, NUM_LABELS)?;
    println!("Done [{}ms]", now.elapsed().as_millis());

    // Load the test data
    print!("Loading test data... ");
    let _ = io::stdout().flush();
    let now = Instant::now();
    let test = load_mnist(&args.test, usize::MAX)?;
    println!(
        "Loaded {} examples from {} [{}ms]",
        test.len(),
        args.test,
        now.elapsed().as_millis()
    );

    if args.test_len > test.len() {
        return Err(KnnError::InvalidParameter(format!(
            "test_len {} exceeds the {} available test images",
            args.test_len,
            test.len()
        )));
    }
    let test = &test[..args.test_len];

    // Classify the test images. Queries are independent reads of the tree,
    // each with its own best-list, so they parallelize cleanly.
    print!("Classifying {} test images (k = {})... ", test.len(), args.k);
    let _ = io::stdout().flush();
    let now = Instant::now();
    let predictions = test
        .par_iter()
        .map(|image| tree.predict(image, args.k))
        .collect::<Result<Vec<usize>>>()?;
    println!("Done [{}ms]", now.elapsed().as_millis());

    if args.show_images {
        for (image, prediction) in test.iter().zip(&predictions) {
            println!("{}", render_glyph(image, IMAGE_WIDTH));
            println!("Predicted: {}\n", prediction);
        }
    }

    // Report accuracy over the classified range
    let correct = predictions
        .iter()
        .zip(test)
        .filter(|(&prediction, image)| prediction == image.label())
        .count();
    let acc = correct as f64 / test.len().max(1) as f64;
    println!("Accuracy: {:.2} %", acc * 100.0);

    Ok(())
}
