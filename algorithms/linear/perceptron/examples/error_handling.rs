//! Example demonstrating error handling with the perceptron.
//!
//! Every failure mode of the classifier is reported through `PerceptronError`,
//! so callers can recover and keep going.

use ndarray::array;
use percept_helpers::BinaryLabel::{Negative, Positive};
use perceptron::{Perceptron, PerceptronError, PerceptronParams};

fn main() {
    env_logger::init();

    println!("Perceptron Error Handling Examples");
    println!("==================================");

    // Example 1: Invalid hyperparameters
    println!("\n1. Handling an invalid learning rate:");
    match PerceptronParams::new(0.0, 100) {
        Ok(_) => println!("   Parameters accepted"),
        Err(e) => println!("   ✓ Caught expected error: {}", e),
    }

    // Example 2: Predicting before training
    println!("\n2. Predicting with an untrained model:");
    let mut model = Perceptron::<f64>::new(PerceptronParams::default()).expect("default params are valid");
    match model.predict(&[array![10.0, 50.0]]) {
        Ok(labels) => println!("   Predicted: {:?}", labels),
        Err(PerceptronError::NotTrained) => {
            println!("   ✓ Caught expected error: {}", PerceptronError::NotTrained)
        }
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 3: Empty training set
    println!("\n3. Training on an empty set:");
    match model.train(&[], &[]) {
        Ok(_) => println!("   Trained"),
        Err(e) => println!("   ✓ Caught expected error: {}", e),
    }

    // Example 4: Successful training, then a badly shaped query
    println!("\n4. Training, then predicting with the wrong number of features:");
    let samples = vec![array![2.0, 20.0], array![8.0, 90.0]];
    let labels = vec![Negative, Positive];
    match model.train(&samples, &labels) {
        Ok(report) => println!(
            "   ✓ Trained for {} epochs, {} mistakes on the last one",
            report.epochs(),
            report.final_errors()
        ),
        Err(e) => println!("   ✗ Training failed: {}", e),
    }
    match model.predict(&[array![1.0, 10.0, 3.0]]) {
        Ok(labels) => println!("   Predicted: {:?}", labels),
        Err(e) => println!("   ✓ Caught expected error: {}", e),
    }

    // Example 5: Error propagation in a function
    println!("\n5. Error propagation in functions:");

    fn classify() -> Result<Vec<u8>, PerceptronError> {
        let params = PerceptronParams::new(0.1, 10)?;
        let mut model = Perceptron::new(params)?;
        model.train(&[array![2.0, 20.0], array![8.0, 90.0]], &[Negative, Positive])?;
        let labels = model.predict(&[array![1.0, 10.0], array![9.0, 95.0]])?;
        Ok(labels.into_iter().map(|l| l.as_u8()).collect())
    }

    match classify() {
        Ok(labels) => println!("   ✓ Classification result: {:?}", labels),
        Err(e) => println!("   ✗ Classification failed: {}", e),
    }
}
