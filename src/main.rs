// This is a simple example showing how to use the percept library
use ndarray::array;
use percept::{BinaryLabel, Perceptron, PerceptronParams};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("percept library example");

    let samples = vec![array![2.0, 20.0], array![8.0, 90.0]];
    let labels = vec![BinaryLabel::Negative, BinaryLabel::Positive];

    let params = match PerceptronParams::new(0.1, 10) {
        Ok(params) => params,
        Err(e) => {
            log::error!("Invalid parameters: {}", e);
            return;
        }
    };
    let mut model = match Perceptron::new(params) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Could not build the perceptron: {}", e);
            return;
        }
    };

    match model.train(&samples, &labels) {
        Ok(report) => println!("Mistakes per epoch: {:?}", report.errors_per_epoch),
        Err(e) => {
            log::error!("Training failed: {}", e);
            return;
        }
    }

    let queries = vec![array![1.0, 10.0], array![9.0, 95.0]];
    match model.predict(&queries) {
        Ok(predicted) => {
            for (q, label) in queries.iter().zip(predicted) {
                println!("{} -> {}", q, label);
            }
        }
        Err(e) => log::error!("Prediction failed: {}", e),
    }
}
