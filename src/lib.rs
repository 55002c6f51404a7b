//! Binary linear classification with the perceptron learning rule.
//!
//! This crate bundles the shared helpers and the perceptron algorithm so
//! downstream code can depend on a single crate.

pub use percept_helpers::synthetic;
pub use percept_helpers::{split_data_points, BinaryLabel, DataPoint, Float, LabelError};
pub use perceptron::{
    step, LinearModel, Perceptron, PerceptronError, PerceptronParams, TrainingReport,
};

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_reexports_work_together() {
        let data = vec![
            DataPoint::new(array![2.0, 20.0], BinaryLabel::Negative),
            DataPoint::new(array![8.0, 90.0], BinaryLabel::Positive),
        ];
        let mut model = Perceptron::new(PerceptronParams::new(0.1, 10).unwrap()).unwrap();
        model.fit(&data).unwrap();
        let (samples, labels) = split_data_points(&data);
        assert_eq!(model.misclassified(&samples, &labels).unwrap(), 1);
    }
}
