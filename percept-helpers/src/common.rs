use ndarray::Array1;
use crate::Float;
use std::fmt::Debug;

/// Represents a single data point with features and a label.
///
/// L: The type of the label (e.g., `BinaryLabel`, String, i32).
/// F: The float type for the features (e.g., f32, f64).
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint<L, F>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    pub features: Array1<F>,
    pub label: L,
}

impl<L, F> DataPoint<L, F>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    pub fn new(features: Array1<F>, label: L) -> Self {
        DataPoint { features, label }
    }

    /// Number of features carried by this point.
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// Splits a slice of data points into two index-aligned sequences:
/// the feature vectors and their labels.
pub fn split_data_points<L, F>(data: &[DataPoint<L, F>]) -> (Vec<Array1<F>>, Vec<L>)
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
{
    data.iter()
        .map(|dp| (dp.features.clone(), dp.label.clone()))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryLabel;
    use ndarray::array;

    #[test]
    fn test_split_keeps_order() {
        let data = vec![
            DataPoint::new(array![1.0, 2.0], BinaryLabel::Negative),
            DataPoint::new(array![3.0, 4.0], BinaryLabel::Positive),
            DataPoint::new(array![5.0, 6.0], BinaryLabel::Negative),
        ];
        let (features, labels) = split_data_points(&data);

        assert_eq!(features.len(), 3);
        assert_eq!(features[1], array![3.0, 4.0]);
        assert_eq!(
            labels,
            vec![BinaryLabel::Negative, BinaryLabel::Positive, BinaryLabel::Negative]
        );
    }

    #[test]
    fn test_split_empty() {
        let data: Vec<DataPoint<BinaryLabel, f64>> = vec![];
        let (features, labels) = split_data_points(&data);
        assert!(features.is_empty());
        assert!(labels.is_empty());
    }

    #[test]
    fn test_dim() {
        let dp = DataPoint::new(array![0.5f32, 1.5, 2.5], "x");
        assert_eq!(dp.dim(), 3);
    }
}
