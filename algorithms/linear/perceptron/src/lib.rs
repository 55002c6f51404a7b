use log::{debug, info, warn};
use ndarray::{Array1, ArrayView1, Zip};
use std::error::Error;
use std::fmt::{Display, Formatter};
// Core components from shared library
use percept_helpers::{split_data_points, BinaryLabel, DataPoint, Float};

/// Step size used when no learning rate is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
/// Number of passes over the training set used when none is configured.
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Errors that can occur when training or using the perceptron.
#[derive(Debug, Clone, PartialEq)]
pub enum PerceptronError {
    /// The training set has zero samples.
    EmptyInput,
    /// `predict` (or a model accessor) was called before any successful `train`.
    NotTrained,
    /// A sample's length disagrees with the model or with the first sample of the batch.
    DimensionMismatch { expected: usize, found: usize },
    /// The samples and labels sequences are not index-aligned.
    LabelCountMismatch { samples: usize, labels: usize },
    /// The learning rate is zero, negative or not finite.
    InvalidLearningRate,
    /// The iteration count is zero.
    InvalidIterations,
}

impl Display for PerceptronError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PerceptronError::EmptyInput => write!(f, "No samples to train on"),
            PerceptronError::NotTrained => write!(f, "The perceptron has not been trained yet"),
            PerceptronError::DimensionMismatch { expected, found } => write!(
                f,
                "Sample has {} features but {} were expected",
                found, expected
            ),
            PerceptronError::LabelCountMismatch { samples, labels } => write!(
                f,
                "Got {} samples but {} labels",
                samples, labels
            ),
            PerceptronError::InvalidLearningRate => {
                write!(f, "Learning rate must be a positive finite number")
            }
            PerceptronError::InvalidIterations => {
                write!(f, "Number of iterations must be at least 1")
            }
        }
    }
}

impl Error for PerceptronError {}

/// Step activation: `Positive` when `score >= 0`, `Negative` otherwise.
///
/// A score of exactly zero maps to `Positive`. NaN compares false and maps to `Negative`.
pub fn step<F: Float>(score: F) -> BinaryLabel {
    if score >= F::zero() {
        BinaryLabel::Positive
    } else {
        BinaryLabel::Negative
    }
}

/// Hyperparameters of the perceptron.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct PerceptronParams<F> {
    learning_rate: F,
    iterations: u32,
}

impl<F: Float> PerceptronParams<F> {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns `PerceptronError::InvalidLearningRate` if `learning_rate` is not a
    /// positive finite number, and `PerceptronError::InvalidIterations` if
    /// `iterations` is 0.
    pub fn new(learning_rate: F, iterations: u32) -> Result<Self, PerceptronError> {
        let params = Self { learning_rate, iterations };
        params.validate()?;
        Ok(params)
    }

    pub fn with_learning_rate(mut self, learning_rate: F) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn validate(&self) -> Result<(), PerceptronError> {
        if !(self.learning_rate > F::zero() && self.learning_rate.is_finite()) {
            return Err(PerceptronError::InvalidLearningRate);
        }
        if self.iterations == 0 {
            return Err(PerceptronError::InvalidIterations);
        }
        Ok(())
    }
}

impl<F: Float> Default for PerceptronParams<F> {
    fn default() -> Self {
        Self {
            learning_rate: F::from_f64(DEFAULT_LEARNING_RATE)
                .expect("default learning rate is representable in every float type"),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// The learned state of a perceptron: one weight per feature plus a bias.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<F: Float> {
    weights: Array1<F>,
    bias: F,
}

impl<F: Float> LinearModel<F> {
    /// An all-zero model over `n_features` features.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Array1::zeros(n_features),
            bias: F::zero(),
        }
    }

    pub fn new(weights: Array1<F>, bias: F) -> Self {
        Self { weights, bias }
    }

    pub fn weights(&self) -> ArrayView1<'_, F> {
        self.weights.view()
    }

    pub fn bias(&self) -> F {
        self.bias
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Linear score `dot(weights, sample) + bias`.
    ///
    /// # Errors
    ///
    /// Returns `PerceptronError::DimensionMismatch` if the sample length differs
    /// from the number of weights.
    pub fn score(&self, sample: ArrayView1<F>) -> Result<F, PerceptronError> {
        self.check_dim(sample.len())?;
        Ok(self.raw_score(sample))
    }

    /// Applies the step activation to the linear score of `sample`.
    pub fn classify(&self, sample: ArrayView1<F>) -> Result<BinaryLabel, PerceptronError> {
        self.score(sample).map(step)
    }

    fn check_dim(&self, found: usize) -> Result<(), PerceptronError> {
        if found != self.n_features() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.n_features(),
                found,
            });
        }
        Ok(())
    }

    // Accumulates strictly left to right so scores are bit-for-bit reproducible.
    fn raw_score(&self, sample: ArrayView1<F>) -> F {
        self.weights
            .iter()
            .zip(sample.iter())
            .fold(F::zero(), |acc, (&w, &x)| acc + w * x)
            + self.bias
    }

    fn update(&mut self, sample: ArrayView1<F>, step_size: F) {
        Zip::from(&mut self.weights)
            .and(&sample)
            .for_each(|w, &x| *w += step_size * x);
        self.bias += step_size;
    }
}

/// Per-pass diagnostics gathered while training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingReport {
    /// For each pass, how many samples the model misclassified at the moment
    /// it visited them.
    pub errors_per_epoch: Vec<usize>,
}

impl TrainingReport {
    pub fn epochs(&self) -> usize {
        self.errors_per_epoch.len()
    }

    pub fn final_errors(&self) -> usize {
        self.errors_per_epoch.last().copied().unwrap_or(0)
    }

    /// True when the last pass made no mistakes.
    pub fn converged(&self) -> bool {
        self.final_errors() == 0
    }

    /// The 1-based index of the first pass without mistakes, if any.
    pub fn first_clean_epoch(&self) -> Option<usize> {
        self.errors_per_epoch
            .iter()
            .position(|&errors| errors == 0)
            .map(|i| i + 1)
    }
}

/// A single-layer binary linear classifier trained with the perceptron rule.
///
/// The model starts untrained. Each call to [`Perceptron::train`] discards the
/// previous weights, starts from zeros and runs exactly `iterations` passes over
/// the samples in the order given. There is no shuffling and no early stop, so
/// identical inputs always give identical weights.
///
/// # Type Parameters
///
/// * `F`: The float type for the features (e.g., `f32`, `f64`).
#[derive(Debug, Clone)]
pub struct Perceptron<F: Float> {
    params: PerceptronParams<F>,
    model: Option<LinearModel<F>>,
}

impl<F: Float> Perceptron<F> {
    /// Creates an untrained perceptron.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `params` if they are invalid.
    pub fn new(params: PerceptronParams<F>) -> Result<Self, PerceptronError> {
        params.validate()?;
        Ok(Self { params, model: None })
    }

    /// Creates a perceptron that is already in the trained state with `model`.
    pub fn from_model(
        params: PerceptronParams<F>,
        model: LinearModel<F>,
    ) -> Result<Self, PerceptronError> {
        params.validate()?;
        Ok(Self {
            params,
            model: Some(model),
        })
    }

    pub fn params(&self) -> &PerceptronParams<F> {
        &self.params
    }

    pub fn model(&self) -> Option<&LinearModel<F>> {
        self.model.as_ref()
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    pub fn weights(&self) -> Result<ArrayView1<'_, F>, PerceptronError> {
        self.trained_model().map(|m| m.weights())
    }

    pub fn bias(&self) -> Result<F, PerceptronError> {
        self.trained_model().map(|m| m.bias())
    }

    /// Trains the perceptron from scratch.
    ///
    /// # Arguments
    ///
    /// * `samples`: The feature vectors, all of the same length.
    /// * `labels`: One label per sample, index-aligned with `samples`.
    ///
    /// # Returns
    ///
    /// A [`TrainingReport`] with the number of mistakes made on every pass.
    ///
    /// # Errors
    ///
    /// Returns `PerceptronError::EmptyInput` if `samples` is empty,
    /// `PerceptronError::LabelCountMismatch` if the two sequences differ in length and
    /// `PerceptronError::DimensionMismatch` if the samples do not all share the length
    /// of the first one. On error the previously trained model is left untouched.
    pub fn train(
        &mut self,
        samples: &[Array1<F>],
        labels: &[BinaryLabel],
    ) -> Result<TrainingReport, PerceptronError> {
        let n_features = check_training_set(samples, labels)
            .inspect_err(|e| warn!("Rejected training set: {}", e))?;

        let step_size = self.params.learning_rate;
        let mut model = LinearModel::zeros(n_features);
        let mut errors_per_epoch = Vec::with_capacity(self.params.iterations as usize);

        for epoch in 0..self.params.iterations {
            let mut mistakes = 0;
            for (sample, &label) in samples.iter().zip(labels) {
                let predicted = step(model.raw_score(sample.view()));
                if predicted != label {
                    mistakes += 1;
                }
                let error = label.to_float::<F>() - predicted.to_float::<F>();
                model.update(sample.view(), step_size * error);
            }
            debug!("Epoch {}: {} mistakes", epoch + 1, mistakes);
            errors_per_epoch.push(mistakes);
        }

        info!(
            "Trained on {} samples x {} features for {} epochs, weights = {}, bias = {:?}",
            samples.len(),
            n_features,
            self.params.iterations,
            model.weights,
            model.bias
        );

        self.model = Some(model);
        Ok(TrainingReport { errors_per_epoch })
    }

    /// Trains from labeled data points. Equivalent to [`Perceptron::train`] on the
    /// split features and labels.
    pub fn fit(
        &mut self,
        data: &[DataPoint<BinaryLabel, F>],
    ) -> Result<TrainingReport, PerceptronError> {
        let (samples, labels) = split_data_points(data);
        self.train(&samples, &labels)
    }

    /// Predicts one label per sample, in input order.
    ///
    /// # Errors
    ///
    /// Returns `PerceptronError::NotTrained` before the first successful `train`,
    /// and `PerceptronError::DimensionMismatch` if any sample has the wrong length.
    pub fn predict(&self, samples: &[Array1<F>]) -> Result<Vec<BinaryLabel>, PerceptronError> {
        let model = self.trained_model()?;
        samples.iter().map(|s| model.classify(s.view())).collect()
    }

    pub fn predict_one(&self, sample: ArrayView1<F>) -> Result<BinaryLabel, PerceptronError> {
        self.trained_model()?.classify(sample)
    }

    /// The raw linear score of `sample` under the current model.
    pub fn decision_function(&self, sample: ArrayView1<F>) -> Result<F, PerceptronError> {
        self.trained_model()?.score(sample)
    }

    /// Counts the samples whose prediction differs from the given label.
    pub fn misclassified(
        &self,
        samples: &[Array1<F>],
        labels: &[BinaryLabel],
    ) -> Result<usize, PerceptronError> {
        if samples.len() != labels.len() {
            return Err(PerceptronError::LabelCountMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }
        let predictions = self.predict(samples)?;
        Ok(predictions
            .iter()
            .zip(labels)
            .filter(|(p, l)| p != l)
            .count())
    }

    fn trained_model(&self) -> Result<&LinearModel<F>, PerceptronError> {
        self.model.as_ref().ok_or(PerceptronError::NotTrained)
    }
}

/// Validates a training batch and returns its dimensionality.
fn check_training_set<F: Float>(
    samples: &[Array1<F>],
    labels: &[BinaryLabel],
) -> Result<usize, PerceptronError> {
    let first = samples.first().ok_or(PerceptronError::EmptyInput)?;
    if labels.len() != samples.len() {
        return Err(PerceptronError::LabelCountMismatch {
            samples: samples.len(),
            labels: labels.len(),
        });
    }
    let n_features = first.len();
    if let Some(bad) = samples.iter().find(|s| s.len() != n_features) {
        return Err(PerceptronError::DimensionMismatch {
            expected: n_features,
            found: bad.len(),
        });
    }
    Ok(n_features)
}
