use crate::records::RecordStore;
use eframe::egui;
use ndarray::array;
use percept::{BinaryLabel, Perceptron, PerceptronError, PerceptronParams, TrainingReport};

/// Connects the perceptron to the record store and to the parameter controls.
///
/// The controls edit `learning_rate` and `iterations` freely; they are only
/// validated when a training is requested, so a bad value never destroys the
/// current model.
pub struct PerceptronAdapter {
    model: Option<Perceptron<f64>>,
    learning_rate: f64,
    iterations: u32,
    last_report: Option<TrainingReport>,
}

impl PerceptronAdapter {
    pub fn new(params: PerceptronParams<f64>) -> Self {
        Self {
            model: None,
            learning_rate: params.learning_rate(),
            iterations: params.iterations(),
            last_report: None,
        }
    }

    pub fn params(&self) -> Result<PerceptronParams<f64>, PerceptronError> {
        PerceptronParams::new(self.learning_rate, self.iterations)
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    pub fn last_report(&self) -> Option<&TrainingReport> {
        self.last_report.as_ref()
    }

    /// Trains a fresh perceptron on every record in `store`.
    ///
    /// On failure the previously trained model stays in place.
    pub fn train(&mut self, store: &RecordStore) -> Result<&TrainingReport, PerceptronError> {
        let (samples, labels) = store.training_set();
        let mut model = Perceptron::new(self.params()?)?;
        let report = model.train(&samples, &labels)?;
        self.model = Some(model);
        Ok(self.last_report.insert(report))
    }

    pub fn predict(&self, hours: f64, percentage: f64) -> Result<BinaryLabel, PerceptronError> {
        let model = self.model.as_ref().ok_or(PerceptronError::NotTrained)?;
        model.predict_one(array![hours, percentage].view())
    }

    /// Weights and bias rendered for display, if trained.
    pub fn summary(&self) -> Option<String> {
        let model = self.model.as_ref()?.model()?;
        let weights: Vec<String> = model.weights().iter().map(|w| format!("{:.4}", w)).collect();
        Some(format!("w = [{}], b = {:.4}", weights.join(", "), model.bias()))
    }

    /// Draws the parameter controls. Returns true if a parameter changed.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        ui.heading("Perceptron Parameters");
        changed |= ui
            .add(
                egui::Slider::new(&mut self.learning_rate, 0.0001..=1.0)
                    .logarithmic(true)
                    .text("Learning rate"),
            )
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.iterations, 1..=1000).text("Iterations"))
            .changed();
        changed
    }
}
