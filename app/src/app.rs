use crate::classifier::PerceptronAdapter;
use crate::config::AppConfig;
use crate::forms::{
    parse_f64, parse_index, parse_label, parse_optional_f64, parse_optional_label, PredictForm,
    RecordForm,
};
use crate::profile::Profile;
use crate::records::{validate_sample, RecordStore};
use crate::ui;

use eframe::egui::{self, Color32};
use eframe::{App, Frame};
use percept::synthetic::linearly_separable;
use percept::BinaryLabel;
use std::error::Error;

pub type ActionResult = Result<String, Box<dyn Error + Send + Sync>>;

/// Seed of the "demo data" action, so every click gives the same records.
const DEMO_SEED: u64 = 42;
const DEMO_PER_CLASS: usize = 10;

/// The main application struct.
/// It holds the high-level state and delegates drawing to the `ui` module.
pub struct PerceptronApp {
    // --- Core State ---
    pub profile: Profile,
    pub store: RecordStore,
    pub classifier: PerceptronAdapter,

    // --- UI State ---
    pub record_form: RecordForm,
    pub predict_form: PredictForm,
    /// Text of the last prediction together with its label.
    pub last_prediction: Option<(String, BinaryLabel)>,
    /// Everything the app has reported, newest last.
    pub messages: Vec<String>,
    /// The decision regions of the trained model. Regenerated only after training.
    pub classification_map: Option<egui::TextureHandle>,
}

impl PerceptronApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            profile: config.profile,
            store: RecordStore::new(),
            classifier: PerceptronAdapter::new(config.params),
            record_form: RecordForm::default(),
            predict_form: PredictForm::default(),
            last_prediction: None,
            messages: Vec::new(),
            classification_map: None,
        }
    }

    /// Records the outcome of an action in the message log.
    pub fn report(&mut self, result: ActionResult) {
        match result {
            Ok(message) => {
                log::info!("{}", message);
                self.messages.push(message);
            }
            Err(e) => {
                log::warn!("{}", e);
                self.messages.push(format!("Error: {}", e));
            }
        }
    }

    pub fn add_record(&mut self) -> ActionResult {
        let hours = parse_f64(self.profile.hours_caption(), &self.record_form.hours)?;
        let percentage = parse_f64(self.profile.percentage_caption(), &self.record_form.percentage)?;
        let label = parse_label(&self.record_form.label)?;

        let index = self.store.insert(hours, percentage, label)?;
        self.record_form.clear();
        Ok(format!(
            "{} {} added: {}",
            self.profile.entity(),
            index,
            self.profile.describe(&self.store.records()[index])
        ))
    }

    /// Blank fields keep their current value.
    pub fn update_record(&mut self) -> ActionResult {
        let index = parse_index(&self.record_form.index)?;
        let hours = parse_optional_f64(self.profile.hours_caption(), &self.record_form.hours)?;
        let percentage = parse_optional_f64(
            self.profile.percentage_caption(),
            &self.record_form.percentage,
        )?;
        let label = parse_optional_label(&self.record_form.label)?;

        let record = self.store.update(index, hours, percentage, label)?;
        self.record_form.clear();
        Ok(format!(
            "{} {} updated: {}",
            self.profile.entity(),
            index,
            self.profile.describe(&record)
        ))
    }

    pub fn delete_record(&mut self) -> ActionResult {
        let index = parse_index(&self.record_form.index)?;
        let record = self.store.delete(index)?;
        self.record_form.clear();
        Ok(format!(
            "{} {} deleted: {}",
            self.profile.entity(),
            index,
            self.profile.describe(&record)
        ))
    }

    pub fn train(&mut self) -> ActionResult {
        let report = self.classifier.train(&self.store)?;
        let message = format!(
            "Perceptron trained on {} records: {} epochs, {} mistakes on the last one",
            self.store.len(),
            report.epochs(),
            report.final_errors()
        );
        self.classification_map = None;
        Ok(message)
    }

    pub fn predict(&mut self) -> ActionResult {
        let hours = parse_f64(self.profile.hours_caption(), &self.predict_form.hours)?;
        let percentage = parse_f64(self.profile.percentage_caption(), &self.predict_form.percentage)?;
        validate_sample(hours, percentage)?;

        let label = self.classifier.predict(hours, percentage)?;
        let text = format!(
            "Prediction: {}h, {}% -> {}",
            hours,
            percentage,
            self.profile.outcome(label)
        );
        self.last_prediction = Some((text.clone(), label));
        self.predict_form = PredictForm::default();
        Ok(text)
    }

    pub fn load_demo_data(&mut self) -> ActionResult {
        let data = linearly_separable(DEMO_PER_CLASS, DEMO_SEED);
        let loaded = self.store.load(&data);
        Ok(format!("Loaded {} demo records", loaded))
    }

    pub fn clear_records(&mut self) -> ActionResult {
        self.store.clear();
        Ok("All records deleted".to_string())
    }

    /// Colour used for a label everywhere in the app.
    pub fn outcome_color(label: BinaryLabel) -> Color32 {
        match label {
            BinaryLabel::Positive => ecolor::hex_color!("#4caf50"),
            BinaryLabel::Negative => ecolor::hex_color!("#f44336"),
        }
    }
}

impl App for PerceptronApp {
    /// The main update loop, called by eframe on every frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ui::draw_side_panel(self, ctx);
        ui::draw_data_panel(self, ctx);
        ui::draw_central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percept::PerceptronParams;

    fn app() -> PerceptronApp {
        PerceptronApp::new(AppConfig {
            profile: Profile::Student,
            params: PerceptronParams::new(0.1, 10).unwrap(),
        })
    }

    fn fill(app: &mut PerceptronApp, index: &str, hours: &str, pct: &str, label: &str) {
        app.record_form = RecordForm {
            index: index.into(),
            hours: hours.into(),
            percentage: pct.into(),
            label: label.into(),
        };
    }

    #[test]
    fn test_add_update_delete() {
        let mut app = app();
        fill(&mut app, "", "2", "20", "0");
        assert_eq!(app.add_record().unwrap(), "Student 0 added: 2h, 20%, Fail");
        assert!(app.record_form.hours.is_empty());

        fill(&mut app, "0", "", "30", "1");
        assert_eq!(app.update_record().unwrap(), "Student 0 updated: 2h, 30%, Pass");

        fill(&mut app, "0", "", "", "");
        assert_eq!(app.delete_record().unwrap(), "Student 0 deleted: 2h, 30%, Pass");
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_invalid_form_keeps_input() {
        let mut app = app();
        fill(&mut app, "", "200", "20", "0");
        assert!(app.add_record().is_err());
        assert_eq!(app.record_form.hours, "200");

        fill(&mut app, "", "20", "20", "3");
        assert!(app.add_record().is_err());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_train_then_predict() {
        let mut app = app();
        fill(&mut app, "", "2", "20", "0");
        app.add_record().unwrap();
        fill(&mut app, "", "8", "90", "1");
        app.add_record().unwrap();

        let message = app.train().unwrap();
        assert!(message.contains("10 epochs"));

        app.predict_form = PredictForm {
            hours: "9".into(),
            percentage: "95".into(),
        };
        assert_eq!(app.predict().unwrap(), "Prediction: 9h, 95% -> Pass");
        assert_eq!(
            app.last_prediction.as_ref().map(|(_, l)| *l),
            Some(BinaryLabel::Positive)
        );
    }

    #[test]
    fn test_predict_requires_training_and_range() {
        let mut app = app();
        app.predict_form = PredictForm {
            hours: "10".into(),
            percentage: "50".into(),
        };
        assert!(app.predict().is_err());

        app.load_demo_data().unwrap();
        app.train().unwrap();
        app.predict_form = PredictForm {
            hours: "10".into(),
            percentage: "150".into(),
        };
        assert!(app.predict().is_err());
    }

    #[test]
    fn test_train_without_records_is_reported() {
        let mut app = app();
        let result = app.train();
        app.report(result);
        assert_eq!(app.messages, vec!["Error: No samples to train on".to_string()]);
    }

    #[test]
    fn test_demo_data_and_clear() {
        let mut app = app();
        assert_eq!(app.load_demo_data().unwrap(), "Loaded 20 demo records");
        assert_eq!(app.store.len(), 20);
        app.clear_records().unwrap();
        assert!(app.store.is_empty());
    }
}
