use crate::app::PerceptronApp;

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Stroke, Ui};
use percept::synthetic::{MAX_HOURS, MAX_PERCENTAGE};

const MAP_RESOLUTION: usize = 160;

/// Draws the left-side panel with the forms and the training controls.
pub fn draw_side_panel(app: &mut PerceptronApp, ctx: &egui::Context) {
    egui::SidePanel::left("controls_panel").show(ctx, |ui| {
        ui.heading(app.profile.title());
        ui.separator();

        draw_record_form(app, ui);
        ui.separator();

        // Parameter edits only take effect on the next training.
        if app.classifier.ui(ui) {
            log::debug!("Parameters changed: {:?}", app.classifier.params());
        }
        if ui.button("Train").clicked() {
            let result = app.train();
            app.report(result);
        }
        if let Some(report) = app.classifier.last_report() {
            ui.label(format!(
                "Last training: {} epochs, {} mistakes on the last one",
                report.epochs(),
                report.final_errors()
            ));
        }
        if let Some(summary) = app.classifier.summary() {
            ui.monospace(summary);
        }
        ui.separator();

        draw_predict_form(app, ui);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Load demo data").clicked() {
                let result = app.load_demo_data();
                app.report(result);
            }
            if ui.button("Clear all records").clicked() {
                let result = app.clear_records();
                app.report(result);
            }
        });
    });
}

fn draw_record_form(app: &mut PerceptronApp, ui: &mut Ui) {
    ui.heading(format!("{} records", app.profile.entity()));
    egui::Grid::new("record_form").num_columns(2).show(ui, |ui| {
        ui.label("Index (update / delete):");
        ui.text_edit_singleline(&mut app.record_form.index);
        ui.end_row();

        ui.label(format!("{} (0-{}):", app.profile.hours_caption(), MAX_HOURS));
        ui.text_edit_singleline(&mut app.record_form.hours);
        ui.end_row();

        ui.label(format!("{} (%):", app.profile.percentage_caption()));
        ui.text_edit_singleline(&mut app.record_form.percentage);
        ui.end_row();

        ui.label("Label (1 = positive, 0 = negative):");
        ui.text_edit_singleline(&mut app.record_form.label);
        ui.end_row();
    });
    ui.small("Leave a field blank to keep its value when updating.");

    ui.horizontal(|ui| {
        if ui.button("Add").clicked() {
            let result = app.add_record();
            app.report(result);
        }
        if ui.button("Update").clicked() {
            let result = app.update_record();
            app.report(result);
        }
        if ui.button("Delete").clicked() {
            let result = app.delete_record();
            app.report(result);
        }
    });
}

fn draw_predict_form(app: &mut PerceptronApp, ui: &mut Ui) {
    ui.heading("Prediction");
    egui::Grid::new("predict_form").num_columns(2).show(ui, |ui| {
        ui.label(format!("{}:", app.profile.hours_caption()));
        ui.text_edit_singleline(&mut app.predict_form.hours);
        ui.end_row();

        ui.label(format!("{} (%):", app.profile.percentage_caption()));
        ui.text_edit_singleline(&mut app.predict_form.percentage);
        ui.end_row();
    });
    if ui.button("Predict").clicked() {
        let result = app.predict();
        app.report(result);
    }
    ui.label("Or click on the plot.");
    if let Some((text, label)) = &app.last_prediction {
        ui.colored_label(PerceptronApp::outcome_color(*label), text);
    }
}

/// Draws the right-side panel listing the records and the message log.
pub fn draw_data_panel(app: &mut PerceptronApp, ctx: &egui::Context) {
    egui::SidePanel::right("data_panel").show(ctx, |ui| {
        ui.heading("Records");
        egui::ScrollArea::vertical()
            .id_salt("records_scroll")
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                egui::Grid::new("records_grid").striped(true).show(ui, |ui| {
                    ui.strong("#");
                    ui.strong(app.profile.hours_caption());
                    ui.strong(app.profile.percentage_caption());
                    ui.strong("Outcome");
                    ui.end_row();

                    for (i, record) in app.store.records().iter().enumerate() {
                        ui.label(i.to_string());
                        ui.label(format!("{}", record.hours));
                        ui.label(format!("{}%", record.percentage));
                        ui.colored_label(
                            PerceptronApp::outcome_color(record.label),
                            app.profile.outcome(record.label),
                        );
                        ui.end_row();
                    }
                });
            });

        ui.separator();
        ui.heading("Messages");
        egui::ScrollArea::vertical()
            .id_salt("messages_scroll")
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in &app.messages {
                    ui.label(message);
                }
            });
    });
}

/// Draws the central panel: records in feature space over the decision regions.
pub fn draw_central_panel(app: &mut PerceptronApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.classification_map.is_none() && app.classifier.is_trained() {
            app.classification_map = Some(generate_classification_map(app, ctx));
        }

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let data_rect = Rect::from_min_max(
            Pos2::new(0.0, 0.0),
            Pos2::new(MAX_HOURS as f32, MAX_PERCENTAGE as f32),
        );
        let to_screen = egui::emath::RectTransform::from_to(data_rect, response.rect);
        let to_data = to_screen.inverse();

        // --- Drawing Layers ---
        if let Some(texture) = &app.classification_map {
            painter.image(
                texture.id(),
                response.rect,
                Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        } else {
            painter.rect_filled(response.rect, 0.0, Color32::from_gray(235));
        }

        for record in app.store.records() {
            let center = to_screen * to_plot(record.hours as f32, record.percentage as f32);
            painter.circle_filled(center, 5.0, PerceptronApp::outcome_color(record.label));
            painter.circle_stroke(center, 5.0, Stroke::new(1.0, Color32::BLACK));
        }

        painter.text(
            response.rect.left_bottom() + egui::vec2(4.0, -4.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{} (0-{})", app.profile.hours_caption(), MAX_HOURS),
            egui::FontId::default(),
            Color32::BLACK,
        );
        painter.text(
            response.rect.left_top() + egui::vec2(4.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!("{} (0-{}%)", app.profile.percentage_caption(), MAX_PERCENTAGE),
            egui::FontId::default(),
            Color32::BLACK,
        );

        // --- Interaction Handling ---
        if let Some(hover_pos) = response.hover_pos() {
            if response.clicked() {
                let plot_pos = to_data * hover_pos;
                handle_plot_click(app, from_plot(plot_pos));
            }
        }
    });
}

/// Plot coordinates grow downwards, so the percentage axis is flipped.
fn to_plot(hours: f32, percentage: f32) -> Pos2 {
    Pos2::new(hours, MAX_PERCENTAGE as f32 - percentage)
}

fn from_plot(pos: Pos2) -> (f64, f64) {
    let hours = (pos.x as f64).clamp(0.0, MAX_HOURS);
    let percentage = (MAX_PERCENTAGE - pos.y as f64).clamp(0.0, MAX_PERCENTAGE);
    (hours.round(), percentage.round())
}

fn handle_plot_click(app: &mut PerceptronApp, (hours, percentage): (f64, f64)) {
    app.predict_form.hours = hours.to_string();
    app.predict_form.percentage = percentage.to_string();
    let result = app.predict();
    app.report(result);
}

fn generate_classification_map(app: &PerceptronApp, ctx: &egui::Context) -> egui::TextureHandle {
    let mut pixels = Vec::with_capacity(MAP_RESOLUTION * MAP_RESOLUTION);
    let last = (MAP_RESOLUTION - 1) as f64;

    for y in 0..MAP_RESOLUTION {
        for x in 0..MAP_RESOLUTION {
            let hours = x as f64 / last * MAX_HOURS;
            let percentage = MAX_PERCENTAGE - y as f64 / last * MAX_PERCENTAGE;
            let color = match app.classifier.predict(hours, percentage) {
                Ok(label) => PerceptronApp::outcome_color(label).linear_multiply(0.3),
                Err(_) => Color32::from_gray(80),
            };
            pixels.push(color);
        }
    }

    let image = egui::ColorImage {
        size: [MAP_RESOLUTION, MAP_RESOLUTION],
        pixels,
    };
    ctx.load_texture("decision-map", image, egui::TextureOptions::NEAREST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_mapping_flips_percentage() {
        let p = to_plot(10.0, 80.0);
        assert_eq!(p, Pos2::new(10.0, 20.0));
        assert_eq!(from_plot(p), (10.0, 80.0));
    }

    #[test]
    fn test_from_plot_clamps() {
        assert_eq!(from_plot(Pos2::new(-5.0, -5.0)), (0.0, 100.0));
        assert_eq!(from_plot(Pos2::new(500.0, 150.0)), (168.0, 0.0));
    }
}
