use crate::export::{export_summary, EXPORT_FILENAME};
use crate::input::DealForm;
use crate::metrics::evaluate;
use crate::model::DealMetrics;
use crate::summary::{render_lines, summary_rows, verdict_line};
use eframe::egui;
use egui::{
    Color32, Context, FontFamily, FontId, Margin, RichText, Visuals, Stroke, Vec2
};
use egui_extras::{Column, TableBuilder};
use std::path::Path;

pub fn set_custom_style(ctx: &Context) {
    // Slate-and-green "open house" theme
    let mut visuals = Visuals::dark();

    visuals.panel_fill = Color32::from_rgb(17, 20, 24);          // Deep slate panel
    visuals.window_fill = Color32::from_rgb(23, 27, 33);         // Window background
    visuals.extreme_bg_color = Color32::from_rgb(32, 38, 46);    // hover highlight
    visuals.faint_bg_color = Color32::from_rgb(28, 33, 40);      // subtle background

    // Widget colors with green accents
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(36, 42, 50);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(55, 70, 62));

    visuals.widgets.hovered.bg_fill  = Color32::from_rgb(44, 54, 50);
    visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, Color32::from_rgb(90, 180, 120));

    visuals.widgets.active.bg_fill   = Color32::from_rgb(52, 66, 58);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, Color32::from_rgb(120, 230, 150));

    // Selection colors
    visuals.selection.bg_fill = Color32::from_rgb(45, 70, 55);
    visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(130, 230, 160));

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = Margin::same(12);
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    style.spacing.indent = 16.0;

    style.text_styles.insert(
        egui::TextStyle::Body,
        FontId::new(15.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        FontId::new(22.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        FontId::new(15.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        FontId::new(14.0, FontFamily::Monospace),
    );

    ctx.set_style(style);
}

const HEADING_ACCENT: Color32 = Color32::from_rgb(150, 230, 170);
const LABEL_DIM: Color32 = Color32::from_rgb(160, 175, 165);

pub struct FlipDealApp {
    form: DealForm,

    // Last export outcome shown in the top bar
    status: Option<(String, bool)>,
}

impl FlipDealApp {
    pub fn new() -> Self {
        Self {
            form: DealForm::new(),
            status: None,
        }
    }

    fn amount_field(ui: &mut egui::Ui, text: &mut String, hint: &str) {
        ui.add(
            egui::TextEdit::singleline(text)
                .hint_text(hint)
                .desired_width(260.0),
        );
    }

    fn section_heading(ui: &mut egui::Ui, title: &str) {
        ui.add_space(8.0);
        ui.label(RichText::new(title).color(HEADING_ACCENT).strong().size(17.0));
        ui.separator();
    }

    fn value_color(label: &str, m: &DealMetrics) -> Color32 {
        match label {
            "Estimated Profit" => {
                if m.profit > 0.0 {
                    Color32::from_rgb(120, 255, 140)
                } else if m.profit < 0.0 {
                    Color32::from_rgb(255, 110, 110)
                } else {
                    Color32::from_rgb(200, 200, 200)
                }
            }
            "Profit Margin" | "ROI" => {
                let v = if label == "ROI" { m.roi } else { m.profit_margin };
                if !v.is_finite() {
                    Color32::from_rgb(255, 180, 90)
                } else if v >= 20.0 {
                    Color32::from_rgb(120, 255, 140)
                } else if v > 0.0 {
                    Color32::from_rgb(220, 255, 180)
                } else {
                    Color32::from_rgb(255, 110, 110)
                }
            }
            "Financing Cost" => Color32::from_rgb(255, 160, 140),
            "Net Rental Income" => Color32::from_rgb(150, 255, 190),
            "Target Resale Price" => Color32::from_rgb(170, 200, 255),
            _ => Color32::from_rgb(210, 220, 230),
        }
    }

    fn export_pdf(&mut self, metrics: &DealMetrics) {
        let lines = render_lines(metrics);
        match export_summary(&lines, Path::new(EXPORT_FILENAME)) {
            Ok(()) => {
                log::info!("wrote {EXPORT_FILENAME}");
                self.status = Some((format!("Saved {EXPORT_FILENAME}"), false));
            }
            Err(e) => {
                log::error!("PDF export failed: {e}");
                self.status = Some((format!("Export failed: {e}"), true));
            }
        }
    }
}

impl eframe::App for FlipDealApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Fresh snapshot every repaint; metrics are never cached
        let inputs = self.form.inputs();
        let metrics = evaluate(&inputs);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.heading(RichText::new("🛠️ Flip Deal Analyzer")
                    .color(HEADING_ACCENT)
                    .strong()
                    .size(24.0)
                );
            });

            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.add_sized(
                    Vec2::new(130.0, 32.0),
                    egui::Button::new(RichText::new("📄 Export PDF")
                        .color(Color32::from_rgb(140, 240, 170))
                        .strong())
                ).clicked() {
                    self.export_pdf(&metrics);
                }

                if ui.add_sized(
                    Vec2::new(140.0, 32.0),
                    egui::Button::new(RichText::new("📋 Copy Summary"))
                ).clicked() {
                    ui.ctx().copy_text(render_lines(&metrics).join("\n"));
                    self.status = Some(("Summary copied".to_string(), false));
                }

                ui.separator();

                if let Some((message, is_error)) = &self.status {
                    let color = if *is_error {
                        Color32::from_rgb(255, 110, 110)
                    } else {
                        Color32::from_rgb(140, 240, 170)
                    };
                    ui.label(RichText::new(message).color(color));
                }
            });

            ui.add_space(2.0);
        });

        egui::SidePanel::right("results")
            .min_width(320.0)
            .max_width(420.0)
            .show(ctx, |ui| {
                ui.heading(RichText::new("📊 Results").color(HEADING_ACCENT));
                ui.separator();

                let rows = summary_rows(&metrics);

                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::exact(160.0))  // Metric
                    .column(Column::remainder().at_least(120.0).clip(true))  // Value
                    .header(28.0, |mut header| {
                        header.col(|ui| {
                            ui.heading(RichText::new("Metric")
                                .color(LABEL_DIM)
                                .size(16.0));
                        });
                        header.col(|ui| {
                            ui.heading(RichText::new("Value")
                                .color(LABEL_DIM)
                                .size(16.0));
                        });
                    })
                    .body(|body| {
                        body.rows(30.0, rows.len(), |mut row| {
                            let i = row.index();
                            let r = &rows[i];

                            row.col(|ui| {
                                ui.label(RichText::new(r.label).color(LABEL_DIM));
                            });
                            row.col(|ui| {
                                ui.label(RichText::new(&r.value)
                                    .color(Self::value_color(r.label, &metrics))
                                    .strong());
                            });
                        });
                    });

                ui.add_space(10.0);

                let (fill, stroke) = if metrics.is_deal_good {
                    (Color32::from_rgb(22, 42, 30), Color32::from_rgb(90, 200, 130))
                } else {
                    (Color32::from_rgb(45, 24, 24), Color32::from_rgb(210, 90, 90))
                };

                egui::Frame::new()
                    .fill(fill)
                    .stroke(Stroke::new(2.0, stroke))
                    .inner_margin(Margin::same(12))
                    .show(ui, |ui| {
                        ui.label(RichText::new(verdict_line(&metrics))
                            .color(stroke)
                            .strong()
                            .size(16.0));
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                Self::section_heading(ui, "🧾 Input Costs");
                Self::amount_field(ui, &mut self.form.purchase_price, "Purchase Price");
                Self::amount_field(ui, &mut self.form.reno_costs, "Renovation Costs");
                Self::amount_field(ui, &mut self.form.closing_costs, "Closing Costs");
                Self::amount_field(ui, &mut self.form.holding_costs, "Holding Costs");
                Self::amount_field(ui, &mut self.form.selling_costs, "Selling Costs");
                Self::amount_field(ui, &mut self.form.misc_costs, "Miscellaneous Costs");

                Self::section_heading(ui, "📈 Sale & Margin");
                Self::amount_field(ui, &mut self.form.resale_price, "Expected Resale Price");
                Self::amount_field(ui, &mut self.form.desired_profit_margin, "Desired Profit Margin (%)");

                Self::section_heading(ui, "💸 Financing");
                Self::amount_field(ui, &mut self.form.loan_amount, "Loan Amount");
                Self::amount_field(ui, &mut self.form.interest_rate, "Interest Rate (%)");
                Self::amount_field(ui, &mut self.form.loan_term_months, "Loan Term (months)");

                Self::section_heading(ui, "🏡 Rental Hold");
                Self::amount_field(ui, &mut self.form.rental_income, "Monthly Rental Income");
                Self::amount_field(ui, &mut self.form.hold_months, "Hold Period (months)");
            });
        });

        ctx.request_repaint();
    }
}
