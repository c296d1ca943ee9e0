// Calendar grid rendering
// Draws the weekday header strip and the 7-column cell grid shared by the
// month and week views. Cells come pre-built from the schedule service.

use chrono::{Datelike, Local};
use egui::{Margin, Rounding, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use crate::models::class::ClassEvent;
use crate::models::schedule::DaySchedule;
use crate::ui_egui::theme::SchedulerTheme;
use crate::utils::date::is_weekend;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_HEIGHT: f32 = 110.0;
const HEADER_HEIGHT: f32 = 30.0;

pub struct CalendarGrid;

impl CalendarGrid {
    /// Render the grid; returns the class the user clicked, if any.
    pub fn show(
        ui: &mut egui::Ui,
        cells: &[DaySchedule],
        theme: &SchedulerTheme,
    ) -> Option<ClassEvent> {
        let today = Local::now().date_naive();
        let palette = CalendarCellPalette::from_theme(theme);

        let spacing = 2.0;
        let total_spacing = spacing * 6.0; // 6 gaps between 7 columns
        let col_width = (ui.available_width() - total_spacing) / 7.0;

        let mut selected = None;

        egui::Grid::new("weekday_header_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for day in DAY_NAMES {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(palette.header_bg)
                                .rounding(Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, palette.border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |cell_ui| {
                                    cell_ui.centered_and_justified(|label_ui| {
                                        label_ui.label(
                                            egui::RichText::new(day)
                                                .size(14.0)
                                                .color(palette.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });

        ui.add_space(5.0);
        ui.separator();
        ui.add_space(5.0);

        egui::Grid::new("calendar_grid")
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for (index, cell) in cells.iter().enumerate() {
                    if let Some(class) =
                        Self::render_day_cell(ui, cell, cell.date == today, palette, col_width)
                    {
                        selected = Some(class);
                    }

                    if index % 7 == 6 {
                        ui.end_row();
                    }
                }
            });

        selected
    }

    fn render_day_cell(
        ui: &mut egui::Ui,
        cell: &DaySchedule,
        is_today: bool,
        palette: CalendarCellPalette,
        col_width: f32,
    ) -> Option<ClassEvent> {
        let bg_color = if is_today {
            palette.today_bg
        } else if is_weekend(cell.date) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        let border = if is_today {
            Stroke::new(2.0, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };

        let mut selected = None;

        ui.allocate_ui_with_layout(
            Vec2::new(col_width, CELL_HEIGHT),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                egui::Frame::none()
                    .fill(bg_color)
                    .rounding(Rounding::same(4.0))
                    .stroke(border)
                    .inner_margin(Margin::same(4.0))
                    .show(ui, |ui| {
                        ui.set_min_size(Vec2::new(col_width - 8.0, CELL_HEIGHT - 8.0));

                        ui.label(
                            egui::RichText::new(format!("{}", cell.date.day()))
                                .size(13.0)
                                .color(palette.text)
                                .strong(),
                        );

                        for class in &cell.classes {
                            if Self::render_class_chip(ui, class, palette, col_width - 8.0) {
                                selected = Some(class.clone());
                            }
                        }
                    });
            },
        );

        selected
    }

    /// One clickable line per class: title plus its time range
    fn render_class_chip(
        ui: &mut egui::Ui,
        class: &ClassEvent,
        palette: CalendarCellPalette,
        width: f32,
    ) -> bool {
        let text = egui::RichText::new(format!("{}\n{}", class.title, class.time_range()))
            .size(10.0)
            .color(palette.secondary_text);

        let button = egui::Button::new(text)
            .fill(palette.class_bg)
            .stroke(Stroke::NONE)
            .rounding(Rounding::same(3.0));

        let response = ui.add_sized(Vec2::new(width, 26.0), button);
        if response.hovered() {
            let rect = response.rect;
            ui.painter()
                .rect_stroke(rect, 3.0, Stroke::new(1.0, palette.hover_border));
            ui.painter().rect_filled(
                rect,
                3.0,
                palette.class_hover_bg.gamma_multiply(0.25),
            );
        }

        response
            .on_hover_text(format!(
                "{} with {}\n{} spots left",
                class.title,
                class.instructor,
                class.spots_remaining()
            ))
            .clicked()
    }
}
