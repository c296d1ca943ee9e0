// Scheduler application shell
// Owns the view window, the fetched class list, and the dialog state.

use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use chrono::Local;

use crate::models::class::ClassEvent;
use crate::models::schedule::{Direction, ViewMode, ViewWindow};
use crate::models::settings::Settings;
use crate::services::auth::AuthService;
use crate::services::booking::{BookingService, InMemoryBookingBackend};
use crate::services::classes::{ClassSource, HttpClassSource, DEFAULT_ENDPOINT};
use crate::services::schedule;
use crate::services::settings::SettingsService;
use crate::ui_egui::booking_dialog::{
    render_booking_dialog, BookingDialogAction, BookingDialogState,
};
use crate::ui_egui::theme::SchedulerTheme;
use crate::ui_egui::views::CalendarGrid;

const ENDPOINT_ENV: &str = "CLASS_SCHEDULER_API";

pub struct SchedulerApp {
    settings_service: Option<SettingsService>,
    settings: Settings,
    /// Currently applied theme colors
    active_theme: SchedulerTheme,
    /// Reference date and month/week mode driving the grid
    window: ViewWindow,
    /// Latest successfully fetched class list; empty until the fetch lands
    classes: Vec<ClassEvent>,
    /// Single-shot startup fetch result, delivered off the UI thread
    fetch_rx: mpsc::Receiver<Result<Vec<ClassEvent>>>,
    booking: BookingService<InMemoryBookingBackend>,
    booking_dialog: BookingDialogState,
    /// Outcome of the last booking attempt, shown in the status bar
    status_line: Option<String>,
    /// Admin chrome flag derived from the stored credential at startup
    is_admin: bool,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_fetched_classes();
        self.render(ctx);
    }
}

impl SchedulerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = match SettingsService::new() {
            Ok(service) => Some(service),
            Err(err) => {
                log::warn!("Settings unavailable, preferences will not persist: {err:#}");
                None
            }
        };

        let (settings, first_run) = match &settings_service {
            Some(service) => {
                let first_run = !service.is_initialized();
                match service.load() {
                    Ok(settings) => (settings, first_run),
                    Err(err) => {
                        log::warn!("Failed to load settings, using defaults: {err:#}");
                        (Settings::default(), true)
                    }
                }
            }
            None => (Settings::default(), true),
        };

        // First run follows the system preference; afterwards the persisted
        // choice wins.
        let active_theme = if first_run {
            SchedulerTheme::from_system()
        } else {
            SchedulerTheme::from_name(&settings.theme)
        };
        active_theme.apply(&cc.egui_ctx);

        let is_admin = match SettingsService::config_dir() {
            Ok(dir) => AuthService::new(&dir).is_admin(),
            Err(_) => false,
        };

        let window = ViewWindow::new(
            Local::now().date_naive(),
            ViewMode::parse(&settings.default_view),
        );

        let fetch_rx = spawn_class_fetch(cc.egui_ctx.clone());

        Self {
            settings_service,
            settings,
            active_theme,
            window,
            classes: Vec::new(),
            fetch_rx,
            booking: BookingService::new(InMemoryBookingBackend::new()),
            booking_dialog: BookingDialogState::new(),
            status_line: None,
            is_admin,
        }
    }

    /// Drain the startup fetch channel. A failed fetch is logged and the
    /// prior (possibly empty) class list stays in place.
    fn receive_fetched_classes(&mut self) {
        while let Ok(result) = self.fetch_rx.try_recv() {
            match result {
                Ok(classes) => {
                    log::info!("Loaded {} classes", classes.len());
                    self.classes = classes;
                }
                Err(err) => {
                    log::error!("Error loading classes: {err:#}");
                }
            }
        }
    }

    fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("scheduler_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Class Schedule");
                if self.is_admin {
                    ui.label(
                        egui::RichText::new("Admin")
                            .small()
                            .color(self.active_theme.today_border),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = if self.active_theme.is_dark { "☀" } else { "🌙" };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }

                    let toggle_label = format!("{} View", self.window.mode.toggled().label());
                    if ui.button(toggle_label).clicked() {
                        self.toggle_view();
                    }
                });
            });
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("scheduler_status").show(ctx, |ui| {
            ui.add_space(4.0);
            match &self.status_line {
                Some(message) => {
                    ui.label(message);
                }
                None => {
                    ui.label(
                        egui::RichText::new("Select a class to book a spot")
                            .color(self.active_theme.text_secondary),
                    );
                }
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_navigation(ui);
            ui.add_space(8.0);
            self.render_grid(ui);
        });

        self.handle_booking_dialog(ctx);
    }

    fn render_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.window = schedule::advance(self.window, Direction::Backward);
            }

            let heading = match self.window.mode {
                ViewMode::Month => self.window.reference_date.format("%B %Y").to_string(),
                ViewMode::Week => self.window.reference_date.format("%B %-d, %Y").to_string(),
            };

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶").clicked() {
                    self.window = schedule::advance(self.window, Direction::Forward);
                }

                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(egui::RichText::new(heading).size(16.0).strong());
                    },
                );
            });
        });
    }

    fn render_grid(&mut self, ui: &mut egui::Ui) {
        match schedule::build_window(self.window, &self.classes) {
            Ok(cells) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if let Some(class) = CalendarGrid::show(ui, &cells, &self.active_theme) {
                        self.booking_dialog.open(class);
                    }
                });
            }
            Err(err) => {
                log::error!("Cannot build schedule grid: {err}");
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("Schedule data is invalid: {err}"),
                );
            }
        }
    }

    fn handle_booking_dialog(&mut self, ctx: &egui::Context) {
        match render_booking_dialog(ctx, &mut self.booking_dialog) {
            BookingDialogAction::Submit => {
                let Some(class) = self.booking_dialog.selected_class.clone() else {
                    return;
                };
                match self
                    .booking
                    .book(&class, &self.booking_dialog.name, &self.booking_dialog.email)
                {
                    Ok(confirmation) => {
                        self.status_line = Some(confirmation.message());
                        self.booking_dialog.close();
                    }
                    Err(err) => {
                        self.booking_dialog.error = Some(err.to_string());
                    }
                }
            }
            BookingDialogAction::Cancel => self.booking_dialog.close(),
            BookingDialogAction::None => {}
        }
    }

    fn toggle_view(&mut self) {
        self.window.toggle_mode();
        self.settings.default_view = self.window.mode.label().to_string();
        self.persist_settings();
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.active_theme = if self.active_theme.is_dark {
            SchedulerTheme::light()
        } else {
            SchedulerTheme::dark()
        };
        self.active_theme.apply(ctx);

        self.settings.theme = self.active_theme.name().to_string();
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Some(service) = &self.settings_service {
            if let Err(err) = service.save(&self.settings) {
                log::warn!("Failed to persist settings: {err:#}");
            }
        }
    }
}

/// Kick off the single-shot class fetch on a background thread and hand the
/// result back over a channel; repaint once it lands.
fn spawn_class_fetch(egui_ctx: egui::Context) -> mpsc::Receiver<Result<Vec<ClassEvent>>> {
    let endpoint =
        std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let result = HttpClassSource::new(endpoint).and_then(|source| source.fetch_classes());
        let _ = tx.send(result);
        egui_ctx.request_repaint();
    });

    rx
}
