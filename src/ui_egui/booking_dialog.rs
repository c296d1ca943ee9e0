//! Booking dialog: name/email form for the selected class

use egui::{Context, RichText, Window};

use crate::models::class::ClassEvent;

/// State for the booking form dialog
#[derive(Default)]
pub struct BookingDialogState {
    /// Class the user picked in the grid; `Some` opens the dialog
    pub selected_class: Option<ClassEvent>,
    pub name: String,
    pub email: String,
    /// Validation feedback from the last failed submit
    pub error: Option<String>,
}

impl BookingDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, class: ClassEvent) {
        self.selected_class = Some(class);
        self.error = None;
    }

    pub fn close(&mut self) {
        self.selected_class = None;
        self.name.clear();
        self.email.clear();
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected_class.is_some()
    }
}

/// Result of rendering the booking dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingDialogAction {
    None,
    /// User pressed Book with the current form contents
    Submit,
    Cancel,
}

/// Render the booking dialog for the selected class, if any
pub fn render_booking_dialog(ctx: &Context, state: &mut BookingDialogState) -> BookingDialogAction {
    let Some(class) = state.selected_class.clone() else {
        return BookingDialogAction::None;
    };

    let mut action = BookingDialogAction::None;
    let mut open = true;

    Window::new(format!("Book {}", class.title))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!(
                    "{} with {}, {}",
                    class.title,
                    class.instructor,
                    class.time_range()
                ))
                .weak(),
            );
            ui.add_space(8.0);

            ui.label("Name");
            ui.text_edit_singleline(&mut state.name);
            ui.add_space(4.0);

            ui.label("Email");
            ui.text_edit_singleline(&mut state.email);
            ui.add_space(8.0);

            if let Some(error) = &state.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
                ui.add_space(4.0);
            }

            ui.horizontal(|ui| {
                if ui.button("Book Class").clicked() {
                    action = BookingDialogAction::Submit;
                }
                if ui.button("Cancel").clicked() {
                    action = BookingDialogAction::Cancel;
                }
            });
        });

    if !open {
        action = BookingDialogAction::Cancel;
    }

    action
}
