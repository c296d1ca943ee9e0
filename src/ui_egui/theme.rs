//! Theme module for the egui scheduler application
//!
//! Defines the SchedulerTheme structure holding every color the calendar
//! chrome uses, with light and dark presets.

use egui::Color32;

/// A scheduler theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Weekend day background color
    pub weekend_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Class chip background color
    pub class_background: Color32,

    /// Class chip hover color
    pub class_hover: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (instructor, times)
    pub text_secondary: Color32,

    /// Weekday header background color
    pub header_background: Color32,

    /// Weekday header text color
    pub header_text: Color32,
}

impl SchedulerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(249, 250, 251),
            calendar_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            class_background: Color32::from_rgb(219, 234, 254),
            class_hover: Color32::from_rgb(191, 219, 254),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            header_background: Color32::from_rgb(240, 242, 245),
            header_text: Color32::from_rgb(60, 60, 60),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(17, 24, 39),
            calendar_background: Color32::from_rgb(31, 41, 55),
            weekend_background: Color32::from_rgb(28, 36, 50),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(31, 41, 55),
            day_border: Color32::from_rgb(55, 65, 81),
            class_background: Color32::from_rgb(30, 58, 95),
            class_hover: Color32::from_rgb(37, 72, 118),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            header_background: Color32::from_rgb(40, 50, 66),
            header_text: Color32::from_rgb(220, 222, 226),
        }
    }

    /// Resolve a persisted theme name
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn name(&self) -> &'static str {
        if self.is_dark {
            "dark"
        } else {
            "light"
        }
    }

    /// Detect the system preference for the initial theme
    pub fn from_system() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::dark(),
            dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
        }
    }

    /// Apply this theme's base visuals to the egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.calendar_background;
        ctx.set_visuals(visuals);
    }
}
