use eframe::egui;

pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x19, 0x76, 0xd2);
pub const PRIMARY_DARK: egui::Color32 = egui::Color32::from_rgb(0x11, 0x52, 0x93);
pub const SECONDARY: egui::Color32 = egui::Color32::from_rgb(0xf5, 0x00, 0x57);
pub const DISABLED: egui::Color32 = egui::Color32::GRAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Icon for the header toggle: it shows where a click takes you.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "🌙",
        }
    }

    pub fn error_color(self) -> egui::Color32 {
        match self {
            ThemeMode::Dark => egui::Color32::from_rgb(0xf4, 0x43, 0x36),
            ThemeMode::Light => egui::Color32::from_rgb(0xd3, 0x2f, 0x2f),
        }
    }

    pub fn success_color(self) -> egui::Color32 {
        match self {
            ThemeMode::Dark => egui::Color32::from_rgb(0x66, 0xbb, 0x6a),
            ThemeMode::Light => egui::Color32::from_rgb(0x2e, 0x7d, 0x32),
        }
    }
}

pub fn visuals_for_mode(mode: ThemeMode) -> egui::Visuals {
    let mut visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };

    visuals.hyperlink_color = PRIMARY;
    visuals.selection.bg_fill = PRIMARY.gamma_multiply(0.6);
    visuals.widgets.active.bg_fill = PRIMARY_DARK;
    visuals.widgets.hovered.bg_fill = PRIMARY.gamma_multiply(0.85);
    visuals.error_fg_color = mode.error_color();
    visuals.text_cursor.stroke = egui::Stroke::new(2.0, SECONDARY);
    visuals.window_corner_radius = egui::CornerRadius::same(8);
    visuals.menu_corner_radius = egui::CornerRadius::same(6);
    visuals
}
