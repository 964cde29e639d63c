//! CalcPro theme — dark panel, orange operators
//!
//! Three button roles, each with its own fill and a lighter hover shade.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Fixed palette for the calculator window.
pub struct CalcColors;

impl CalcColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(0x1E, 0x1E, 0x1E);
    pub const SEPARATOR: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
    pub const TRAIL_TEXT: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);

    pub const DIGIT: Color32 = Color32::from_rgb(0x40, 0x40, 0x40);
    pub const DIGIT_HOVER: Color32 = Color32::from_rgb(0x50, 0x50, 0x50);
    pub const OPERATOR: Color32 = Color32::from_rgb(0xFF, 0x95, 0x00);
    pub const OPERATOR_HOVER: Color32 = Color32::from_rgb(0xFF, 0xB1, 0x43);
    pub const SPECIAL: Color32 = Color32::from_rgb(0xA6, 0xA6, 0xA6);
    pub const SPECIAL_HOVER: Color32 = Color32::from_rgb(0xB8, 0xB8, 0xB8);
}

/// What kind of key a button is; decides its colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Digits and the decimal point.
    Digit,
    /// Binary operators, equals and square root.
    Operator,
    /// Clear, sign toggle and percent.
    Special,
}

impl ButtonRole {
    pub fn fill(self) -> Color32 {
        match self {
            Self::Digit => CalcColors::DIGIT,
            Self::Operator => CalcColors::OPERATOR,
            Self::Special => CalcColors::SPECIAL,
        }
    }

    /// Fill used while the pointer is over the button.
    pub fn hover_fill(self) -> Color32 {
        match self {
            Self::Digit => CalcColors::DIGIT_HOVER,
            Self::Operator => CalcColors::OPERATOR_HOVER,
            Self::Special => CalcColors::SPECIAL_HOVER,
        }
    }

    pub fn text_color(self) -> Color32 {
        match self {
            Self::Special => CalcColors::BLACK,
            Self::Digit | Self::Operator => CalcColors::WHITE,
        }
    }
}

/// Theme configuration for the calculator window
#[derive(Debug, Clone)]
pub struct CalcTheme {
    pub font_size_display: f32,
    pub font_size_trail: f32,
    pub font_size_button: f32,
    pub font_size_body: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_display: 32.0,
            font_size_trail: 12.0,
            font_size_button: 16.0,
            font_size_body: 14.0,
            window_padding: 15.0,
            item_spacing: 4.0,
        }
    }
}

impl CalcTheme {
    /// Font for the large result line.
    pub fn display_font(&self) -> FontId {
        FontId::proportional(self.font_size_display)
    }

    /// Font for the expression trail above the result.
    pub fn trail_font(&self) -> FontId {
        FontId::proportional(self.font_size_trail)
    }

    pub fn button_font(&self) -> FontId {
        FontId::proportional(self.font_size_button)
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_trail, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_button + 4.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();

        visuals.window_fill = CalcColors::BACKGROUND;
        visuals.panel_fill = CalcColors::BACKGROUND;
        visuals.faint_bg_color = CalcColors::BACKGROUND;
        visuals.extreme_bg_color = CalcColors::BACKGROUND;
        visuals.override_text_color = Some(CalcColors::WHITE);

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::SEPARATOR);

        let flat = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::NONE;
            ws.fg_stroke = Stroke::new(1.0, CalcColors::WHITE);
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive, CalcColors::BACKGROUND);
        flat(&mut visuals.widgets.inactive, CalcColors::DIGIT);
        flat(&mut visuals.widgets.hovered, CalcColors::DIGIT_HOVER);
        flat(&mut visuals.widgets.active, CalcColors::DIGIT_HOVER);
        flat(&mut visuals.widgets.open, CalcColors::DIGIT);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(CalcColors::BACKGROUND)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}
