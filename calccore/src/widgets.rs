//! Calculator widgets — flat coloured keys and the display rule

use egui::{Response, Ui, Vec2};
use crate::theme::{ButtonRole, CalcColors};

/// A flat, borderless calculator key.
///
/// Fill comes from `role`; with `hover_effects` on, the lighter hover shade
/// is used while the pointer is over the key.
pub fn key_button(
    ui: &mut Ui,
    label: &str,
    role: ButtonRole,
    size: Vec2,
    font: egui::FontId,
    hover_effects: bool,
) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let fill = if hover_effects && response.hovered() {
            role.hover_fill()
        } else {
            role.fill()
        };
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            font,
            role.text_color(),
        );
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// 1px horizontal line across the available width, under the display.
pub fn display_rule(ui: &mut Ui) {
    let size = egui::vec2(ui.available_width(), 1.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, CalcColors::SEPARATOR);
}
