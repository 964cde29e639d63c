//! CalcPro application window

use calccore::theme::{menu_bar, CalcColors};
use calccore::widgets::{display_rule, key_button};
use calccore::{ButtonRole, CalcTheme};
use egui::{Context, RichText};

use crate::config::CalcConfig;
use crate::engine::{Action, BinaryOp, Calculator};
use crate::keymap;

const KEYPAD_COLUMNS: usize = 4;
const KEYPAD_ROWS: usize = 5;
const KEY_GAP: f32 = 4.0;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A key on the on-screen keypad.
#[derive(Clone, Copy)]
struct KeyDef {
    label: &'static str,
    role: ButtonRole,
    action: Action,
}

impl KeyDef {
    /// `d` must be an ASCII digit.
    fn digit(d: char) -> Self {
        let index = (d as u8).wrapping_sub(b'0') as usize;
        Self { label: DIGIT_LABELS[index], role: ButtonRole::Digit, action: Action::Digit(d) }
    }

    fn operator(op: BinaryOp) -> Self {
        Self { label: op.symbol(), role: ButtonRole::Operator, action: Action::Operator(op) }
    }

    fn special(label: &'static str, action: Action) -> Self {
        Self { label, role: ButtonRole::Special, action }
    }
}

fn keypad() -> [[KeyDef; KEYPAD_COLUMNS]; KEYPAD_ROWS] {
    [
        [
            KeyDef::special("C", Action::Clear),
            KeyDef::special("±", Action::ToggleSign),
            KeyDef::special("%", Action::Percentage),
            KeyDef::operator(BinaryOp::Divide),
        ],
        [KeyDef::digit('7'), KeyDef::digit('8'), KeyDef::digit('9'), KeyDef::operator(BinaryOp::Multiply)],
        [KeyDef::digit('4'), KeyDef::digit('5'), KeyDef::digit('6'), KeyDef::operator(BinaryOp::Subtract)],
        [KeyDef::digit('1'), KeyDef::digit('2'), KeyDef::digit('3'), KeyDef::operator(BinaryOp::Add)],
        [
            KeyDef { label: "√", role: ButtonRole::Operator, action: Action::SquareRoot },
            KeyDef::digit('0'),
            KeyDef { label: ".", role: ButtonRole::Digit, action: Action::DecimalPoint },
            KeyDef { label: "=", role: ButtonRole::Operator, action: Action::Evaluate },
        ],
    ]
}

pub struct CalcProApp {
    calc: Calculator,
    config: CalcConfig,
    theme: CalcTheme,
    show_about: bool,
}

impl CalcProApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CalcConfig, theme: CalcTheme) -> Self {
        Self {
            calc: Calculator::new(),
            config,
            theme,
            show_about: false,
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let actions = ctx.input(|i| keymap::actions_from_events(&i.events));
        for action in actions {
            self.calc.dispatch(action);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            ui.add_space(20.0);
            // Keep the line height even when nothing has been committed yet.
            let trail = if self.calc.trail().is_empty() { " " } else { self.calc.trail() };
            ui.label(
                RichText::new(trail)
                    .font(self.theme.trail_font())
                    .color(CalcColors::TRAIL_TEXT),
            );
            ui.add_space(5.0);

            // Error messages are long; shrink them so they fit the window.
            let mut font = self.theme.display_font();
            if self.calc.error().is_some() {
                font.size *= 0.6;
            }
            let mut entry = RichText::new(self.calc.entry()).font(font).color(CalcColors::WHITE);
            if self.calc.is_showing_result() {
                entry = entry.strong();
            }
            ui.label(entry);
            ui.add_space(20.0);
        });
        display_rule(ui);
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let gaps = KEY_GAP * (KEYPAD_COLUMNS as f32 - 1.0);
        let btn_w = (ui.available_width() - gaps) / KEYPAD_COLUMNS as f32;
        let btn_h = (ui.available_height() - KEY_GAP * KEYPAD_ROWS as f32) / KEYPAD_ROWS as f32;
        let size = egui::vec2(btn_w, btn_h.max(24.0));
        let font = self.theme.button_font();
        let hover = self.config.hover_effects;

        let mut pressed = None;
        ui.spacing_mut().item_spacing = egui::vec2(KEY_GAP, KEY_GAP);
        for row in keypad() {
            ui.horizontal(|ui| {
                for key in row {
                    if key_button(ui, key.label, key.role, size, font.clone(), hover).clicked() {
                        pressed = Some(key.action);
                    }
                }
            });
        }

        if let Some(action) = pressed {
            self.calc.dispatch(action);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about CalcPro")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("CalcPro");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys:");
                ui.label("  0-9 .  digits");
                ui.label("  + - * /  operators");
                ui.label("  %  percent");
                ui.label("  Enter =  evaluate");
                ui.label("  Esc  clear");
                ui.label("  Backspace  delete");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for CalcProApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // The about window takes no calculator input.
        if !self.show_about {
            self.handle_keys(ctx);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(CalcColors::BACKGROUND)
                    .inner_margin(egui::Margin::same(self.theme.window_padding)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(10.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_covers_every_action() {
        let keys: Vec<KeyDef> = keypad().into_iter().flatten().collect();
        assert_eq!(keys.len(), KEYPAD_COLUMNS * KEYPAD_ROWS);
        for d in '0'..='9' {
            assert!(keys.iter().any(|k| k.action == Action::Digit(d)), "missing digit {d}");
        }
        for action in [
            Action::DecimalPoint,
            Action::Evaluate,
            Action::Clear,
            Action::ToggleSign,
            Action::Percentage,
            Action::SquareRoot,
            Action::Operator(BinaryOp::Add),
            Action::Operator(BinaryOp::Subtract),
            Action::Operator(BinaryOp::Multiply),
            Action::Operator(BinaryOp::Divide),
        ] {
            assert!(keys.iter().any(|k| k.action == action), "missing {action:?}");
        }
    }

    #[test]
    fn test_keypad_labels_match_actions() {
        for key in keypad().into_iter().flatten() {
            if let Action::Digit(d) = key.action {
                assert_eq!(key.label, d.to_string());
                assert_eq!(key.role, ButtonRole::Digit);
            }
        }
    }

    #[test]
    fn test_digit_keys_take_label_from_table() {
        for d in '0'..='9' {
            let key = KeyDef::digit(d);
            assert_eq!(key.label, d.to_string());
            assert_eq!(key.action, Action::Digit(d));
        }
    }
}
