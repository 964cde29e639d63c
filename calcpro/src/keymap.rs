//! Keyboard bindings
//!
//! Typed characters come from egui text events, so `*`, `+` and `%` work
//! regardless of which physical keys produce them. Enter, Escape and
//! Backspace are read as key events.

use egui::{Event, Key};

use crate::engine::{Action, BinaryOp};

/// Action for a typed character, if it is bound.
pub fn action_for_char(c: char) -> Option<Action> {
    match c {
        '0'..='9' => Some(Action::Digit(c)),
        '.' => Some(Action::DecimalPoint),
        '+' => Some(Action::Operator(BinaryOp::Add)),
        '-' => Some(Action::Operator(BinaryOp::Subtract)),
        '*' => Some(Action::Operator(BinaryOp::Multiply)),
        '/' => Some(Action::Operator(BinaryOp::Divide)),
        '%' => Some(Action::Percentage),
        '=' => Some(Action::Evaluate),
        _ => None,
    }
}

/// Action for a non-text key.
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Enter => Some(Action::Evaluate),
        Key::Escape => Some(Action::Clear),
        Key::Backspace => Some(Action::Backspace),
        _ => None,
    }
}

/// Extra characters accepted by `--keys` scripts, where there are no
/// special keys or buttons.
pub fn script_action(c: char) -> Option<Action> {
    action_for_char(c).or(match c {
        '\n' => Some(Action::Evaluate),
        'c' | 'C' => Some(Action::Clear),
        'n' => Some(Action::ToggleSign),
        'r' => Some(Action::SquareRoot),
        '<' => Some(Action::Backspace),
        _ => None,
    })
}

/// Translate one frame's input events into actions, in order.
pub fn actions_from_events(events: &[Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        match event {
            Event::Text(text) => actions.extend(text.chars().filter_map(action_for_char)),
            Event::Key { key, pressed: true, .. } => actions.extend(action_for_key(*key)),
            _ => {}
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_operators() {
        assert_eq!(action_for_char('7'), Some(Action::Digit('7')));
        assert_eq!(action_for_char('*'), Some(Action::Operator(BinaryOp::Multiply)));
        assert_eq!(action_for_char('/'), Some(Action::Operator(BinaryOp::Divide)));
        assert_eq!(action_for_char('%'), Some(Action::Percentage));
        assert_eq!(action_for_char('x'), None);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(action_for_key(Key::Enter), Some(Action::Evaluate));
        assert_eq!(action_for_key(Key::Escape), Some(Action::Clear));
        assert_eq!(action_for_key(Key::Backspace), Some(Action::Backspace));
        assert_eq!(action_for_key(Key::A), None);
    }

    #[test]
    fn test_script_extras() {
        assert_eq!(script_action('n'), Some(Action::ToggleSign));
        assert_eq!(script_action('r'), Some(Action::SquareRoot));
        assert_eq!(script_action('C'), Some(Action::Clear));
        assert_eq!(script_action('<'), Some(Action::Backspace));
        assert_eq!(script_action('\n'), Some(Action::Evaluate));
        assert_eq!(script_action('5'), Some(Action::Digit('5')));
        assert_eq!(script_action('?'), None);
    }

    #[test]
    fn test_text_events_in_order() {
        let events = vec![
            Event::Text("12".to_string()),
            Event::Text("+".to_string()),
            Event::PointerGone,
            Event::Text("3a".to_string()),
        ];
        assert_eq!(
            actions_from_events(&events),
            vec![
                Action::Digit('1'),
                Action::Digit('2'),
                Action::Operator(BinaryOp::Add),
                Action::Digit('3'),
            ]
        );
    }
}
