//! Windowless mode: run a key script and print the display.

use thiserror::Error;
use tracing::debug;

use crate::engine::Calculator;
use crate::keymap::script_action;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key {key:?} at position {position}")]
    UnknownKey { key: char, position: usize },
}

/// Apply every key in `script` to `calc`.
///
/// Whitespace other than newline is skipped. The whole script is checked
/// before anything is applied, so a bad key leaves `calc` untouched.
pub fn run_script(calc: &mut Calculator, script: &str) -> Result<(), ScriptError> {
    let actions = script
        .chars()
        .enumerate()
        .filter(|(_, key)| *key == '\n' || !key.is_whitespace())
        .map(|(position, key)| script_action(key).ok_or(ScriptError::UnknownKey { key, position }))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = actions.len(), "running key script");
    for action in actions {
        calc.dispatch(action);
    }
    Ok(())
}

/// The two display lines: trail, then entry.
pub fn render(calc: &Calculator) -> String {
    format!("{}\n{}", calc.trail(), calc.entry())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> Calculator {
        let mut calc = Calculator::new();
        run_script(&mut calc, script).unwrap();
        calc
    }

    #[test]
    fn test_addition_script() {
        let calc = run("3+4=");
        assert_eq!(render(&calc), "3 + 4 =\n7");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let calc = run(" 12 * 3 \n");
        assert_eq!(calc.entry(), "36");
        assert_eq!(calc.trail(), "12 * 3 =");
    }

    #[test]
    fn test_unary_keys() {
        assert_eq!(run("9r").entry(), "3");
        assert_eq!(run("5%").entry(), "0.05");
        assert_eq!(run("12<").entry(), "1");
        assert_eq!(run("12<<").entry(), "0");
        assert_eq!(run("7n").entry(), "-7");
    }

    #[test]
    fn test_division_by_zero_script() {
        let calc = run("1/0=");
        assert_eq!(render(&calc), "\nCannot divide by zero");
    }

    #[test]
    fn test_clear_key() {
        let calc = run("45+6c");
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_unknown_key_leaves_state_alone() {
        let mut calc = Calculator::new();
        let err = run_script(&mut calc, "12+x").unwrap_err();
        assert_eq!(err, ScriptError::UnknownKey { key: 'x', position: 3 });
        assert_eq!(err.to_string(), "unknown key 'x' at position 3");
        assert_eq!(calc, Calculator::new());
    }
}
