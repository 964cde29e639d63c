//! Expression engine
//!
//! Holds the entry being typed and the trail of committed tokens, and folds
//! the trail left to right when asked to evaluate. There is no precedence:
//! `2 + 3 * 4` is `(2 + 3) * 4`.

use thiserror::Error;
use tracing::debug;

use crate::format::{format_decimal, format_number};

/// Appended to the trail once it has been evaluated.
const EQUALS_MARKER: &str = "=";

/// Prefix used on the trail after a square root.
const ROOT_SIGN: char = '√';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Token written into the trail.
    pub fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Glyph shown on the button.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

/// Why a computation ended in a terminal state.
///
/// The `Display` text is exactly what the entry line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// Square root of a negative number.
    #[error("Invalid input")]
    InvalidInput,
    /// Token sequence is not `operand (operator operand)*`.
    #[error("Error")]
    Malformed,
    /// Result does not fit in an f64.
    #[error("Error")]
    Overflow,
    /// Text that should be a number is not one.
    #[error("Error")]
    NotANumber,
}

/// One user action, independent of how it was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(char),
    DecimalPoint,
    Operator(BinaryOp),
    Evaluate,
    Clear,
    ToggleSign,
    Percentage,
    SquareRoot,
    Backspace,
}

/// Calculator state: the entry line, the trail above it, and whether the
/// entry currently shows a result.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    entry: String,
    trail: String,
    showing_result: bool,
    error: Option<CalcError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            trail: String::new(),
            showing_result: false,
            error: None,
        }
    }

    /// The number being typed, a result, or a terminal error message.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Committed tokens, or the evaluated expression ending in `=`.
    pub fn trail(&self) -> &str {
        &self.trail
    }

    pub fn is_showing_result(&self) -> bool {
        self.showing_result
    }

    /// The error behind a terminal entry, if the entry is one.
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Digit(d) => self.append_digit(d),
            Action::DecimalPoint => self.append_decimal_point(),
            Action::Operator(op) => self.apply_binary_operator(op),
            Action::Evaluate => self.evaluate(),
            Action::Clear => self.clear(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percentage => self.percentage(),
            Action::SquareRoot => self.square_root(),
            Action::Backspace => self.backspace(),
        }
        debug!(?action, entry = %self.entry, trail = %self.trail, "dispatched");
    }

    pub fn append_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        if self.showing_result || self.entry == "0" {
            self.entry = digit.to_string();
            self.showing_result = false;
            self.error = None;
        } else {
            self.entry.push(digit);
        }
    }

    pub fn append_decimal_point(&mut self) {
        if self.entry.contains('.') {
            return;
        }
        if self.showing_result || self.entry == "0" {
            self.entry = "0.".to_string();
            self.error = None;
        } else {
            self.entry.push('.');
        }
        self.showing_result = false;
    }

    pub fn apply_binary_operator(&mut self, op: BinaryOp) {
        // A terminal message is not an operand; start over from zero.
        if self.error.take().is_some() {
            self.entry = "0".to_string();
        }

        if !self.trail.is_empty() && !self.showing_result {
            self.trail.push(' ');
            self.trail.push_str(&self.entry);
        }

        if self.trail.is_empty() || self.showing_result {
            self.trail = format!("{} {}", self.entry, op.token());
        } else {
            self.trail.push(' ');
            self.trail.push_str(op.token());
        }

        self.entry = "0".to_string();
        self.showing_result = false;
    }

    pub fn evaluate(&mut self) {
        if self.trail.is_empty() {
            return;
        }

        let expression = format!("{} {}", self.trail, self.entry);
        match fold_expression(&expression) {
            Ok(value) => {
                self.entry = format_number(value);
                self.trail = format!("{} {}", expression, EQUALS_MARKER);
                self.showing_result = true;
                self.error = None;
            }
            Err(err) => {
                self.trail.clear();
                self.fail(err);
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn toggle_sign(&mut self) {
        if self.entry == "0" || self.error.is_some() {
            return;
        }
        match self.entry.strip_prefix('-') {
            Some("") => self.entry = "0".to_string(),
            Some(rest) => self.entry = rest.to_string(),
            None => self.entry.insert(0, '-'),
        }
    }

    pub fn percentage(&mut self) {
        match parse_operand(&self.entry) {
            Ok(value) => {
                self.entry = format_decimal(value / 100.0);
                self.error = None;
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn square_root(&mut self) {
        let value = match parse_operand(&self.entry) {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };
        if value < 0.0 {
            return self.fail(CalcError::InvalidInput);
        }

        self.entry = format_number(value.sqrt());
        self.trail = format!("{}{} {}", ROOT_SIGN, format_number(value), EQUALS_MARKER);
        self.showing_result = true;
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if self.error.is_some() {
            *self = Self {
                trail: std::mem::take(&mut self.trail),
                ..Self::new()
            };
            return;
        }
        if self.entry.chars().count() > 1 {
            self.entry.pop();
        } else {
            self.entry = "0".to_string();
        }
    }

    /// Put the entry into a terminal state.
    fn fail(&mut self, err: CalcError) {
        debug!(?err, entry = %self.entry, "calculation failed");
        self.entry = err.to_string();
        self.showing_result = true;
        self.error = Some(err);
    }
}

/// Fold `operand (operator operand)*` left to right.
pub fn fold_expression(expression: &str) -> Result<f64, CalcError> {
    let mut tokens = expression.split_whitespace();
    let first = tokens.next().ok_or(CalcError::Malformed)?;
    let mut acc = parse_operand(first)?;

    while let Some(token) = tokens.next() {
        let op = BinaryOp::from_token(token).ok_or(CalcError::Malformed)?;
        let rhs = tokens.next().ok_or(CalcError::Malformed)?;
        acc = op.apply(acc, parse_operand(rhs)?)?;
    }
    Ok(acc)
}

fn parse_operand(text: &str) -> Result<f64, CalcError> {
    // f64::from_str also takes "inf" and "NaN"; those are not operands here.
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(CalcError::NotANumber)
}
