//! calccore — shared library for the CalcPro calculator

pub mod logging;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use theme::{ButtonRole, CalcTheme};
