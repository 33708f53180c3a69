pub mod display;
pub mod keypad;

pub use display::{render_alert, render_update};
pub use keypad::{Keypad, KeypadOptions, parse_keys};
