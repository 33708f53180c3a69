//! Calculator core: keypad tokens in, display strings out.
//!
//! This module provides functionality to:
//! - Accumulate keypad tokens into a working expression
//! - Validate the expression before evaluating it
//! - Evaluate expressions using fasteval, with `%` expanded to `*0.01`
//! - Format results and copy them to the clipboard

mod accumulator;
mod clipboard;
mod error;
mod evaluation;
mod format;
mod token;
mod validation;

pub use accumulator::{Calculator, DisplayState, Update};
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use error::{CalcError, EvalError, ValidationError};
pub use evaluation::{Evaluation, evaluate, evaluate_expression, expand_percent};
pub use format::format_result;
pub use token::{Operator, Token, TokenError};
pub use validation::{is_valid, validate};
