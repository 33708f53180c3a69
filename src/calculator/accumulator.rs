//! The keypad state machine.
//!
//! Owns the working expression and whether a finished result is on screen.
//! Every token is handled to completion before the next one arrives.

use tracing::{debug, warn};

use super::error::CalcError;
use super::evaluation::evaluate;
use super::format::format_result;
use super::token::{Operator, Token};

/// What the calculator is currently showing.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayState {
    /// The user is building an expression; no result is shown.
    Entering { expression: String },
    /// The expression was just evaluated and its result is shown.
    ShowingResult {
        expression: String,
        /// Always finite.
        value: f64,
        /// `value` as rendered by [`format_result`].
        formatted: String,
    },
}

impl DisplayState {
    fn empty() -> Self {
        Self::Entering {
            expression: String::new(),
        }
    }

    fn expression(&self) -> &str {
        match self {
            Self::Entering { expression } | Self::ShowingResult { expression, .. } => {
                expression.as_str()
            }
        }
    }
}

/// What the presentation layer should render after a token.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    pub display_expression: String,
    /// Empty unless a result is shown.
    pub display_result: String,
    /// Set when the token triggered an evaluation that failed.
    pub error: Option<CalcError>,
}

impl Update {
    /// Check if a result is shown.
    pub fn has_result(&self) -> bool {
        !self.display_result.is_empty()
    }
}

/// A single calculator session.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    state: DisplayState,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            state: DisplayState::empty(),
        }
    }

    /// Handle one token and report what to display.
    pub fn on_token(&mut self, token: Token) -> Update {
        debug!(%token, state = ?self.state, "token received");

        let outcome = match token {
            Token::Digit(_) | Token::Decimal => {
                self.append_digit_or_decimal(token);
                Ok(())
            }
            Token::Operator(op) => {
                self.append_operator(op);
                Ok(())
            }
            Token::Percent => self.append_percent(),
            Token::Equals => self.equals(),
            Token::Backspace => {
                self.backspace();
                Ok(())
            }
            Token::AllClear => {
                self.all_clear();
                Ok(())
            }
        };

        Update {
            error: outcome.err(),
            ..self.current()
        }
    }

    /// The current display, with no error attached.
    pub fn current(&self) -> Update {
        Update {
            display_expression: self.expression().to_string(),
            display_result: self.display_result().to_string(),
            error: None,
        }
    }

    /// Append a digit or decimal point, starting over if a result is shown.
    ///
    /// Any other token, or a digit outside `0..=9`, is ignored.
    pub fn append_digit_or_decimal(&mut self, token: Token) {
        let literal = match token {
            Token::Digit(d) => char::from_digit(u32::from(d), 10),
            Token::Decimal => Some('.'),
            _ => None,
        };
        let Some(literal) = literal else {
            debug!(%token, "not a digit or decimal point");
            return;
        };

        if self.has_result() {
            self.all_clear();
        }
        if let DisplayState::Entering { expression } = &mut self.state {
            expression.push(literal);
        }
    }

    /// Append a padded binary operator.
    ///
    /// When a result is shown, the formatted result becomes the left operand.
    pub fn append_operator(&mut self, op: Operator) {
        match &mut self.state {
            DisplayState::ShowingResult { formatted, .. } => {
                let expression = format!("{} {} ", formatted, op);
                self.state = DisplayState::Entering { expression };
            }
            DisplayState::Entering { expression } => {
                expression.push(' ');
                expression.push(op.symbol());
                expression.push(' ');
            }
        }
    }

    /// Append `%` to the expression and evaluate right away.
    ///
    /// A shown result is dismissed but its expression is kept, so the
    /// percent applies to the last number that was typed.
    pub fn append_percent(&mut self) -> Result<(), CalcError> {
        let mut expression = self.take_expression();
        expression.push('%');
        self.state = DisplayState::Entering { expression };
        self.equals()
    }

    /// Evaluate the working expression and show the result.
    ///
    /// An empty expression is left alone. On failure the state is unchanged.
    pub fn equals(&mut self) -> Result<(), CalcError> {
        let expression = self.expression().to_string();
        if expression.trim().is_empty() {
            return Ok(());
        }

        match evaluate(&expression) {
            Ok(value) => {
                self.state = DisplayState::ShowingResult {
                    expression,
                    value,
                    formatted: format_result(value),
                };
                Ok(())
            }
            Err(err) => {
                warn!(%expression, %err, "rejected expression");
                Err(err)
            }
        }
    }

    /// Remove the last character, or clear everything if a result is shown.
    pub fn backspace(&mut self) {
        if self.has_result() {
            self.all_clear();
        } else if let DisplayState::Entering { expression } = &mut self.state {
            expression.pop();
        }
    }

    pub fn all_clear(&mut self) {
        self.state = DisplayState::empty();
    }

    /// The working expression.
    pub fn expression(&self) -> &str {
        self.state.expression()
    }

    /// The formatted result, or an empty string when none is shown.
    pub fn display_result(&self) -> &str {
        match &self.state {
            DisplayState::ShowingResult { formatted, .. } => formatted.as_str(),
            DisplayState::Entering { .. } => "",
        }
    }

    /// The numeric result, if one is shown.
    pub fn result(&self) -> Option<f64> {
        match self.state {
            DisplayState::ShowingResult { value, .. } => Some(value),
            DisplayState::Entering { .. } => None,
        }
    }

    pub fn has_result(&self) -> bool {
        matches!(self.state, DisplayState::ShowingResult { .. })
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    fn take_expression(&mut self) -> String {
        match std::mem::replace(&mut self.state, DisplayState::empty()) {
            DisplayState::Entering { expression } | DisplayState::ShowingResult { expression, .. } => {
                expression
            }
        }
    }
}
