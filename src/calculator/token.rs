//! Keypad tokens.
//!
//! Every key press is mapped to exactly one [`Token`] before it reaches the
//! accumulator. Tokens carry no payload beyond their identity.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The character inserted into the working expression.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Map an operator character back to its operator.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One atomic unit of keypad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A digit key, always in `0..=9`.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Percent,
    Equals,
    Backspace,
    AllClear,
}

/// A key that does not map to any token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("unrecognized key: {0:?}")]
    Unrecognized(String),
}

impl Token {
    /// The literal character appended to the working expression, if any.
    ///
    /// Equals, backspace and all-clear edit the expression without adding to it.
    pub fn literal(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(op.symbol()),
            Self::Percent => Some('%'),
            Self::Equals | Self::Backspace | Self::AllClear => None,
        }
    }
}

impl TryFrom<char> for Token {
    type Error = TokenError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if let Some(d) = c.to_digit(10) {
            // to_digit(10) never exceeds 9
            return Ok(Self::Digit(d as u8));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Ok(Self::Operator(op));
        }
        match c {
            '.' => Ok(Self::Decimal),
            '%' => Ok(Self::Percent),
            '=' | '\n' | '\r' => Ok(Self::Equals),
            '<' | 'b' | 'B' | '\u{8}' | '\u{7f}' => Ok(Self::Backspace),
            'c' | 'C' => Ok(Self::AllClear),
            other => Err(TokenError::Unrecognized(other.to_string())),
        }
    }
}

impl FromStr for Token {
    type Err = TokenError;

    /// Parse a single key name such as `"7"`, `"+"`, `"ac"` or `"back"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key.to_ascii_lowercase().as_str() {
            "ac" | "clear" => return Ok(Self::AllClear),
            "back" | "backspace" | "del" => return Ok(Self::Backspace),
            "enter" => return Ok(Self::Equals),
            _ => {}
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(TokenError::Unrecognized(s.to_string())),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal() {
            Some(c) => write!(f, "{}", c),
            None => match self {
                Self::Equals => write!(f, "="),
                Self::Backspace => write!(f, "⌫"),
                _ => write!(f, "AC"),
            },
        }
    }
}
