//! Structural validation of the working expression.
//!
//! Runs before any evaluation is attempted. Adjacency is judged on the
//! significant (non-whitespace) characters, so the single spaces the
//! accumulator inserts around operators never hide two operators that
//! sit next to each other.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::ValidationError;
use super::token::Operator;

lazy_static! {
    /// Matches strings made only of keypad characters and whitespace.
    static ref KEYPAD_CHARS: Regex = Regex::new(r"^[0-9\s\.\+\-\*/%]*$").unwrap();

    /// A number literal: digits with at most one decimal point, and at least one digit.
    static ref NUMBER_LITERAL: Regex = Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap();
}

/// A significant piece of the expression.
#[derive(Debug, PartialEq)]
enum Lexeme<'a> {
    Number(&'a str),
    Operator(char),
    Percent,
}

/// Check if the expression is structurally sound.
///
/// The empty expression and a bare number are both valid.
pub fn is_valid(expression: &str) -> bool {
    validate(expression).is_ok()
}

/// Validate the expression, naming the first problem found.
pub fn validate(expression: &str) -> Result<(), ValidationError> {
    if !KEYPAD_CHARS.is_match(expression) {
        let bad = expression
            .chars()
            .find(|&c| !is_keypad_char(c))
            .unwrap_or('?');
        return Err(ValidationError::UnexpectedCharacter(bad));
    }

    let lexemes = lex(expression);

    for (i, lexeme) in lexemes.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| lexemes.get(p));
        let next = lexemes.get(i + 1);

        match *lexeme {
            Lexeme::Number(literal) => {
                if !NUMBER_LITERAL.is_match(literal) {
                    return Err(ValidationError::InvalidNumber(literal.to_string()));
                }
                if let Some(Lexeme::Number(_)) = next {
                    return Err(ValidationError::MissingOperator);
                }
            }
            Lexeme::Operator(op) => {
                if prev.is_none() {
                    return Err(ValidationError::LeadingOperator(op));
                }
                match next {
                    None => return Err(ValidationError::TrailingOperator(op)),
                    Some(Lexeme::Operator(second)) => {
                        return Err(ValidationError::AdjacentOperators {
                            first: op,
                            second: *second,
                        });
                    }
                    Some(Lexeme::Percent) => {
                        return Err(ValidationError::AdjacentOperators {
                            first: op,
                            second: '%',
                        });
                    }
                    Some(Lexeme::Number(_)) => {}
                }
            }
            Lexeme::Percent => {
                let follows_number = matches!(prev, Some(Lexeme::Number(_) | Lexeme::Percent));
                let closes_operand = !matches!(next, Some(Lexeme::Number(_)));
                if !follows_number || !closes_operand {
                    return Err(ValidationError::MisplacedPercent);
                }
            }
        }
    }

    Ok(())
}

fn is_keypad_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || c == '.' || c == '%' || Operator::from_symbol(c).is_some()
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Split the expression into significant lexemes, dropping whitespace.
fn lex(expression: &str) -> Vec<Lexeme<'_>> {
    let mut lexemes = Vec::new();
    let mut number_start: Option<usize> = None;

    for (i, c) in expression.char_indices() {
        if is_number_char(c) {
            number_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = number_start.take() {
            lexemes.push(Lexeme::Number(&expression[start..i]));
        }

        if c == '%' {
            lexemes.push(Lexeme::Percent);
        } else if Operator::from_symbol(c).is_some() {
            lexemes.push(Lexeme::Operator(c));
        }
    }

    if let Some(start) = number_start {
        lexemes.push(Lexeme::Number(&expression[start..]));
    }

    lexemes
}
