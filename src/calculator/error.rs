//! Error types surfaced by the calculator core.
//!
//! None of these are fatal: the working expression is left as it was, and the
//! user can fix it with more input or an all-clear.

use thiserror::Error;

/// Structural problems found by the validator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expression cannot start with '{0}'")]
    LeadingOperator(char),
    #[error("expression cannot end with '{0}'")]
    TrailingOperator(char),
    #[error("'{first}' and '{second}' cannot be next to each other")]
    AdjacentOperators { first: char, second: char },
    #[error("'%' must follow a number")]
    MisplacedPercent,
    #[error("two numbers need an operator between them")]
    MissingOperator,
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

/// Failures while computing a structurally valid expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("nothing to evaluate")]
    Empty,
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is too large")]
    Overflow,
    #[error("could not parse expression: {0}")]
    Parse(String),
}

/// Error returned from a token event or a direct evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Calculator Cannot Do That. ({0})")]
    MalformedExpression(#[from] ValidationError),
    #[error("Calculator Cannot Do That. ({0})")]
    EvaluationFailure(#[from] EvalError),
}

impl CalcError {
    /// Title for an alert presenting this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::MalformedExpression(_) => "Invalid Input",
            Self::EvaluationFailure(_) => "Cannot Evaluate",
        }
    }

    /// Check if the validator rejected the expression.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedExpression(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let malformed = CalcError::from(ValidationError::LeadingOperator('+'));
        assert!(malformed.is_malformed());
        assert_eq!(malformed.title(), "Invalid Input");

        let failed = CalcError::from(EvalError::DivisionByZero);
        assert!(!failed.is_malformed());
        assert_eq!(failed.title(), "Cannot Evaluate");
    }

    #[test]
    fn test_messages() {
        let err = CalcError::from(ValidationError::AdjacentOperators {
            first: '+',
            second: '-',
        });
        assert_eq!(
            err.to_string(),
            "Calculator Cannot Do That. ('+' and '-' cannot be next to each other)"
        );
        assert_eq!(
            CalcError::from(EvalError::DivisionByZero).to_string(),
            "Calculator Cannot Do That. (division by zero)"
        );
    }
}
