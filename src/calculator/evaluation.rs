//! Expression evaluation using fasteval.
//!
//! Percent signs are expanded textually before the expression reaches
//! fasteval, which then applies the usual precedence (`*` and `/` before
//! `+` and `-`).

use std::collections::BTreeMap;

use tracing::debug;

use super::error::{CalcError, EvalError};
use super::format::format_result;
use super::validation::validate;

/// What a percent sign expands to before evaluation.
const PERCENT_EXPANSION: &str = "*0.01";

/// A successful evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// The working expression as entered.
    pub expression: String,
    /// The numeric value, always finite.
    pub value: f64,
    /// The value formatted for display.
    pub display_result: String,
}

/// Replace every `%` with a multiplication by `0.01`.
pub fn expand_percent(expression: &str) -> String {
    expression.replace('%', PERCENT_EXPANSION)
}

/// Validate and evaluate an expression.
///
/// Empty input, validator rejections, parse failures and non-finite results
/// are all reported as errors.
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    if expression.trim().is_empty() {
        return Err(EvalError::Empty.into());
    }
    validate(expression)?;

    let expanded = expand_percent(expression);

    // Use an empty namespace (no custom variables)
    let mut namespace = BTreeMap::<String, f64>::new();

    let value = fasteval::ez_eval(&expanded, &mut namespace)
        .map_err(|e| EvalError::Parse(format!("{:?}", e)))?;
    debug!(expression, expanded = %expanded, value, "evaluated expression");

    if value.is_finite() {
        Ok(value)
    } else if divides_by_zero(&expanded) {
        Err(EvalError::DivisionByZero.into())
    } else {
        Err(EvalError::Overflow.into())
    }
}

/// Evaluate an expression and format the value for display.
pub fn evaluate_expression(input: &str) -> Result<Evaluation, CalcError> {
    let value = evaluate(input)?;
    Ok(Evaluation {
        expression: input.to_string(),
        display_result: format_result(value),
        value,
    })
}

/// Check if any divisor in the expression is a literal zero.
///
/// The grammar has no parentheses, so the divisor of `/` is always the
/// number literal right after it.
fn divides_by_zero(expanded: &str) -> bool {
    expanded.match_indices('/').any(|(i, _)| {
        let rest = expanded[i + 1..].trim_start();
        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        rest[..end].parse::<f64>().is_ok_and(|divisor| divisor == 0.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::error::ValidationError;

    fn eval(expression: &str) -> f64 {
        evaluate(expression).unwrap()
    }

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(eval("3 + 4"), 7.0);
        assert_eq!(eval("10 - 12"), -2.0);
        assert_eq!(eval("6 * 7"), 42.0);
        assert_eq!(eval("9 / 4"), 2.25);
        assert_eq!(eval("42"), 42.0);
    }

    #[test]
    fn test_standard_precedence() {
        assert_eq!(eval("2 + 3 * 4"), 14.0);
        assert_eq!(eval("20 - 10 / 5"), 18.0);
        assert_eq!(eval("8 / 2 * 4"), 16.0);
        assert_eq!(eval("10 - 4 - 3"), 3.0);
    }

    #[test]
    fn test_percent_expansion() {
        assert_eq!(expand_percent("50%"), "50*0.01");
        assert_eq!(expand_percent("200 + 10%"), "200 + 10*0.01");
        assert_eq!(eval("50%"), eval("50*0.01"));
        assert_eq!(eval("50%"), 0.5);
        assert_eq!(evaluate_expression("50%").unwrap().display_result, "0.50");
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let first = eval("7.5 * 3 - 1 / 8");
        let second = eval("7.5 * 3 - 1 / 8");
        assert_eq!(first, second);
    }

    #[test]
    fn test_leading_minus_not_evaluated() {
        assert_eq!(
            evaluate("-3 + 2"),
            Err(CalcError::MalformedExpression(
                ValidationError::LeadingOperator('-')
            ))
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            evaluate(&"9".repeat(400)),
            Err(CalcError::EvaluationFailure(EvalError::Overflow))
        );
    }

    #[test]
    fn test_overlong_expression_fails_to_parse() {
        let expression = format!("{}1", "1 + ".repeat(1100));
        assert!(matches!(
            evaluate(&expression),
            Err(CalcError::EvaluationFailure(EvalError::Parse(_)))
        ));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate("1 / 0"),
            Err(CalcError::EvaluationFailure(EvalError::DivisionByZero))
        );
        assert_eq!(
            evaluate("0 / 0.00"),
            Err(CalcError::EvaluationFailure(EvalError::DivisionByZero))
        );
        assert_eq!(
            evaluate("5 / 0%"),
            Err(CalcError::EvaluationFailure(EvalError::DivisionByZero))
        );
        assert_eq!(eval("0 / 5"), 0.0);
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(
            evaluate(""),
            Err(CalcError::EvaluationFailure(EvalError::Empty))
        );
        assert_eq!(
            evaluate("  "),
            Err(CalcError::EvaluationFailure(EvalError::Empty))
        );
    }

    #[test]
    fn test_malformed_expressions_not_evaluated() {
        assert!(evaluate("3 +  + ").unwrap_err().is_malformed());
        assert!(evaluate(" + 3").unwrap_err().is_malformed());
        assert!(evaluate(".").unwrap_err().is_malformed());
        assert!(evaluate("%").unwrap_err().is_malformed());
        assert!(evaluate("2 ^ 8").unwrap_err().is_malformed());
    }

    #[test]
    fn test_divides_by_zero_detection() {
        assert!(divides_by_zero("1 / 0"));
        assert!(divides_by_zero("3 + 1/0.0"));
        assert!(!divides_by_zero("1 / 0.5"));
        assert!(!divides_by_zero("1 * 0"));
    }
}
