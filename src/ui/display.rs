//! Calculator display rendering.
//!
//! Renders an [`Update`] as terminal lines:
//! - The working expression as the first line
//! - The result with a "= " prefix on the second
//! - Errors as an alert block in place of the result

use crate::calculator::{CalcError, Update};

/// Render the display after a token.
pub fn render_update(update: &Update, show_expression: bool) -> String {
    let mut lines = Vec::with_capacity(2);

    if show_expression {
        lines.push(render_expression(&update.display_expression));
    }

    match &update.error {
        Some(err) => lines.push(render_alert(err)),
        None if update.has_result() => lines.push(format!("= {}", update.display_result)),
        None => {}
    }

    lines.join("\n")
}

fn render_expression(expression: &str) -> String {
    if expression.is_empty() {
        "0".to_string()
    } else {
        expression.to_string()
    }
}

/// Render an error the way an alert would present it.
pub fn render_alert(err: &CalcError) -> String {
    format!("! {}: {}", err.title(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::ValidationError;

    fn update(expression: &str, result: &str, error: Option<CalcError>) -> Update {
        Update {
            display_expression: expression.to_string(),
            display_result: result.to_string(),
            error,
        }
    }

    #[test]
    fn test_render_result() {
        let rendered = render_update(&update("3 + 4", "7", None), true);
        assert_eq!(rendered, "3 + 4\n= 7");
    }

    #[test]
    fn test_render_without_expression() {
        let rendered = render_update(&update("3 + 4", "7", None), false);
        assert_eq!(rendered, "= 7");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_update(&update("", "", None), true), "0");
    }

    #[test]
    fn test_render_error() {
        let err = CalcError::from(ValidationError::TrailingOperator('+'));
        let rendered = render_update(&update("3 + ", "", Some(err)), true);
        assert_eq!(
            rendered,
            "3 + \n! Invalid Input: Calculator Cannot Do That. (expression cannot end with '+')"
        );
    }
}
