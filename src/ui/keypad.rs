//! Line-oriented keypad for the terminal.
//!
//! Each input line is a run of keys: every character is one key, except
//! whitespace-separated words that name a key on their own (`ac`, `back`).

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::calculator::{Calculator, Token, TokenError, copy_to_clipboard};
use crate::config::Config;
use crate::ui::display::{render_alert, render_update};

const QUIT_WORDS: &[&str] = &["q", "quit", "exit"];

#[derive(Clone, Debug)]
pub struct KeypadOptions {
    pub show_expression: bool,
    pub copy_results: bool,
    pub prompt: String,
}

impl From<&Config> for KeypadOptions {
    fn from(config: &Config) -> Self {
        Self {
            show_expression: config.show_expression,
            copy_results: config.copy_results,
            prompt: config.prompt.clone(),
        }
    }
}

/// Map a line of input to tokens, keeping unrecognized keys as errors.
pub fn parse_keys(line: &str) -> Vec<Result<Token, TokenError>> {
    line.split_whitespace()
        .flat_map(|word| match word.parse::<Token>() {
            Ok(token) => vec![Ok(token)],
            Err(_) => word.chars().map(Token::try_from).collect(),
        })
        .collect()
}

/// A calculator session driven by lines of keys.
pub struct Keypad {
    calculator: Calculator,
    options: KeypadOptions,
}

impl Keypad {
    pub fn new(options: KeypadOptions) -> Self {
        Self {
            calculator: Calculator::new(),
            options,
        }
    }

    /// Feed one line of keys and render what the display shows afterwards.
    ///
    /// Errors raised part way through the line are rendered as alerts
    /// before the final display.
    pub fn feed(&mut self, line: &str) -> String {
        let mut lines = Vec::new();
        let mut pressed = false;

        for key in parse_keys(line) {
            match key {
                Ok(token) => {
                    let update = self.calculator.on_token(token);
                    if let Some(err) = &update.error {
                        lines.push(render_alert(err));
                    }
                    pressed = true;
                }
                Err(err) => {
                    warn!(%err, "skipping key");
                    lines.push(format!("? {}", err));
                }
            }
        }

        let display = self.calculator.current();
        if self.options.copy_results && pressed && display.has_result() {
            self.copy_result(&display.display_result);
        }

        lines.push(render_update(&display, self.options.show_expression));
        lines.join("\n")
    }

    /// Run until EOF or a quit word, echoing the display after every line.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        self.prompt(&mut output)?;

        for line in input.lines() {
            let line = line.context("failed to read keypad input")?;
            if QUIT_WORDS.contains(&line.trim()) {
                debug!("quit requested");
                break;
            }

            writeln!(output, "{}", self.feed(&line)).context("failed to write display")?;
            self.prompt(&mut output)?;
        }

        Ok(())
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    fn prompt<W: Write>(&self, output: &mut W) -> Result<()> {
        write!(output, "{}", self.options.prompt).context("failed to write prompt")?;
        output.flush().context("failed to flush output")
    }

    fn copy_result(&self, result: &str) {
        match copy_to_clipboard(result) {
            Ok(()) => debug!(result, "copied result to clipboard"),
            Err(err) => warn!(%err, "could not copy result"),
        }
    }
}
