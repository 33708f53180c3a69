use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zcalc::calculator::{copy_to_clipboard, evaluate_expression};
use zcalc::config::Config;
use zcalc::ui::{Keypad, KeypadOptions, render_alert};

/// A keypad calculator for the terminal.
///
/// Type keys and press Enter: digits, `.`, `+ - * /`, `%`, `=`,
/// `<` or `back` for backspace, `c` or `ac` to clear, `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Path to a config file (defaults to ~/.config/zcalc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Copy every result to the clipboard
    #[arg(long)]
    copy: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Press a key sequence, print the display and exit
    #[arg(long, conflicts_with = "eval")]
    keys: Option<String>,

    /// Evaluate a single expression, print the result and exit
    #[arg(long)]
    eval: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut options = KeypadOptions::from(&config);
    options.copy_results |= cli.copy;

    if let Some(expression) = cli.eval {
        return eval_once(&expression, options.copy_results);
    }

    let mut keypad = Keypad::new(options);

    if let Some(keys) = cli.keys {
        println!("{}", keypad.feed(&keys));
        return Ok(());
    }

    info!("starting interactive keypad");
    keypad.run(io::stdin().lock(), io::stdout().lock())
}

fn eval_once(expression: &str, copy: bool) -> anyhow::Result<()> {
    match evaluate_expression(expression) {
        Ok(evaluation) => {
            println!("{}", evaluation.display_result);
            if copy && let Err(err) = copy_to_clipboard(&evaluation.display_result) {
                warn!(%err, "could not copy result");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", render_alert(&err));
            anyhow::bail!("could not evaluate {:?}", expression)
        }
    }
}
