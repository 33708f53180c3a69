//! A keypad calculator engine.
//!
//! Feed [`calculator::Token`]s to a [`calculator::Calculator`] and render the
//! [`calculator::Update`] it returns. The [`ui`] module drives a session from
//! a terminal.

pub mod calculator;
pub mod config;
pub mod ui;
