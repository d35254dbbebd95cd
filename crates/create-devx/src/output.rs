//! Terminal output utilities
//!
//! Progress and results go to stdout; failures go to stderr so they
//! survive `create-devx ... > log`.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

/// Print an empty line
pub fn blank() {
    println!();
}

/// Print a plain line
pub fn line(msg: &str) {
    println!("{}", msg);
}

/// Print the final success line
pub fn success(msg: &str) {
    println!("{} {}", style("Success!").green(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", style(msg).yellow());
}

/// Print a runnable command with an optional description below it
pub fn command(cmd: &str, description: Option<&str>) {
    println!("  {}", style(cmd).cyan());
    if let Some(description) = description {
        println!("    {}", description);
    }
}

/// Highlight a value inline
pub fn highlight(value: &str) -> String {
    style(value).green().to_string()
}

/// Highlight a command inline
pub fn cyan(value: &str) -> String {
    style(value).cyan().to_string()
}

/// Print an error line
pub fn error(msg: &str) {
    eprintln!("{}", msg);
}

/// Print an error line in red
pub fn error_red(msg: &str) {
    eprintln!("{}", style(msg).red());
}

/// Print an itemized problem below an error
pub fn problem(msg: &str) {
    eprintln!("    {} {}", style("*").red().bold(), msg);
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(spinner_style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Make the cursor visible again after an interrupted prompt or spinner
pub fn restore_cursor() {
    let _ = Term::stdout().show_cursor();
    let _ = Term::stderr().show_cursor();
}
