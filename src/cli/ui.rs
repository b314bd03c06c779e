use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use reqclass::{ ArtifactOutcome, Label, RunObserver, StrategyScore };

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        if line.starts_with('#') {
            // Handle headers
            println!("{}", line.bold());
        } else if line.starts_with('-') {
            // Handle list items
            println!("{}", line);
        } else if line.starts_with("```") {
            // Handle code blocks
            println!("{}", line);
        } else {
            // Wrap normal text
            for wrapped_line in wrap(line, width.saturating_sub(10).max(20)) {
                println!("{}", wrapped_line);
            }
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Label with color
pub fn colored_label(label: Label) -> ColoredString {
    match label {
        Label::Functional => label.as_str().green().bold(),
        Label::NonFunctional => label.as_str().cyan().bold(),
        Label::Error => label.as_str().red().bold(),
    }
}

/// Create a new progress bar
pub fn create_progress_bar(length: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Print the per-strategy evaluation table
pub fn print_scores(scores: &[StrategyScore]) {
    let width = scores
        .iter()
        .map(|s| s.column.len())
        .max()
        .unwrap_or(8)
        .max(8);

    println!(
        "{:<width$}  {:>8}  {:>9}  {:>6}  {:>9}  {:>6}",
        "Strategy".bold(),
        "Accuracy".bold(),
        "Precision".bold(),
        "Recall".bold(),
        "Correct".bold(),
        "Errors".bold(),
        width = width
    );
    for score in scores {
        let errors = if score.errors > 0 {
            score.errors.to_string().red()
        } else {
            score.errors.to_string().normal()
        };
        println!(
            "{:<width$}  {:>7.1}%  {:>8.1}%  {:>5.1}%  {:>9}  {:>6}",
            score.column,
            score.accuracy() * 100.0,
            score.precision() * 100.0,
            score.recall() * 100.0,
            format!("{}/{}", score.correct, score.total),
            errors,
            width = width
        );
    }
}

/// Renders one progress bar per strategy pass
#[derive(Default)]
pub struct ProgressObserver {
    bar: Option<ProgressBar>,
}

impl RunObserver for ProgressObserver {
    fn on_pass_start(&mut self, column: &str, total: usize) {
        self.bar = Some(create_progress_bar(total as u64, column));
    }

    fn on_classified(&mut self, _column: &str, _index: usize, _total: usize, label: Label) {
        if let Some(bar) = &self.bar {
            if label == Label::Error {
                bar.println(format!("{} requirement could not be classified", "ERROR:".red().bold()));
            }
            bar.inc(1);
        }
    }

    fn on_artifact(&mut self, outcome: &ArtifactOutcome) {
        let line = match outcome {
            ArtifactOutcome::Generated(path) =>
                format!("{} software artifacts saved to {}", "SUCCESS:".green().bold(), path.display()),
            ArtifactOutcome::Failed(reason) =>
                format!("{} artifact generation failed: {}", "WARNING:".yellow().bold(), reason),
            ArtifactOutcome::Skipped => return,
        };
        match &self.bar {
            Some(bar) => bar.println(line),
            None => println!("{}", line),
        }
    }

    fn on_pass_end(&mut self, column: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!("{} done", column));
        }
    }
}
