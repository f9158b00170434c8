//! CLI presenter for output formatting

use std::io::{self, Write};
use std::sync::Mutex;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::analysis::Emotion;
use crate::domain::history::{EmotionHistoryEntry, EmotionLog};
use crate::domain::pets::Pet;

/// Presenter for CLI output formatting
///
/// The spinner lives behind a mutex so progress callbacks can share
/// the presenter by reference.
pub struct Presenter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    /// Start a spinner with message
    pub fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(spinner);
        }
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Ok(guard) = self.spinner.lock() {
            if let Some(ref spinner) = *guard {
                spinner.set_message(message.to_string());
            }
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&self, message: &str) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(spinner) = guard.take() {
                spinner.finish_with_message(format!("{} {}", "✓".green(), message));
            }
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&self, message: &str) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(spinner) = guard.take() {
                spinner.finish_with_message(format!("{} {}", "✗".red(), message));
            }
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(spinner) = guard.take() {
                spinner.finish_and_clear();
            }
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output text to stdout without newline
    pub fn output_inline(&self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Print session status line
    pub fn session_status(&self, state: &str) {
        eprintln!("{} Session: {}", "●".cyan(), state);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Format recording progress bar
    pub fn format_progress(&self, elapsed_ms: u64, total_ms: u64) -> String {
        let elapsed_secs = elapsed_ms / 1000;
        let total_secs = total_ms / 1000;
        let percent = if total_ms > 0 {
            (elapsed_ms as f64 / total_ms as f64 * 100.0).min(100.0)
        } else {
            0.0
        };

        let bar_width = 20;
        let filled = ((percent / 100.0) * bar_width as f64) as usize;
        let empty = bar_width - filled;

        format!(
            "[{}{}] {:>3}s / {}s",
            "█".repeat(filled).cyan(),
            "░".repeat(empty),
            elapsed_secs,
            total_secs
        )
    }

    /// Update recording progress on the active spinner
    pub fn update_recording_progress(&self, elapsed_ms: u64, total_ms: u64) {
        let progress = self.format_progress(elapsed_ms, total_ms);
        self.update_spinner(&format!("Recording... {}", progress));
    }

    /// Color an emotion label the way the app presents it
    fn emotion_colored(emotion: Emotion) -> ColoredString {
        match emotion {
            Emotion::Happy | Emotion::Content => emotion.as_str().green(),
            Emotion::Playful => emotion.as_str().magenta(),
            Emotion::Stressed | Emotion::Anxious => emotion.as_str().red(),
            Emotion::Hungry => emotion.as_str().yellow(),
            Emotion::Sleepy | Emotion::Alert => emotion.as_str().normal(),
        }
    }

    /// Print a full analysis result card
    pub fn result_card(&self, entry: &EmotionHistoryEntry, pet: Option<&str>) {
        eprintln!();
        if let Some(name) = pet {
            eprintln!("  {:<15} {}", "Pet:", name);
        }
        eprintln!("  {:<15} {}", "Source:", entry.source().label());
        eprintln!("  {:<15} {}", "Date:", entry.formatted_date());
        eprintln!(
            "  {:<15} {} ({} confidence)",
            "Emotion:",
            Self::emotion_colored(entry.emotion()).bold(),
            entry.confidence()
        );
        eprintln!("  {:<15} {}", "Recommendation:", entry.recommendation());
        eprintln!();
    }

    /// Print the emotion history, most recent first
    pub fn history_list(&self, log: &EmotionLog) {
        if log.is_empty() {
            self.info("No analyses yet");
            return;
        }

        for (index, entry) in log.entries().iter().enumerate() {
            eprintln!(
                "{}. {} ({})  {}  {}",
                index + 1,
                Self::emotion_colored(entry.emotion()).bold(),
                entry.confidence(),
                entry.source().label(),
                entry.formatted_date().dimmed()
            );
            eprintln!("   {}", entry.recommendation().dimmed());
        }
    }

    /// Print one pet line
    pub fn pet_line(&self, pet: &Pet) {
        let description = pet
            .description
            .as_deref()
            .map(|d| format!(" - {}", d))
            .unwrap_or_default();
        eprintln!(
            "{} {} ({}, {}){}",
            pet.photo,
            pet.name.bold(),
            pet.breed,
            pet.age,
            description
        );
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
