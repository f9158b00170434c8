//! Interactive session runner

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::sleep;

use crate::application::ports::{Analyzer, Recorder};
use crate::application::{
    AnalyzeCallbacks, AnalyzeClipUseCase, AnalyzeInput, IngestCallbacks, IngestInput,
    IngestMediaUseCase,
};
use crate::domain::analysis::{AudioClip, AudioSource};
use crate::domain::history::EmotionLog;
use crate::domain::pets::PetRegistry;
use crate::domain::recording::{CaptureSession, Duration};
use crate::infrastructure::{create_recorder, CpalRecorder, FfmpegExtractor};

use super::app::{make_analyzer, EXIT_ERROR, EXIT_SUCCESS};
use super::args::SessionOptions;
use super::presenter::Presenter;

/// Interactive session state and collaborators
struct SessionApp {
    presenter: Arc<Presenter>,
    recorder: CpalRecorder,
    analyze: AnalyzeClipUseCase<Box<dyn Analyzer>>,
    ingest: IngestMediaUseCase<FfmpegExtractor>,
    session: CaptureSession,
    log: EmotionLog,
    pets: PetRegistry,
    current_pet: Option<String>,
    cap: Duration,
    extraction_timeout: Duration,
}

impl SessionApp {
    /// Handle one command line. Returns false when the session should end.
    async fn dispatch(&mut self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return true;
        }
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "record" | "r" => self.start_recording().await,
            "stop" | "s" => {
                if self.session.is_recording() {
                    self.stop_and_analyze().await;
                } else {
                    self.presenter.info("Nothing is recording");
                }
            }
            "cancel" => self.cancel_recording().await,
            "analyze" | "a" => {
                if rest.is_empty() {
                    self.presenter.warn("Usage: analyze <file>");
                } else if self.session.is_recording() {
                    self.presenter.warn("Stop the recording first");
                } else {
                    self.analyze_file(rest).await;
                }
            }
            "history" | "h" => self.presenter.history_list(&self.log),
            "pets" => self.list_pets(),
            "pet" => self.pet_command(rest),
            "status" => self.show_status(),
            "help" | "?" => self.show_help(),
            "quit" | "exit" | "q" => return false,
            _ => self
                .presenter
                .warn(&format!("Unknown command: {} (try 'help')", command)),
        }
        true
    }

    async fn start_recording(&mut self) {
        if let Err(e) = self.session.start_recording() {
            self.presenter.warn(&e.to_string());
            return;
        }
        if let Err(e) = self.recorder.start().await {
            self.session.fail(e.to_string());
            self.presenter
                .error(&format!("Failed to start recording: {}", e));
            return;
        }
        self.presenter.session_status(&format!(
            "Recording... (cap {}; 'stop' to analyze, 'cancel' to discard)",
            self.cap
        ));
    }

    async fn stop_and_analyze(&mut self) {
        if let Err(e) = self.session.stop_recording() {
            self.presenter.warn(&e.to_string());
            return;
        }
        match self.recorder.stop().await {
            Ok(Some(clip)) => self.analyze_clip(clip, AudioSource::LiveRecording).await,
            Ok(None) => {
                self.session.fail("Recorder returned no audio");
                self.presenter.warn("No audio captured");
            }
            Err(e) => {
                self.session.fail(e.to_string());
                self.presenter
                    .error(&format!("Failed to stop recording: {}", e));
            }
        }
    }

    async fn cancel_recording(&mut self) {
        if !self.session.is_recording() {
            self.presenter.info("Nothing is recording");
            return;
        }
        if let Err(e) = self.recorder.cancel().await {
            self.session.fail(e.to_string());
            self.presenter
                .error(&format!("Failed to cancel recording: {}", e));
            return;
        }
        if self.session.cancel_recording().is_ok() {
            self.presenter.info("Recording discarded");
            self.presenter.session_status("Idle");
        }
    }

    async fn analyze_file(&mut self, path: &str) {
        let callbacks = IngestCallbacks {
            on_extraction_start: Some(Box::new({
                let presenter = Arc::clone(&self.presenter);
                move || presenter.start_spinner("Extracting audio track...")
            })),
            on_extraction_end: Some(Box::new({
                let presenter = Arc::clone(&self.presenter);
                move |size: &str| presenter.spinner_success(&format!("Audio ready ({})", size))
            })),
        };

        let input = IngestInput {
            path: PathBuf::from(path),
            extraction_timeout: self.extraction_timeout,
        };
        match self.ingest.execute(input, callbacks).await {
            Ok(output) => self.analyze_clip(output.clip, output.source).await,
            Err(e) => {
                self.presenter.stop_spinner();
                self.presenter.error(&e.to_string());
            }
        }
    }

    async fn analyze_clip(&mut self, clip: AudioClip, source: AudioSource) {
        let callbacks = AnalyzeCallbacks {
            on_analysis_start: Some(Box::new({
                let presenter = Arc::clone(&self.presenter);
                move |label: &str| presenter.start_spinner(&format!("Analyzing {}...", label))
            })),
            on_analysis_end: Some(Box::new({
                let presenter = Arc::clone(&self.presenter);
                move || presenter.stop_spinner()
            })),
        };

        let input = AnalyzeInput { clip, source };
        match self.analyze.execute(input, callbacks).await {
            Ok(output) => {
                self.presenter
                    .result_card(&output.entry, self.current_pet.as_deref());
                if output.entry.emotion().needs_attention() {
                    self.presenter.warn("This reading may need your attention");
                }
                self.log.record(output.entry);
                if self.session.is_analyzing() {
                    let _ = self.session.complete_analysis();
                }
            }
            Err(e) => {
                self.presenter.stop_spinner();
                self.presenter.error(&e.to_string());
                if self.session.is_analyzing() {
                    self.session.fail(e.to_string());
                }
            }
        }
    }

    fn list_pets(&self) {
        if self.pets.is_empty() {
            self.presenter.info("No pet profiles yet");
            return;
        }
        for pet in self.pets.pets() {
            self.presenter.pet_line(pet);
        }
    }

    fn pet_command(&mut self, rest: &str) {
        let mut parts = rest.split_whitespace();
        match parts.next() {
            Some("add") => {
                let name = parts.next();
                let breed = parts.next();
                let age = parts.collect::<Vec<_>>().join(" ");
                match (name, breed) {
                    (Some(name), Some(breed)) if !age.is_empty() => {
                        match self.pets.add(name, breed, &age, None, None) {
                            Ok(_) => self.presenter.success(&format!("Added {}", name)),
                            Err(e) => self.presenter.error(&e.to_string()),
                        }
                    }
                    _ => self.presenter.warn("Usage: pet add <name> <breed> <age>"),
                }
            }
            Some("remove") => match parts.next() {
                Some(name) => {
                    if self.pets.remove_by_name(name) {
                        let was_current = self
                            .current_pet
                            .as_deref()
                            .map_or(false, |p| p.eq_ignore_ascii_case(name));
                        if was_current {
                            self.current_pet = None;
                        }
                        self.presenter.success(&format!("Removed {}", name));
                    } else {
                        self.presenter.warn(&format!("No pet named {}", name));
                    }
                }
                None => self.presenter.warn("Usage: pet remove <name>"),
            },
            Some("use") => match parts.next() {
                Some(name) => match self.pets.find_by_name(name) {
                    Some(pet) => {
                        self.current_pet = Some(pet.name.clone());
                        self.presenter
                            .success(&format!("Analyses now attach to {}", pet.name));
                    }
                    None => self.presenter.warn(&format!("No pet named {}", name)),
                },
                None => self.presenter.warn("Usage: pet use <name>"),
            },
            _ => self.presenter.warn("Usage: pet add|remove|use ..."),
        }
    }

    fn show_status(&self) {
        self.presenter.session_status(self.session.state().as_str());
        let pet = self.current_pet.as_deref().unwrap_or("none");
        self.presenter.key_value("pet", pet);
        self.presenter
            .key_value("analyses", &self.log.len().to_string());
        if let Some(err) = self.session.last_error() {
            self.presenter.key_value("last_error", err);
        }
    }

    fn show_help(&self) {
        self.presenter.output("Commands:");
        self.presenter
            .output("  record            Start recording (auto-stops at the cap)");
        self.presenter
            .output("  stop              Stop recording and analyze");
        self.presenter
            .output("  cancel            Discard the current recording");
        self.presenter
            .output("  analyze <file>    Analyze an audio or video file");
        self.presenter
            .output("  history           Show recent analyses");
        self.presenter.output("  pets              List pet profiles");
        self.presenter.output("  pet add <name> <breed> <age>");
        self.presenter.output("  pet remove <name>");
        self.presenter
            .output("  pet use <name>    Attach analyses to a pet");
        self.presenter.output("  status            Show session state");
        self.presenter.output("  quit              Exit");
    }
}

/// Run the interactive session
pub async fn run_session(options: SessionOptions) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    let analyzer = match make_analyzer(&options.analyzer) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut app = SessionApp {
        presenter: Arc::clone(&presenter),
        recorder: create_recorder(),
        analyze: AnalyzeClipUseCase::new(analyzer),
        ingest: IngestMediaUseCase::new(FfmpegExtractor::new()),
        session: CaptureSession::new(),
        log: EmotionLog::new(options.history_cap),
        pets: PetRegistry::with_defaults(),
        current_pet: options.pet.clone(),
        cap: options.cap,
        extraction_timeout: options.extraction_timeout,
    };

    app.presenter.session_status("Idle");
    app.presenter.info("Type 'help' for commands, Ctrl+C to exit");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut needs_prompt = true;

    loop {
        if needs_prompt {
            presenter.output_inline("> ");
            needs_prompt = false;
        }

        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        needs_prompt = true;
                        if !app.dispatch(&line).await {
                            break;
                        }
                    }
                    // stdin closed
                    Ok(None) => break,
                    Err(e) => {
                        presenter.error(&format!("Failed to read input: {}", e));
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            }
            _ = sleep(StdDuration::from_millis(100)), if app.session.is_recording() => {
                if app.recorder.elapsed_ms() >= app.cap.as_millis() {
                    presenter.warn("Max duration reached, auto-stopping");
                    app.stop_and_analyze().await;
                    needs_prompt = true;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                if app.session.is_recording() {
                    let _ = app.recorder.cancel().await;
                }
                presenter.output("");
                break;
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StubAnalyzer;

    fn test_app() -> SessionApp {
        SessionApp {
            presenter: Arc::new(Presenter::new()),
            recorder: create_recorder(),
            analyze: AnalyzeClipUseCase::new(Box::new(StubAnalyzer::with_delay(0)) as Box<dyn Analyzer>),
            ingest: IngestMediaUseCase::new(FfmpegExtractor::new()),
            session: CaptureSession::new(),
            log: EmotionLog::new(5),
            pets: PetRegistry::with_defaults(),
            current_pet: None,
            cap: Duration::from_secs(10),
            extraction_timeout: Duration::from_secs(60),
        }
    }

    #[tokio::test]
    async fn quit_ends_the_loop() {
        let mut app = test_app();
        assert!(!app.dispatch("quit").await);
        assert!(app.dispatch("history").await);
    }

    #[tokio::test]
    async fn stop_while_idle_is_a_noop() {
        let mut app = test_app();
        assert!(app.dispatch("stop").await);
        assert!(app.session.is_idle());
        assert!(app.log.is_empty());
    }

    #[tokio::test]
    async fn cancel_while_idle_is_a_noop() {
        let mut app = test_app();
        assert!(app.dispatch("cancel").await);
        assert!(app.session.is_idle());
    }

    #[tokio::test]
    async fn pet_add_and_remove() {
        let mut app = test_app();
        app.dispatch("pet add Luna Siamese 4 years").await;
        assert!(app.pets.find_by_name("Luna").is_some());
        app.dispatch("pet remove Luna").await;
        assert!(app.pets.find_by_name("Luna").is_none());
    }

    #[tokio::test]
    async fn pet_use_sets_current_pet() {
        let mut app = test_app();
        app.dispatch("pet use whiskers").await;
        assert_eq!(app.current_pet.as_deref(), Some("Whiskers"));
    }

    #[tokio::test]
    async fn pet_use_removed_pet_clears_selection() {
        let mut app = test_app();
        app.dispatch("pet use Shadow").await;
        app.dispatch("pet remove shadow").await;
        assert!(app.current_pet.is_none());
    }

    #[tokio::test]
    async fn unknown_command_keeps_running() {
        let mut app = test_app();
        assert!(app.dispatch("frobnicate").await);
    }

    #[tokio::test]
    async fn blank_line_keeps_running() {
        let mut app = test_app();
        assert!(app.dispatch("   ").await);
    }
}
