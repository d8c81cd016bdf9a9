//! Progress reporting for long-running steps

use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Receives start and completion notices for the steps of a scaffold run.
pub trait Progress {
    fn start(&self, message: &str);
    fn succeed(&self, message: &str);
    fn fail(&self, message: &str);
}

impl<P: Progress + ?Sized> Progress for &P {
    fn start(&self, message: &str) {
        (**self).start(message)
    }

    fn succeed(&self, message: &str) {
        (**self).succeed(message)
    }

    fn fail(&self, message: &str) {
        (**self).fail(message)
    }
}

/// Shows a spinner on stderr while a step runs, with the same notices
/// mirrored to the log.
///
/// The spinner is hidden when stderr is not a terminal.
#[derive(Default)]
pub struct ConsoleProgress {
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Option<ProgressBar> {
        self.spinner.borrow_mut().take()
    }
}

impl Progress for ConsoleProgress {
    fn start(&self, message: &str) {
        log::debug!("{message}");
        if let Some(previous) = self.take() {
            previous.finish_and_clear();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("{message}..."));
        spinner.enable_steady_tick(TICK_INTERVAL);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn succeed(&self, message: &str) {
        log::debug!("{message}");
        match self.take() {
            Some(spinner) => spinner.finish_with_message(format!("√ {message}")),
            None => eprintln!("  √ {message}"),
        }
    }

    fn fail(&self, message: &str) {
        log::debug!("{message}");
        match self.take() {
            Some(spinner) => spinner.abandon_with_message(format!("× {message}")),
            None => eprintln!("  × {message}"),
        }
    }
}

/// A single notice received by `RecordingProgress`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Start(String),
    Succeed(String),
    Fail(String),
}

/// Keeps every notice in memory; used where output must stay quiet.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: RefCell<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.borrow().clone()
    }
}

impl Progress for RecordingProgress {
    fn start(&self, message: &str) {
        self.events.borrow_mut().push(ProgressEvent::Start(message.to_string()));
    }

    fn succeed(&self, message: &str) {
        self.events.borrow_mut().push(ProgressEvent::Succeed(message.to_string()));
    }

    fn fail(&self, message: &str) {
        self.events.borrow_mut().push(ProgressEvent::Fail(message.to_string()));
    }
}
