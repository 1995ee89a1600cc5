//! Scripted user interaction and navigation recorders

use std::collections::VecDeque;

use bizhub_core::{Interaction, Navigator};
use parking_lot::Mutex;

/// Answers confirms and prompts from a script; records every alert.
#[derive(Default)]
pub struct ScriptedInteraction {
    confirms: Mutex<VecDeque<bool>>,
    prompts: Mutex<VecDeque<Option<String>>>,
    alerts: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(answer: bool) -> Self {
        let this = Self::new();
        this.confirms.lock().push_back(answer);
        this
    }

    pub fn prompting(answer: Option<&str>) -> Self {
        let this = Self::new();
        this.prompts.lock().push_back(answer.map(str::to_string));
        this
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().clone()
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&self, message: &str) -> bool {
        self.questions.lock().push(message.to_string());
        self.confirms.lock().pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.questions.lock().push(message.to_string());
        self.prompts.lock().pop_front().flatten()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited.lock().push(url.to_string());
    }
}
