#[cfg(test)]
#[path = "input_test.rs"]
mod tests;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::models::SessionState;
use crate::domain::models::TopicCatalog;

/// Owns the pending draft and the topic suggestion panel.
pub struct InputController {
    draft: String,
    suggestions_open: bool,
    rng: StdRng,
}

impl InputController {
    /// Topic questions are picked uniformly at random. Passing a seed makes
    /// the picks repeatable.
    pub fn new(topic_seed: Option<u64>) -> InputController {
        let rng = match topic_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        return InputController {
            draft: "".to_string(),
            suggestions_open: false,
            rng,
        };
    }

    pub fn draft(&self) -> &str {
        return &self.draft;
    }

    /// Replaces the draft verbatim. Editing also closes the suggestion panel.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
        self.suggestions_open = false;
    }

    /// Seeds the draft with one of the topic's example questions. Never
    /// submits.
    pub fn select_topic(&mut self, label: &str) -> Option<&str> {
        let topic = TopicCatalog::get(label)?;
        let question = topic.questions.choose(&mut self.rng)?;

        tracing::debug!(topic = label, question, "Selected topic question");
        self.draft = question.to_string();
        self.suggestions_open = false;

        return Some(&self.draft);
    }

    /// Same as `select_topic`, addressed by the 1-based position shown in the
    /// suggestion panel.
    pub fn select_topic_number(&mut self, number: usize) -> Option<&str> {
        if number == 0 {
            return None;
        }

        let topic = TopicCatalog::all().get(number - 1)?;
        return self.select_topic(topic.label);
    }

    /// Takes the trimmed draft for submission. Returns `None` without touching
    /// anything if the draft is blank or a question is already in flight.
    pub fn take_submission(&mut self, state: SessionState) -> Option<String> {
        if state.is_awaiting_response() {
            tracing::debug!("Submission ignored, still awaiting a response");
            return None;
        }

        let question = self.draft.trim();
        if question.is_empty() {
            return None;
        }

        let question = question.to_string();
        self.draft.clear();
        self.suggestions_open = false;

        return Some(question);
    }

    pub fn suggestions_open(&self) -> bool {
        return self.suggestions_open;
    }

    pub fn open_suggestions(&mut self) {
        self.suggestions_open = true;
    }

    pub fn toggle_suggestions(&mut self) {
        if self.suggestions_open {
            self.dismiss_suggestions();
        } else {
            self.open_suggestions();
        }
    }

    pub fn dismiss_suggestions(&mut self) {
        self.suggestions_open = false;
    }
}
