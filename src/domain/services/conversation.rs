#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use ratatui::prelude::Rect;

use super::BubbleList;
use super::InputController;
use super::Scroll;
use super::Transcript;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Message;
use crate::domain::models::SessionState;

pub const FALLBACK_MESSAGE: &str =
    "I'm sorry, I'm having trouble connecting right now. Please try again later.";

/// One user's chat with the assistant. Owns the transcript and the session
/// state, and is the only thing allowed to change either.
pub struct ConversationSession {
    transcript: Transcript,
    state: SessionState,
    pub input: InputController,
    pub bubble_list: BubbleList,
    pub scroll: Scroll,
    pub last_known_height: u16,
    pub last_known_width: u16,
}

impl ConversationSession {
    pub fn new(
        username: &str,
        assistant_name: &str,
        topic_seed: Option<u64>,
    ) -> ConversationSession {
        return ConversationSession {
            transcript: Transcript::default(),
            state: SessionState::Idle,
            input: InputController::new(topic_seed),
            bubble_list: BubbleList::new(username, assistant_name),
            scroll: Scroll::default(),
            last_known_height: 0,
            last_known_width: 0,
        };
    }

    pub fn messages(&self) -> &[Message] {
        return self.transcript.messages();
    }

    pub fn state(&self) -> SessionState {
        return self.state;
    }

    /// Submits the current draft. Returns the prompt to send to the backend,
    /// or `None` when the draft is blank or a question is already in flight.
    pub fn submit(&mut self) -> Option<BackendPrompt> {
        let question = self.input.take_submission(self.state)?;
        return self.begin_ask(question);
    }

    /// Records the question and locks the session until a response settles.
    /// Rejected, not queued, if the session isn't idle.
    pub fn begin_ask(&mut self, question: String) -> Option<BackendPrompt> {
        if !self.state.is_idle() {
            tracing::debug!(
                state = %self.state,
                "Rejected question, a request is already in flight"
            );
            return None;
        }

        self.transcript.append(Message::user(&question));
        tracing::debug!(messages = self.transcript.len(), "Question recorded");
        self.set_state(SessionState::AwaitingResponse);

        return Some(BackendPrompt::new(question));
    }

    /// Settles the in-flight question with exactly one assistant message and
    /// unlocks the session. Failures are replaced with `FALLBACK_MESSAGE`.
    pub fn handle_backend_response(&mut self, res: BackendResponse) {
        if !self.state.is_awaiting_response() {
            tracing::warn!("Dropping backend response, no question is in flight");
            return;
        }

        match res {
            BackendResponse::Answered(text) => {
                self.transcript.append(Message::assistant(&text));
            }
            BackendResponse::Failed(err) => {
                tracing::error!(
                    error = %err,
                    "Assistant request failed, using fallback message"
                );
                self.transcript.append(Message::assistant(FALLBACK_MESSAGE));
            }
        }

        self.set_state(SessionState::Idle);
    }

    /// Runs a whole exchange against `backend`. Returns false if the question
    /// was rejected because another one is still in flight.
    pub async fn ask(&mut self, backend: &BackendBox, question: &str) -> bool {
        let prompt = match self.begin_ask(question.to_string()) {
            Some(prompt) => prompt,
            None => return false,
        };

        let res = backend.ask(&prompt).await;
        self.handle_backend_response(BackendResponse::from(res));

        return true;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn set_state(&mut self, state: SessionState) {
        tracing::debug!(from = %self.state, to = %state, "Session state changed");
        self.state = state;
        self.sync_dependants();
    }

    /// Re-renders new bubbles and snaps the transcript viewport to the newest
    /// line. Runs on every transcript or state change, before the next draw.
    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(self.transcript.messages(), self.last_known_width as usize);

        let list_length = u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(list_length, self.last_known_height);
        self.scroll.last();
    }
}
