#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use crate::domain::models::Message;

/// Ordered, append-only list of exchanged messages. Insertion order is the
/// display order.
#[derive(Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn append(&mut self, message: Message) {
        tracing::debug!(
            role = %message.role(),
            index = self.messages.len(),
            "Appending message to transcript"
        );
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }
}
