#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Event;

async fn ask_backend(
    backend: Arc<BackendBox>,
    prompt: BackendPrompt,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let res = backend.ask(&prompt).await;
    if let Err(err) = &res {
        tracing::error!(error = ?err, "Backend request failed");
    }

    tx.send(Event::BackendResponse(BackendResponse::from(res)))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs backend requests off the UI loop. Each request reports back with
    /// exactly one `Event::BackendResponse`, whether it succeeded or not.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let backend = Arc::new(backend);

        while let Some(action) = rx.recv().await {
            match action {
                Action::BackendRequest(prompt) => {
                    let worker_backend = backend.clone();
                    let worker_tx = tx.clone();
                    tokio::spawn(async move {
                        return ask_backend(worker_backend, prompt, worker_tx).await;
                    });
                }
            }
        }

        return Ok(());
    }
}
