use super::BackendPrompt;

pub enum Action {
    BackendRequest(BackendPrompt),
}
