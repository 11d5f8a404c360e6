/// Guards network submission. A session holds exactly one of these, and only
/// one question may be in flight while it reads `AwaitingResponse`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingResponse,
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        return *self == SessionState::Idle;
    }

    pub fn is_awaiting_response(&self) -> bool {
        return *self == SessionState::AwaitingResponse;
    }
}
