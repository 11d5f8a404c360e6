mod action;
mod backend;
mod event;
mod loading;
mod message;
mod role;
mod session_state;
mod textarea;
mod topic;

pub use action::*;
pub use backend::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use role::*;
pub use session_state::*;
pub use textarea::*;
pub use topic::*;
