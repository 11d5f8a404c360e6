pub mod actions;
mod bubble;
mod bubble_list;
mod conversation;
pub mod events;
mod input;
mod scroll;
mod transcript;

pub use bubble::*;
pub use bubble_list::*;
pub use conversation::*;
pub use input::*;
pub use scroll::*;
pub use transcript::*;
