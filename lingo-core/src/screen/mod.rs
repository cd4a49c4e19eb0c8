pub mod actor;
pub mod empty_watch;
pub mod events;

#[cfg(test)]
mod tests;

pub use actor::{ScreenActor, ScreenClients, ScreenRequest};
pub use events::{Notice, NoticeLevel, ScreenEvent};
