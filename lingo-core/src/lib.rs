pub mod audio;
pub mod error;
pub mod screen;
pub mod settings;
pub mod speech;
pub mod translate;

// Public library API - UI applications should only need these.
pub use error::ServiceError;
pub use screen::actor::{ScreenActor, ScreenClients, ScreenRequest};
pub use screen::events::{Notice, NoticeLevel, ScreenEvent};
pub use settings::{Settings, SettingsManager};
pub use translate::types::Language;
