pub mod config;
pub mod manager;

#[cfg(test)]
mod tests;

pub use config::{Credentials, ServiceSettings, Settings};
pub use manager::SettingsManager;
