//! Mood journal entries: palette, models, validation, storage

pub mod models;
pub mod normalize;
pub mod scale;
pub mod storage;

pub use models::*;
pub use normalize::normalize;
pub use scale::Mood;
pub use storage::{JournalStorage, StorageError};
