pub mod error;
pub mod config;

pub mod command;
pub mod intent;
pub mod classifier;
pub mod session;

pub use crate::classifier::{Classifier, KeywordClassifier};
pub use crate::config::ChatboxConfig;
pub use crate::error::{ChatError, ChatResult};
pub use crate::intent::{IntentCatalog, IntentEntry, ResponseSelector};
pub use crate::session::{Session, SessionEnd};
