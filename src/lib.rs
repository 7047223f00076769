//! Intent matching engine for the KIT campus assistant.
//!
//! A user message is scored against every trigger phrase of every intent in a
//! [`Catalog`]; the best-scoring intent answers with one of its replies, rotated
//! so the same reply is not handed out twice in a row.

pub mod matcher;
pub mod model;
pub mod responses;
pub mod scorer;
pub mod server;
pub mod settings;

pub use matcher::{
    IntentMatcher, ACCEPTANCE_THRESHOLD, EMPTY_INPUT_REPLY, NO_MATCH_REPLY, UNRESOLVED_REPLY,
};
pub use model::{Catalog, Intent};
pub use responses::{ResponseMemory, ResponseSelector, ROTATION_WINDOW};
pub use scorer::score;
pub use settings::Settings;
