//! Conversational interface for Argus.
//!
//! Provides rule-based query interpretation, turn log management, and
//! response formatting for searching the supplier dataset through chat.

pub mod error;
pub mod formatter;
pub mod interpreter;
pub mod orchestrator;
pub mod search;
pub mod types;

pub use error::ChatError;
pub use formatter::{ResponseFormatter, NO_RESULTS_MESSAGE};
pub use interpreter::QueryInterpreter;
pub use orchestrator::{ChatOrchestrator, APOLOGY_MESSAGE};
pub use search::{StoreSearch, SupplierSearch};
pub use types::{ChatStatus, Turn, TurnEvent, TurnRole};
