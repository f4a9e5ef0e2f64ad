//! Session layer consumed by an external client
//!
//! Wraps the rules and the engine behind a small set of operations
//! that each return a renderable snapshot.

pub mod session;
pub mod snapshot;

pub use session::{GameSession, Mode, Rejection};
pub use snapshot::{CheckFlags, PieceSnapshot, StateSnapshot};
