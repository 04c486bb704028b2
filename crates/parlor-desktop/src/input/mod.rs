//! Input collaboration contracts
//!
//! The drag subsystem itself (momentum, snap previews) lives outside this
//! engine; this module defines the contract it is driven through and the
//! outcome type the desktop surface commits.

mod drag;

pub use drag::{DragOutcome, DragProposal, DragResolver, DragSession};
