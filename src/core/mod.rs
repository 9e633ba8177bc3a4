//! Check context and issue locations.

pub mod context;
mod location;

pub use context::{CheckContext, plural_rule_for};
pub use location::{MessageContext, MessageLocation};
