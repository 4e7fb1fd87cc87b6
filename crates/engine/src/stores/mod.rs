//! In-memory state storage modules.
//!
//! - `SessionStore` - the tooth session behind every request

pub mod session;

pub use session::SessionStore;
