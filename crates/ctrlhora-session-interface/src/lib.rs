//! Session storage interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::{Result, SessionError};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockSessionStore;
pub use interface::SessionStore;
