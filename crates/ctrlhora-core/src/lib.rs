//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod clock;
mod context;
pub mod errors;
pub mod geolocation;
pub mod use_cases;

pub use context::CoreContext;
#[cfg(any(test, feature = "testkit"))]
pub use context::tests::CoreContextTest;
pub use errors::{DomainError, Result, UserAction};
use shaku::module;
use use_cases::{session::check_is_admin::CheckIsAdmin, users::list_users::ListUsers};

module! {
    pub CoreModule {
        components = [
            CheckIsAdmin, ListUsers
        ],
        providers = []
    }
}
