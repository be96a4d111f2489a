pub(crate) mod check_is_admin;
pub mod get_session;
pub mod login;
pub mod logout;
pub mod require_session;

#[cfg(any(test, feature = "testkit"))]
pub use check_is_admin::MockCheckIsAdminInterface;
pub use check_is_admin::CheckIsAdminInterface;
