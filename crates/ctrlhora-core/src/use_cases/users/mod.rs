pub mod create_user;
pub mod delete_user;
pub(crate) mod list_users;
pub mod update_user;

#[cfg(any(test, feature = "testkit"))]
pub use list_users::MockListUsersInterface;
pub use list_users::ListUsersInterface;
