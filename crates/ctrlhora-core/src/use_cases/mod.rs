pub mod clocking;
pub mod session;
pub mod users;
