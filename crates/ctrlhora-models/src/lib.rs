//! Domain models.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod clock_event_kind;
mod gps_position;
mod session;
mod user;

pub use clock_event_kind::{ClockEventKind, ClockEventKindError};
pub use gps_position::{GpsPosition, GpsPositionError};
pub use session::Session;
pub use user::{NewUser, User, UserUpdate};
