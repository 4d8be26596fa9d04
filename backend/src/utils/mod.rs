pub mod jwt;
pub mod password;
pub mod time;
pub mod wire_date;

pub use jwt::*;
pub use password::*;
pub use time::*;
pub use wire_date::{from_wire_format, to_wire_format, WireDateError};
