pub mod approvals;
pub mod auth;
pub mod common;
pub mod health;
pub mod leave;
pub mod projects;

#[cfg(test)]
pub(crate) mod test_support;

pub use approvals::*;
pub use auth::*;
pub use health::*;
pub use leave::*;
pub use projects::*;
