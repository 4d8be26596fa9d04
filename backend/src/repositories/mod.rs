//! Postgres-backed repositories behind mockable traits.

pub mod leave_balance_repository;
pub mod leave_request_repository;
pub mod project_repository;
pub mod user_repository;

pub use leave_balance_repository::{LeaveBalanceRepository, LeaveBalanceRepositoryTrait};
pub use leave_request_repository::{LeaveRequestRepository, LeaveRequestRepositoryTrait};
pub use project_repository::{ProjectRepository, ProjectRepositoryTrait};
pub use user_repository::{UserRepository, UserRepositoryTrait};
