use std::sync::Arc;

use crate::{
    config::Config,
    db::connection::DbPool,
    repositories::{
        LeaveBalanceRepository, LeaveBalanceRepositoryTrait, LeaveRequestRepository,
        LeaveRequestRepositoryTrait, ProjectRepository, ProjectRepositoryTrait, UserRepository,
        UserRepositoryTrait,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
    pub users: Arc<dyn UserRepositoryTrait>,
    pub projects: Arc<dyn ProjectRepositoryTrait>,
    pub balances: Arc<dyn LeaveBalanceRepositoryTrait>,
    pub leaves: Arc<dyn LeaveRequestRepositoryTrait>,
}

impl AppState {
    /// State backed by the Postgres repositories.
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            pool,
            config,
            users: Arc::new(UserRepository::new()),
            projects: Arc::new(ProjectRepository::new()),
            balances: Arc::new(LeaveBalanceRepository::new()),
            leaves: Arc::new(LeaveRequestRepository::new()),
        }
    }
}
