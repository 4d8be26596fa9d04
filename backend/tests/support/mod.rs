#![allow(dead_code)]
use std::{env, sync::OnceLock};

use chrono::NaiveDate;
use leavedesk_backend::{config::Config, utils::password::hash_password};
use sqlx::{postgres::PgPoolOptions, PgPool};

pub const TEST_PASSWORD: &str = "Passw0rd!";

/// Connects to `TEST_DATABASE_URL` and applies migrations.
///
/// Returns `None` when the variable is unset so database tests can skip.
pub async fn test_pool() -> Option<PgPool> {
    let url = match env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping database test");
            return None;
        }
    };
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect to test database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    Some(pool)
}

pub async fn integration_guard() -> tokio::sync::MutexGuard<'static, ()> {
    static GUARD: OnceLock<tokio::sync::Mutex<()>> = OnceLock::new();
    GUARD
        .get_or_init(|| tokio::sync::Mutex::new(()))
        .lock()
        .await
}

pub fn test_config() -> Config {
    let mut config = Config::from_lookup(|_| None).expect("default config");
    config.jwt_secret = "integration-test-secret".into();
    config
}

pub async fn reset_tables(pool: &PgPool) {
    sqlx::query(
        "TRUNCATE leave_requests, leave_balances, employee_projects, projects, users \
         RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await
    .expect("truncate tables");
}

pub async fn seed_user(
    pool: &PgPool,
    emp_id: &str,
    username: &str,
    name: &str,
    is_manager: bool,
) {
    let hash = hash_password(TEST_PASSWORD).expect("hash password");
    sqlx::query(
        "INSERT INTO users (emp_id, username, password_hash, name, designation, is_manager) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(emp_id)
    .bind(username)
    .bind(hash)
    .bind(name)
    .bind(if is_manager { "Engineering Manager" } else { "Software Engineer" })
    .bind(is_manager)
    .execute(pool)
    .await
    .expect("insert user");
}

pub async fn seed_project(
    pool: &PgPool,
    name: &str,
    approver_id: &str,
    members: &[&str],
) -> i64 {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO projects (name, description, approver_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(format!("{} project", name))
    .bind(approver_id)
    .fetch_one(pool)
    .await
    .expect("insert project");

    for member in members {
        sqlx::query("INSERT INTO employee_projects (emp_id, project_id) VALUES ($1, $2)")
            .bind(member)
            .bind(id)
            .execute(pool)
            .await
            .expect("assign project");
    }
    id
}

pub async fn seed_balance(pool: &PgPool, emp_id: &str, leave_type: &str, balance: f64) {
    sqlx::query("INSERT INTO leave_balances (emp_id, leave_type, balance) VALUES ($1, $2, $3)")
        .bind(emp_id)
        .bind(leave_type)
        .bind(balance)
        .execute(pool)
        .await
        .expect("insert balance");
}

pub async fn balance_of(pool: &PgPool, emp_id: &str, leave_type: &str) -> f64 {
    sqlx::query_scalar("SELECT balance FROM leave_balances WHERE emp_id = $1 AND leave_type = $2")
        .bind(emp_id)
        .bind(leave_type)
        .fetch_one(pool)
        .await
        .expect("balance row")
}

/// Standard fixture: manager EMP001 approves project Atlas, which EMP002 works on.
pub async fn seed_team(pool: &PgPool) -> i64 {
    seed_user(pool, "EMP001", "jsmith", "Jane Smith", true).await;
    seed_user(pool, "EMP002", "arao", "Asha Rao", false).await;
    let project_id = seed_project(pool, "Atlas", "EMP001", &["EMP002"]).await;
    seed_balance(pool, "EMP002", "CASUAL_LEAVE", 5.0).await;
    project_id
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
