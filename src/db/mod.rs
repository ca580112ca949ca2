//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            user_type TEXT NOT NULL CHECK (user_type IN ('freelancer', 'recruiter')),
            is_active INTEGER NOT NULL DEFAULT 1,
            date_joined TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS freelancer_profiles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL UNIQUE,
            bio TEXT,
            hourly_rate REAL,
            education TEXT,
            experience TEXT,
            years_of_experience INTEGER NOT NULL DEFAULT 0,
            github_url TEXT,
            linkedin_url TEXT,
            portfolio_url TEXT,
            is_available INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recruiter_profiles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL UNIQUE,
            company_name TEXT NOT NULL,
            location TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tech_stacks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS freelancer_skills (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            freelancer_profile_id INTEGER NOT NULL,
            skill_id INTEGER NOT NULL,
            proficiency_level TEXT NOT NULL DEFAULT 'intermediate',
            FOREIGN KEY (freelancer_profile_id) REFERENCES freelancer_profiles(id) ON DELETE CASCADE,
            FOREIGN KEY (skill_id) REFERENCES skills(id) ON DELETE CASCADE,
            UNIQUE (freelancer_profile_id, skill_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS freelancer_tech_stacks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            freelancer_profile_id INTEGER NOT NULL,
            tech_stack_id INTEGER NOT NULL,
            experience_years INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (freelancer_profile_id) REFERENCES freelancer_profiles(id) ON DELETE CASCADE,
            FOREIGN KEY (tech_stack_id) REFERENCES tech_stacks(id) ON DELETE CASCADE,
            UNIQUE (freelancer_profile_id, tech_stack_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recruiter_id INTEGER NOT NULL,
            recruiter_profile_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            pay_per_hour REAL NOT NULL,
            experience_level TEXT NOT NULL CHECK (experience_level IN ('junior', 'mid', 'senior')),
            job_type TEXT NOT NULL DEFAULT 'freelance'
                CHECK (job_type IN ('full-time', 'part-time', 'contract', 'freelance')),
            location TEXT,
            is_remote INTEGER NOT NULL DEFAULT 1,
            requirements TEXT,
            responsibilities TEXT,
            benefits TEXT,
            application_deadline TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            views_count INTEGER NOT NULL DEFAULT 0,
            applications_count INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            FOREIGN KEY (recruiter_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY (recruiter_profile_id) REFERENCES recruiter_profiles(id) ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_skills (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id INTEGER NOT NULL,
            skill_id INTEGER NOT NULL,
            is_required INTEGER NOT NULL DEFAULT 1,
            FOREIGN KEY (job_id) REFERENCES jobs(id) ON DELETE CASCADE,
            FOREIGN KEY (skill_id) REFERENCES skills(id) ON DELETE CASCADE,
            UNIQUE (job_id, skill_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_tech_stacks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id INTEGER NOT NULL,
            tech_stack_id INTEGER NOT NULL,
            is_required INTEGER NOT NULL DEFAULT 1,
            FOREIGN KEY (job_id) REFERENCES jobs(id) ON DELETE CASCADE,
            FOREIGN KEY (tech_stack_id) REFERENCES tech_stacks(id) ON DELETE CASCADE,
            UNIQUE (job_id, tech_stack_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_applications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id INTEGER NOT NULL,
            freelancer_id INTEGER NOT NULL,
            freelancer_profile_id INTEGER NOT NULL,
            cover_letter TEXT NOT NULL,
            proposed_rate REAL,
            availability_date TEXT,
            status TEXT NOT NULL DEFAULT 'applied'
                CHECK (status IN ('applied', 'reviewed', 'shortlisted', 'accepted', 'rejected')),
            recruiter_notes TEXT,
            applied_at TEXT NOT NULL,
            reviewed_at TEXT,
            accepted_at TEXT,
            rejected_at TEXT,
            FOREIGN KEY (job_id) REFERENCES jobs(id) ON DELETE CASCADE,
            FOREIGN KEY (freelancer_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY (freelancer_profile_id) REFERENCES freelancer_profiles(id) ON DELETE CASCADE,
            UNIQUE (job_id, freelancer_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            notification_type TEXT NOT NULL DEFAULT 'application'
                CHECK (notification_type IN ('application', 'job', 'profile', 'system')),
            related_application_id INTEGER,
            related_job_id INTEGER,
            is_read INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            read_at TEXT,
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY (related_application_id) REFERENCES job_applications(id) ON DELETE SET NULL,
            FOREIGN KEY (related_job_id) REFERENCES jobs(id) ON DELETE SET NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_jobs_is_active ON jobs(is_active);
        CREATE INDEX IF NOT EXISTS idx_jobs_created_at ON jobs(created_at);
        CREATE INDEX IF NOT EXISTS idx_jobs_pay_per_hour ON jobs(pay_per_hour);
        CREATE INDEX IF NOT EXISTS idx_jobs_experience_level ON jobs(experience_level);
        CREATE INDEX IF NOT EXISTS idx_jobs_recruiter ON jobs(recruiter_id);
        CREATE INDEX IF NOT EXISTS idx_applications_status ON job_applications(status);
        CREATE INDEX IF NOT EXISTS idx_applications_applied_at ON job_applications(applied_at);
        CREATE INDEX IF NOT EXISTS idx_applications_freelancer ON job_applications(freelancer_id);
        CREATE INDEX IF NOT EXISTS idx_notifications_user ON notifications(user_id);
        CREATE INDEX IF NOT EXISTS idx_notifications_is_read ON notifications(is_read);
        CREATE INDEX IF NOT EXISTS idx_notifications_created_at ON notifications(created_at);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
