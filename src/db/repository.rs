//! Database repository for all store operations.
//!
//! Multi-statement write flows (job creation, application creation, status
//! updates) run inside a single transaction and roll back wholesale on any
//! failure. Read flows are plain queries.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Application, ApplicationStatus, ApplicationWithApplicant, ApplicationWithJob,
    ApplyRequest, CreateJobRequest, ExperienceLevel, FreelancerProfile, Job, JobFilters,
    JobType, Notification, NotificationType, ProfileSkill, ProfileTechStack, RecruiterJob,
    RecruiterProfile, UserRole,
};

/// Base SELECT for hydrated job rows.
const JOB_SELECT: &str = r#"
    SELECT j.id, j.recruiter_id, j.title, j.description, j.pay_per_hour,
           j.experience_level, j.job_type, j.location, j.is_remote,
           j.requirements, j.responsibilities, j.benefits, j.application_deadline,
           j.is_active, j.views_count, j.applications_count, j.created_at,
           rp.company_name,
           u.first_name || ' ' || u.last_name AS recruiter_name,
           u.email AS recruiter_email
    FROM jobs j
    JOIN recruiter_profiles rp ON j.recruiter_profile_id = rp.id
    JOIN users u ON j.recruiter_id = u.id
"#;

const APPLICATION_SELECT: &str = r#"
    SELECT id, job_id, freelancer_id, cover_letter, proposed_rate,
           availability_date, status, recruiter_notes, applied_at,
           reviewed_at, accepted_at, rejected_at
    FROM job_applications
"#;

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== ACCOUNT / PROFILE OPERATIONS ====================

    /// Resolve the role of an active account, if it exists.
    pub async fn get_user_role(&self, user_id: i64) -> Result<Option<UserRole>, AppError> {
        let row = sqlx::query("SELECT user_type FROM users WHERE id = ? AND is_active = 1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.and_then(|r| {
            let user_type: String = r.get("user_type");
            UserRole::from_str(&user_type)
        }))
    }

    /// Get a freelancer profile by user id, hydrated with skills and tech stacks.
    pub async fn get_freelancer_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<FreelancerProfile>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, user_id, bio, hourly_rate, education, experience,
                      years_of_experience, github_url, linkedin_url, portfolio_url,
                      is_available
               FROM freelancer_profiles WHERE user_id = ?"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let profile_id: i64 = row.get("id");

        let skill_rows = sqlx::query(
            r#"SELECT s.id, s.name, fs.proficiency_level
               FROM freelancer_skills fs
               JOIN skills s ON fs.skill_id = s.id
               WHERE fs.freelancer_profile_id = ?
               ORDER BY fs.id"#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        let tech_rows = sqlx::query(
            r#"SELECT ts.id, ts.name, fts.experience_years
               FROM freelancer_tech_stacks fts
               JOIN tech_stacks ts ON fts.tech_stack_id = ts.id
               WHERE fts.freelancer_profile_id = ?
               ORDER BY fts.id"#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        let is_available: i64 = row.get("is_available");

        Ok(Some(FreelancerProfile {
            id: profile_id,
            user_id: row.get("user_id"),
            bio: row.get("bio"),
            hourly_rate: row.get("hourly_rate"),
            education: row.get("education"),
            experience: row.get("experience"),
            years_of_experience: row.get("years_of_experience"),
            github_url: row.get("github_url"),
            linkedin_url: row.get("linkedin_url"),
            portfolio_url: row.get("portfolio_url"),
            is_available: is_available != 0,
            skills: skill_rows
                .iter()
                .map(|r| ProfileSkill {
                    id: r.get("id"),
                    name: r.get("name"),
                    proficiency_level: r.get("proficiency_level"),
                })
                .collect(),
            tech_stacks: tech_rows
                .iter()
                .map(|r| ProfileTechStack {
                    id: r.get("id"),
                    name: r.get("name"),
                    experience_years: r.get("experience_years"),
                })
                .collect(),
        }))
    }

    /// Get a recruiter profile by user id.
    pub async fn get_recruiter_profile(
        &self,
        user_id: i64,
    ) -> Result<Option<RecruiterProfile>, AppError> {
        let row = sqlx::query(
            "SELECT id, user_id, company_name, location FROM recruiter_profiles WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| RecruiterProfile {
            id: r.get("id"),
            user_id: r.get("user_id"),
            company_name: r.get("company_name"),
            location: r.get("location"),
        }))
    }

    // ==================== JOB OPERATIONS ====================

    /// Search active jobs with normalized filters, newest first, unbounded.
    pub async fn search_jobs(&self, filters: &JobFilters) -> Result<Vec<Job>, AppError> {
        let mut sql = format!("{JOB_SELECT} WHERE j.is_active = 1");

        if filters.search.is_some() {
            sql.push_str(
                " AND (LOWER(j.title) LIKE LOWER(?) \
                  OR LOWER(j.description) LIKE LOWER(?) \
                  OR LOWER(COALESCE(j.requirements, '')) LIKE LOWER(?))",
            );
        }
        if filters.experience_level.is_some() {
            sql.push_str(" AND j.experience_level = ?");
        }
        if filters.min_pay.is_some() {
            sql.push_str(" AND j.pay_per_hour >= ?");
        }
        if filters.max_pay.is_some() {
            sql.push_str(" AND j.pay_per_hour <= ?");
        }
        if filters.job_type.is_some() {
            sql.push_str(" AND j.job_type = ?");
        }
        if filters.is_remote {
            sql.push_str(" AND j.is_remote = 1");
        }
        sql.push_str(" ORDER BY j.created_at DESC");

        let like = filters.search.as_ref().map(|s| format!("%{}%", s));

        let mut query = sqlx::query(&sql);
        if let Some(pattern) = &like {
            query = query.bind(pattern).bind(pattern).bind(pattern);
        }
        if let Some(level) = &filters.experience_level {
            query = query.bind(level);
        }
        if let Some(min) = filters.min_pay {
            query = query.bind(min);
        }
        if let Some(max) = filters.max_pay {
            query = query.bind(max);
        }
        if let Some(job_type) = &filters.job_type {
            query = query.bind(job_type);
        }

        let rows = query.fetch_all(&self.pool).await?;

        let mut jobs = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut job = job_from_row(row);
            self.hydrate_job_catalog(&mut job).await?;
            jobs.push(job);
        }

        Ok(jobs)
    }

    /// Get a job by id, hydrated. Every successful fetch increments the view
    /// counter by one; the returned row reflects the pre-increment value.
    pub async fn get_job(&self, job_id: i64) -> Result<Option<Job>, AppError> {
        let sql = format!("{JOB_SELECT} WHERE j.id = ?");
        let row = sqlx::query(&sql)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut job = job_from_row(&row);
        self.hydrate_job_catalog(&mut job).await?;

        sqlx::query("UPDATE jobs SET views_count = views_count + 1 WHERE id = ?")
            .bind(job_id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(job_id, "job view count incremented");

        Ok(Some(job))
    }

    /// Recruiter id owning a job, without touching the view counter.
    pub async fn job_owner(&self, job_id: i64) -> Result<Option<i64>, AppError> {
        let row = sqlx::query("SELECT recruiter_id FROM jobs WHERE id = ?")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("recruiter_id")))
    }

    /// Create a job posting with its catalog links in one transaction.
    pub async fn create_job(
        &self,
        recruiter_id: i64,
        request: &CreateJobRequest,
    ) -> Result<i64, AppError> {
        let pay_per_hour = request
            .pay_per_hour
            .ok_or_else(|| AppError::Validation("pay_per_hour is required".to_string()))?;
        let experience_level = request
            .experience_level
            .ok_or_else(|| AppError::Validation("experience_level is required".to_string()))?;

        let mut tx = self.pool.begin().await?;

        let profile = sqlx::query("SELECT id FROM recruiter_profiles WHERE user_id = ?")
            .bind(recruiter_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Recruiter profile not found".to_string()))?;
        let profile_id: i64 = profile.get("id");

        let now = Utc::now().to_rfc3339();
        let job_type = request.job_type.unwrap_or(JobType::Freelance);
        let is_remote = request.is_remote.unwrap_or(true);

        let result = sqlx::query(
            r#"INSERT INTO jobs (
                recruiter_id, recruiter_profile_id, title, description,
                pay_per_hour, experience_level, job_type, location, is_remote,
                requirements, responsibilities, benefits, application_deadline,
                is_active, views_count, applications_count, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, 0, 0, ?)"#,
        )
        .bind(recruiter_id)
        .bind(profile_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(pay_per_hour)
        .bind(experience_level.as_str())
        .bind(job_type.as_str())
        .bind(&request.location)
        .bind(is_remote as i32)
        .bind(&request.requirements)
        .bind(&request.responsibilities)
        .bind(&request.benefits)
        .bind(&request.application_deadline)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        let job_id = result.last_insert_rowid();

        for skill_name in &request.required_skills {
            let skill_id = upsert_catalog_entry(&mut tx, "skills", skill_name, &now).await?;
            sqlx::query(
                "INSERT OR IGNORE INTO job_skills (job_id, skill_id, is_required) VALUES (?, ?, 1)",
            )
            .bind(job_id)
            .bind(skill_id)
            .execute(&mut *tx)
            .await?;
        }

        for tech_name in &request.tech_stack {
            let tech_id = upsert_catalog_entry(&mut tx, "tech_stacks", tech_name, &now).await?;
            sqlx::query(
                "INSERT OR IGNORE INTO job_tech_stacks (job_id, tech_stack_id, is_required) VALUES (?, ?, 1)",
            )
            .bind(job_id)
            .bind(tech_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!(job_id, recruiter_id, "job created");

        Ok(job_id)
    }

    /// All jobs owned by a recruiter, annotated with a live application count.
    pub async fn list_jobs_by_recruiter(
        &self,
        recruiter_id: i64,
    ) -> Result<Vec<RecruiterJob>, AppError> {
        let rows = sqlx::query(
            r#"SELECT j.id, j.title, j.description, j.pay_per_hour, j.experience_level,
                      j.job_type, j.location, j.is_remote, j.is_active, j.views_count,
                      j.applications_count, j.created_at,
                      (SELECT COUNT(*) FROM job_applications WHERE job_id = j.id)
                          AS total_applications
               FROM jobs j
               WHERE j.recruiter_id = ?
               ORDER BY j.created_at DESC"#,
        )
        .bind(recruiter_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(recruiter_job_from_row).collect())
    }

    /// Attach skill and tech-stack names to a job.
    async fn hydrate_job_catalog(&self, job: &mut Job) -> Result<(), AppError> {
        let skill_rows = sqlx::query(
            r#"SELECT s.name FROM job_skills js
               JOIN skills s ON js.skill_id = s.id
               WHERE js.job_id = ? ORDER BY js.id"#,
        )
        .bind(job.id)
        .fetch_all(&self.pool)
        .await?;
        job.required_skills = skill_rows.iter().map(|r| r.get("name")).collect();

        let tech_rows = sqlx::query(
            r#"SELECT ts.name FROM job_tech_stacks jts
               JOIN tech_stacks ts ON jts.tech_stack_id = ts.id
               WHERE jts.job_id = ? ORDER BY jts.id"#,
        )
        .bind(job.id)
        .fetch_all(&self.pool)
        .await?;
        job.tech_stack = tech_rows.iter().map(|r| r.get("name")).collect();

        Ok(())
    }

    // ==================== APPLICATION OPERATIONS ====================

    /// Create an application and its side effects in one transaction:
    /// insert with status `applied`, bump the job's application counter, and
    /// notify the recruiter. Duplicate (job, freelancer) pairs are rejected
    /// here and backstopped by the store's uniqueness constraint.
    pub async fn create_application(
        &self,
        job_id: i64,
        freelancer_id: i64,
        request: &ApplyRequest,
    ) -> Result<i64, AppError> {
        let cover_letter = request
            .cover_letter
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("Cover letter is required".to_string()))?;

        let mut tx = self.pool.begin().await?;

        let job = sqlx::query("SELECT recruiter_id, title FROM jobs WHERE id = ?")
            .bind(job_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
        let recruiter_id: i64 = job.get("recruiter_id");
        let job_title: String = job.get("title");

        let profile = sqlx::query("SELECT id FROM freelancer_profiles WHERE user_id = ?")
            .bind(freelancer_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Freelancer profile not found".to_string()))?;
        let profile_id: i64 = profile.get("id");

        let existing =
            sqlx::query("SELECT id FROM job_applications WHERE job_id = ? AND freelancer_id = ?")
                .bind(job_id)
                .bind(freelancer_id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(
                "You have already applied for this job".to_string(),
            ));
        }

        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"INSERT INTO job_applications (
                job_id, freelancer_id, freelancer_profile_id,
                cover_letter, proposed_rate, availability_date, status, applied_at
            ) VALUES (?, ?, ?, ?, ?, ?, 'applied', ?)"#,
        )
        .bind(job_id)
        .bind(freelancer_id)
        .bind(profile_id)
        .bind(cover_letter)
        .bind(request.proposed_rate)
        .bind(&request.availability_date)
        .bind(&now)
        .execute(&mut *tx)
        .await;

        let application_id = match result {
            Ok(res) => res.last_insert_rowid(),
            // Lost the race against a concurrent apply for the same pair.
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(AppError::Conflict(
                    "You have already applied for this job".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        sqlx::query("UPDATE jobs SET applications_count = applications_count + 1 WHERE id = ?")
            .bind(job_id)
            .execute(&mut *tx)
            .await?;

        insert_notification(
            &mut tx,
            recruiter_id,
            "New Job Application",
            &format!("A freelancer has applied for {}", job_title),
            NotificationType::Application,
            Some(application_id),
            Some(job_id),
            &now,
        )
        .await?;

        tx.commit().await?;
        tracing::info!(application_id, job_id, freelancer_id, "application created");

        Ok(application_id)
    }

    /// Set an application's status, stamp the matching timestamp, and notify
    /// the freelancer, all in one transaction. Returns the updated record.
    pub async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
        recruiter_notes: Option<&str>,
    ) -> Result<Application, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"SELECT ja.freelancer_id, ja.job_id, j.title
               FROM job_applications ja
               JOIN jobs j ON ja.job_id = j.id
               WHERE ja.id = ?"#,
        )
        .bind(application_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

        let freelancer_id: i64 = row.get("freelancer_id");
        let job_id: i64 = row.get("job_id");
        let job_title: String = row.get("title");

        let now = Utc::now().to_rfc3339();

        // Re-entering a stamped status overwrites its timestamp.
        match status.timestamp_column() {
            Some(column) => {
                let sql = format!(
                    "UPDATE job_applications SET status = ?, recruiter_notes = ?, {column} = ? WHERE id = ?"
                );
                sqlx::query(&sql)
                    .bind(status.as_str())
                    .bind(recruiter_notes)
                    .bind(&now)
                    .bind(application_id)
                    .execute(&mut *tx)
                    .await?;
            }
            None => {
                sqlx::query(
                    "UPDATE job_applications SET status = ?, recruiter_notes = ? WHERE id = ?",
                )
                .bind(status.as_str())
                .bind(recruiter_notes)
                .bind(application_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        insert_notification(
            &mut tx,
            freelancer_id,
            &format!("Application {}", status.title_case()),
            &format!(
                "Your application for {} has been {}",
                job_title,
                status.as_str()
            ),
            NotificationType::Application,
            Some(application_id),
            Some(job_id),
            &now,
        )
        .await?;

        let sql = format!("{APPLICATION_SELECT} WHERE id = ?");
        let updated = sqlx::query(&sql)
            .bind(application_id)
            .fetch_one(&mut *tx)
            .await?;
        let application = application_from_row(&updated);

        tx.commit().await?;
        tracing::info!(application_id, status = status.as_str(), "application status updated");

        Ok(application)
    }

    /// Recruiter id owning the job an application targets.
    pub async fn application_owner(&self, application_id: i64) -> Result<Option<i64>, AppError> {
        let row = sqlx::query(
            r#"SELECT j.recruiter_id
               FROM job_applications ja
               JOIN jobs j ON ja.job_id = j.id
               WHERE ja.id = ?"#,
        )
        .bind(application_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| r.get("recruiter_id")))
    }

    /// Applications for a job, newest first, hydrated with applicant data.
    pub async fn list_applications_by_job(
        &self,
        job_id: i64,
    ) -> Result<Vec<ApplicationWithApplicant>, AppError> {
        let rows = sqlx::query(
            r#"SELECT ja.id, ja.job_id, ja.freelancer_id, ja.cover_letter, ja.proposed_rate,
                      ja.availability_date, ja.status, ja.recruiter_notes, ja.applied_at,
                      ja.reviewed_at, ja.accepted_at, ja.rejected_at,
                      ja.freelancer_profile_id,
                      fp.hourly_rate, fp.years_of_experience,
                      u.first_name || ' ' || u.last_name AS freelancer_name,
                      u.email AS freelancer_email
               FROM job_applications ja
               JOIN users u ON ja.freelancer_id = u.id
               JOIN freelancer_profiles fp ON ja.freelancer_profile_id = fp.id
               WHERE ja.job_id = ?
               ORDER BY ja.applied_at DESC"#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        let mut applications = Vec::with_capacity(rows.len());
        for row in &rows {
            let profile_id: i64 = row.get("freelancer_profile_id");
            let skill_rows = sqlx::query(
                r#"SELECT s.name FROM freelancer_skills fs
                   JOIN skills s ON fs.skill_id = s.id
                   WHERE fs.freelancer_profile_id = ?
                   ORDER BY fs.id"#,
            )
            .bind(profile_id)
            .fetch_all(&self.pool)
            .await?;

            applications.push(ApplicationWithApplicant {
                application: application_from_row(row),
                freelancer_name: row.get("freelancer_name"),
                freelancer_email: row.get("freelancer_email"),
                hourly_rate: row.get("hourly_rate"),
                years_of_experience: row.get("years_of_experience"),
                skills: skill_rows.iter().map(|r| r.get("name")).collect(),
            });
        }

        Ok(applications)
    }

    /// Applications by a freelancer, newest first, hydrated with job data.
    pub async fn list_applications_by_freelancer(
        &self,
        freelancer_id: i64,
    ) -> Result<Vec<ApplicationWithJob>, AppError> {
        let rows = sqlx::query(
            r#"SELECT ja.id, ja.job_id, ja.freelancer_id, ja.cover_letter, ja.proposed_rate,
                      ja.availability_date, ja.status, ja.recruiter_notes, ja.applied_at,
                      ja.reviewed_at, ja.accepted_at, ja.rejected_at,
                      j.title AS job_title, j.pay_per_hour, j.experience_level,
                      rp.company_name
               FROM job_applications ja
               JOIN jobs j ON ja.job_id = j.id
               JOIN recruiter_profiles rp ON j.recruiter_profile_id = rp.id
               WHERE ja.freelancer_id = ?
               ORDER BY ja.applied_at DESC"#,
        )
        .bind(freelancer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let level: String = row.get("experience_level");
                ApplicationWithJob {
                    application: application_from_row(row),
                    job_title: row.get("job_title"),
                    pay_per_hour: row.get("pay_per_hour"),
                    experience_level: ExperienceLevel::from_str(&level)
                        .unwrap_or(ExperienceLevel::Junior),
                    company_name: row.get("company_name"),
                }
            })
            .collect())
    }

    // ==================== NOTIFICATION OPERATIONS ====================

    /// Notifications for a user, newest first, capped at `limit`.
    pub async fn list_notifications(
        &self,
        user_id: i64,
        unread_only: bool,
        limit: i64,
    ) -> Result<Vec<Notification>, AppError> {
        let mut sql = String::from(
            r#"SELECT id, user_id, title, message, notification_type,
                      related_application_id, related_job_id, is_read, created_at, read_at
               FROM notifications WHERE user_id = ?"#,
        );
        if unread_only {
            sql.push_str(" AND is_read = 0");
        }
        sql.push_str(" ORDER BY created_at DESC LIMIT ?");

        let rows = sqlx::query(&sql)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(notification_from_row).collect())
    }

    /// Count of unread notifications for a user.
    pub async fn unread_notification_count(&self, user_id: i64) -> Result<i64, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM notifications WHERE user_id = ? AND is_read = 0",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get("count"))
    }

    /// Mark one notification read. Ownership is enforced in the WHERE clause;
    /// returns false when nothing matched.
    pub async fn mark_notification_read(
        &self,
        notification_id: i64,
        user_id: i64,
    ) -> Result<bool, AppError> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "UPDATE notifications SET is_read = 1, read_at = ? WHERE id = ? AND user_id = ?",
        )
        .bind(&now)
        .bind(notification_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Mark every unread notification for a user as read; returns the count.
    pub async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64, AppError> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "UPDATE notifications SET is_read = 1, read_at = ? WHERE user_id = ? AND is_read = 0",
        )
        .bind(&now)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

/// Get-or-create a catalog row by unique name, returning its id.
///
/// Runs on the caller's transaction so a rolled-back job creation leaves no
/// orphaned catalog rows.
async fn upsert_catalog_entry(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    table: &str,
    name: &str,
    now: &str,
) -> Result<i64, AppError> {
    let sql = format!(
        "INSERT INTO {table} (name, created_at) VALUES (?, ?) \
         ON CONFLICT(name) DO UPDATE SET name = excluded.name \
         RETURNING id"
    );
    let row = sqlx::query(&sql)
        .bind(name)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.get("id"))
}

/// Append a notification row on the caller's transaction.
#[allow(clippy::too_many_arguments)]
async fn insert_notification(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    user_id: i64,
    title: &str,
    message: &str,
    notification_type: NotificationType,
    related_application_id: Option<i64>,
    related_job_id: Option<i64>,
    now: &str,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"INSERT INTO notifications (
            user_id, title, message, notification_type,
            related_application_id, related_job_id, is_read, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, 0, ?)"#,
    )
    .bind(user_id)
    .bind(title)
    .bind(message)
    .bind(notification_type.as_str())
    .bind(related_application_id)
    .bind(related_job_id)
    .bind(now)
    .execute(&mut **tx)
    .await?;

    Ok(result.last_insert_rowid())
}

// Helper functions for row conversion

fn job_from_row(row: &sqlx::sqlite::SqliteRow) -> Job {
    let experience_level: String = row.get("experience_level");
    let job_type: String = row.get("job_type");
    let is_remote: i64 = row.get("is_remote");
    let is_active: i64 = row.get("is_active");

    Job {
        id: row.get("id"),
        recruiter_id: row.get("recruiter_id"),
        company_name: row.get("company_name"),
        recruiter_name: row.get("recruiter_name"),
        recruiter_email: row.get("recruiter_email"),
        title: row.get("title"),
        description: row.get("description"),
        pay_per_hour: row.get("pay_per_hour"),
        experience_level: ExperienceLevel::from_str(&experience_level)
            .unwrap_or(ExperienceLevel::Junior),
        job_type: JobType::from_str(&job_type).unwrap_or(JobType::Freelance),
        location: row.get("location"),
        is_remote: is_remote != 0,
        requirements: row.get("requirements"),
        responsibilities: row.get("responsibilities"),
        benefits: row.get("benefits"),
        application_deadline: row.get("application_deadline"),
        is_active: is_active != 0,
        views_count: row.get("views_count"),
        applications_count: row.get("applications_count"),
        created_at: row.get("created_at"),
        required_skills: Vec::new(),
        tech_stack: Vec::new(),
    }
}

fn recruiter_job_from_row(row: &sqlx::sqlite::SqliteRow) -> RecruiterJob {
    let experience_level: String = row.get("experience_level");
    let job_type: String = row.get("job_type");
    let is_remote: i64 = row.get("is_remote");
    let is_active: i64 = row.get("is_active");

    RecruiterJob {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        pay_per_hour: row.get("pay_per_hour"),
        experience_level: ExperienceLevel::from_str(&experience_level)
            .unwrap_or(ExperienceLevel::Junior),
        job_type: JobType::from_str(&job_type).unwrap_or(JobType::Freelance),
        location: row.get("location"),
        is_remote: is_remote != 0,
        is_active: is_active != 0,
        views_count: row.get("views_count"),
        applications_count: row.get("applications_count"),
        total_applications: row.get("total_applications"),
        created_at: row.get("created_at"),
    }
}

fn application_from_row(row: &sqlx::sqlite::SqliteRow) -> Application {
    let status: String = row.get("status");

    Application {
        id: row.get("id"),
        job_id: row.get("job_id"),
        freelancer_id: row.get("freelancer_id"),
        cover_letter: row.get("cover_letter"),
        proposed_rate: row.get("proposed_rate"),
        availability_date: row.get("availability_date"),
        status: ApplicationStatus::from_str(&status).unwrap_or(ApplicationStatus::Applied),
        recruiter_notes: row.get("recruiter_notes"),
        applied_at: row.get("applied_at"),
        reviewed_at: row.get("reviewed_at"),
        accepted_at: row.get("accepted_at"),
        rejected_at: row.get("rejected_at"),
    }
}

fn notification_from_row(row: &sqlx::sqlite::SqliteRow) -> Notification {
    let notification_type: String = row.get("notification_type");
    let is_read: i64 = row.get("is_read");

    Notification {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        message: row.get("message"),
        notification_type: NotificationType::from_str(&notification_type)
            .unwrap_or(NotificationType::System),
        related_application_id: row.get("related_application_id"),
        related_job_id: row.get("related_job_id"),
        is_read: is_read != 0,
        created_at: row.get("created_at"),
        read_at: row.get("read_at"),
    }
}
