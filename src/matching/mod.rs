//! Matching and dashboard aggregation logic.
//!
//! Pure functions over already-fetched rows; all store access stays in the
//! repository layer.

use crate::models::{
    ApplicationStatus, ApplicationWithApplicant, ApplicationWithJob, FreelancerProfile,
    FreelancerStats, Job, RecruiterJob, RecruiterStats,
};

/// Number of profile skills used to seed job recommendations.
pub const RECOMMENDATION_SKILLS: usize = 3;
/// Search results kept per seeding skill.
pub const RESULTS_PER_SKILL: usize = 2;
/// Final cap on the recommendation list.
pub const RECOMMENDATION_CAP: usize = 6;

/// Deduplicate jobs by id, first occurrence wins, capped at `cap`.
///
/// This is deliberately not a ranked merge: the per-skill search order is
/// preserved and later duplicates are dropped.
pub fn dedup_recommendations(jobs: Vec<Job>, cap: usize) -> Vec<Job> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();
    for job in jobs {
        if seen.insert(job.id) {
            unique.push(job);
            if unique.len() == cap {
                break;
            }
        }
    }
    unique
}

/// Profile completion as an integer floor percentage.
///
/// Nine equally weighted checklist points: seven scalar fields plus having at
/// least one skill and at least one tech stack entry. A zero hourly rate does
/// not count as filled.
pub fn profile_completion(profile: &FreelancerProfile) -> u32 {
    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

    let mut completed = 0u32;
    for field in [
        &profile.bio,
        &profile.education,
        &profile.experience,
        &profile.github_url,
        &profile.linkedin_url,
        &profile.portfolio_url,
    ] {
        if filled(field) {
            completed += 1;
        }
    }
    if profile.hourly_rate.is_some_and(|r| r > 0.0) {
        completed += 1;
    }
    if !profile.skills.is_empty() {
        completed += 1;
    }
    if !profile.tech_stacks.is_empty() {
        completed += 1;
    }

    const TOTAL_POINTS: u32 = 9;
    completed * 100 / TOTAL_POINTS
}

/// Application counters for a freelancer dashboard, computed by full scan.
pub fn freelancer_stats(
    applications: &[ApplicationWithJob],
    profile_completion: u32,
) -> FreelancerStats {
    let count = |status: ApplicationStatus| {
        applications
            .iter()
            .filter(|a| a.application.status == status)
            .count() as i64
    };

    FreelancerStats {
        total_applications: applications.len() as i64,
        pending_applications: count(ApplicationStatus::Applied),
        accepted_applications: count(ApplicationStatus::Accepted),
        rejected_applications: count(ApplicationStatus::Rejected),
        profile_completion,
    }
}

/// Job and application counters for a recruiter dashboard.
pub fn recruiter_stats(
    jobs: &[RecruiterJob],
    applications: &[ApplicationWithApplicant],
) -> RecruiterStats {
    let count = |status: ApplicationStatus| {
        applications
            .iter()
            .filter(|a| a.application.status == status)
            .count() as i64
    };

    RecruiterStats {
        total_jobs: jobs.len() as i64,
        active_jobs: jobs.iter().filter(|j| j.is_active).count() as i64,
        total_applications: applications.len() as i64,
        pending_applications: count(ApplicationStatus::Applied),
        shortlisted_applications: count(ApplicationStatus::Shortlisted),
        accepted_applications: count(ApplicationStatus::Accepted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, JobType};

    fn job(id: i64) -> Job {
        Job {
            id,
            recruiter_id: 1,
            company_name: "Acme".to_string(),
            recruiter_name: "Ada Lovelace".to_string(),
            recruiter_email: "ada@acme.test".to_string(),
            title: format!("Job {}", id),
            description: "desc".to_string(),
            pay_per_hour: 50.0,
            experience_level: ExperienceLevel::Mid,
            job_type: JobType::Freelance,
            location: None,
            is_remote: true,
            requirements: None,
            responsibilities: None,
            benefits: None,
            application_deadline: None,
            is_active: true,
            views_count: 0,
            applications_count: 0,
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            required_skills: vec![],
            tech_stack: vec![],
        }
    }

    fn profile() -> FreelancerProfile {
        FreelancerProfile {
            id: 1,
            user_id: 1,
            bio: None,
            hourly_rate: None,
            education: None,
            experience: None,
            years_of_experience: 0,
            github_url: None,
            linkedin_url: None,
            portfolio_url: None,
            is_available: true,
            skills: vec![],
            tech_stacks: vec![],
        }
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let jobs = vec![job(1), job(2), job(1), job(3), job(2)];
        let unique = dedup_recommendations(jobs, 6);
        let ids: Vec<i64> = unique.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_dedup_respects_cap() {
        let jobs = (1..=10).map(job).collect();
        let unique = dedup_recommendations(jobs, RECOMMENDATION_CAP);
        assert_eq!(unique.len(), 6);
        assert_eq!(unique[0].id, 1);
        assert_eq!(unique[5].id, 6);
    }

    #[test]
    fn test_profile_completion_empty() {
        assert_eq!(profile_completion(&profile()), 0);
    }

    #[test]
    fn test_profile_completion_five_scalars_one_skill() {
        // 5 scalar fields filled + 1 skill, 0 tech stacks => 6/9 => 66%
        let mut p = profile();
        p.bio = Some("Systems programmer".to_string());
        p.hourly_rate = Some(80.0);
        p.education = Some("BSc".to_string());
        p.experience = Some("10 years".to_string());
        p.github_url = Some("https://github.com/example".to_string());
        p.skills.push(crate::models::ProfileSkill {
            id: 1,
            name: "Rust".to_string(),
            proficiency_level: "expert".to_string(),
        });
        assert_eq!(profile_completion(&p), 66);
    }

    #[test]
    fn test_profile_completion_zero_rate_not_counted() {
        let mut p = profile();
        p.hourly_rate = Some(0.0);
        assert_eq!(profile_completion(&p), 0);
    }

    #[test]
    fn test_profile_completion_full() {
        let mut p = profile();
        p.bio = Some("b".to_string());
        p.hourly_rate = Some(1.0);
        p.education = Some("e".to_string());
        p.experience = Some("x".to_string());
        p.github_url = Some("g".to_string());
        p.linkedin_url = Some("l".to_string());
        p.portfolio_url = Some("p".to_string());
        p.skills.push(crate::models::ProfileSkill {
            id: 1,
            name: "Rust".to_string(),
            proficiency_level: "expert".to_string(),
        });
        p.tech_stacks.push(crate::models::ProfileTechStack {
            id: 1,
            name: "Linux".to_string(),
            experience_years: 5,
        });
        assert_eq!(profile_completion(&p), 100);
    }
}
