pub mod skills;
pub mod suggestions;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::types::{Job, JobMatch, User};

/// Scores are hard-capped below 100 so a listing never reads as a sure thing.
pub const MAX_SCORE: u8 = 95;
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

const LOCATION_BONUS: f64 = 10.0;
const BIO_BONUS: f64 = 5.0;

/// Profile-to-job matcher. Scoring itself is deterministic; the engine
/// only carries a randomness source for skill extraction and suggestions,
/// seedable so tests can pin both down.
pub struct MatchEngine {
    rng: Mutex<StdRng>,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn score(&self, user: &User, job: &Job) -> JobMatch {
        score(user, job)
    }

    pub fn recommend(&self, user: &User, jobs: &[Job], limit: usize) -> Vec<JobMatch> {
        recommend(user, jobs, limit)
    }

    pub async fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut rng = self.rng.lock().await;
        skills::extract_skills(text, &mut *rng)
    }

    pub async fn suggestions(&self, user: &User) -> Vec<String> {
        let mut rng = self.rng.lock().await;
        suggestions::for_user(user, &mut *rng)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Heuristic fit between a profile and a posting: skill overlap
/// percentage plus location and bio bonuses, capped at [`MAX_SCORE`].
pub fn score(user: &User, job: &Job) -> JobMatch {
    let user_skills: Vec<String> = user.skills.iter().map(|s| s.to_lowercase()).collect();
    let job_skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();

    // Bidirectional substring containment, not exact equality: "react"
    // matches both "react.js" and "react native".
    let matched: Vec<&String> = user_skills
        .iter()
        .filter(|us| {
            job_skills
                .iter()
                .any(|js| js.contains(us.as_str()) || us.contains(js.as_str()))
        })
        .collect();

    let skill_match_percentage = if job_skills.is_empty() {
        0.0
    } else {
        matched.len() as f64 / job_skills.len() as f64 * 100.0
    };

    let location_bonus = location_bonus(user, job);
    let bio_bonus = bio_bonus(user, job);
    let total = (skill_match_percentage + location_bonus + bio_bonus).min(MAX_SCORE as f64);

    let mut reasons = Vec::new();
    if !matched.is_empty() {
        let sample: Vec<&str> = matched.iter().take(3).map(|s| s.as_str()).collect();
        reasons.push(format!(
            "{} matching skills: {}",
            matched.len(),
            sample.join(", ")
        ));
    }
    if location_bonus > 0.0 {
        reasons.push("Location compatibility".to_string());
    }
    if bio_bonus > 0.0 {
        reasons.push("Relevant experience in bio".to_string());
    }

    JobMatch {
        job: job.clone(),
        score: total.round() as u8,
        reasons,
    }
}

/// Scores every posting and keeps the best `limit`. The sort is stable,
/// so equally scored postings keep their input order.
pub fn recommend(user: &User, jobs: &[Job], limit: usize) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs.iter().map(|job| score(user, job)).collect();
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}

fn location_bonus(user: &User, job: &Job) -> f64 {
    let user_location = match user.location.as_deref() {
        Some(loc) if !loc.is_empty() => loc.to_lowercase(),
        _ => return 0.0,
    };
    if job.location.is_empty() {
        return 0.0;
    }
    let job_location = job.location.to_lowercase();

    let compatible = user_location.contains(&job_location)
        || job_location.contains(&user_location)
        || job_location.contains("remote")
        || user_location.contains("remote");

    if compatible {
        LOCATION_BONUS
    } else {
        0.0
    }
}

fn bio_bonus(user: &User, job: &Job) -> f64 {
    let bio = user.bio.to_lowercase();
    let description = job.description.to_lowercase();

    let relevant = description.split_whitespace().any(|word| bio.contains(word));
    if relevant {
        BIO_BONUS
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JobKind, JobStatus};
    use chrono::Utc;

    fn user(skills: &[&str], location: Option<&str>, bio: &str) -> User {
        User {
            id: "u1".into(),
            name: "Alex Johnson".into(),
            email: "alex@example.com".into(),
            bio: bio.into(),
            linkedin_url: None,
            wallet_address: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            avatar: None,
            location: location.map(String::from),
            title: None,
            company: None,
            created_at: Utc::now(),
        }
    }

    fn job(skills: &[&str], location: &str, description: &str) -> Job {
        Job {
            id: "j1".into(),
            title: "Engineer".into(),
            description: description.into(),
            company: "Acme".into(),
            location: location.into(),
            kind: JobKind::FullTime,
            salary: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            budget: None,
            posted_by: "u2".into(),
            posted_at: Utc::now(),
            status: JobStatus::Active,
            applicants: 0,
            payment_tx: None,
        }
    }

    #[test]
    fn partial_skill_overlap_scores_a_third() {
        let user = user(&["React", "TypeScript"], None, "");
        let job = job(&["React", "Node.js", "CSS"], "", "");

        let result = score(&user, &job);
        assert_eq!(result.score, 33);
        assert_eq!(result.reasons, vec!["1 matching skills: react"]);
    }

    #[test]
    fn empty_job_skill_list_contributes_zero() {
        let user = user(&["Rust"], None, "");
        let job = job(&[], "", "");

        let result = score(&user, &job);
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn score_never_exceeds_cap() {
        let user = user(
            &["React", "TypeScript", "JavaScript", "CSS", "HTML"],
            Some("Remote"),
            "I ship React frontends",
        );
        let job = job(
            &["React", "TypeScript", "JavaScript", "CSS", "HTML"],
            "Remote",
            "React frontends all day",
        );

        let result = score(&user, &job);
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn remote_mention_grants_location_bonus() {
        let user = user(&[], Some("Berlin"), "");
        let job = job(&["Rust"], "Remote", "");

        let result = score(&user, &job);
        assert_eq!(result.score, 10);
        assert_eq!(result.reasons, vec!["Location compatibility"]);
    }

    #[test]
    fn missing_user_location_means_no_bonus() {
        let user = user(&[], None, "");
        let job = job(&["Rust"], "Remote", "");

        assert_eq!(score(&user, &job).score, 0);
    }

    #[test]
    fn bio_token_overlap_grants_bonus() {
        let user = user(&[], None, "Seasoned backend engineer");
        let job = job(&["Go"], "", "We need a backend person");

        let result = score(&user, &job);
        assert_eq!(result.score, 5);
        assert_eq!(result.reasons, vec!["Relevant experience in bio"]);
    }

    #[test]
    fn reasons_sample_first_three_matched_skills() {
        let user = user(&["React", "CSS", "HTML", "TypeScript"], None, "");
        let job = job(&["React", "CSS", "HTML", "TypeScript"], "", "");

        let result = score(&user, &job);
        assert_eq!(
            result.reasons,
            vec!["4 matching skills: react, css, html"]
        );
    }

    #[test]
    fn recommend_sorts_descending_and_truncates() {
        let user = user(&["Rust"], None, "");
        let jobs = vec![
            job(&["Python"], "", ""),
            job(&["Rust"], "", ""),
            job(&["Rust", "Python"], "", ""),
            job(&["Go"], "", ""),
        ];

        let ranked = recommend(&user, &jobs, 3);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranked[0].score, MAX_SCORE);
    }

    #[test]
    fn recommend_keeps_input_order_on_ties() {
        let user = user(&["Rust"], None, "");
        let mut first = job(&["Rust"], "", "");
        first.id = "first".into();
        let mut second = job(&["Rust"], "", "");
        second.id = "second".into();

        let ranked = recommend(&user, &[first, second], 5);
        assert_eq!(ranked[0].job.id, "first");
        assert_eq!(ranked[1].job.id, "second");
    }
}
