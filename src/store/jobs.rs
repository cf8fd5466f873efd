// src/store/jobs.rs
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::config::{simulate_delay, Latency};
use crate::types::{Job, JobKind, JobStatus, NewJob, SalaryRange};

/// In-memory job board. Every operation pauses for the configured
/// simulated latency before touching state.
pub struct JobStore {
    jobs: RwLock<Vec<Job>>,
    latency: Latency,
}

impl JobStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
            latency,
        }
    }

    pub fn with_demo_data(latency: Latency) -> Self {
        Self {
            jobs: RwLock::new(demo_jobs()),
            latency,
        }
    }

    /// Snapshot of every posting, newest first.
    pub async fn list(&self) -> Vec<Job> {
        simulate_delay(self.latency.read).await;
        self.jobs.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Job> {
        simulate_delay(self.latency.read).await;
        self.jobs.read().await.iter().find(|job| job.id == id).cloned()
    }

    /// Persists a draft with a fresh id, the current timestamp and zero
    /// applicants, prepending it to the board.
    pub async fn create(&self, draft: NewJob) -> Job {
        simulate_delay(self.latency.write).await;

        let job = Job {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            company: draft.company,
            location: draft.location,
            kind: draft.kind,
            salary: draft.salary,
            skills: draft.skills,
            budget: draft.budget,
            posted_by: draft.posted_by,
            posted_at: Utc::now(),
            status: JobStatus::Active,
            applicants: 0,
            payment_tx: draft.payment_tx,
        };

        let mut jobs = self.jobs.write().await;
        jobs.insert(0, job.clone());
        info!("Created job posting: {} ({})", job.title, job.id);
        job
    }
}

fn demo_jobs() -> Vec<Job> {
    let now = Utc::now();
    vec![
        Job {
            id: "1".to_string(),
            title: "Senior Frontend Developer".to_string(),
            description: "We are looking for a skilled frontend developer with expertise in React, TypeScript, and modern web technologies. You will be working on cutting-edge projects and collaborating with a talented team.".to_string(),
            company: "TechFlow Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            kind: JobKind::FullTime,
            salary: Some(SalaryRange { min: 120_000, max: 180_000, currency: "USD".to_string() }),
            skills: vec!["React".to_string(), "TypeScript".to_string(), "JavaScript".to_string(), "CSS".to_string(), "HTML".to_string()],
            budget: None,
            posted_by: "1".to_string(),
            posted_at: now - chrono::Duration::days(2),
            status: JobStatus::Active,
            applicants: 45,
            payment_tx: None,
        },
        Job {
            id: "2".to_string(),
            title: "Blockchain Developer".to_string(),
            description: "Join our Web3 team and help build the future of decentralized applications. Experience with Solidity, smart contracts, and DeFi protocols required.".to_string(),
            company: "CryptoVentures".to_string(),
            location: "Remote".to_string(),
            kind: JobKind::Contract,
            salary: None,
            skills: vec!["Solidity".to_string(), "Web3".to_string(), "Ethereum".to_string(), "Smart Contracts".to_string(), "JavaScript".to_string()],
            budget: Some(15_000),
            posted_by: "2".to_string(),
            posted_at: now - chrono::Duration::days(3),
            status: JobStatus::Active,
            applicants: 23,
            payment_tx: None,
        },
        Job {
            id: "3".to_string(),
            title: "Full-Stack Engineer".to_string(),
            description: "Looking for a versatile full-stack engineer to work on our SaaS platform. Experience with Node.js, React, and cloud technologies preferred.".to_string(),
            company: "DataSync Solutions".to_string(),
            location: "New York, NY".to_string(),
            kind: JobKind::FullTime,
            salary: Some(SalaryRange { min: 100_000, max: 140_000, currency: "USD".to_string() }),
            skills: vec!["Node.js".to_string(), "React".to_string(), "MongoDB".to_string(), "AWS".to_string(), "Docker".to_string()],
            budget: None,
            posted_by: "3".to_string(),
            posted_at: now - chrono::Duration::days(4),
            status: JobStatus::Active,
            applicants: 67,
            payment_tx: None,
        },
        Job {
            id: "4".to_string(),
            title: "AI/ML Engineer".to_string(),
            description: "Exciting opportunity to work on machine learning projects. Experience with Python, TensorFlow, and data science required.".to_string(),
            company: "AI Innovations".to_string(),
            location: "Austin, TX".to_string(),
            kind: JobKind::FullTime,
            salary: Some(SalaryRange { min: 130_000, max: 200_000, currency: "USD".to_string() }),
            skills: vec!["Python".to_string(), "Machine Learning".to_string(), "TensorFlow".to_string(), "Deep Learning".to_string(), "Data Science".to_string()],
            budget: None,
            posted_by: "4".to_string(),
            posted_at: now - chrono::Duration::days(5),
            status: JobStatus::Active,
            applicants: 89,
            payment_tx: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewJob {
        NewJob {
            title: "Rust Engineer".to_string(),
            description: "Build backend services.".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            kind: JobKind::Remote,
            salary: None,
            budget: None,
            skills: vec!["Rust".to_string()],
            posted_by: "u1".to_string(),
            payment_tx: Some("0xabc".to_string()),
        }
    }

    #[tokio::test]
    async fn create_assigns_identity_and_prepends() {
        let store = JobStore::with_demo_data(Latency::none());

        let job = store.create(draft()).await;
        assert_eq!(job.applicants, 0);
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.payment_tx.as_deref(), Some("0xabc"));
        assert!(!job.id.is_empty());

        let jobs = store.list().await;
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs[0].id, job.id);
    }

    #[tokio::test]
    async fn get_finds_seeded_posting() {
        let store = JobStore::with_demo_data(Latency::none());

        let job = store.get("2").await.expect("seeded job");
        assert_eq!(job.company, "CryptoVentures");
        assert!(store.get("missing").await.is_none());
    }
}
