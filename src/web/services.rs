// src/web/services.rs
use anyhow::{bail, Context, Result};
use tracing::info;

use crate::store::JobStore;
use crate::types::{Job, NewJob};
use crate::wallet::{PaymentGateway, JOB_POSTING_FEE_ETH, TREASURY_ADDRESS};

/// Payment-gated job creation: the posting fee must clear before the
/// draft reaches the store.
pub struct JobPostingService {
    fee_eth: f64,
    treasury: String,
}

impl JobPostingService {
    pub fn new() -> Self {
        Self {
            fee_eth: JOB_POSTING_FEE_ETH,
            treasury: TREASURY_ADDRESS.to_string(),
        }
    }

    pub fn with_fee(mut self, fee_eth: f64) -> Self {
        self.fee_eth = fee_eth;
        self
    }

    pub fn validate(draft: &NewJob) -> Result<()> {
        if draft.title.trim().is_empty() {
            bail!("Job title is required");
        }
        if draft.description.trim().is_empty() {
            bail!("Job description is required");
        }
        if draft.company.trim().is_empty() {
            bail!("Company name is required");
        }
        if draft.location.trim().is_empty() {
            bail!("Location is required");
        }
        if draft.skills.iter().all(|skill| skill.trim().is_empty()) {
            bail!("Required skills are needed");
        }
        if let Some(salary) = &draft.salary {
            if salary.min > salary.max {
                bail!("Salary minimum exceeds maximum");
            }
        }
        Ok(())
    }

    /// Charges the posting fee, then persists the draft carrying the
    /// transaction id. On any payment error nothing is stored.
    pub async fn post_job(
        &self,
        gateway: &PaymentGateway,
        jobs: &JobStore,
        mut draft: NewJob,
    ) -> Result<Job> {
        Self::validate(&draft)?;

        if !gateway.is_connected().await {
            bail!("Wallet not connected");
        }

        let tx = gateway
            .pay(self.fee_eth, &self.treasury)
            .await
            .context("Posting fee payment failed")?;
        info!("Posting fee cleared in tx {}", tx);

        draft.payment_tx = Some(tx);
        Ok(jobs.create(draft).await)
    }
}

impl Default for JobPostingService {
    fn default() -> Self {
        Self::new()
    }
}
