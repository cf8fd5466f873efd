// src/web/handlers/job_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::matching::{MatchEngine, DEFAULT_RECOMMENDATION_LIMIT};
use crate::store::Stores;
use crate::types::{
    DataResponse, Job, JobMatch, NewJob, SalaryRange, StandardErrorResponse,
};
use crate::wallet::PaymentGateway;
use crate::web::services::JobPostingService;
use crate::web::types::{CreateJobRequest, MatchRequest, RecommendationsRequest};

pub async fn list_jobs_handler(stores: &State<Stores>) -> Json<DataResponse<Vec<Job>>> {
    let jobs = stores.jobs.list().await;
    Json(DataResponse::success(
        format!("{} job postings", jobs.len()),
        jobs,
    ))
}

pub async fn get_job_handler(
    id: String,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<Job>>, Json<StandardErrorResponse>> {
    match stores.jobs.get(&id).await {
        Some(job) => Ok(Json(DataResponse::success(
            "Job posting found".to_string(),
            job,
        ))),
        None => Err(Json(StandardErrorResponse::new(
            format!("Job '{}' not found", id),
            "JOB_NOT_FOUND".to_string(),
            vec!["Check the job id and try again".to_string()],
        ))),
    }
}

pub async fn create_job_handler(
    request: Json<CreateJobRequest>,
    stores: &State<Stores>,
    gateway: &State<PaymentGateway>,
    posting: &State<JobPostingService>,
) -> Result<Json<DataResponse<Job>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    let salary = match (request.salary_min, request.salary_max) {
        (Some(min), Some(max)) => Some(SalaryRange {
            min,
            max,
            currency: "USD".to_string(),
        }),
        _ => None,
    };

    let draft = NewJob {
        title: request.title,
        description: request.description,
        company: request.company,
        location: request.location,
        kind: request.kind,
        salary,
        budget: request.budget,
        skills: request.skills,
        posted_by: request.posted_by,
        payment_tx: None,
    };

    if let Err(e) = JobPostingService::validate(&draft) {
        return Err(Json(StandardErrorResponse::new(
            e.to_string(),
            "INVALID_JOB".to_string(),
            vec!["Fill in every required field".to_string()],
        )));
    }

    if !gateway.is_connected().await {
        return Err(Json(StandardErrorResponse::new(
            "Please connect your wallet to post a job".to_string(),
            "WALLET_NOT_CONNECTED".to_string(),
            vec!["Connect the wallet and retry".to_string()],
        )));
    }

    match posting.post_job(gateway, &stores.jobs, draft).await {
        Ok(job) => {
            info!("Job '{}' posted by {}", job.title, job.posted_by);
            Ok(Json(DataResponse::success(
                "Job posted successfully".to_string(),
                job,
            )))
        }
        Err(e) => {
            error!("Job posting failed: {:#}", e);
            Err(Json(StandardErrorResponse::new(
                "Payment failed. Please try again.".to_string(),
                "PAYMENT_FAILED".to_string(),
                vec!["Check the wallet connection and retry".to_string()],
            )))
        }
    }
}

pub async fn recommendations_handler(
    request: Json<RecommendationsRequest>,
    stores: &State<Stores>,
    engine: &State<MatchEngine>,
) -> Result<Json<DataResponse<Vec<JobMatch>>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    let user = match stores.users.get(&request.user_id).await {
        Some(user) => user,
        None => return Err(user_not_found(&request.user_id)),
    };

    let jobs = stores.jobs.list().await;
    let limit = request.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    let matches = engine.recommend(&user, &jobs, limit);

    Ok(Json(DataResponse::success(
        format!("{} recommendations", matches.len()),
        matches,
    )))
}

pub async fn match_handler(
    request: Json<MatchRequest>,
    stores: &State<Stores>,
    engine: &State<MatchEngine>,
) -> Result<Json<DataResponse<JobMatch>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    let user = match stores.users.get(&request.user_id).await {
        Some(user) => user,
        None => return Err(user_not_found(&request.user_id)),
    };

    let job = match stores.jobs.get(&request.job_id).await {
        Some(job) => job,
        None => {
            return Err(Json(StandardErrorResponse::new(
                format!("Job '{}' not found", request.job_id),
                "JOB_NOT_FOUND".to_string(),
                vec!["Check the job id and try again".to_string()],
            )))
        }
    };

    let result = engine.score(&user, &job);
    Ok(Json(DataResponse::success(
        format!("Match score {}", result.score),
        result,
    )))
}

pub(crate) fn user_not_found(id: &str) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("User '{}' not found", id),
        "USER_NOT_FOUND".to_string(),
        vec!["Register the user first".to_string()],
    ))
}
