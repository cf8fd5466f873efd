// src/web/mod.rs
pub mod handlers;
pub mod services;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::config::AppConfig;
use crate::matching::MatchEngine;
use crate::store::Stores;
use crate::types::{
    ActionResponse, Comment, DataResponse, Job, JobMatch, Post, StandardErrorResponse,
    TextResponse, User, WalletConnection,
};
use crate::wallet::PaymentGateway;
use crate::web::services::JobPostingService;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PATCH, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::system_handlers::health_handler().await
}

#[get("/jobs")]
pub async fn list_jobs(stores: &State<Stores>) -> Json<DataResponse<Vec<Job>>> {
    handlers::job_handlers::list_jobs_handler(stores).await
}

#[get("/jobs/<id>")]
pub async fn get_job(
    id: String,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<Job>>, Json<StandardErrorResponse>> {
    handlers::job_handlers::get_job_handler(id, stores).await
}

#[post("/jobs", data = "<request>")]
pub async fn create_job(
    request: Json<CreateJobRequest>,
    stores: &State<Stores>,
    gateway: &State<PaymentGateway>,
    posting: &State<JobPostingService>,
) -> Result<Json<DataResponse<Job>>, Json<StandardErrorResponse>> {
    handlers::job_handlers::create_job_handler(request, stores, gateway, posting).await
}

#[post("/jobs/recommendations", data = "<request>")]
pub async fn job_recommendations(
    request: Json<RecommendationsRequest>,
    stores: &State<Stores>,
    engine: &State<MatchEngine>,
) -> Result<Json<DataResponse<Vec<JobMatch>>>, Json<StandardErrorResponse>> {
    handlers::job_handlers::recommendations_handler(request, stores, engine).await
}

#[post("/match", data = "<request>")]
pub async fn match_job(
    request: Json<MatchRequest>,
    stores: &State<Stores>,
    engine: &State<MatchEngine>,
) -> Result<Json<DataResponse<JobMatch>>, Json<StandardErrorResponse>> {
    handlers::job_handlers::match_handler(request, stores, engine).await
}

#[get("/posts")]
pub async fn list_posts(stores: &State<Stores>) -> Json<DataResponse<Vec<Post>>> {
    handlers::post_handlers::list_posts_handler(stores).await
}

#[post("/posts", data = "<request>")]
pub async fn create_post(
    request: Json<CreatePostRequest>,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<Post>>, Json<StandardErrorResponse>> {
    handlers::post_handlers::create_post_handler(request, stores).await
}

#[post("/posts/<id>/like")]
pub async fn like_post(
    id: String,
    stores: &State<Stores>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::post_handlers::like_post_handler(id, stores).await
}

#[post("/posts/<id>/comments", data = "<request>")]
pub async fn add_comment(
    id: String,
    request: Json<AddCommentRequest>,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<Comment>>, Json<StandardErrorResponse>> {
    handlers::post_handlers::add_comment_handler(id, request, stores).await
}

#[post("/users", data = "<request>")]
pub async fn register_user(
    request: Json<RegisterRequest>,
    stores: &State<Stores>,
    engine: &State<MatchEngine>,
) -> Result<Json<DataResponse<User>>, Json<StandardErrorResponse>> {
    handlers::user_handlers::register_handler(request, stores, engine).await
}

#[get("/users/<id>")]
pub async fn get_user(
    id: String,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<User>>, Json<StandardErrorResponse>> {
    handlers::user_handlers::get_user_handler(id, stores).await
}

#[post("/users/<id>/profile", data = "<request>")]
pub async fn update_profile(
    id: String,
    request: Json<UpdateProfileRequest>,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<User>>, Json<StandardErrorResponse>> {
    handlers::user_handlers::update_profile_handler(id, request, stores).await
}

#[get("/users/<id>/suggestions")]
pub async fn user_suggestions(
    id: String,
    stores: &State<Stores>,
    engine: &State<MatchEngine>,
) -> Result<Json<DataResponse<Vec<String>>>, Json<StandardErrorResponse>> {
    handlers::user_handlers::suggestions_handler(id, stores, engine).await
}

#[post("/skills/extract", data = "<request>")]
pub async fn extract_skills(
    request: Json<ExtractSkillsRequest>,
    engine: &State<MatchEngine>,
) -> Json<DataResponse<Vec<String>>> {
    handlers::user_handlers::extract_skills_handler(request, engine).await
}

#[post("/wallet/connect")]
pub async fn connect_wallet(
    gateway: &State<PaymentGateway>,
) -> Json<DataResponse<WalletConnection>> {
    handlers::wallet_handlers::connect_wallet_handler(gateway).await
}

#[post("/wallet/disconnect")]
pub async fn disconnect_wallet(gateway: &State<PaymentGateway>) -> Json<ActionResponse> {
    handlers::wallet_handlers::disconnect_wallet_handler(gateway).await
}

#[get("/wallet")]
pub async fn wallet_status(
    gateway: &State<PaymentGateway>,
) -> Json<DataResponse<WalletConnection>> {
    handlers::wallet_handlers::wallet_status_handler(gateway).await
}

#[options("/<_..>")]
pub async fn options_preflight() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Assembles the application from explicit state; used directly by tests.
pub fn build_rocket(
    stores: Stores,
    engine: MatchEngine,
    gateway: PaymentGateway,
) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(stores)
        .manage(engine)
        .manage(gateway)
        .manage(JobPostingService::new())
        .register("/api", catchers![bad_request, internal_error])
        .mount(
            "/api",
            routes![
                health,
                list_jobs,
                get_job,
                create_job,
                job_recommendations,
                match_job,
                list_posts,
                create_post,
                like_post,
                add_comment,
                register_user,
                get_user,
                update_profile,
                user_suggestions,
                extract_skills,
                connect_wallet,
                disconnect_wallet,
                wallet_status,
                options_preflight,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: AppConfig, port: u16) -> Result<()> {
    let latency = config.latency();
    let stores = if config.seed_demo_data {
        Stores::with_demo_data(latency)
    } else {
        Stores::new(latency)
    };

    info!("Starting JobHub API server");
    info!("Latency simulation: {}", config.simulate_latency);
    info!("Server: http://0.0.0.0:{}", port);

    let mut rocket_config = rocket::Config::default();
    rocket_config.port = port;
    rocket_config.address = std::net::Ipv4Addr::UNSPECIFIED.into();

    build_rocket(stores, MatchEngine::new(), PaymentGateway::new(latency))
        .configure(rocket_config)
        .launch()
        .await?;

    Ok(())
}
