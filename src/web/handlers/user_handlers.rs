// src/web/handlers/user_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::matching::MatchEngine;
use crate::store::Stores;
use crate::types::{DataResponse, NewUser, ProfileUpdate, StandardErrorResponse, User};
use crate::web::handlers::job_handlers::user_not_found;
use crate::web::types::{ExtractSkillsRequest, RegisterRequest, UpdateProfileRequest};

pub async fn register_handler(
    request: Json<RegisterRequest>,
    stores: &State<Stores>,
    engine: &State<MatchEngine>,
) -> Result<Json<DataResponse<User>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Name and email are required".to_string(),
            "INVALID_REGISTRATION".to_string(),
            vec!["Fill in all required fields".to_string()],
        )));
    }

    if stores.users.find_by_email(&request.email).await.is_some() {
        return Err(Json(StandardErrorResponse::new(
            format!("An account already exists for {}", request.email),
            "USER_EXISTS".to_string(),
            vec!["Use a different email address".to_string()],
        )));
    }

    let bio = request.bio.unwrap_or_default();

    // No skills supplied: derive them from the bio.
    let skills = match request.skills.filter(|skills| !skills.is_empty()) {
        Some(skills) => skills,
        None if !bio.is_empty() => engine.extract_skills(&bio).await,
        None => Vec::new(),
    };

    let user = stores
        .users
        .register(NewUser {
            name: request.name,
            email: request.email,
            bio,
            skills,
            location: request.location,
            title: request.title,
            company: request.company,
            ..NewUser::default()
        })
        .await;

    info!("New member joined: {}", user.name);
    Ok(Json(DataResponse::success(
        "Welcome to the network".to_string(),
        user,
    )))
}

pub async fn get_user_handler(
    id: String,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<User>>, Json<StandardErrorResponse>> {
    match stores.users.get(&id).await {
        Some(user) => Ok(Json(DataResponse::success(
            "User found".to_string(),
            user,
        ))),
        None => Err(user_not_found(&id)),
    }
}

pub async fn update_profile_handler(
    id: String,
    request: Json<UpdateProfileRequest>,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<User>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    let changes = ProfileUpdate {
        bio: request.bio,
        skills: request.skills,
        avatar: request.avatar,
        location: request.location,
        title: request.title,
        company: request.company,
        linkedin_url: request.linkedin_url,
        wallet_address: request.wallet_address,
    };

    match stores.users.update_profile(&id, changes).await {
        Some(user) => Ok(Json(DataResponse::success(
            "Profile updated".to_string(),
            user,
        ))),
        None => Err(user_not_found(&id)),
    }
}

pub async fn suggestions_handler(
    id: String,
    stores: &State<Stores>,
    engine: &State<MatchEngine>,
) -> Result<Json<DataResponse<Vec<String>>>, Json<StandardErrorResponse>> {
    match stores.users.get(&id).await {
        Some(user) => {
            let suggestions = engine.suggestions(&user).await;
            Ok(Json(DataResponse::success(
                "Profile suggestions".to_string(),
                suggestions,
            )))
        }
        None => Err(user_not_found(&id)),
    }
}

pub async fn extract_skills_handler(
    request: Json<ExtractSkillsRequest>,
    engine: &State<MatchEngine>,
) -> Json<DataResponse<Vec<String>>> {
    let skills = engine.extract_skills(&request.text).await;
    Json(DataResponse::success(
        format!("{} skills detected", skills.len()),
        skills,
    ))
}
