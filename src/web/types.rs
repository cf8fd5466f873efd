// src/web/types.rs - request payloads for the JSON API
use rocket::serde::Deserialize;

use crate::types::{JobKind, PostKind};

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: JobKind,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub budget: Option<u32>,
    pub skills: Vec<String>,
    pub posted_by: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RecommendationsRequest {
    pub user_id: String,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchRequest {
    pub user_id: String,
    pub job_id: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct CreatePostRequest {
    pub user_id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AddCommentRequest {
    pub user_id: String,
    pub content: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub linkedin_url: Option<String>,
    pub wallet_address: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ExtractSkillsRequest {
    pub text: String,
}
