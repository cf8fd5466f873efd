// src/web/handlers/post_handlers.rs
use rocket::serde::json::Json;
use rocket::State;

use crate::store::Stores;
use crate::types::{
    ActionResponse, Comment, DataResponse, NewComment, NewPost, Post, StandardErrorResponse,
};
use crate::web::handlers::job_handlers::user_not_found;
use crate::web::types::{AddCommentRequest, CreatePostRequest};

pub async fn list_posts_handler(stores: &State<Stores>) -> Json<DataResponse<Vec<Post>>> {
    let posts = stores.posts.list().await;
    Json(DataResponse::success(
        format!("{} posts", posts.len()),
        posts,
    ))
}

pub async fn create_post_handler(
    request: Json<CreatePostRequest>,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<Post>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    if request.content.trim().is_empty() {
        return Err(Json(StandardErrorResponse::new(
            "Post content cannot be empty".to_string(),
            "INVALID_POST".to_string(),
            vec!["Write something before publishing".to_string()],
        )));
    }

    let author = match stores.users.get(&request.user_id).await {
        Some(user) => user,
        None => return Err(user_not_found(&request.user_id)),
    };

    let post = stores
        .posts
        .create(NewPost {
            user_id: author.id,
            user_name: author.name,
            user_avatar: author.avatar,
            user_title: author.title,
            content: request.content,
            kind: request.kind,
        })
        .await;

    Ok(Json(DataResponse::success(
        "Post published".to_string(),
        post,
    )))
}

pub async fn like_post_handler(
    id: String,
    stores: &State<Stores>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    match stores.posts.like(&id).await {
        Some(likes) => Ok(Json(ActionResponse::success(
            format!("Post now has {} likes", likes),
            "liked".to_string(),
        ))),
        None => Err(post_not_found(&id)),
    }
}

pub async fn add_comment_handler(
    id: String,
    request: Json<AddCommentRequest>,
    stores: &State<Stores>,
) -> Result<Json<DataResponse<Comment>>, Json<StandardErrorResponse>> {
    let request = request.into_inner();

    let author = match stores.users.get(&request.user_id).await {
        Some(user) => user,
        None => return Err(user_not_found(&request.user_id)),
    };

    let draft = NewComment {
        user_id: author.id,
        user_name: author.name,
        user_avatar: author.avatar,
        content: request.content,
    };

    match stores.posts.add_comment(&id, draft).await {
        Some(comment) => Ok(Json(DataResponse::success(
            "Comment added".to_string(),
            comment,
        ))),
        None => Err(post_not_found(&id)),
    }
}

fn post_not_found(id: &str) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("Post '{}' not found", id),
        "POST_NOT_FOUND".to_string(),
        vec!["Refresh the feed and try again".to_string()],
    ))
}
