use jobhub::config::Latency;
use jobhub::matching::MatchEngine;
use jobhub::store::Stores;
use jobhub::wallet::PaymentGateway;
use jobhub::web::build_rocket;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};

async fn client() -> Client {
    let latency = Latency::none();
    let rocket = build_rocket(
        Stores::with_demo_data(latency),
        MatchEngine::with_seed(7),
        PaymentGateway::with_seed(latency, 7),
    );
    Client::tracked(rocket).await.expect("valid rocket instance")
}

#[rocket::async_test]
async fn health_reports_ok() {
    let client = client().await;

    let response = client.get("/api/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(true));
}

#[rocket::async_test]
async fn listing_jobs_returns_seeded_postings() {
    let client = client().await;

    let response = client.get("/api/jobs").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["data"][0]["type"], json!("full-time"));
}

#[rocket::async_test]
async fn posting_a_job_is_payment_gated() {
    let client = client().await;
    let job = json!({
        "title": "Rust Backend Engineer",
        "description": "Own our matching services.",
        "company": "JobHub",
        "location": "Remote",
        "type": "remote",
        "skills": ["Rust", "PostgreSQL"],
        "posted_by": "u1"
    });

    // Without a connected wallet the posting is rejected.
    let response = client
        .post("/api/jobs")
        .header(ContentType::JSON)
        .body(job.to_string())
        .dispatch()
        .await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error_code"], json!("WALLET_NOT_CONNECTED"));

    // Connect, retry: the posting lands with a payment reference.
    let response = client.post("/api/wallet/connect").dispatch().await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["data"]["is_connected"], json!(true));

    let response = client
        .post("/api/jobs")
        .header(ContentType::JSON)
        .body(job.to_string())
        .dispatch()
        .await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["applicants"], json!(0));
    let tx = body["data"]["payment_tx"].as_str().expect("payment reference");
    assert!(tx.starts_with("0x"));

    let response = client.get("/api/jobs").dispatch().await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["data"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["data"][0]["title"], json!("Rust Backend Engineer"));
}

#[rocket::async_test]
async fn register_then_recommend_ranks_jobs() {
    let client = client().await;

    let response = client
        .post("/api/users")
        .header(ContentType::JSON)
        .body(
            json!({
                "name": "Alex Johnson",
                "email": "alex@example.com",
                "bio": "Frontend developer who loves React and TypeScript",
                "location": "San Francisco, CA"
            })
            .to_string(),
        )
        .dispatch()
        .await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(true));
    let user_id = body["data"]["id"].as_str().expect("user id").to_string();
    // Skills were derived from the bio.
    assert!(body["data"]["skills"]
        .as_array()
        .is_some_and(|skills| !skills.is_empty()));

    let response = client
        .post("/api/jobs/recommendations")
        .header(ContentType::JSON)
        .body(json!({ "user_id": user_id, "limit": 3 }).to_string())
        .dispatch()
        .await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(true));

    let matches = body["data"].as_array().expect("match list");
    assert!(matches.len() <= 3);
    let scores: Vec<i64> = matches
        .iter()
        .map(|m| m["score"].as_i64().expect("score"))
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|score| (0..=95).contains(score)));
}

#[rocket::async_test]
async fn feed_supports_likes_and_comments() {
    let client = client().await;

    let response = client
        .post("/api/users")
        .header(ContentType::JSON)
        .body(
            json!({
                "name": "Sam Lee",
                "email": "sam@example.com",
                "skills": ["Rust"]
            })
            .to_string(),
        )
        .dispatch()
        .await;
    let body: Value = response.into_json().await.expect("json body");
    let user_id = body["data"]["id"].as_str().expect("user id").to_string();

    let response = client.post("/api/posts/1/like").dispatch().await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(true));

    let response = client
        .post("/api/posts/1/comments")
        .header(ContentType::JSON)
        .body(json!({ "user_id": user_id, "content": "Well done!" }).to_string())
        .dispatch()
        .await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(true));

    let response = client.get("/api/posts").dispatch().await;
    let body: Value = response.into_json().await.expect("json body");
    let posts = body["data"].as_array().expect("posts");
    let liked = posts
        .iter()
        .find(|post| post["id"] == json!("1"))
        .expect("seeded post");
    assert_eq!(liked["likes"], json!(25));
    assert_eq!(liked["comments"].as_array().map(Vec::len), Some(2));
}

#[rocket::async_test]
async fn wallet_disconnect_resets_state() {
    let client = client().await;

    client.post("/api/wallet/connect").dispatch().await;
    client.post("/api/wallet/disconnect").dispatch().await;

    let response = client.get("/api/wallet").dispatch().await;
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["data"]["is_connected"], json!(false));
    assert!(body["data"].get("address").is_none() || body["data"]["address"].is_null());
}
