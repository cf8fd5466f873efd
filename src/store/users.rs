// src/store/users.rs
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::config::{simulate_delay, Latency};
use crate::types::{NewUser, ProfileUpdate, User};

/// In-memory member registry.
pub struct UserStore {
    users: RwLock<Vec<User>>,
    latency: Latency,
}

impl UserStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            latency,
        }
    }

    pub async fn register(&self, new_user: NewUser) -> User {
        simulate_delay(self.latency.write).await;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: new_user.email,
            bio: new_user.bio,
            linkedin_url: new_user.linkedin_url,
            wallet_address: new_user.wallet_address,
            skills: new_user.skills,
            avatar: new_user.avatar,
            location: new_user.location,
            title: new_user.title,
            company: new_user.company,
            created_at: Utc::now(),
        };

        let mut users = self.users.write().await;
        users.push(user.clone());
        info!("Registered user {} ({})", user.name, user.email);
        user
    }

    pub async fn get(&self, id: &str) -> Option<User> {
        simulate_delay(self.latency.read).await;
        self.users.read().await.iter().find(|user| user.id == id).cloned()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        simulate_delay(self.latency.read).await;
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    /// Applies the `Some` fields of the update; `None` when the user
    /// does not exist.
    pub async fn update_profile(&self, id: &str, changes: ProfileUpdate) -> Option<User> {
        simulate_delay(self.latency.write).await;

        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|user| user.id == id)?;

        if let Some(bio) = changes.bio {
            user.bio = bio;
        }
        if let Some(skills) = changes.skills {
            user.skills = skills;
        }
        if let Some(avatar) = changes.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(location) = changes.location {
            user.location = Some(location);
        }
        if let Some(title) = changes.title {
            user.title = Some(title);
        }
        if let Some(company) = changes.company {
            user.company = Some(company);
        }
        if let Some(linkedin_url) = changes.linkedin_url {
            user.linkedin_url = Some(linkedin_url);
        }
        if let Some(wallet_address) = changes.wallet_address {
            user.wallet_address = Some(wallet_address);
        }

        info!("Updated profile for {}", user.id);
        Some(user.clone())
    }
}
