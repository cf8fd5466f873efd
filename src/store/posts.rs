// src/store/posts.rs
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::config::{simulate_delay, Latency};
use crate::types::{Comment, NewComment, NewPost, Post, PostKind};

/// In-memory social feed.
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
    latency: Latency,
}

impl PostStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            latency,
        }
    }

    pub fn with_demo_data(latency: Latency) -> Self {
        Self {
            posts: RwLock::new(demo_posts()),
            latency,
        }
    }

    /// Feed snapshot ordered by creation time, newest first.
    pub async fn list(&self) -> Vec<Post> {
        simulate_delay(self.latency.read).await;
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    pub async fn create(&self, draft: NewPost) -> Post {
        simulate_delay(self.latency.write).await;

        let post = Post {
            id: Uuid::new_v4().to_string(),
            user_id: draft.user_id,
            user_name: draft.user_name,
            user_avatar: draft.user_avatar,
            user_title: draft.user_title,
            content: draft.content,
            kind: draft.kind,
            likes: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
            is_liked: false,
        };

        let mut posts = self.posts.write().await;
        posts.insert(0, post.clone());
        info!("Created post {} by {}", post.id, post.user_name);
        post
    }

    /// Unchecked increment: repeated likes keep counting. Returns the new
    /// count, or `None` when the post does not exist.
    pub async fn like(&self, id: &str) -> Option<u32> {
        simulate_delay(self.latency.write).await;

        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|post| post.id == id)?;
        post.likes += 1;
        post.is_liked = true;
        Some(post.likes)
    }

    /// Appends a comment; `None` when the post does not exist.
    pub async fn add_comment(&self, post_id: &str, draft: NewComment) -> Option<Comment> {
        simulate_delay(self.latency.write).await;

        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|post| post.id == post_id)?;

        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            user_id: draft.user_id,
            user_name: draft.user_name,
            user_avatar: draft.user_avatar,
            content: draft.content,
            created_at: Utc::now(),
        };
        post.comments.push(comment.clone());
        Some(comment)
    }
}

fn demo_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: "1".to_string(),
            user_id: "2".to_string(),
            user_name: "Sarah Chen".to_string(),
            user_avatar: Some("https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string()),
            user_title: Some("Product Manager at TechCorp".to_string()),
            content: "Just launched our new feature! Working with cross-functional teams has been an incredible learning experience. The key is clear communication and setting realistic expectations. #ProductManagement #TeamWork".to_string(),
            kind: PostKind::Achievement,
            likes: 24,
            comments: vec![Comment {
                id: "1".to_string(),
                user_id: "3".to_string(),
                user_name: "Mike Johnson".to_string(),
                user_avatar: None,
                content: "Congratulations! Looking forward to trying it out.".to_string(),
                created_at: now - chrono::Duration::hours(47),
            }],
            created_at: now - chrono::Duration::hours(48),
            is_liked: false,
        },
        Post {
            id: "2".to_string(),
            user_id: "3".to_string(),
            user_name: "David Rodriguez".to_string(),
            user_avatar: Some("https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string()),
            user_title: Some("Senior Software Engineer".to_string()),
            content: "Career advice for junior developers: 1) Focus on fundamentals first 2) Build projects that solve real problems 3) Don't be afraid to ask questions 4) Contribute to open source when possible. What would you add to this list?".to_string(),
            kind: PostKind::Advice,
            likes: 156,
            comments: vec![
                Comment {
                    id: "2".to_string(),
                    user_id: "1".to_string(),
                    user_name: "Alex Johnson".to_string(),
                    user_avatar: None,
                    content: "Great advice! I'd add: Learn to read documentation effectively.".to_string(),
                    created_at: now - chrono::Duration::hours(70),
                },
                Comment {
                    id: "3".to_string(),
                    user_id: "4".to_string(),
                    user_name: "Lisa Park".to_string(),
                    user_avatar: None,
                    content: "Network with other developers and attend meetups!".to_string(),
                    created_at: now - chrono::Duration::hours(69),
                },
            ],
            created_at: now - chrono::Duration::hours(72),
            is_liked: false,
        },
        Post {
            id: "3".to_string(),
            user_id: "4".to_string(),
            user_name: "Emily Watson".to_string(),
            user_avatar: Some("https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string()),
            user_title: Some("UX Designer".to_string()),
            content: "Exciting news! Just completed my certification in AI/UX Design. The intersection of artificial intelligence and user experience is fascinating. Looking forward to applying these new skills in upcoming projects.".to_string(),
            kind: PostKind::Update,
            likes: 89,
            comments: vec![],
            created_at: now - chrono::Duration::hours(96),
            is_liked: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewPost {
        NewPost {
            user_id: "u1".to_string(),
            user_name: "Alex Johnson".to_string(),
            user_avatar: None,
            user_title: None,
            content: "Hello network".to_string(),
            kind: PostKind::Update,
        }
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let store = PostStore::with_demo_data(Latency::none());
        let created = store.create(draft()).await;

        let posts = store.list().await;
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].id, created.id);
        assert!(posts
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn create_starts_with_no_engagement() {
        let store = PostStore::new(Latency::none());

        let post = store.create(draft()).await;
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert!(!post.is_liked);
    }

    #[tokio::test]
    async fn likes_keep_incrementing() {
        let store = PostStore::with_demo_data(Latency::none());

        assert_eq!(store.like("1").await, Some(25));
        assert_eq!(store.like("1").await, Some(26));
        assert_eq!(store.like("missing").await, None);
    }

    #[tokio::test]
    async fn comments_append_in_order() {
        let store = PostStore::with_demo_data(Latency::none());

        let comment = store
            .add_comment(
                "3",
                NewComment {
                    user_id: "u1".to_string(),
                    user_name: "Alex Johnson".to_string(),
                    user_avatar: None,
                    content: "Congrats!".to_string(),
                },
            )
            .await
            .expect("post exists");
        assert_eq!(comment.content, "Congrats!");

        let posts = store.list().await;
        let post = posts.iter().find(|p| p.id == "3").expect("seeded post");
        assert_eq!(post.comments.len(), 1);

        assert!(store
            .add_comment(
                "missing",
                NewComment {
                    user_id: "u1".to_string(),
                    user_name: "Alex Johnson".to_string(),
                    user_avatar: None,
                    content: "lost".to_string(),
                },
            )
            .await
            .is_none());
    }
}
