pub mod jobs;
pub mod posts;
pub mod users;

pub use jobs::JobStore;
pub use posts::PostStore;
pub use users::UserStore;

use crate::config::Latency;

/// Process-lifetime collections, constructed once and handed to services
/// by reference. Nothing here survives a restart.
pub struct Stores {
    pub jobs: JobStore,
    pub posts: PostStore,
    pub users: UserStore,
}

impl Stores {
    pub fn new(latency: Latency) -> Self {
        Self {
            jobs: JobStore::new(latency),
            posts: PostStore::new(latency),
            users: UserStore::new(latency),
        }
    }

    /// Stores pre-filled with the demo feed and job board.
    pub fn with_demo_data(latency: Latency) -> Self {
        Self {
            jobs: JobStore::with_demo_data(latency),
            posts: PostStore::with_demo_data(latency),
            users: UserStore::new(latency),
        }
    }
}
