use std::collections::hash_map::Entry;
use std::collections::HashMap;

use posts_common::Post;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory posts, keyed by id. Lives as long as the process.
#[derive(Default)]
pub struct PostStore {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every post currently held.
    pub async fn list(&self) -> HashMap<Uuid, Post> {
        self.posts.read().await.clone()
    }

    /// Insert a post under a freshly generated id that is not already in use.
    pub async fn create(&self, title: String) -> Post {
        let mut posts = self.posts.write().await;
        loop {
            let id = Uuid::new_v4();
            if let Entry::Vacant(slot) = posts.entry(id) {
                let post = Post::new(id, title);
                slot.insert(post.clone());
                return post;
            }
        }
    }

    pub async fn remove(&self, id: Uuid) -> Option<Post> {
        self.posts.write().await.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}
