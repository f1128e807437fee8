//! In-memory post repository - used when no database is configured.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::Post;
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository, Session};

/// In-memory repository backed by a `Vec` behind an async RwLock.
///
/// Posts are listed in insertion order.
/// Note: Data is lost on process restart.
#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    store: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, String> for InMemoryPostRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.uuid == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    fn session(&self) -> Box<dyn Session<Post>> {
        Box::new(InMemorySession {
            store: Arc::clone(&self.store),
            pending: Vec::new(),
        })
    }
}

impl PostRepository for InMemoryPostRepository {}

enum Change {
    Upsert(Post),
    Delete(String),
}

struct InMemorySession {
    store: Arc<RwLock<Vec<Post>>>,
    pending: Vec<Change>,
}

#[async_trait]
impl Session<Post> for InMemorySession {
    fn add(&mut self, entity: Post) {
        self.pending.push(Change::Upsert(entity));
    }

    fn delete(&mut self, entity: Post) {
        self.pending.push(Change::Delete(entity.uuid));
    }

    async fn commit(&mut self) -> Result<(), RepoError> {
        // One write lock for the whole stage so readers never see half of it.
        let mut store = self.store.write().await;

        for change in self.pending.drain(..) {
            match change {
                Change::Upsert(post) => match store.iter_mut().find(|p| p.uuid == post.uuid) {
                    Some(existing) => *existing = post,
                    None => store.push(post),
                },
                Change::Delete(uuid) => store.retain(|p| p.uuid != uuid),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> Post {
        Post::new(title.to_string(), String::new(), "01.01.2020".to_string())
    }

    #[tokio::test]
    async fn test_add_is_invisible_until_commit() {
        let repo = InMemoryPostRepository::new();
        let post = post("Title1");

        let mut session = repo.session();
        session.add(post.clone());
        assert!(repo.find_by_id(post.uuid.clone()).await.unwrap().is_none());

        session.commit().await.unwrap();
        let found = repo.find_by_id(post.uuid.clone()).await.unwrap();
        assert_eq!(found, Some(post));
    }

    #[tokio::test]
    async fn test_add_existing_overwrites_in_place() {
        let repo = InMemoryPostRepository::new();
        let first = post("first");
        let mut second = post("second");

        let mut session = repo.session();
        session.add(first.clone());
        session.add(second.clone());
        session.commit().await.unwrap();

        second.update("Title2".into(), "qwert".into(), "01.01.2021".into());
        session.add(second.clone());
        session.commit().await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPostRepository::new();
        let post = post("Title1");

        let mut session = repo.session();
        session.add(post.clone());
        session.commit().await.unwrap();

        session.delete(post.clone());
        session.commit().await.unwrap();

        assert!(repo.find_by_id(post.uuid).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.find_by_id("123".to_string()).await.unwrap().is_none());
    }
}
