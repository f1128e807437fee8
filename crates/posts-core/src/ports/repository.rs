use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait: lookups plus a unit of work for writes.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. Returns at most one match.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Load every stored entity, in backend order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Open a new session for staging writes.
    fn session(&self) -> Box<dyn Session<T>>;
}

/// Unit of work. Changes are staged with `add`/`delete` and only become
/// visible once `commit` succeeds.
#[async_trait]
pub trait Session<T>: Send {
    /// Stage an entity for insertion, or for overwrite if its ID is already stored.
    fn add(&mut self, entity: T);

    /// Stage an entity for removal.
    fn delete(&mut self, entity: T);

    /// Apply all staged changes atomically and clear the stage.
    ///
    /// On error nothing is applied and the staged changes are dropped.
    async fn commit(&mut self) -> Result<(), RepoError>;
}

/// Post repository, keyed by the post's string uuid.
pub trait PostRepository: BaseRepository<Post, String> {}
