//! PostgreSQL repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DbConn, DbErr, EntityTrait, TransactionTrait};

use posts_core::domain::Post;
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository, Session};

use super::connections::{DatabaseConfig, connect};
use super::entity::post::{self, Entity as PostEntity};
use super::schema::ensure_schema;

/// PostgreSQL post repository.
///
/// The connection is shared behind an `Arc`: `DatabaseConnection` is not
/// `Clone` when sea-orm's `mock` feature is enabled.
pub struct PostgresPostRepository {
    db: Arc<DbConn>,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Open a pool from `config` and make sure the `posts` table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = connect(config).await?;
        ensure_schema(&db).await?;
        Ok(Self::new(db))
    }
}

#[async_trait]
impl BaseRepository<Post, String> for PostgresPostRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_uuid = %id, "Finding post by uuid");

        let result = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    fn session(&self) -> Box<dyn Session<Post>> {
        Box::new(PostgresSession {
            db: Arc::clone(&self.db),
            pending: Vec::new(),
        })
    }
}

impl PostRepository for PostgresPostRepository {}

enum Change {
    Upsert(post::ActiveModel),
    Delete(String),
}

/// Buffers changes and writes them in a single transaction on commit.
pub struct PostgresSession {
    db: Arc<DbConn>,
    pending: Vec<Change>,
}

#[async_trait]
impl Session<Post> for PostgresSession {
    fn add(&mut self, entity: Post) {
        self.pending.push(Change::Upsert(entity.into()));
    }

    fn delete(&mut self, entity: Post) {
        self.pending.push(Change::Delete(entity.uuid));
    }

    async fn commit(&mut self) -> Result<(), RepoError> {
        let changes: Vec<Change> = self.pending.drain(..).collect();
        if changes.is_empty() {
            return Ok(());
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        for change in changes {
            match change {
                Change::Upsert(model) => {
                    PostEntity::insert(model)
                        .on_conflict(
                            OnConflict::column(post::Column::Uuid)
                                .update_columns([
                                    post::Column::Title,
                                    post::Column::Body,
                                    post::Column::PubDate,
                                ])
                                .to_owned(),
                        )
                        .exec_without_returning(&txn)
                        .await
                        .map_err(write_error)?;
                }
                Change::Delete(uuid) => {
                    PostEntity::delete_by_id(uuid)
                        .exec(&txn)
                        .await
                        .map_err(write_error)?;
                }
            }
        }

        // Dropping `txn` on an early return above rolls it back.
        txn.commit().await.map_err(write_error)?;
        Ok(())
    }
}

fn write_error(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Post already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}
