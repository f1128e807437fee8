use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::post::Entity as PostEntity;

/// Create the `posts` table from the entity definition unless it already exists.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(PostEntity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    tracing::debug!("posts table ready");

    Ok(())
}
