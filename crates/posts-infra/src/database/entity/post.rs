//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub pub_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for posts_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            uuid: model.uuid,
            title: model.title,
            body: model.body,
            pub_date: model.pub_date,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<posts_core::domain::Post> for ActiveModel {
    fn from(post: posts_core::domain::Post) -> Self {
        Self {
            uuid: Set(post.uuid),
            title: Set(post.title),
            body: Set(post.body),
            pub_date: Set(post.pub_date),
        }
    }
}
