use super::{reviewer_assignments, users};
use sea_orm::{entity::prelude::*, QuerySelect};
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_PULL_REQUESTS: &str = "PK_pull_requests";
    pub const FK_PULL_REQUESTS_AUTHOR: &str = "FK_pull_requests_author";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pull_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub author: String,
    pub status: Status,
    pub created_at: DateTimeUtc,
    pub merged_at: Option<DateTimeUtc>,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "MERGED")]
    Merged,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Author,
    ReviewerAssignments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Author => Entity::belongs_to(users::Entity)
                .from(Column::Author)
                .to(users::Column::Id)
                .into(),
            Self::ReviewerAssignments => Entity::has_many(reviewer_assignments::Entity).into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<reviewer_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReviewerAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Pull requests the given user is currently assigned to review.
    #[inline]
    pub fn find_reviewed_by(user_id: &str) -> Select<Entity> {
        Self::find()
            .inner_join(reviewer_assignments::Entity)
            .filter(reviewer_assignments::Column::UserId.eq(user_id))
    }
}
