use super::{pull_requests, users};
use sea_orm::{entity::prelude::*, QueryOrder};

pub mod constraints {
    pub const PK_REVIEWER_ASSIGNMENTS: &str = "PK_reviewer_assignments";
    pub const FK_REVIEWER_ASSIGNMENTS_PR_ID: &str = "FK_reviewer_assignments_pr_id";
    pub const FK_REVIEWER_ASSIGNMENTS_USER_ID: &str = "FK_reviewer_assignments_user_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviewer_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pr_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PullRequest,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::PullRequest => Entity::belongs_to(pull_requests::Entity)
                .from(Column::PrId)
                .to(pull_requests::Column::Id)
                .into(),
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl Related<pull_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PullRequest.def()
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_for_pull_request(pr_id: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::PrId.eq(pr_id))
            .order_by_asc(Column::UserId)
    }
}
