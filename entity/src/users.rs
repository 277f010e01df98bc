use super::{reviewer_assignments, teams};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_USERS: &str = "PK_users";
    pub const FK_USERS_TEAM: &str = "FK_users_team";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub team: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Team,
    ReviewerAssignments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::Team)
                .to(teams::Column::Name)
                .into(),
            Self::ReviewerAssignments => Entity::has_many(reviewer_assignments::Entity).into(),
        }
    }
}

impl Related<teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<reviewer_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReviewerAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_team(team: &str) -> Select<Entity> {
        Self::find().filter(Column::Team.eq(team))
    }

    #[inline]
    pub fn find_active_in_team(team: &str) -> Select<Entity> {
        Self::find_in_team(team).filter(Column::Active.eq(true))
    }
}
