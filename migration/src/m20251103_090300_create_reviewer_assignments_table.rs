use entity::{
    pull_requests,
    reviewer_assignments::{self, constraints::*},
    users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(reviewer_assignments::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(reviewer_assignments::Column::PrId)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(reviewer_assignments::Column::UserId)
                            .string_len(255)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_REVIEWER_ASSIGNMENTS)
                            .col(reviewer_assignments::Column::PrId)
                            .col(reviewer_assignments::Column::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEWER_ASSIGNMENTS_PR_ID)
                            .from(
                                reviewer_assignments::Entity,
                                reviewer_assignments::Column::PrId,
                            )
                            .to(pull_requests::Entity, pull_requests::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEWER_ASSIGNMENTS_USER_ID)
                            .from(
                                reviewer_assignments::Entity,
                                reviewer_assignments::Column::UserId,
                            )
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IDX_reviewer_assignments_user_id")
                    .table(reviewer_assignments::Entity)
                    .col(reviewer_assignments::Column::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(reviewer_assignments::Entity).to_owned())
            .await
    }
}
