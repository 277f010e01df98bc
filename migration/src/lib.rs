pub use sea_orm_migration::prelude::*;

mod m20251103_090000_create_teams_table;
mod m20251103_090100_create_users_table;
mod m20251103_090200_create_pull_requests_table;
mod m20251103_090300_create_reviewer_assignments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251103_090000_create_teams_table::Migration),
            Box::new(m20251103_090100_create_users_table::Migration),
            Box::new(m20251103_090200_create_pull_requests_table::Migration),
            Box::new(m20251103_090300_create_reviewer_assignments_table::Migration),
        ]
    }
}
