use sea_orm_migration::prelude::*;

use crate::m20250801_000001_init::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Lao PDR public holidays, 2025.
const HOLIDAYS_2025: &[(&str, &str)] = &[
    ("2025-01-01", "International New Year"),
    ("2025-03-08", "International Women's Day"),
    ("2025-04-14", "Lao New Year (Pi Mai)"),
    ("2025-04-15", "Lao New Year (Pi Mai)"),
    ("2025-04-16", "Lao New Year (Pi Mai)"),
    ("2025-05-01", "International Labour Day"),
    ("2025-12-02", "Lao National Day"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let time = Expr::val("2025-08-01T00:00:00.000Z").cast_as("timestamptz");

        // Creates 20 employees
        for i in 1..=20 {
            let uuid = format!("{:032x}", i as u128);
            let username = format!("employee{i}");
            let base_salary = rand::random_range(4_000_000..=12_000_000) as f64;

            manager
                .exec_stmt(Query::insert()
                    .into_table(User::Table)
                    .columns(["id", "created_at", "updated_at", "username", "base_salary", "vacation_days"])
                    .values_panic([Expr::val(uuid).cast_as("uuid"), time.clone(), time.clone(), username.into(), base_salary.into(), 15.into()])
                    .to_owned()
            ).await.unwrap();
        }

        for (date, name) in HOLIDAYS_2025 {
            manager
                .exec_stmt(Query::insert()
                    .into_table(Holiday::Table)
                    .columns(["created_at", "updated_at", "date", "name"])
                    .values_panic([time.clone(), time.clone(), Expr::val(*date).cast_as("date"), (*name).into()])
                    .to_owned()
            ).await.unwrap();
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for i in 1..=20 {
            let uuid = format!("{:032x}", i as u128);

            manager
                .exec_stmt(Query::delete()
                    .from_table(User::Table)
                    .and_where(Expr::col("id").eq(Expr::val(uuid).cast_as("uuid")))
                    .to_owned()
            ).await.unwrap();
        }

        for (date, _) in HOLIDAYS_2025 {
            manager
                .exec_stmt(Query::delete()
                    .from_table(Holiday::Table)
                    .and_where(Expr::col("date").eq(Expr::val(*date).cast_as("date")))
                    .to_owned()
            ).await.unwrap();
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Holiday {
    Table,
}
