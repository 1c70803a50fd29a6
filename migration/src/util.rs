use sea_orm_migration::prelude::*;

pub(crate) fn default_table_statement() -> TableCreateStatement {
    TableCreateStatement::new()
        .if_not_exists()
        .col(ColumnDef::new(DefaultColumn::Id)
            .uuid()
            .primary_key()
            .default(Expr::cust("GEN_RANDOM_UUID()"))
            .take())
        .col(ColumnDef::new(DefaultColumn::CreatedAt)
            .timestamp_with_time_zone()
            .not_null()
            .take())
        .col(ColumnDef::new(DefaultColumn::UpdatedAt)
            .timestamp_with_time_zone()
            .not_null()
            .take())
        .take()
}

#[derive(DeriveIden)]
pub(crate) enum DefaultColumn {
    Id,
    CreatedAt,
    UpdatedAt,
}

/// Must run the `setup_audit_fk` macro on the table afterwards
///
/// # Example
///
/// ```rs
/// manager
///     .create_table(audited_table_statement()
///         .table(WorkRequest::Table)
///         .col(ColumnDef::new(WorkRequest::Date)
///             .date()
///             .not_null())
///         .take()
///     ).await.unwrap();
/// setup_audit_fk!(manager, WorkRequest::Table);
/// ```
pub(crate) fn audited_table_statement() -> TableCreateStatement {
    default_table_statement()
        .col(ColumnDef::new(AuditColumn::CreatedBy)
            .uuid())
        .col(ColumnDef::new(AuditColumn::UpdatedBy)
            .uuid())
        .take()
}

#[macro_export]
macro_rules! setup_audit_fk {
    ($m:expr,$t:expr) => {{
        use crate::util::*;
        use crate::m20250801_000001_init::User;

        $m.create_foreign_key(ForeignKeyCreateStatement::new()
                .from($t, AuditColumn::CreatedBy)
                .to(User::Table, DefaultColumn::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade)
                .take()
        ).await.unwrap();

        $m.create_foreign_key(ForeignKeyCreateStatement::new()
                .from($t, AuditColumn::UpdatedBy)
                .to(User::Table, DefaultColumn::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade)
                .take()
        ).await.unwrap();
    }};
}

#[derive(DeriveIden)]
pub(crate) enum AuditColumn {
    CreatedBy,
    UpdatedBy,
}
