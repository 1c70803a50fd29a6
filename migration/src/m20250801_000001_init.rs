use sea_orm_migration::{prelude::{extension::postgres::TypeDropStatement, *}, sea_orm::{ActiveEnum, DbBackend, DeriveActiveEnum, EnumIter, Schema}};

use crate::{setup_audit_fk, util::{audited_table_statement, default_table_statement, DefaultColumn}};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(DbBackend::Postgres);

        manager
            .create_type(
                schema.create_enum_from_active_enum::<RequestStatus>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<RequestType>()
            ).await.unwrap();

        manager
            .create_type(
                schema.create_enum_from_active_enum::<SalaryStatus>()
            ).await.unwrap();

        manager
            .create_table(default_table_statement()
                .table(User::Table)
                .col(ColumnDef::new(User::Username)
                    .text()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(User::BaseSalary)
                    .double()
                    .not_null())
                .col(ColumnDef::new(User::VacationDays)
                    .integer()
                    .not_null()
                    .default(15))
                .take()
            ).await.unwrap();

        manager
            .create_table(audited_table_statement()
                .table(WorkRequest::Table)
                .col(ColumnDef::new(WorkRequest::RequestType)
                    .custom(RequestType::name())
                    .not_null())
                .col(ColumnDef::new(WorkRequest::Date)
                    .date()
                    .not_null())
                .col(ColumnDef::new(WorkRequest::StartTime)
                    .time()
                    .not_null())
                .col(ColumnDef::new(WorkRequest::EndTime)
                    .time()
                    .not_null())
                .col(ColumnDef::new(WorkRequest::FuelAmount)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(WorkRequest::Status)
                    .custom(RequestStatus::name())
                    .not_null())
                .take()
        ).await.unwrap();
        setup_audit_fk!(manager, WorkRequest::Table);

        manager
            .create_table(audited_table_statement()
                .table(DayOffRequest::Table)
                .col(ColumnDef::new(DayOffRequest::StartDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(DayOffRequest::EndDate)
                    .date()
                    .not_null())
                .col(ColumnDef::new(DayOffRequest::DayCount)
                    .double()
                    .not_null())
                .col(ColumnDef::new(DayOffRequest::Status)
                    .custom(RequestStatus::name())
                    .not_null())
                .take()
        ).await.unwrap();
        setup_audit_fk!(manager, DayOffRequest::Table);

        manager
            .create_table(default_table_statement()
                .table(Holiday::Table)
                .col(ColumnDef::new(Holiday::Date)
                    .date()
                    .unique_key()
                    .not_null())
                .col(ColumnDef::new(Holiday::Name)
                    .text()
                    .not_null())
                .take()
        ).await.unwrap();

        manager
            .create_table(audited_table_statement()
                .table(SalaryRecord::Table)
                .col(ColumnDef::new(SalaryRecord::UserId)
                    .uuid()
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::Month)
                    .small_integer()
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::Year)
                    .small_integer()
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::BaseSalary)
                    .double()
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::OtAmount)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::OtHours)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::OtDetails)
                    .json_binary()
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::FuelCosts)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::DayOffDays)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::RemainingVacationDays)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::Bonus)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::Commission)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::MoneyNotSpentOnHolidays)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::OtherIncome)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::OfficeExpenses)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::SocialSecurity)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::WorkingDays)
                    .small_integer()
                    .not_null()
                    .default(22))
                .col(ColumnDef::new(SalaryRecord::CutOffPayDays)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::CutOffPayAmount)
                    .double()
                    .not_null()
                    .default(0))
                .col(ColumnDef::new(SalaryRecord::Notes)
                    .text()
                    .not_null()
                    .default(""))
                .col(ColumnDef::new(SalaryRecord::TotalIncome)
                    .double()
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::TotalDeductions)
                    .double()
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::NetSalary)
                    .double()
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::Status)
                    .custom(SalaryStatus::name())
                    .not_null())
                .col(ColumnDef::new(SalaryRecord::PaymentDate)
                    .date())
                .take()
        ).await.unwrap();
        setup_audit_fk!(manager, SalaryRecord::Table);

        manager.create_foreign_key(ForeignKeyCreateStatement::new()
            .from(SalaryRecord::Table, SalaryRecord::UserId)
            .to(User::Table, DefaultColumn::Id)
            .take()
        ).await.unwrap();

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(
            TableDropStatement::new()
                .table(SalaryRecord::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(Holiday::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(DayOffRequest::Table)
                .take()
        ).await.unwrap();

        manager.drop_table(
            TableDropStatement::new()
                .table(WorkRequest::Table)
                .take()
        ).await.unwrap();

        manager
            .drop_table(
                TableDropStatement::new()
                    .table(User::Table)
                    .take()
            ).await.unwrap();

        manager
            .drop_type(
                TypeDropStatement::new()
                    .name(SalaryStatus::name())
                    .to_owned()
            ).await.unwrap();

        manager
            .drop_type(
                TypeDropStatement::new()
                    .name(RequestType::name())
                    .to_owned()
            ).await.unwrap();

        manager
            .drop_type(
                TypeDropStatement::new()
                    .name(RequestStatus::name())
                    .to_owned()
            ).await.unwrap();

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum User {
    Table,
    Username,
    BaseSalary,
    VacationDays,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "request_status")]
enum RequestStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "request_type")]
enum RequestType {
    #[sea_orm(string_value = "overtime")]
    Overtime,
    #[sea_orm(string_value = "field_work")]
    FieldWork,
}

#[derive(EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "salary_status")]
enum SalaryStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Iden)]
enum WorkRequest {
    Table,
    RequestType,
    Date,
    StartTime,
    EndTime,
    FuelAmount,
    Status,
}

#[derive(Iden)]
enum DayOffRequest {
    Table,
    StartDate,
    EndDate,
    DayCount,
    Status,
}

#[derive(Iden)]
enum Holiday {
    Table,
    Date,
    Name,
}

#[derive(Iden)]
enum SalaryRecord {
    Table,
    UserId,
    Month,
    Year,
    BaseSalary,
    OtAmount,
    OtHours,
    OtDetails,
    FuelCosts,
    DayOffDays,
    RemainingVacationDays,
    Bonus,
    Commission,
    MoneyNotSpentOnHolidays,
    OtherIncome,
    OfficeExpenses,
    SocialSecurity,
    WorkingDays,
    CutOffPayDays,
    CutOffPayAmount,
    Notes,
    TotalIncome,
    TotalDeductions,
    NetSalary,
    Status,
    PaymentDate,
}
