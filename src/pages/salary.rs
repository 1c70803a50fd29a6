use std::str::FromStr;

use actix_web::{delete, dev, get, post, web, FromRequest, HttpRequest, HttpResponse, Responder};
use futures_util::future::LocalBoxFuture;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    engine::{
        aggregate::{self, PrefillData},
        ledger::{OffDayCategory, OtCategory, OtLineItem},
        rates::RateConfig,
        record,
        totals::{self, SalaryFormData},
        EngineError,
    },
    entity::{prelude::*, salary_record, sea_orm_active_enums::SalaryStatus},
};

use extractor::PendingSalary;
use model::*;

mod extractor;
mod model;

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(get_prefill)
        .service(get_existing)
        .service(get_history)
        .service(submit_salary)
        .service(get_salary)
        .service(delete_salary);
}

/// Recomputed on every rate edit; the caller's `seq` is echoed back so a
/// stale response never overwrites a fresh one.
#[get("/prefill")]
async fn get_prefill(db: web::Data<DatabaseConnection>, query: web::Query<PrefillQuery>) -> Result<HttpResponse, EngineError> {
    let query = query.into_inner();
    let rates = query.rates();

    let prefill = aggregate::aggregate(db.as_ref(), query.user_id, query.month, query.year, &rates).await?;

    Ok(HttpResponse::Ok().json(PrefillResponse {
        seq: query.seq.unwrap_or_default(),
        rates,
        prefill,
    }))
}

/// Advisory duplicate warning: prior records for the same employee/period.
#[get("/existing")]
async fn get_existing(db: web::Data<DatabaseConnection>, query: web::Query<PeriodQuery>) -> Result<HttpResponse, EngineError> {
    let records = record::find_existing(db.as_ref(), query.user_id, query.month, query.year).await?;

    Ok(HttpResponse::Ok().json(records))
}

#[get("/history")]
async fn get_history(db: web::Data<DatabaseConnection>, query: web::Query<HistoryQuery>) -> Result<HttpResponse, EngineError> {
    let records = SalaryRecord::find()
        .filter(salary_record::Column::UserId.eq(query.user_id))
        .order_by_desc(salary_record::Column::Year)
        .order_by_desc(salary_record::Column::Month)
        .all(db.as_ref()).await?;

    Ok(HttpResponse::Ok().json(records))
}

/// Runs the whole pipeline server-side: aggregate, validate and reconcile
/// manual entries, compute totals, persist. Caller-side validation is not
/// trusted.
#[post("")]
async fn submit_salary(db: web::Data<DatabaseConnection>, payload: web::Json<SubmitSalary>) -> Result<HttpResponse, EngineError> {
    let payload = payload.into_inner();

    let prefill = aggregate::aggregate(db.as_ref(), payload.user_id, payload.month, payload.year, &payload.rates).await?;

    let mut combined_ledger = prefill.calculated.ot_details.clone();
    for entry in &payload.manual_entries {
        combined_ledger.push(entry.to_line_item()?);
    }

    let totals = totals::compute_totals(
        prefill.user.base_salary,
        prefill.calculated.fuel_costs,
        &combined_ledger,
        &payload.form,
    )?;

    let saved = record::submit(db.as_ref(), record::SubmitArgs {
        user_id: payload.user_id,
        month: payload.month,
        year: payload.year,
        prefill: &prefill,
        combined_ledger: &combined_ledger,
        form: &payload.form,
        totals,
        prepared_by: payload.prepared_by,
    }).await?;

    Ok(HttpResponse::Created().json(saved))
}

#[get("/{salary_id}")]
async fn get_salary(record: salary_record::Model) -> impl Responder {
    web::Json(record)
}

#[delete("/{salary_id}")]
async fn delete_salary(db: web::Data<DatabaseConnection>, salary: PendingSalary) -> Result<HttpResponse, EngineError> {
    record::delete(db.as_ref(), salary.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
