use std::ops::Deref;

use super::*;

impl FromRequest for salary_record::Model {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let salary_id = req.match_info().get("salary_id").expect("This extractor must be used under `salary_id` path");
            let Ok(salary_id) = Uuid::from_str(salary_id) else {
                return Err(actix_web::error::ErrorBadRequest("invalid `salary_id`"))
            };

            let db = req.app_data::<web::Data<DatabaseConnection>>().expect("DatabaseConnection must be attached");

            let Some(record) = SalaryRecord::find_by_id(salary_id)
                .one(db.as_ref()).await
                .map_err(EngineError::from)?
            else {
                return Err(EngineError::NotFound("salary record").into())
            };

            Ok(record)
        })
    }
}

/// Guards mutation paths: only records that never left `Pending` pass.
pub(super) struct PendingSalary(pub(super) salary_record::Model);

impl Deref for PendingSalary {
    type Target = salary_record::Model;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for PendingSalary {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let record = salary_record::Model::from_request(&req, &mut dev::Payload::None).await?;

            if record.status != SalaryStatus::Pending {
                return Err(EngineError::InvalidState(format!(
                    "salary record {} is {:?} and may no longer be modified",
                    record.id, record.status
                )).into());
            }

            Ok(Self(record))
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use chrono::Local;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    fn record(status: SalaryStatus) -> salary_record::Model {
        salary_record::Model {
            id: Uuid::new_v4(),
            created_at: Local::now().into(),
            updated_at: Local::now().into(),
            created_by: Some(Uuid::new_v4()),
            updated_by: None,
            user_id: Uuid::new_v4(),
            month: 6,
            year: 2025,
            base_salary: 6_600_000.0,
            ot_amount: 0.0,
            ot_hours: 0.0,
            ot_details: serde_json::json!([]),
            fuel_costs: 0.0,
            day_off_days: 0.0,
            remaining_vacation_days: 15.0,
            bonus: 0.0,
            commission: 0.0,
            money_not_spent_on_holidays: 0.0,
            other_income: 0.0,
            office_expenses: 0.0,
            social_security: 0.0,
            working_days: 22,
            cut_off_pay_days: 0.0,
            cut_off_pay_amount: 0.0,
            notes: String::new(),
            total_income: 6_600_000.0,
            total_deductions: 0.0,
            net_salary: 6_600_000.0,
            status,
            payment_date: None,
        }
    }

    #[actix_web::test]
    async fn test_salary_record_extractor() {
        #[get("/{salary_id}")]
        async fn test_handler(record: salary_record::Model) -> impl Responder {
            web::Json(record)
        }

        let stored = record(SalaryStatus::Pending);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ stored.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.into_connection()))
                .service(test_handler)
        ).await;

        let req = test::TestRequest::default()
            .uri(&format!("/{}", stored.id))
            .to_request();

        let returned: salary_record::Model = test::call_and_read_body_json(&app, req).await;
        assert_eq!(returned, stored);

        let bad_req = test::TestRequest::default()
            .uri("/not-a-uuid")
            .to_request();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection()))
                .service(test_handler)
        ).await;

        let response = test::call_service(&app, bad_req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_pending_salary_extractor() {
        #[get("/{salary_id}")]
        async fn test_handler(record: PendingSalary) -> impl Responder {
            web::Json(record.0)
        }

        let pending = record(SalaryStatus::Pending);
        let paid = record(SalaryStatus::Paid);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ pending.clone() ],
                vec![ paid.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.into_connection()))
                .service(test_handler)
        ).await;

        let req = test::TestRequest::default()
            .uri(&format!("/{}", pending.id))
            .to_request();

        let returned: salary_record::Model = test::call_and_read_body_json(&app, req).await;
        assert_eq!(returned, pending);

        let req = test::TestRequest::default()
            .uri(&format!("/{}", paid.id))
            .to_request();

        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
