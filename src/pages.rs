use actix_web::web;

mod salary;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(web::scope("/salary")
            .configure(salary::config));
}
