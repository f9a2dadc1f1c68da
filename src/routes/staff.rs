use actix_web::web;

use crate::handlers::staff;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/staff")
            .route("", web::get().to(staff::get_staff))
            .route("/candidates", web::get().to(staff::get_candidates)),
    );
}
