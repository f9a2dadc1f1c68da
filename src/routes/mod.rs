use actix_web::web;

pub mod assignments;
pub mod bookings;
pub mod staff;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(bookings::configure)
            .configure(staff::configure)
            .configure(assignments::configure),
    );
}
