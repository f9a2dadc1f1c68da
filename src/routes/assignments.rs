use actix_web::web;

use crate::handlers::assignments;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignments")
            .route("", web::get().to(assignments::get_assignments))
            .route("", web::post().to(assignments::create_assignment))
            .route(
                "/unassigned",
                web::get().to(assignments::get_unassigned_bookings),
            )
            .route(
                "/{id}/status",
                web::patch().to(assignments::update_assignment_status),
            ),
    );
}
