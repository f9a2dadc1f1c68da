use actix_web::web;

use crate::handlers::{bookings, interventions};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .route("", web::get().to(bookings::get_bookings))
            .route("/phases", web::get().to(bookings::get_phase_board))
            .route("/{id}", web::get().to(bookings::get_booking))
            .route("/{id}/status", web::patch().to(bookings::update_booking_status))
            .route("/{id}/advance", web::post().to(bookings::advance_booking))
            .route(
                "/{id}/interventions",
                web::get().to(interventions::get_interventions),
            )
            .route(
                "/{id}/interventions",
                web::post().to(interventions::create_intervention),
            ),
    );
}
