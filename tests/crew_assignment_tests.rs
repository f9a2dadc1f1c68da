use actix_web::{App, http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::json;

use charterdesk::database::CharterStore;
use charterdesk::database::models::{AssignmentStatus, Booking, CrewAssignment};
use charterdesk::middleware::RequestIdMiddleware;
use charterdesk::routes;
use charterdesk::services::CrewCandidates;

mod common;

use common::ids;

fn sorted_ids<I: IntoIterator<Item = i64>>(ids: I) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids
}

#[actix_web::test]
async fn test_candidates_only_include_available_staff() {
    let store = common::seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(common::app_state(store.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/staff/candidates")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let candidates: CrewCandidates = common::read_data(resp).await;

    assert_eq!(sorted_ids(candidates.captains.iter().map(|m| m.id)), vec![1]);
    assert_eq!(
        sorted_ids(candidates.first_mates.iter().map(|m| m.id)),
        vec![3]
    );
    assert_eq!(
        sorted_ids(candidates.crew_members.iter().map(|m| m.id)),
        vec![5, 6]
    );

    // The full roster still lists everyone.
    let req = test::TestRequest::get().uri("/api/v1/staff").to_request();
    let staff: Vec<serde_json::Value> =
        common::read_data(test::call_service(&app, req).await).await;
    assert_eq!(staff.len(), 6);
}

#[actix_web::test]
async fn test_create_assignment_without_first_mate() {
    let store = common::seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(common::app_state(store.clone()))
            .wrap(RequestIdMiddleware)
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/assignments")
        .set_json(json!({
            "bookingId": ids::UNSTAFFED,
            "captainId": 1,
            "crewMemberIds": [5, 6],
            "assignmentNotes": "Guests celebrating an anniversary"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["data"]["firstMateId"].is_null());

    let assignment: CrewAssignment = serde_json::from_value(body["data"].clone()).unwrap();
    let booking = store.get_booking(ids::UNSTAFFED).await.unwrap().unwrap();

    assert_eq!(assignment.booking_id, ids::UNSTAFFED);
    assert_eq!(assignment.captain_id, 1);
    assert_eq!(assignment.crew_member_ids, vec![5, 6]);
    assert_eq!(assignment.briefing_time, booking.start_time);
    assert_eq!(assignment.status, AssignmentStatus::Confirmed);
    assert_eq!(
        assignment.special_instructions.as_deref(),
        Some("Guests celebrating an anniversary")
    );
    assert_eq!(assignment.roster(), vec![1, 5, 6]);

    let req = test::TestRequest::get()
        .uri("/api/v1/assignments/unassigned")
        .to_request();
    let unassigned: Vec<Booking> = common::read_data(test::call_service(&app, req).await).await;
    assert!(unassigned.iter().all(|b| b.id != ids::UNSTAFFED));
    assert_eq!(unassigned.len(), 5);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{}", ids::UNSTAFFED))
        .to_request();
    let detail: serde_json::Value = common::read_data(test::call_service(&app, req).await).await;
    assert_eq!(
        detail["crewAssignment"]["id"],
        json!(assignment.id.to_string())
    );
}

#[actix_web::test]
async fn test_missing_captain_creates_nothing() {
    let store = common::seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(common::app_state(store.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/assignments")
        .set_json(json!({
            "bookingId": ids::UNSTAFFED,
            "crewMemberIds": [5]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let message = common::read_error(resp).await;
    assert!(message.contains("captain"), "{}", message);

    assert!(store.list_assignments().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_ineligible_staff_is_rejected() {
    let store = common::seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(common::app_state(store.clone()))
            .configure(routes::configure),
    )
    .await;

    // Captain 2 is unavailable.
    let req = test::TestRequest::post()
        .uri("/api/v1/assignments")
        .set_json(json!({ "bookingId": ids::UNSTAFFED, "captainId": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Crew member 9 is unavailable.
    let req = test::TestRequest::post()
        .uri("/api/v1/assignments")
        .set_json(json!({
            "bookingId": ids::UNSTAFFED,
            "captainId": 1,
            "crewMemberIds": [5, 9]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(store.list_assignments().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_second_assignment_for_booking_conflicts() {
    let store = common::seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(common::app_state(store.clone()))
            .configure(routes::configure),
    )
    .await;

    let payload = json!({
        "bookingId": ids::UNSTAFFED,
        "captainId": 1,
        "firstMateId": 3
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/assignments")
        .set_json(&payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/assignments")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let message = common::read_error(resp).await;
    assert!(message.contains("already has a crew assignment"), "{}", message);

    assert_eq!(store.list_assignments().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_assignment_for_unknown_booking_is_not_found() {
    let store = common::seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(common::app_state(store.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/assignments")
        .set_json(json!({ "bookingId": 9999, "captainId": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_assignment_status() {
    let store = common::seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(common::app_state(store.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/assignments")
        .set_json(json!({ "bookingId": ids::DURING, "captainId": 1 }))
        .to_request();
    let created: CrewAssignment = common::read_data(test::call_service(&app, req).await).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/assignments/{}/status", created.id))
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: CrewAssignment = common::read_data(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status, AssignmentStatus::Completed);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/assignments/{}/status", uuid::Uuid::new_v4()))
        .set_json(json!({ "status": "cancelled" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
