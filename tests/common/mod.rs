#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{body::MessageBody, dev::ServiceResponse, test, web};
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use fake::{Fake, faker::internet::en::Username};
use serde::de::DeserializeOwned;

use charterdesk::AppState;
use charterdesk::database::MemoryCharterStore;
use charterdesk::database::models::{
    Booking, BookingStatus, StaffMember, StaffRole, StaffStatus,
};
use charterdesk::handlers::shared::ApiResponse;
use charterdesk::services::FixedClock;

/// Instant every test evaluates phases at: the app's clock, and `?at=` where
/// a read endpoint takes it.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 12, 10, 0, 0).unwrap()
}

pub fn at_param() -> String {
    format!("at={}", now().format("%Y-%m-%dT%H:%M:%SZ"))
}

pub fn booking(
    id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
) -> Booking {
    Booking {
        id,
        member_id: 500 + id,
        yacht_id: 3,
        start_time: start,
        end_time: end,
        guest_count: 6,
        experience_type: Some("day_sail".to_string()),
        special_requests: None,
        status,
        booking_date: start - Duration::days(10),
    }
}

pub fn staff(id: i64, role: StaffRole, status: StaffStatus) -> StaffMember {
    StaffMember {
        id,
        username: Username().fake(),
        role,
        status,
        rating: Some(4.5),
    }
}

pub mod ids {
    pub const BEFORE: i64 = 1;
    pub const DURING: i64 = 2;
    pub const AFTER: i64 = 3;
    pub const STALE: i64 = 4;
    pub const INTERVENTION_TARGET: i64 = 7;
    pub const UNSTAFFED: i64 = 42;
}

/// One booking per phase, a stale one, and the roster used across tests:
/// captains 1 (available) and 2 (unavailable), first mate 3, crew 5 and 6
/// (available) and 9 (unavailable).
pub async fn seeded_store() -> Arc<MemoryCharterStore> {
    let store = Arc::new(MemoryCharterStore::new());
    let now = now();
    let tomorrow_five_pm = (now + Duration::days(1))
        .date_naive()
        .and_time(NaiveTime::from_hms_opt(17, 0, 0).unwrap())
        .and_utc();

    for b in [
        booking(
            ids::BEFORE,
            tomorrow_five_pm,
            tomorrow_five_pm + Duration::hours(4),
            BookingStatus::Pending,
        ),
        booking(
            ids::DURING,
            now - Duration::hours(1),
            now + Duration::hours(3),
            BookingStatus::InProgress,
        ),
        booking(
            ids::AFTER,
            now - Duration::days(3),
            now - Duration::days(3) + Duration::hours(5),
            BookingStatus::Completed,
        ),
        booking(
            ids::STALE,
            now - Duration::days(2),
            now - Duration::days(2) + Duration::hours(3),
            BookingStatus::Pending,
        ),
        booking(
            ids::INTERVENTION_TARGET,
            now + Duration::days(5),
            now + Duration::days(5) + Duration::hours(6),
            BookingStatus::Pending,
        ),
        booking(
            ids::UNSTAFFED,
            now + Duration::days(2),
            now + Duration::days(2) + Duration::hours(4),
            BookingStatus::Confirmed,
        ),
    ] {
        store.insert_booking(b).await;
    }

    for member in [
        staff(1, StaffRole::Captain, StaffStatus::Available),
        staff(2, StaffRole::Captain, StaffStatus::Unavailable),
        staff(3, StaffRole::FirstMate, StaffStatus::Available),
        staff(5, StaffRole::CrewMember, StaffStatus::Available),
        staff(6, StaffRole::CrewMember, StaffStatus::Available),
        staff(9, StaffRole::CrewMember, StaffStatus::Unavailable),
    ] {
        store.insert_staff(member).await;
    }

    store
}

/// App state whose clock is pinned to [`now`].
pub fn app_state(store: Arc<MemoryCharterStore>) -> web::Data<AppState> {
    web::Data::new(AppState::with_clock(store, Arc::new(FixedClock(now()))))
}

/// Unwraps a successful `ApiResponse` envelope.
pub async fn read_data<T, B>(resp: ServiceResponse<B>) -> T
where
    T: DeserializeOwned,
    B: MessageBody,
{
    let response: ApiResponse<T> = test::read_body_json(resp).await;

    assert!(
        response.success,
        "Expected successful response but got error: {:?}",
        response.message
    );
    response.data.expect("Expected data in successful response")
}

/// Unwraps an error envelope and returns its message.
pub async fn read_error<B>(resp: ServiceResponse<B>) -> String
where
    B: MessageBody,
{
    let response: ApiResponse<serde_json::Value> = test::read_body_json(resp).await;

    assert!(!response.success, "Expected error response");
    response.message.unwrap_or_default()
}
