//! Integration tests for the roster engine.
//!
//! This test suite covers the two API endpoints end-to-end plus the
//! engine-level scenarios behind them:
//! - Team rotation phase resolution over a window
//! - Manual override and personal rotation precedence
//! - Pre-start rotation inactivity and soft config degradation
//! - Recurring, one-time, and 24/7 task expansion
//! - The tiling safety cap
//! - Error cases (malformed dates, unknown tasks, malformed JSON)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use roster_engine::api::{AppState, create_router};
use roster_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/roster").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn resolve_request(people: Vec<Value>, start_date: &str, days: u32) -> Value {
    json!({
        "people": people,
        "start_date": start_date,
        "days": days
    })
}

fn team_member(id: &str, team_id: &str) -> Value {
    json!({
        "id": id,
        "team_id": team_id
    })
}

fn row_for<'a>(result: &'a Value, person_id: &str, date: &str) -> &'a Value {
    result["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["person_id"] == person_id && row["date"] == date)
        .unwrap_or_else(|| panic!("no row for {} on {}", person_id, date))
}

// =============================================================================
// SECTION 1: Presence resolution over team rotations
// =============================================================================

#[tokio::test]
async fn test_resolve_team_rotation_reference_scenario() {
    // team_alpha runs 7 on / 7 off from 2024-01-01.
    let router = create_router_for_test();
    let request = resolve_request(vec![team_member("p1", "team_alpha")], "2024-01-01", 15);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["rows"].as_array().unwrap().len(), 15);

    let expectations = [
        ("2024-01-01", "arrival", true),
        ("2024-01-04", "full", true),
        ("2024-01-07", "departure", true),
        ("2024-01-08", "home", false),
        ("2024-01-14", "home", false),
        ("2024-01-15", "arrival", true),
    ];
    for (date, status_name, available) in expectations {
        let row = row_for(&result, "p1", date);
        assert_eq!(row["status"], status_name, "status on {}", date);
        assert_eq!(row["source"], "rotation", "source on {}", date);
        let expected_end = if available { "23:59" } else { "00:00" };
        assert_eq!(row["end_time"], expected_end, "end_time on {}", date);
    }
}

#[tokio::test]
async fn test_resolve_cycle_coverage_counts() {
    // Exactly 7 present days and 7 home days over one full cycle.
    let router = create_router_for_test();
    let request = resolve_request(vec![team_member("p1", "team_alpha")], "2024-01-01", 14);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);

    let rows = result["rows"].as_array().unwrap();
    let home = rows.iter().filter(|r| r["status"] == "home").count();
    assert_eq!(home, 7);
    assert_eq!(rows.len() - home, 7);
}

#[tokio::test]
async fn test_resolve_before_rotation_start_is_default() {
    // team_bravo's rotation starts 2024-01-08; the week before falls through
    // to the default.
    let router = create_router_for_test();
    let request = resolve_request(vec![team_member("p1", "team_bravo")], "2024-01-01", 7);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);

    for row in result["rows"].as_array().unwrap() {
        assert_eq!(row["source"], "default");
        assert_eq!(row["status"], "full");
        assert_eq!(row["start_time"], "00:00");
        assert_eq!(row["end_time"], "23:59");
    }
}

#[tokio::test]
async fn test_resolve_incomplete_team_rotation_degrades_softly() {
    // team_charlie has no start date configured; members resolve to default.
    let router = create_router_for_test();
    let request = resolve_request(vec![team_member("p1", "team_charlie")], "2024-03-01", 3);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);

    for row in result["rows"].as_array().unwrap() {
        assert_eq!(row["source"], "default");
    }
}

#[tokio::test]
async fn test_resolve_person_without_team_is_default() {
    let router = create_router_for_test();
    let request = resolve_request(vec![json!({"id": "loner"})], "2024-03-01", 2);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);
    for row in result["rows"].as_array().unwrap() {
        assert_eq!(row["source"], "default");
    }
}

// =============================================================================
// SECTION 2: Precedence
// =============================================================================

#[tokio::test]
async fn test_manual_override_beats_team_rotation() {
    // 2024-01-08 is a home day for team_alpha, but the override says
    // available.
    let router = create_router_for_test();
    let person = json!({
        "id": "p1",
        "team_id": "team_alpha",
        "overrides": {
            "2024-01-08": {
                "is_available": true,
                "start_hour": "00:00",
                "end_hour": "23:59"
            }
        }
    });
    let request = resolve_request(vec![person], "2024-01-08", 1);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);

    let row = row_for(&result, "p1", "2024-01-08");
    assert_eq!(row["source"], "manual");
    assert_eq!(row["status"], "full");
    assert_eq!(row["end_time"], "23:59");
}

#[tokio::test]
async fn test_override_status_inference_from_hours() {
    let router = create_router_for_test();
    let person = json!({
        "id": "p1",
        "overrides": {
            "2024-03-01": {
                "is_available": true,
                "start_hour": "14:00",
                "end_hour": "23:59"
            },
            "2024-03-02": {
                "is_available": true,
                "start_hour": "00:00",
                "end_hour": "11:00"
            },
            "2024-03-03": {
                "is_available": false,
                "start_hour": "00:00",
                "end_hour": "00:00"
            }
        }
    });
    let request = resolve_request(vec![person], "2024-03-01", 3);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(row_for(&result, "p1", "2024-03-01")["status"], "arrival");
    assert_eq!(row_for(&result, "p1", "2024-03-02")["status"], "departure");
    assert_eq!(row_for(&result, "p1", "2024-03-03")["status"], "home");
    // Hours come back verbatim.
    assert_eq!(row_for(&result, "p1", "2024-03-01")["start_time"], "14:00");
    assert_eq!(row_for(&result, "p1", "2024-03-02")["end_time"], "11:00");
}

#[tokio::test]
async fn test_personal_rotation_beats_team_rotation() {
    // Personal 1-on/6-off rotation puts 2024-01-03 at home even though the
    // team rotation has the person on base.
    let router = create_router_for_test();
    let person = json!({
        "id": "p1",
        "team_id": "team_alpha",
        "personal_rotation": {
            "is_active": true,
            "start_date": "2024-01-01",
            "days_on": 1,
            "days_off": 6
        }
    });
    let request = resolve_request(vec![person], "2024-01-01", 3);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);

    let arrival = row_for(&result, "p1", "2024-01-01");
    assert_eq!(arrival["status"], "arrival");
    assert_eq!(arrival["source"], "personal_rotation");

    let home = row_for(&result, "p1", "2024-01-03");
    assert_eq!(home["status"], "home");
    assert_eq!(home["source"], "personal_rotation");
}

#[tokio::test]
async fn test_degenerate_one_day_cycle_resolves_arrival() {
    let router = create_router_for_test();
    let person = json!({
        "id": "p1",
        "personal_rotation": {
            "is_active": true,
            "start_date": "2024-01-01",
            "days_on": 1,
            "days_off": 1
        }
    });
    let request = resolve_request(vec![person], "2024-01-01", 4);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);

    // Every on day is simultaneously arrival and departure; arrival wins.
    assert_eq!(row_for(&result, "p1", "2024-01-01")["status"], "arrival");
    assert_eq!(row_for(&result, "p1", "2024-01-02")["status"], "home");
    assert_eq!(row_for(&result, "p1", "2024-01-03")["status"], "arrival");
    assert_eq!(row_for(&result, "p1", "2024-01-04")["status"], "home");
}

#[tokio::test]
async fn test_inactive_personal_rotation_falls_through() {
    let router = create_router_for_test();
    let person = json!({
        "id": "p1",
        "team_id": "team_alpha",
        "personal_rotation": {
            "is_active": false,
            "start_date": "2024-01-01",
            "days_on": 1,
            "days_off": 6
        }
    });
    let request = resolve_request(vec![person], "2024-01-03", 1);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row_for(&result, "p1", "2024-01-03")["source"], "rotation");
}

// =============================================================================
// SECTION 3: Shift expansion
// =============================================================================

#[tokio::test]
async fn test_expand_recurring_task_three_days() {
    let router = create_router_for_test();
    let request = json!({
        "task_id": "task_ward_rounds",
        "horizon_start": "2024-02-01",
        "horizon_days": 3
    });

    let (status, result) = post_json(router, "/shifts/expand", request).await;
    assert_eq!(status, StatusCode::OK);

    let shifts = result["shifts"].as_array().unwrap();
    assert_eq!(shifts.len(), 3);
    assert!(result["capped_days"].as_array().unwrap().is_empty());

    for (i, shift) in shifts.iter().enumerate() {
        let day = format!("2024-02-{:02}", i + 1);
        assert_eq!(shift["task_id"], "task_ward_rounds");
        assert_eq!(shift["start_time"], format!("{}T08:00:00", day));
        assert_eq!(shift["end_time"], format!("{}T12:00:00", day));
        assert_eq!(shift["assigned_person_ids"].as_array().unwrap().len(), 0);
        assert_eq!(shift["is_locked"], false);
    }
}

#[tokio::test]
async fn test_expand_247_task_tiles_full_day() {
    let router = create_router_for_test();
    let request = json!({
        "task_id": "task_gate_watch",
        "horizon_start": "2024-02-01",
        "horizon_days": 1
    });

    let (status, result) = post_json(router, "/shifts/expand", request).await;
    assert_eq!(status, StatusCode::OK);

    let shifts = result["shifts"].as_array().unwrap();
    // 24h of 4h tiles = 6 shifts, back to back from 08:00.
    assert_eq!(shifts.len(), 6);
    assert_eq!(shifts[0]["start_time"], "2024-02-01T08:00:00");
    assert_eq!(shifts[5]["start_time"], "2024-02-02T04:00:00");
    assert_eq!(shifts[5]["end_time"], "2024-02-02T08:00:00");
    for pair in shifts.windows(2) {
        assert_eq!(pair[0]["end_time"], pair[1]["start_time"]);
    }
}

#[tokio::test]
async fn test_expand_one_time_task_single_shift() {
    let router = create_router_for_test();
    // task_safety_audit is scheduled for 2024-02-10.
    let request = json!({
        "task_id": "task_safety_audit",
        "horizon_start": "2024-02-01",
        "horizon_days": 30
    });

    let (status, result) = post_json(router, "/shifts/expand", request).await;
    assert_eq!(status, StatusCode::OK);

    let shifts = result["shifts"].as_array().unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0]["start_time"], "2024-02-10T09:30:00");
    assert_eq!(shifts[0]["end_time"], "2024-02-10T12:00:00");
}

#[tokio::test]
async fn test_expand_one_time_task_without_date_is_empty() {
    let router = create_router_for_test();
    let request = json!({
        "task_id": "task_unscheduled_visit",
        "horizon_start": "2024-02-01",
        "horizon_days": 30
    });

    let (status, result) = post_json(router, "/shifts/expand", request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(result["shifts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_expand_runaway_duration_hits_safety_cap() {
    let router = create_router_for_test();
    // task_runaway has a 0.01h duration; tiling is capped at 20 per day.
    let request = json!({
        "task_id": "task_runaway",
        "horizon_start": "2024-02-01",
        "horizon_days": 1
    });

    let (status, result) = post_json(router, "/shifts/expand", request).await;
    assert_eq!(status, StatusCode::OK);

    let shifts = result["shifts"].as_array().unwrap();
    assert_eq!(shifts.len(), 20);
    assert_eq!(
        result["capped_days"].as_array().unwrap(),
        &vec![json!("2024-02-01")]
    );
}

// =============================================================================
// SECTION 4: Error cases
// =============================================================================

#[tokio::test]
async fn test_resolve_malformed_start_date_is_bad_request() {
    let router = create_router_for_test();
    let request = resolve_request(vec![team_member("p1", "team_alpha")], "01/03/2024", 7);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_resolve_malformed_override_key_is_bad_request() {
    let router = create_router_for_test();
    let person = json!({
        "id": "p1",
        "overrides": {
            "garbage": {
                "is_available": true,
                "start_hour": "00:00",
                "end_hour": "23:59"
            }
        }
    });
    let request = resolve_request(vec![person], "2024-03-01", 1);

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_expand_unknown_task_is_not_found() {
    let router = create_router_for_test();
    let request = json!({
        "task_id": "task_missing",
        "horizon_start": "2024-02-01"
    });

    let (status, result) = post_json(router, "/shifts/expand", request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(result["code"], "TASK_NOT_FOUND");
}

#[tokio::test]
async fn test_expand_malformed_horizon_start_is_bad_request() {
    let router = create_router_for_test();
    let request = json!({
        "task_id": "task_ward_rounds",
        "horizon_start": "2024-2-1"
    });

    let (status, result) = post_json(router, "/shifts/expand", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let router = create_router_for_test();
    // No start_date.
    let request = json!({ "people": [] });

    let (status, result) = post_json(router, "/presence/resolve", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/presence/resolve")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

// =============================================================================
// SECTION 5: Idempotence
// =============================================================================

#[tokio::test]
async fn test_resolution_is_idempotent_across_requests() {
    let person = json!({
        "id": "p1",
        "team_id": "team_alpha",
        "overrides": {
            "2024-01-02": {
                "is_available": true,
                "start_hour": "09:00",
                "end_hour": "17:00"
            }
        }
    });
    let request = resolve_request(vec![person], "2024-01-01", 14);

    let (status_a, first) =
        post_json(create_router_for_test(), "/presence/resolve", request.clone()).await;
    let (status_b, second) =
        post_json(create_router_for_test(), "/presence/resolve", request).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(first, second);
}
