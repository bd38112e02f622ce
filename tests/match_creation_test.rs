use chrono::{DateTime, Duration, SubsecRound, Utc};
use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::spawn_app;

fn issue_fields(details: &serde_json::Value) -> Vec<String> {
    details
        .as_array()
        .expect("details should be an array")
        .iter()
        .map(|issue| issue["field"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn create_match_returns_201_with_derived_status_and_default_scores() {
    let test_app = spawn_app().await;
    let client = Client::new();

    // Truncate to whole seconds so the round-trip comparison is exact;
    // Postgres keeps microseconds, serde emits nanoseconds.
    let now = Utc::now().trunc_subsecs(0);
    let start_time = now - Duration::hours(1);
    let end_time = now + Duration::hours(1);

    let response = client
        .post(&format!("{}/matches", &test_app.address))
        .json(&json!({
            "sport": "Football",
            "homeTeam": "A",
            "awayTeam": "B",
            "startTime": start_time.to_rfc3339(),
            "endTime": end_time.to_rfc3339(),
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());

    let json_response: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(json_response["message"], "Match created");

    let data = &json_response["data"];
    assert_eq!(data["sport"], "Football");
    assert_eq!(data["homeTeam"], "A");
    assert_eq!(data["awayTeam"], "B");
    assert_eq!(data["status"], "live");
    assert_eq!(data["homeScore"], 0);
    assert_eq!(data["awayScore"], 0);
    assert!(data["id"].as_i64().is_some());
    assert!(data["createdAt"].as_str().is_some());

    let returned_start: DateTime<Utc> = data["startTime"]
        .as_str()
        .expect("startTime missing")
        .parse()
        .expect("startTime is not a timestamp");
    let returned_end: DateTime<Utc> = data["endTime"]
        .as_str()
        .expect("endTime missing")
        .parse()
        .expect("endTime is not a timestamp");
    assert_eq!(returned_start, start_time);
    assert_eq!(returned_end, end_time);

    // The row actually landed
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM matches")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count matches.");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn create_match_derives_scheduled_and_finished_statuses() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let now = Utc::now().trunc_subsecs(0);

    let upcoming = client
        .post(&format!("{}/matches", &test_app.address))
        .json(&json!({
            "sport": "Rugby",
            "homeTeam": "A",
            "awayTeam": "B",
            "startTime": (now + Duration::hours(1)).to_rfc3339(),
            "endTime": (now + Duration::hours(3)).to_rfc3339(),
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    let upcoming: serde_json::Value = upcoming.json().await.expect("Failed to parse body.");
    assert_eq!(upcoming["data"]["status"], "scheduled");

    let past = client
        .post(&format!("{}/matches", &test_app.address))
        .json(&json!({
            "sport": "Rugby",
            "homeTeam": "C",
            "awayTeam": "D",
            "startTime": (now - Duration::hours(3)).to_rfc3339(),
            "endTime": (now - Duration::hours(1)).to_rfc3339(),
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    let past: serde_json::Value = past.json().await.expect("Failed to parse body.");
    assert_eq!(past["data"]["status"], "finished");
}

#[tokio::test]
async fn create_match_keeps_submitted_scores() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let now = Utc::now().trunc_subsecs(0);

    let response = client
        .post(&format!("{}/matches", &test_app.address))
        .json(&json!({
            "sport": "Handball",
            "homeTeam": "A",
            "awayTeam": "B",
            "startTime": (now - Duration::hours(2)).to_rfc3339(),
            "endTime": (now - Duration::hours(1)).to_rfc3339(),
            "homeScore": 31,
            "awayScore": 28,
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());
    let json_response: serde_json::Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(json_response["data"]["homeScore"], 31);
    assert_eq!(json_response["data"]["awayScore"], 28);
}

#[tokio::test]
async fn create_match_rejects_end_time_not_after_start_time() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let now = Utc::now().trunc_subsecs(0);

    for end_offset in [Duration::zero(), -Duration::hours(1)] {
        let response = client
            .post(&format!("{}/matches", &test_app.address))
            .json(&json!({
                "sport": "Football",
                "homeTeam": "A",
                "awayTeam": "B",
                "startTime": now.to_rfc3339(),
                "endTime": (now + end_offset).to_rfc3339(),
            }))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(400, response.status().as_u16());
        let json_response: serde_json::Value =
            response.json().await.expect("Failed to parse body.");
        assert_eq!(json_response["error"], "Invalid match data");
        assert!(issue_fields(&json_response["details"]).contains(&"endTime".to_string()));
    }

    // Nothing reached storage
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM matches")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count matches.");
    assert_eq!(count, 0);
}

#[tokio::test]
async fn create_match_rejects_blank_text_and_negative_scores() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let now = Utc::now().trunc_subsecs(0);

    let response = client
        .post(&format!("{}/matches", &test_app.address))
        .json(&json!({
            "sport": "   ",
            "homeTeam": "A",
            "awayTeam": "B",
            "startTime": now.to_rfc3339(),
            "endTime": (now + Duration::hours(2)).to_rfc3339(),
            "homeScore": -1,
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let json_response: serde_json::Value = response.json().await.expect("Failed to parse body.");
    let fields = issue_fields(&json_response["details"]);
    assert!(fields.contains(&"sport".to_string()));
    assert!(fields.contains(&"homeScore".to_string()));
}

#[tokio::test]
async fn create_match_rejects_missing_fields_all_at_once() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/matches", &test_app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let json_response: serde_json::Value = response.json().await.expect("Failed to parse body.");
    let fields = issue_fields(&json_response["details"]);
    for field in ["sport", "homeTeam", "awayTeam", "startTime", "endTime"] {
        assert!(fields.contains(&field.to_string()), "missing issue for {}", field);
    }
}
