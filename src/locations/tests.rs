use crate::geocoder::tests::FakeGeocoder;
use crate::http::tests::{test_server, test_server_with_geocoder};
use crate::locations::responses::StatesResponse;
use crate::locations::states::{DEFAULT_STATE, STATES};
use crate::map::models::LatLng;
use axum_test::TestServer;
use serde_json::{json, Value};

async fn submit(server: &TestServer, body: Value) -> Value {
    let response = server.post("/locations").json(&body).await;
    response.assert_status_ok();
    response.json()
}

async fn stored_locations(server: &TestServer) -> Vec<Value> {
    let response = server.get("/locations").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(false));
    body["locations"].as_array().unwrap().clone()
}

#[tokio::test]
async fn test_submit_place() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "place", "city": "Norman", "state": "Oklahoma"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(false));
    let location = &body["location"];
    assert_eq!(location["city"], "Norman");
    assert_eq!(location["state"], "Oklahoma");
    assert!((location["latitude"].as_f64().unwrap() - 35.22).abs() <= 0.05);
    assert!((location["longitude"].as_f64().unwrap() - -97.44).abs() <= 0.05);

    let stored = stored_locations(&server).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["city"], "Norman");
    assert_eq!(stored[0]["state"], "Oklahoma");
    assert!((stored[0]["latitude"].as_f64().unwrap() - 35.22).abs() <= 0.05);
    assert!((stored[0]["longitude"].as_f64().unwrap() - -97.44).abs() <= 0.05);
}

#[tokio::test]
async fn test_submit_place_canonicalizes_the_state_spelling() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "place", "city": "Norman", "state": "oKLAhoma"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(false));
    assert_eq!(body["location"]["state"], "Oklahoma");
}

#[tokio::test]
async fn test_submit_place_with_missing_city() {
    let server = test_server().await;

    let body = submit(&server, json!({"kind": "place", "city": "", "state": "Oklahoma"})).await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "missingField");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_place_with_missing_state() {
    let server = test_server().await;

    let body = submit(&server, json!({"kind": "place", "city": "Norman", "state": "  "})).await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "missingField");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_place_with_unknown_state() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "place", "city": "Norman", "state": "Tornado Alley"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "unknownState");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_place_with_an_unreasonably_long_city_name() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "place", "city": "x".repeat(81), "state": "Oklahoma"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "cityNameTooLong");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_place_not_found_by_the_geocoder() {
    let server = test_server_with_geocoder(FakeGeocoder::NotFound).await;

    let body = submit(
        &server,
        json!({"kind": "place", "city": "Atlantis", "state": "Oklahoma"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "placeNotFound");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_place_with_the_geocoder_down() {
    let server = test_server_with_geocoder(FakeGeocoder::Unavailable).await;

    let body = submit(
        &server,
        json!({"kind": "place", "city": "Norman", "state": "Oklahoma"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "geocoderUnavailable");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_coordinates() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "coordinates", "latitude": "35.46", "longitude": "-97.51"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(false));
    let location = &body["location"];
    assert_eq!(location["city"], "N/A");
    assert_eq!(location["state"], "N/A");
    assert!((location["latitude"].as_f64().unwrap() - 35.46).abs() <= 0.05);
    assert!((location["longitude"].as_f64().unwrap() - -97.51).abs() <= 0.05);

    let stored = stored_locations(&server).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["city"], "N/A");
    assert_eq!(stored[0]["state"], "N/A");
    assert!((stored[0]["latitude"].as_f64().unwrap() - 35.46).abs() <= 0.05);
    assert!((stored[0]["longitude"].as_f64().unwrap() - -97.51).abs() <= 0.05);
}

#[tokio::test]
async fn test_submit_coordinates_that_are_not_numeric() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "coordinates", "latitude": "abc", "longitude": "-97.51"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "notNumeric");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_coordinates_that_are_not_finite() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "coordinates", "latitude": "NaN", "longitude": "-97.51"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "notNumeric");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_coordinates_with_a_missing_longitude() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "coordinates", "latitude": "35.46", "longitude": ""}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "missingField");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_submit_coordinates_out_of_range() {
    let server = test_server().await;

    let body = submit(
        &server,
        json!({"kind": "coordinates", "latitude": "95.0", "longitude": "-97.51"}),
    )
    .await;

    assert_eq!(body["error"], Value::Bool(true));
    assert_eq!(body["errorCode"], "outOfRange");
    assert!(stored_locations(&server).await.is_empty());
}

#[tokio::test]
async fn test_list_preserves_submission_order() {
    let server = test_server().await;

    submit(
        &server,
        json!({"kind": "coordinates", "latitude": "34.0", "longitude": "-97.0"}),
    )
    .await;
    submit(
        &server,
        json!({"kind": "coordinates", "latitude": "36.0", "longitude": "-99.0"}),
    )
    .await;

    let stored = stored_locations(&server).await;
    assert_eq!(stored.len(), 2);
    assert!((stored[0]["latitude"].as_f64().unwrap() - 34.0).abs() <= 0.05);
    assert!((stored[1]["latitude"].as_f64().unwrap() - 36.0).abs() <= 0.05);
}

#[tokio::test]
async fn test_summary_groups_by_place() {
    let server = test_server().await;

    submit(
        &server,
        json!({"kind": "place", "city": "Norman", "state": "Oklahoma"}),
    )
    .await;
    submit(
        &server,
        json!({"kind": "place", "city": "Norman", "state": "Oklahoma"}),
    )
    .await;
    submit(
        &server,
        json!({"kind": "coordinates", "latitude": "35.46", "longitude": "-97.51"}),
    )
    .await;

    let response = server.get("/locations/summary").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], Value::Bool(false));
    assert_eq!(
        body["rows"],
        json!([
            {"city": "Norman", "state": "Oklahoma", "count": 2},
            {"city": "N/A", "state": "N/A", "count": 1},
            {"city": "Total", "state": "", "count": 3},
        ]),
    );
}

#[tokio::test]
async fn test_states_for_a_chooser() {
    let server = test_server().await;

    let response = server.get("/locations/states").await;

    response.assert_status_ok();
    response.assert_json(&StatesResponse {
        states: STATES.to_vec(),
        default_state: DEFAULT_STATE,
    });
}

#[test]
fn test_canonical_state_lookup() {
    use crate::locations::states::canonical;

    assert_eq!(canonical("Oklahoma"), Some("Oklahoma"));
    assert_eq!(canonical("new york"), Some("New York"));
    assert_eq!(canonical("Kansas City"), None);
}

#[test]
fn test_fake_geocoder_norman_centroid() {
    let FakeGeocoder::Found(position) = FakeGeocoder::norman() else {
        panic!("Expected the found variant.");
    };
    assert_eq!(
        position,
        LatLng {
            lat: 35.22,
            lng: -97.44,
        },
    );
}
