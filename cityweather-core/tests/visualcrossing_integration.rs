//! Integration tests for the Visual Crossing provider and forecast cards
//! against a mock HTTP server.

use std::sync::Arc;

use cityweather_core::{
    Config, Failure, ForecastCard, ForecastProvider, Location, TimeOfDay, provider_from_config,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMELINE: &str = "/VisualCrossingWebServices/rest/services/timeline";

fn timeline_body(resolved_address: &str) -> serde_json::Value {
    let days: Vec<serde_json::Value> = [
        ("2022-09-05", "Clear", 71.6),
        ("2022-09-06", "Partially cloudy, Overcast", 68.2),
        ("2022-09-07", "Rain, Overcast", 64.5),
        ("2022-09-08", "Overcast", 60.1),
        ("2022-09-09", "Snow", 31.9),
        ("2022-09-10", "Rain", 59.4),
    ]
    .into_iter()
    .map(|(date, conditions, temp)| {
        serde_json::json!({
            "datetime": date,
            "datetimeEpoch": 1662350400,
            "conditions": conditions,
            "tempmax": temp + 6.0,
            "tempmin": temp - 6.0,
            "temp": temp,
            "icon": "ignored"
        })
    })
    .collect();

    serde_json::json!({
        "queryCost": 1,
        "latitude": 26.14,
        "longitude": -81.79,
        "resolvedAddress": resolved_address,
        "timezone": "America/New_York",
        "days": days
    })
}

fn provider_for(server: &MockServer) -> Arc<dyn ForecastProvider> {
    let mut cfg = Config::default();
    cfg.set_api_key("TEST_KEY".to_string());
    cfg.base_url = Some(server.uri());
    provider_from_config(&cfg).unwrap()
}

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;
    let body = timeline_body("Naples, FL, United States");

    Mock::given(method("GET"))
        .and(path(format!("{TIMELINE}/Naples,FL/next5days")))
        .and(query_param("unitGroup", "us"))
        .and(query_param("key", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let location = Location::new("Naples").unwrap().with_state("FL");
    let response = provider.fetch(&location).await.unwrap();

    assert_eq!(response.resolved_address, "Naples, FL, United States");
    assert_eq!(response.days.len(), 6);
    assert_eq!(response.days[1].date, "2022-09-06");
    assert_eq!(response.days[1].temp, 68.2);
}

#[tokio::test]
async fn test_spaces_are_sent_escaped() {
    let mock_server = MockServer::start().await;
    let body = timeline_body("New York, NY, United States");

    Mock::given(method("GET"))
        .and(path(format!("{TIMELINE}/New%20York/next5days")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let response = provider.fetch(&Location::new("New York").unwrap()).await;

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_unauthorized_maps_to_status_failure() {
    let mock_server = MockServer::start().await;
    let rejected = ResponseTemplate::new(401).set_body_string("No account found");

    Mock::given(method("GET"))
        .respond_with(rejected)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let location = Location::new("Iqaluit").unwrap();
    let err = provider.fetch(&location).await.unwrap_err();

    match err {
        Failure::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("No account found"));
        }
        other => panic!("unexpected failure: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_maps_to_decode_failure() {
    let mock_server = MockServer::start().await;
    let html = ResponseTemplate::new(200).set_body_string("<html>maintenance</html>");

    Mock::given(method("GET"))
        .respond_with(html)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let location = Location::new("Portland").unwrap();
    let err = provider.fetch(&location).await.unwrap_err();

    assert!(matches!(err, Failure::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host_maps_to_network_failure() {
    let mut cfg = Config::default();
    cfg.set_api_key("TEST_KEY".to_string());
    cfg.base_url = Some("http://127.0.0.1:1".to_string());
    let provider = provider_from_config(&cfg).unwrap();

    let location = Location::new("Portland").unwrap();
    let err = provider.fetch(&location).await.unwrap_err();

    assert!(matches!(err, Failure::Network(_)));
}

#[tokio::test]
async fn test_network_failure_does_not_leak_api_key() {
    let mut cfg = Config::default();
    cfg.set_api_key("TEST_KEY".to_string());
    cfg.base_url = Some("http://127.0.0.1:1".to_string());
    let provider = provider_from_config(&cfg).unwrap();

    let location = Location::new("Portland").unwrap();
    let err = provider.fetch(&location).await.unwrap_err();

    assert!(!err.to_string().contains("TEST_KEY"), "leaked key: {err}");
    assert!(!format!("{err:?}").contains("TEST_KEY"));
}

#[tokio::test]
async fn test_cards_load_independently() {
    let mock_server = MockServer::start().await;
    let body = timeline_body("London, UK");

    Mock::given(method("GET"))
        .and(path(format!("{TIMELINE}/London,UK/next5days")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{TIMELINE}/Philadelphia/next5days")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let mut london = ForecastCard::new(Location::new("London").unwrap().with_country("UK"));
    let mut philly = ForecastCard::new(Location::new("Philadelphia").unwrap());

    london.appear(provider.clone());
    philly.appear(provider.clone());
    london.settle().await;
    philly.settle().await;

    let view = london.view(TimeOfDay::Night);
    assert!(!view.stale);
    assert_eq!(view.title, "London, UK");
    assert_eq!(view.today.icon_key, "moon.fill");
    assert_eq!(view.today.temperature_rounded, 72);

    let upcoming = &view.upcoming;
    let labels: Vec<&str> = upcoming.iter().map(|d| d.weekday_label.as_str()).collect();
    assert_eq!(labels, ["TUE", "WED", "THU", "FRI", "SAT"]);
    assert_eq!(view.upcoming[0].icon_key, "cloud.moon.fill");
    assert_eq!(view.upcoming[1].temperature_rounded, 65);

    let failure = philly.failure();
    assert!(matches!(failure, Some(Failure::Status { status: 503, .. })));
    assert!(philly.view(TimeOfDay::Day).stale);
}
