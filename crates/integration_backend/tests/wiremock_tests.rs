//! Integration tests for the booking backend client (wiremock-based)

use domain::{RideRequest, Role};
use secrecy::SecretString;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_backend::{BackendClient, BackendConfig, BackendError, RideBackendClient};

fn client_for(server: &MockServer) -> RideBackendClient {
    RideBackendClient::new(&BackendConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn ride_request() -> RideRequest {
    RideRequest {
        pickup_area: "10 Downing St, London".to_string(),
        destination_area: "Heathrow Airport, London".to_string(),
        pickup_latitude: 51.5034,
        pickup_longitude: -0.1276,
        destination_latitude: 51.47,
        destination_longitude: -0.4543,
    }
}

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "rider@example.com",
            "password": "hunter2",
            "role": "NORMAL_USER"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "jwt-abc",
            "message": "Login successful"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .login(
            "rider@example.com",
            &SecretString::from("hunter2".to_string()),
            Role::NormalUser,
        )
        .await
        .unwrap();

    assert_eq!(response.token, "jwt-abc");
    assert_eq!(response.message.as_deref(), Some("Login successful"));
}

#[tokio::test]
async fn login_rejection_carries_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "message": "Invalid password"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login("a@b.com", &SecretString::from("x".to_string()), Role::Driver)
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Rejected(m) if m == "Invalid password"));
}

#[tokio::test]
async fn driver_profile_uses_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drivers/profile"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "email": "driver@example.com",
            "fullName": "Dee River",
            "mobile": "+44 7700 900123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = client_for(&server).profile("jwt-abc", Role::Driver).await.unwrap();

    assert_eq!(profile.email, "driver@example.com");
    assert_eq!(profile.name.as_deref(), Some("Dee River"));
}

#[tokio::test]
async fn rider_profile_401_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .profile("stale", Role::NormalUser)
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Unauthorized));
}

#[tokio::test]
async fn request_ride_posts_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rides"))
        .and(header("authorization", "Bearer jwt-abc"))
        .and(body_json(serde_json::json!({
            "pickupArea": "10 Downing St, London",
            "destinationArea": "Heathrow Airport, London",
            "pickupLatitude": 51.5034,
            "pickupLongitude": -0.1276,
            "destinationLatitude": 51.47,
            "destinationLongitude": -0.4543
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "abc123",
            "message": "Ride Booked"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let booked = client_for(&server)
        .request_ride("jwt-abc", &ride_request())
        .await
        .unwrap();

    assert_eq!(booked.id, "abc123");
    assert_eq!(booked.message.as_deref(), Some("Ride Booked"));
}

#[tokio::test]
async fn request_ride_code_401_body_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rides"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 401,
            "message": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request_ride("jwt-abc", &ride_request())
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Unauthorized));
}

#[tokio::test]
async fn request_ride_server_error_is_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rides"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request_ride("jwt-abc", &ride_request())
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::RequestFailed(_)));
}

#[tokio::test]
async fn unreachable_backend_is_connection_failure() {
    let client = RideBackendClient::new(&BackendConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
    })
    .unwrap();

    let err = client.request_ride("jwt", &ride_request()).await.unwrap_err();

    assert!(matches!(
        err,
        BackendError::ConnectionFailed(_) | BackendError::Timeout { .. }
    ));
}
