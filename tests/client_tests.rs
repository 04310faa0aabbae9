//! Remote user service client against a wiremock server.

use serde_json::json;
use userdesk::api::client::{UserService, UserServiceClient};
use userdesk::core::error::ClientError;
use userdesk::models::user::{NewUser, UserDraft, UserId};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> UserServiceClient {
    UserServiceClient::with_http_client(server.uri(), reqwest::Client::new())
}

fn user_json(id: u64, name: &str, city: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "username": format!("user{}", id),
        "email": format!("user{}@example.com", id),
        "phone": "1234567890",
        "address": {
            "street": "Main St",
            "suite": "Apt. 1",
            "city": city,
            "zipcode": "12345",
            "geo": { "lat": "0", "lng": "0" }
        },
        "website": "example.org",
        "company": { "name": "ACME", "bs": "synergy" }
    })
}

#[tokio::test]
async fn test_list_users_preserves_server_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json(3, "Clementine", "McKenziehaven"),
            user_json(1, "Leanne", "Gwenborough"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server).list_users().await.unwrap();
    let ids: Vec<UserId> = users.iter().map(|u| u.id.clone()).collect();
    assert_eq!(ids, vec![UserId::from(3), UserId::from(1)]);
    assert_eq!(users[1].address.city, "Gwenborough");
}

#[tokio::test]
async fn test_list_users_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server).list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Status(s) if s.as_u16() == 503));
}

#[tokio::test]
async fn test_list_users_bad_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // grab a free port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = UserServiceClient::with_http_client(format!("http://{}", addr), reqwest::Client::new());
    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_create_user_posts_json_with_client_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "id": "client-id",
            "name": "Ada",
            "username": "USER-Ada",
            "address": { "city": "London" },
            "companyName": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "name": "Ada",
            "username": "USER-Ada",
            "address": { "city": "London" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = UserDraft {
        name: "Ada".to_string(),
        username: "USER-Ada".to_string(),
        city: "London".to_string(),
        ..Default::default()
    };
    let body = NewUser::from_draft(UserId::Text("client-id".to_string()), &draft);

    let created = client(&server).create_user(&body).await.unwrap();
    // the server's id wins
    assert_eq!(created.id, UserId::from(11));
}

#[tokio::test]
async fn test_replace_user_sends_full_record() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/2"))
        .and(body_partial_json(json!({
            "id": 2,
            "address": { "city": "Springfield", "geo": { "lat": "0" } },
            "company": { "name": "ACME", "bs": "synergy" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(2, "Ervin", "Springfield")))
        .expect(1)
        .mount(&server)
        .await;

    let mut user: userdesk::models::user::User =
        serde_json::from_value(user_json(2, "Ervin", "Wisokyburgh")).unwrap();
    user.address.city = "Springfield".to_string();

    let updated = client(&server)
        .replace_user(&UserId::from(2), &user)
        .await
        .unwrap();
    assert_eq!(updated.address.city, "Springfield");
}

#[tokio::test]
async fn test_delete_user_ignores_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.delete_user(&UserId::from(1)).await.is_ok());
    assert!(matches!(
        client.delete_user(&UserId::from(2)).await,
        Err(ClientError::Status(s)) if s.as_u16() == 404
    ));
}
