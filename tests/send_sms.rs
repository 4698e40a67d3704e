//! Wire-level tests against a loopback mock server.

use serde_json::json;
use twilio_sms::{ClientConfig, MessageStatus, TwilioClient, TwilioError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_SID: &str = "ACd936ed6dc1504dd79530f19f57b9c008";
const MESSAGES_PATH: &str = "/Accounts/ACd936ed6dc1504dd79530f19f57b9c008/Messages.json";
const MESSAGE_RESPONSE: &str = include_str!("fixtures/message-response.json");

async fn setup() -> (MockServer, TwilioClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(format!("{}/", server.uri()), ACCOUNT_SID).unwrap();
    (server, TwilioClient::new(config))
}

fn message_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(MESSAGE_RESPONSE, "application/json")
}

#[tokio::test]
async fn makes_the_correct_request() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(message_response())
        .expect(1)
        .mount(&server)
        .await;

    client
        .send_sms("+123456", "+234567", "test message")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "POST");
    assert_eq!(requests[0].url.path(), MESSAGES_PATH);
}

#[tokio::test]
async fn serializes_request() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "from": "+123456",
            "to": "+234567",
            "body": "test message"
        })))
        .respond_with(message_response())
        .expect(1)
        .mount(&server)
        .await;

    client
        .send_sms("+123456", "+234567", "test message")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["from"], "+123456");
    assert_eq!(body["to"], "+234567");
    assert_eq!(body["body"], "test message");
}

#[tokio::test]
async fn parses_message_resource() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(message_response())
        .mount(&server)
        .await;

    let message = client
        .send_sms("+123456", "+234567", "test message")
        .await
        .unwrap();

    assert_eq!(
        message.sid.as_ref().map(|sid| sid.as_str()),
        Some("SM1f0e8ae6ade43cb3c0ce4525424e404f")
    );
    assert_eq!(message.account_sid.as_deref(), Some(ACCOUNT_SID));
    assert_eq!(message.status, Some(MessageStatus::Sent));
    assert_eq!(message.num_segments, Some(1));
    assert_eq!(message.body.as_deref(), Some("test message"));
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 21211,
            "message": "The 'To' number +234567 is not a valid phone number.",
            "more_info": "https://www.twilio.com/docs/errors/21211",
            "status": 400
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .send_sms("+123456", "+234567", "test message")
        .await
        .unwrap_err();

    assert!(err.is_transport());
    match err {
        TwilioError::HttpStatus {
            status, api_error, ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(api_error.and_then(|it| it.code), Some(21211));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_without_body_is_a_transport_error() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client
        .send_sms("+123456", "+234567", "test message")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TwilioError::HttpStatus {
            status: 500,
            body: None,
            api_error: None
        }
    ));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client
        .send_sms("+123456", "+234567", "test message")
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::new(format!("http://127.0.0.1:{port}"), ACCOUNT_SID).unwrap();

    let err = TwilioClient::new(config)
        .send_sms("+123456", "+234567", "test message")
        .await
        .unwrap_err();

    assert!(matches!(err, TwilioError::Transport(_)));
}

#[tokio::test]
async fn each_call_sends_its_own_request() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(message_response())
        .expect(2)
        .mount(&server)
        .await;

    client
        .send_sms("+123456", "+234567", "first")
        .await
        .unwrap();
    client
        .send_sms("+345678", "+456789", "second")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let bodies = requests
        .iter()
        .map(|request| request.body_json::<serde_json::Value>().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        bodies,
        vec![
            json!({ "from": "+123456", "to": "+234567", "body": "first" }),
            json!({ "from": "+345678", "to": "+456789", "body": "second" }),
        ]
    );
    for request in &requests {
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.url.path(), MESSAGES_PATH);
    }
}

#[tokio::test]
async fn arguments_are_sent_unchanged() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(message_response())
        .expect(2)
        .mount(&server)
        .await;

    client
        .send_sms(" +123456 ", "+234567", "test message")
        .await
        .unwrap();
    client.send_sms("+123456", "+234567", "").await.unwrap();

    let bodies = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| request.body_json::<serde_json::Value>().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        bodies,
        vec![
            json!({ "from": " +123456 ", "to": "+234567", "body": "test message" }),
            json!({ "from": "+123456", "to": "+234567", "body": "" }),
        ]
    );
}
