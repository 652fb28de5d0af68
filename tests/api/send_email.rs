use contact_form::ErrorResponse;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{receipt, spawn_app, when_sending_an_email, RECIPIENT};

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula@example.com",
        "company": "Earthsea Ltd",
        "message": "We would like to add AI to our product.\nCan we talk?"
    })
}

#[tokio::test]
async fn a_valid_request_returns_200_with_the_provider_receipt() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt("receipt-1")))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app.post_send_email(&valid_body()).await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "success": true, "data": { "id": "receipt-1" } })
    );
}

#[tokio::test]
async fn the_provider_receipt_is_passed_through_verbatim() {
    // arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({"id": "r-1", "created_at": "2026-01-01"}),
            "extra keys",
        ),
        (serde_json::json!({"message_id": "m-1"}), "no id"),
    ];
    for (provider_receipt, _) in &test_cases {
        when_sending_an_email()
            .respond_with(ResponseTemplate::new(200).set_body_json(provider_receipt.clone()))
            .up_to_n_times(1)
            .expect(1)
            .mount(&app.email_server)
            .await;
    }

    for (provider_receipt, description) in test_cases {
        // act
        let response = app.post_send_email(&valid_body()).await;

        // assert
        assert_eq!(
            200,
            response.status().as_u16(),
            "API did not succeed when the receipt had {}",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": true, "data": provider_receipt })
        );
    }
}

#[tokio::test]
async fn the_email_goes_to_the_configured_inbox_with_the_submitter_as_reply_to() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt("receipt-1")))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    app.post_send_email(&valid_body()).await;

    // assert
    let emails = app.delivered_emails().await;
    let email = &emails[0];
    assert_eq!(email["from"], "AI Integration Labs <onboarding@resend.dev>");
    assert_eq!(email["to"], RECIPIENT);
    assert_eq!(email["reply_to"], "ursula@example.com");
    assert_eq!(
        email["subject"],
        "New Consultation Request from Ursula Le Guin"
    );
    let html = email["html"].as_str().unwrap();
    assert!(html.contains("mailto:ursula@example.com"));
    assert!(html.contains("Earthsea Ltd"));
    assert!(html.contains("We would like to add AI to our product.<br>Can we talk?"));
}

#[tokio::test]
async fn a_request_without_company_omits_the_company_section() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt("receipt-1")))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app
        .post_send_email(&serde_json::json!({
            "name": "A",
            "email": "a@b.com",
            "message": "hi"
        }))
        .await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let emails = app.delivered_emails().await;
    assert!(!emails[0]["html"].as_str().unwrap().contains("Company:"));
}

#[tokio::test]
async fn missing_or_empty_required_fields_return_400_without_sending() {
    // arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt("receipt-1")))
        .expect(0)
        .mount(&app.email_server)
        .await;
    let test_cases = vec![
        (
            serde_json::json!({"name": "", "email": "a@b.com", "message": "hi"}),
            "empty name",
        ),
        (
            serde_json::json!({"name": "A", "message": "hi"}),
            "missing email",
        ),
        (
            serde_json::json!({"name": "A", "email": "a@b.com", "message": null}),
            "null message",
        ),
        (serde_json::json!({}), "missing everything"),
    ];

    for (invalid_body, description) in test_cases {
        // act
        let response = app.post_send_email(&invalid_body).await;

        // assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "API did not fail with 400 when payload had {}",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Missing required fields" }));
    }
}

#[tokio::test]
async fn the_email_format_is_not_rechecked_by_the_server() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt("receipt-1")))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app
        .post_send_email(&serde_json::json!({
            "name": "A",
            "email": "not-an-email",
            "message": "hi"
        }))
        .await;

    // assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn a_malformed_body_returns_400() {
    // arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;
    let test_cases = vec![
        ("{\"name\": \"A\",", "truncated json"),
        ("not json at all", "plain text"),
        ("{\"name\": 42, \"email\": \"a@b.com\", \"message\": \"hi\"}", "wrong field type"),
    ];

    for (invalid_body, description) in test_cases {
        // act
        let response = app.post_raw_send_email(invalid_body).await;

        // assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "API did not fail with 400 when payload was {}",
            description
        );
        let body: ErrorResponse = response.json().await.unwrap();
        assert_eq!(body.error, "Invalid request body");
        assert!(body.details.is_some());
    }
}

#[tokio::test]
async fn a_provider_failure_returns_500_with_details() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app.post_send_email(&valid_body()).await;

    // assert
    assert_eq!(500, response.status().as_u16());
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error, "Failed to send email");
    assert!(body.details.is_some());
}

#[tokio::test]
async fn a_slow_provider_is_treated_as_a_failure() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(receipt("receipt-1"))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let response = app.post_send_email(&valid_body()).await;

    // assert
    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn the_server_keeps_serving_after_a_provider_failure() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.email_server)
        .await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt("receipt-2")))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let first = app.post_send_email(&valid_body()).await;
    let second = app.post_send_email(&valid_body()).await;

    // assert
    assert_eq!(500, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}

#[tokio::test]
async fn every_valid_request_sends_its_own_email() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200).set_body_json(receipt("receipt-1")))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // act
    app.post_send_email(&valid_body()).await;
    app.post_send_email(&valid_body()).await;

    // Mock asserts on drop that both requests reached the provider
}
