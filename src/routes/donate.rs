use actix_web::{HttpResponse, post, web};
use chrono::Utc;

use crate::forms::donate::DonateForm;
use crate::routes::ApiError;
use crate::services::donations;

#[post("/donate")]
pub async fn donate(web::Json(form): web::Json<DonateForm>) -> Result<HttpResponse, ApiError> {
    let receipt = donations::submit(form, Utc::now()).map_err(|err| {
        log::warn!("Donation rejected: {err}");
        ApiError::from(err)
    })?;

    Ok(HttpResponse::Ok().json(receipt))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::routes::configure;

    async fn post_donation(body: Value) -> (StatusCode, Value) {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/donate")
            .set_json(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    fn assert_no_receipt(body: &Value) {
        for field in ["status", "receipt_id", "name", "amount", "message", "timestamp"] {
            assert!(body.get(field).is_none(), "unexpected field {field}");
        }
    }

    #[actix_web::test]
    async fn donation_returns_receipt() {
        let (status, body) = post_donation(json!({"amount": 50, "name": "Ada"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["name"], "Ada");
        assert_eq!(body["message"], "");
        assert_eq!(body["amount"], json!(50));

        let receipt_id = body["receipt_id"].as_str().unwrap();
        let digits = receipt_id.strip_prefix("BF-").unwrap();
        assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));

        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(timestamp.ends_with('Z'));
        let parsed = chrono::DateTime::parse_from_rfc3339(timestamp).unwrap();
        assert_eq!(parsed.timestamp().to_string(), digits);
    }

    #[actix_web::test]
    async fn fractional_amount_is_echoed() {
        let (status, body) = post_donation(json!({"amount": 12.75})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"], json!(12.75));
        assert_eq!(body["name"], "Anonymous");
    }

    #[actix_web::test]
    async fn negative_amount_is_rejected() {
        let (status, body) = post_donation(json!({"amount": -5})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "amount must be greater than zero");
        assert_no_receipt(&body);
    }

    #[actix_web::test]
    async fn zero_amount_is_rejected() {
        let (status, body) = post_donation(json!({"amount": 0})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_no_receipt(&body);
    }

    #[actix_web::test]
    async fn non_numeric_amount_is_rejected() {
        let (status, body) = post_donation(json!({"amount": "fifty"})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
        assert_no_receipt(&body);
    }

    #[actix_web::test]
    async fn missing_amount_is_rejected() {
        let (status, body) = post_donation(json!({"name": "Ada"})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "amount is required");
    }

    #[actix_web::test]
    async fn overlong_name_is_rejected() {
        let (status, body) = post_donation(json!({"amount": 5, "name": "x".repeat(201)})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "name must be at most 200 characters");
    }
}
