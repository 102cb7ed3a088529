use serde::Deserialize;
use serde_json::Number;
use validator::Validate;

/// Raw `POST /donate` body.
#[derive(Debug, Deserialize, Validate)]
pub struct DonateForm {
    #[validate(required(message = "amount is required"))]
    pub amount: Option<Number>,
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "message must be at most 500 characters"))]
    pub message: Option<String>,
}
