use chrono::{DateTime, Utc};
use validator::{Validate, ValidationErrors};

use crate::domain::{Amount, DonationRequest, Receipt, ReceiptId};
use crate::dto::ReceiptDto;
use crate::forms::donate::DonateForm;
use crate::services::{ServiceError, ServiceResult};

const ANONYMOUS: &str = "Anonymous";

/// First message recorded against `field`, if any.
fn field_violation(errors: &ValidationErrors, field: &str) -> Option<String> {
    let fields = errors.field_errors();
    fields.get(field).and_then(|list| list.first()).map(|error| {
        error
            .message
            .as_ref()
            .map(|message| message.to_string())
            .unwrap_or_else(|| format!("{field} is invalid"))
    })
}

/// Check a submitted form and turn it into a [`DonationRequest`].
///
/// Rules are reported one at a time in a fixed order: amount present,
/// amount positive, name length, message length.
pub fn validate_donation(form: DonateForm) -> ServiceResult<DonationRequest> {
    let errors = form.validate().err();
    let violation = |field: &str| errors.as_ref().and_then(|e| field_violation(e, field));

    if let Some(message) = violation("amount") {
        return Err(ServiceError::Validation(message));
    }
    let amount = form
        .amount
        .ok_or_else(|| ServiceError::Validation("amount is required".into()))?;
    let amount = Amount::try_new(amount).map_err(|e| ServiceError::Validation(e.to_string()))?;

    for field in ["name", "message"] {
        if let Some(message) = violation(field) {
            return Err(ServiceError::Validation(message));
        }
    }

    Ok(DonationRequest::new(amount, form.name, form.message))
}

/// Build the receipt for a validated donation issued at `now`.
pub fn generate_receipt(request: DonationRequest, now: DateTime<Utc>) -> Receipt {
    let (amount, name, message) = request.into_parts();

    Receipt {
        id: ReceiptId::from_time(&now),
        name: name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string()),
        amount,
        message: message.unwrap_or_default(),
        issued_at: now,
    }
}

/// Validate a donation form and issue its receipt.
pub fn submit(form: DonateForm, now: DateTime<Utc>) -> ServiceResult<ReceiptDto> {
    let request = validate_donation(form)?;
    let receipt = generate_receipt(request, now);
    log::info!("Issued receipt {}", receipt.id);
    Ok(ReceiptDto::from(receipt))
}
