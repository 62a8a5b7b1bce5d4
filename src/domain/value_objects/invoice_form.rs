use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::invoice_statuses::InvoiceStatus;

pub const CUSTOMER_REQUIRED_MESSAGE: &str = "Please select a customer.";
pub const AMOUNT_RANGE_MESSAGE: &str = "Please enter an amount greater than $0.";
pub const STATUS_REQUIRED_MESSAGE: &str = "Please select an invoice status.";

/// An invoice form exactly as submitted: every field may be absent and is
/// kept as the original string so it can be echoed back to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInvoiceForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// Per-field validation messages, in the order the rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl InvoiceFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

/// A form payload that passed validation. Only constructible through
/// [`RawInvoiceForm::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInvoiceForm {
    customer_id: String,
    amount: f64,
    status: InvoiceStatus,
}

/// Persistence-ready fields for a new invoice: the amount converted to
/// cents and the date stamped at sanitisation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoiceRecord {
    pub customer_id: String,
    pub amount_cents: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// The fields an update may touch. The stored date is never altered.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceFieldUpdate {
    pub customer_id: String,
    pub amount_cents: i32,
    pub status: InvoiceStatus,
}

impl RawInvoiceForm {
    /// Validates and coerces the raw submission. Total: every failing field
    /// is reported, and a bad field never masks another.
    pub fn validate(&self) -> Result<ValidInvoiceForm, InvoiceFieldErrors> {
        let mut errors = InvoiceFieldErrors::default();

        let customer_id = match self.customer_id.as_deref() {
            Some(value) if !value.trim().is_empty() => Some(value.to_string()),
            _ => {
                errors.customer_id.push(CUSTOMER_REQUIRED_MESSAGE.to_string());
                None
            }
        };

        // Unparseable strings coerce to no number at all and fail the same
        // greater-than-zero rule as "0" or "-5".
        let amount = match self
            .amount
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
        {
            Some(value) if value > 0.0 => Some(value),
            _ => {
                errors.amount.push(AMOUNT_RANGE_MESSAGE.to_string());
                None
            }
        };

        let status = match self.status.as_deref().and_then(InvoiceStatus::from_str) {
            Some(value) => Some(value),
            None => {
                errors.status.push(STATUS_REQUIRED_MESSAGE.to_string());
                None
            }
        };

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) => Ok(ValidInvoiceForm {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}

impl ValidInvoiceForm {
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// Maps the validated payload into persistence-ready fields for a new
    /// invoice. Pure; the caller supplies the creation date.
    pub fn sanitize(&self, today: NaiveDate) -> NewInvoiceRecord {
        NewInvoiceRecord {
            customer_id: self.customer_id.clone(),
            amount_cents: amount_to_cents(self.amount),
            status: self.status,
            date: today,
        }
    }

    /// Same mapping for in-place updates, which leave the stored date as is.
    pub fn sanitize_update(&self) -> InvoiceFieldUpdate {
        InvoiceFieldUpdate {
            customer_id: self.customer_id.clone(),
            amount_cents: amount_to_cents(self.amount),
            status: self.status,
        }
    }
}

// Half-cent amounts round away from zero; validated amounts are positive,
// so this is round-half-up.
fn amount_to_cents(amount: f64) -> i32 {
    (amount * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(customer_id: Option<&str>, amount: Option<&str>, status: Option<&str>) -> RawInvoiceForm {
        RawInvoiceForm {
            customer_id: customer_id.map(String::from),
            amount: amount.map(String::from),
            status: status.map(String::from),
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        let valid = raw(Some("cust-1"), Some("50"), Some("pending"))
            .validate()
            .unwrap();

        assert_eq!(valid.customer_id(), "cust-1");
        assert_eq!(valid.amount(), 50.0);
        assert_eq!(valid.status(), InvoiceStatus::Pending);
    }

    #[test]
    fn missing_customer_reports_only_the_customer_field() {
        let errors = raw(None, Some("50"), Some("paid")).validate().unwrap_err();

        assert_eq!(errors.customer_id, vec![CUSTOMER_REQUIRED_MESSAGE]);
        assert!(errors.amount.is_empty());
        assert!(errors.status.is_empty());
    }

    #[test]
    fn blank_customer_is_treated_as_missing() {
        let errors = raw(Some("   "), Some("50"), Some("paid"))
            .validate()
            .unwrap_err();

        assert_eq!(errors.customer_id, vec![CUSTOMER_REQUIRED_MESSAGE]);
    }

    #[test]
    fn non_positive_amounts_fail_with_the_amount_message() {
        for bad_amount in ["0", "-5", "abc", ""] {
            let errors = raw(Some("cust-1"), Some(bad_amount), Some("paid"))
                .validate()
                .unwrap_err();

            assert_eq!(errors.amount, vec![AMOUNT_RANGE_MESSAGE], "for {bad_amount:?}");
        }
    }

    #[test]
    fn absent_amount_fails_with_the_amount_message() {
        let errors = raw(Some("cust-1"), None, Some("paid"))
            .validate()
            .unwrap_err();

        assert_eq!(errors.amount, vec![AMOUNT_RANGE_MESSAGE]);
    }

    #[test]
    fn unknown_status_fails_with_the_status_message() {
        let errors = raw(Some("cust-1"), Some("50"), Some("overdue"))
            .validate()
            .unwrap_err();

        assert_eq!(errors.status, vec![STATUS_REQUIRED_MESSAGE]);
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let errors = RawInvoiceForm::default().validate().unwrap_err();

        assert_eq!(errors.customer_id, vec![CUSTOMER_REQUIRED_MESSAGE]);
        assert_eq!(errors.amount, vec![AMOUNT_RANGE_MESSAGE]);
        assert_eq!(errors.status, vec![STATUS_REQUIRED_MESSAGE]);
    }

    #[test]
    fn sanitize_converts_dollars_to_cents() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let record = raw(Some("cust-1"), Some("12.34"), Some("paid"))
            .validate()
            .unwrap()
            .sanitize(today);

        assert_eq!(record.amount_cents, 1234);
        assert_eq!(record.status, InvoiceStatus::Paid);
        assert_eq!(record.date, today);
    }

    #[test]
    fn sanitize_rounds_half_cents_up() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let record = raw(Some("cust-1"), Some("0.005"), Some("pending"))
            .validate()
            .unwrap()
            .sanitize(today);

        assert_eq!(record.amount_cents, 1);
    }

    #[test]
    fn sanitize_update_carries_no_date() {
        let changes = raw(Some("cust-2"), Some("99.99"), Some("paid"))
            .validate()
            .unwrap()
            .sanitize_update();

        assert_eq!(changes.customer_id, "cust-2");
        assert_eq!(changes.amount_cents, 9999);
        assert_eq!(changes.status, InvoiceStatus::Paid);
    }
}
