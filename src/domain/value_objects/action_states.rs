use serde::Serialize;

use crate::domain::value_objects::invoice_form::{InvoiceFieldErrors, RawInvoiceForm};

/// What went wrong with a mutation, as shown to the form: per-field
/// messages for validation rejections, a generic message otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<InvoiceFieldErrors>,
    pub message: String,
}

/// The reconciled state handed back to the invoice form. `form_data` always
/// echoes the user's submission verbatim so a re-render never discards
/// their work.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationActionState {
    pub form_data: RawInvoiceForm,
    pub error: Option<MutationFeedback>,
}

impl MutationActionState {
    pub fn clean(form_data: RawInvoiceForm) -> Self {
        Self {
            form_data,
            error: None,
        }
    }

    pub fn rejected(
        form_data: RawInvoiceForm,
        field_errors: InvoiceFieldErrors,
        message: impl Into<String>,
    ) -> Self {
        Self {
            form_data,
            error: Some(MutationFeedback {
                field_errors: Some(field_errors),
                message: message.into(),
            }),
        }
    }

    pub fn failed(form_data: RawInvoiceForm, message: impl Into<String>) -> Self {
        Self {
            form_data,
            error: Some(MutationFeedback {
                field_errors: None,
                message: message.into(),
            }),
        }
    }
}

/// How a mutation ended. `Redirect` is a successful terminal control
/// transfer, never an error: recovery code cannot intercept it by accident.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Redirect(String),
    Rerender(MutationActionState),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_state_echoes_the_submission_verbatim() {
        let form_data = RawInvoiceForm {
            customer_id: Some("cust-1".to_string()),
            amount: Some("abc".to_string()),
            status: None,
        };
        let mut field_errors = InvoiceFieldErrors::default();
        field_errors.amount.push("bad amount".to_string());

        let state = MutationActionState::rejected(form_data.clone(), field_errors, "nope");

        assert_eq!(state.form_data, form_data);
        assert_eq!(state.form_data.amount.as_deref(), Some("abc"));
    }

    #[test]
    fn clean_state_carries_no_error() {
        let state = MutationActionState::clean(RawInvoiceForm::default());
        assert!(state.error.is_none());
    }
}
