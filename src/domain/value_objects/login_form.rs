use serde::{Deserialize, Serialize};

/// A login form exactly as submitted. The password is consumed by the
/// credential check and never echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawLoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// The part of the login submission that may be shown again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginFormEcho {
    pub email: Option<String>,
}

/// State handed back to the login form after a failed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateActionState {
    pub form_data: LoginFormEcho,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
