use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::post,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::error;

use crate::{
    application::usecases::authentication::{AuthOutcome, AuthenticationUseCase},
    auth::{self, SESSION_COOKIE},
    config::config_loader,
    domain::{
        repositories::users::UserRepository,
        value_objects::login_form::{AuthenticateActionState, LoginFormEcho, RawLoginForm},
    },
    infrastructure::postgres::{postgres_connection::PgPool, repositories::users::UserPostgres},
};

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let authentication_usecase = AuthenticationUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(Arc::new(authentication_usecase))
}

pub async fn login<U>(
    State(authentication_usecase): State<Arc<AuthenticationUseCase<U>>>,
    jar: CookieJar,
    Form(raw_form): Form<RawLoginForm>,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
{
    let email_echo = raw_form.email.clone();

    match authentication_usecase.authenticate(raw_form).await {
        AuthOutcome::Authenticated(session_user) => {
            let config = match config_loader::load() {
                Ok(config) => config,
                Err(err) => {
                    error!(config_error = ?err, "auth: failed to load config for session");
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            };

            let token = match auth::mint_session_token(
                &config.session.jwt_secret,
                config.session.ttl_seconds,
                &session_user,
            ) {
                Ok(token) => token,
                Err(err) => {
                    error!(token_error = ?err, "auth: failed to mint session token");
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            };

            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(cookie::time::Duration::seconds(
                    config.session.ttl_seconds as i64,
                ))
                .build();

            (jar.add(cookie), Redirect::to(&config.routes.invoices_path)).into_response()
        }
        outcome => {
            let status = match outcome {
                AuthOutcome::LookupFailed => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::UNAUTHORIZED,
            };

            let state = AuthenticateActionState {
                form_data: LoginFormEcho { email: email_echo },
                error_message: outcome.error_message().map(String::from),
            };

            (status, Json(state)).into_response()
        }
    }
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");

    (jar.remove(removal), StatusCode::NO_CONTENT)
}
