use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};

const SECRET: &str = "supersecretjwtsecretforunittesting123";

fn sample_session_user() -> SessionUser {
    SessionUser {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
    }
}

#[test]
fn test_session_token_round_trip() {
    let user = sample_session_user();

    let token = mint_session_token(SECRET, 3600, &user).unwrap();
    let claims = validate_session_token(SECRET, &token).expect("Valid token should pass");

    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.name, user.name);
    assert_eq!(claims.email, user.email);
}

#[test]
fn test_expired_session_token_fails() {
    let my_claims = SessionClaims {
        sub: Uuid::new_v4().to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        exp: 1, // past
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let result = validate_session_token(SECRET, &token);
    assert!(result.is_err());
}

#[test]
fn test_session_token_with_wrong_secret_fails() {
    let user = sample_session_user();

    let token = mint_session_token("wrongsecret", 3600, &user).unwrap();

    let result = validate_session_token(SECRET, &token);
    assert!(result.is_err());
}
