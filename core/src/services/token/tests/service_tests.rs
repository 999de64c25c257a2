//! Unit tests for token generation and verification

use crate::domain::entities::token::{SCOPE_ACTIVATE_ACCOUNT, SCOPE_API_ACCESS};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "test-signing-secret";

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::default())
}

#[test]
fn test_generate_verify_round_trip() {
    let service = service();
    let grants = vec![SCOPE_API_ACCESS.to_string()];

    let token = service
        .generate(Some(42), "keyfort-web", SECRET, 900, &grants)
        .unwrap();
    let claims = service.verify(&token, SECRET).unwrap();

    assert_eq!(claims.subject_id(), Some(42));
    assert_eq!(claims.cid, "keyfort-web");
    assert_eq!(claims.grants, grants);
}

#[test]
fn test_round_trip_without_subject() {
    let service = service();

    let token = service
        .generate(None, "keyfort-web", SECRET, 900, &[])
        .unwrap();
    let claims = service.verify(&token, SECRET).unwrap();

    assert_eq!(claims.subject_id(), None);
}

#[test]
fn test_wrong_secret_is_invalid() {
    let service = service();
    let token = service
        .generate(Some(1), "keyfort-web", SECRET, 900, &[])
        .unwrap();

    let result = service.verify(&token, "some-other-secret");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_tampered_token_is_invalid() {
    let service = service();
    let token = service
        .generate(Some(1), "keyfort-web", SECRET, 900, &[])
        .unwrap();

    // Flip a character in the payload segment
    let mut tampered: Vec<char> = token.chars().collect();
    let mid = tampered.len() / 2;
    tampered[mid] = if tampered[mid] == 'a' { 'b' } else { 'a' };
    let tampered: String = tampered.into_iter().collect();

    let result = service.verify(&tampered, SECRET);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_garbage_token_is_invalid() {
    let service = service();
    let result = service.verify("not.a.token", SECRET);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_expired_token_fails_with_expired() {
    let service = service();

    // Negative lifetime produces a token that is already past expiry
    let token = service
        .generate(Some(1), "keyfort-web", SECRET, -10, &[])
        .unwrap();

    let result = service.verify(&token, SECRET);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[test]
fn test_token_before_expiry_verifies() {
    let service = service();
    let grants = vec![SCOPE_ACTIVATE_ACCOUNT.to_string()];

    let token = service
        .generate(Some(7), "keyfort-web", SECRET, 60, &grants)
        .unwrap();

    // Well within the 60 second lifetime
    let claims = service.verify(&token, SECRET).unwrap();
    assert!(claims.has_grant(SCOPE_ACTIVATE_ACCOUNT));
    assert!(!claims.is_expired());
}
