use super::{IdentityError, Owner};

/// Extracts the token from an `Authorization` header value.
///
/// The value must be exactly two whitespace-separated parts, the first being
/// `Bearer` in any case.
pub fn parse_bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token)
}

/// Builds the owner from a provider-supplied email claim.
pub fn email_to_owner(email: Option<&str>) -> Result<Owner, IdentityError> {
    match email.map(str::trim) {
        Some(email) if !email.is_empty() => Ok(Owner::new(email)),
        _ => Err(IdentityError::Rejected(
            "identity has no email claim".to_string(),
        )),
    }
}
