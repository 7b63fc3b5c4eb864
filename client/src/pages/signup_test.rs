use super::*;

#[test]
fn validate_signup_trims_email() {
    assert_eq!(
        validate_signup("  new@example.com ", "hunter22"),
        Ok(("new@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_signup_requires_both_fields() {
    assert_eq!(
        validate_signup("   ", "hunter22"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_signup("new@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_signup_rejects_short_passwords() {
    assert_eq!(
        validate_signup("new@example.com", "five5"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_signup("new@example.com", "sixsix").is_ok());
}
