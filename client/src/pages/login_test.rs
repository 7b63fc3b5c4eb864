use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(
        validate_credentials("", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_credentials("   ", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_credentials("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    assert_eq!(
        validate_credentials("a@b.com", " spaced pass "),
        Ok(("a@b.com".to_owned(), " spaced pass ".to_owned()))
    );
}
