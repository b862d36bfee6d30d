/// Client-side gate before any network call: both fields must be non-empty.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Username and password are required".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_username() {
        assert_eq!(
            validate_credentials("", "secret").unwrap_err(),
            "Username and password are required"
        );
        assert!(validate_credentials("   ", "secret").is_err());
    }

    #[test]
    fn rejects_empty_password() {
        assert!(validate_credentials("alice", "").is_err());
    }

    #[test]
    fn accepts_filled_credentials() {
        assert!(validate_credentials("alice", "secret").is_ok());
    }
}
