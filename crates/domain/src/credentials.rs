pub const MIN_PASSWORD_LEN: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    validator::validate_email(email)
}

/// Emails are compared and stored trimmed and lowercase
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A strong password has at least `MIN_PASSWORD_LEN` characters and contains a
/// lowercase letter, an uppercase letter, a digit and a symbol.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
