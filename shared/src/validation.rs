use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::api::RegisterRequest;
use crate::constants::{
    MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, PASSWORD_MISMATCH_ERROR,
};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern"));

static SPECIAL_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("special char pattern"));

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Text shown to the user for a failed rule.
pub fn error_message(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(rule("invalid_email_format", "Invalid email format"));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LENGTH {
        return Err(rule("username_too_short", "Username must be at least 3 characters"));
    }
    if len > MAX_USERNAME_LENGTH {
        return Err(rule("username_too_long", "Username must be at most 20 characters"));
    }
    if !USERNAME_REGEX.is_match(username) {
        return Err(rule(
            "username_invalid_chars",
            "Username can only contain letters, numbers and underscores",
        ));
    }
    Ok(())
}

/// Reports the first rule the password breaks.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let checks = PasswordChecklist::check(password);
    if !checks.has_min_length {
        return Err(rule("password_too_short", "Password must be at least 8 characters"));
    }
    if !checks.has_uppercase {
        return Err(rule("password_no_upper", "Password must contain at least one uppercase letter"));
    }
    if !checks.has_lowercase {
        return Err(rule("password_no_lower", "Password must contain at least one lowercase letter"));
    }
    if !checks.has_number {
        return Err(rule("password_no_digit", "Password must contain at least one digit"));
    }
    if !checks.has_special {
        return Err(rule("password_no_special", "Password must contain at least one special character"));
    }
    Ok(())
}

pub fn validate_password_match(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(rule("password_mismatch", PASSWORD_MISMATCH_ERROR));
    }
    Ok(())
}

/// Client-side registration checks, in the order the form reports them.
pub fn validate_registration(request: &RegisterRequest, confirm: &str) -> Result<(), ValidationError> {
    validate_password_match(&request.password, confirm)?;
    validate_username(&request.username)?;
    validate_email(&request.email)?;
    validate_password(&request.password)?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PasswordStrength {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::None => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

/// Live checklist shown under the register password field.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PasswordChecklist {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special: bool,
    pub strength: PasswordStrength,
}

impl PasswordChecklist {
    pub fn check(password: &str) -> Self {
        if password.is_empty() {
            return Self::default();
        }
        let mut state = Self {
            has_min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
            has_special: SPECIAL_CHAR_REGEX.is_match(password),
            strength: PasswordStrength::None,
        };
        state.strength = state.calculate_strength();
        state
    }

    pub fn is_valid(&self) -> bool {
        self.has_min_length && self.has_uppercase && self.has_lowercase && self.has_number && self.has_special
    }

    fn calculate_strength(&self) -> PasswordStrength {
        let met = [
            self.has_min_length,
            self.has_uppercase,
            self.has_lowercase,
            self.has_number,
            self.has_special,
        ]
        .iter()
        .filter(|&&x| x)
        .count();

        match met {
            0..=1 => PasswordStrength::None,
            2..=3 => PasswordStrength::Weak,
            4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn message(result: Result<(), ValidationError>) -> String {
        error_message(&result.unwrap_err())
    }

    #[test]
    fn password_rules_report_first_failure() {
        assert_eq!(message(validate_password("Ab1!")), "Password must be at least 8 characters");
        assert_eq!(message(validate_password("abcdefg1!")), "Password must contain at least one uppercase letter");
        assert_eq!(message(validate_password("ABCDEFG1!")), "Password must contain at least one lowercase letter");
        assert_eq!(message(validate_password("Abcdefgh!")), "Password must contain at least one digit");
        assert_eq!(message(validate_password("Abcdefgh1")), "Password must contain at least one special character");
        assert!(validate_password("Abcdefg1!").is_ok());
    }

    #[test]
    fn underscore_is_not_a_special_character() {
        assert!(validate_password("Abcdefg1_").is_err());
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(21)).is_err());
        assert_eq!(
            message(validate_username("bad-name")),
            "Username can only contain letters, numbers and underscores"
        );
        assert!(validate_username("lucky_7").is_ok());
    }

    #[test]
    fn email_format() {
        assert!(validate_email("player@casino.com").is_ok());
        assert!(validate_email("player@casino").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn registration_checks_confirmation_first() {
        let req = register("x", "nope", "short");
        assert_eq!(message(validate_registration(&req, "other")), PASSWORD_MISMATCH_ERROR);
        assert_eq!(
            message(validate_registration(&req, "short")),
            "Username must be at least 3 characters"
        );
        let ok = register("player_1", "p@casino.com", "Secret12!");
        assert!(validate_registration(&ok, "Secret12!").is_ok());
    }

    #[test]
    fn checklist_strength() {
        assert_eq!(PasswordChecklist::check("").strength, PasswordStrength::None);
        assert_eq!(PasswordChecklist::check("abc").strength, PasswordStrength::None);
        assert_eq!(PasswordChecklist::check("abcD").strength, PasswordStrength::Weak);
        assert_eq!(PasswordChecklist::check("abcdefgH1").strength, PasswordStrength::Medium);
        let full = PasswordChecklist::check("abcdefgH1!");
        assert_eq!(full.strength, PasswordStrength::Strong);
        assert!(full.is_valid());
    }
}
