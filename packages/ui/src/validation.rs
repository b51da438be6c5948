//! Client-side form checks. Advisory only: the backend re-validates.
//!
//! Every check returns `Err(message)` with text ready to show inline.

pub type Validation = Result<(), String>;

pub const MIN_PASSWORD_LEN: usize = 8;

/// The field must contain something other than whitespace.
pub fn require(field: &str, value: &str) -> Validation {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Validation {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email".to_string())
    }
}

/// Optional field: an empty phone is accepted.
pub fn validate_phone(phone: &str) -> Validation {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(());
    }
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if allowed && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err("Please enter a valid phone number".to_string())
    }
}

pub fn validate_password(password: &str, confirmation: &str) -> Validation {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if password != confirmation {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Run checks in order and keep the first failure.
pub fn first_error(checks: impl IntoIterator<Item = Validation>) -> Option<String> {
    checks.into_iter().find_map(Result::err)
}
