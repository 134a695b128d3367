use once_cell::sync::Lazy;
use regex::Regex;

// Browser `\s` also covers U+FEFF; the regex crate's does not.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

/// Loose `local@domain.tld` check used by the sign-up form before it sends
/// anything. The endpoint itself only rejects an empty address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user.name@domain.co.uk"));
        assert!(is_valid_email("user+tag@example.org"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("notanemail"));
        assert!(!is_valid_email("@nodomain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("spaces in@email.com"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email(" user@domain.com"));
        assert!(!is_valid_email("user@domain.com\n"));
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("a@b\u{FEFF}.com"));
        assert!(!is_valid_email("a@b.c\u{00A0}om"));
    }

    #[test]
    fn test_dot_must_follow_at() {
        // The dot in the local part does not satisfy the ".tld" requirement.
        assert!(!is_valid_email("first.last@localhost"));
        assert!(is_valid_email("first.last@local.host"));
    }
}
