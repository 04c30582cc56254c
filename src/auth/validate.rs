/// Validate a required text field. Whitespace-only counts as missing.
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert_eq!(validate_required("", "Name"), Some("Name is required".to_string()));
        assert_eq!(validate_required("   ", "Email"), Some("Email is required".to_string()));
    }

    #[test]
    fn any_content_passes() {
        assert_eq!(validate_required("not-an-email", "Email"), None);
    }
}
