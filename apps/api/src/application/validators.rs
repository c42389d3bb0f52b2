use validator::ValidateEmail;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Emails are stored trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Payment-provider customer ids look like `cus_...`.
pub fn is_valid_customer_id(id: &str) -> bool {
    id.contains("cus_")
}

/// Payment-provider price ids look like `price_...`.
pub fn is_valid_price_id(id: &str) -> bool {
    id.contains("price_")
}

/// Reduce an uploaded file name to a safe basename.
///
/// Path components are dropped and anything outside `[A-Za-z0-9._-]` becomes
/// `_`. Names that end up empty or made only of dots become `file`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.chars().all(|c| c == '.') {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name@domain.co.uk"));
        assert!(is_valid_email("  user+tag@example.org "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("notanemail"));
        assert!(!is_valid_email("@nodomain.com"));
        assert!(!is_valid_email("spaces in@email.com"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
    }

    #[test]
    fn test_billing_id_formats() {
        assert!(is_valid_customer_id("cus_123"));
        assert!(!is_valid_customer_id("customer_123"));
        assert!(is_valid_price_id("price_abc"));
        assert!(!is_valid_price_id("prod_abc"));
    }

    #[test]
    fn test_sanitize_file_name_strips_paths() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\ana\\cv.pdf"), "cv.pdf");
    }

    #[test]
    fn test_sanitize_file_name_replaces_unsafe_chars() {
        assert_eq!(sanitize_file_name("mi informe (1).pdf"), "mi_informe__1_.pdf");
        assert_eq!(sanitize_file_name("año.txt"), "a_o.txt");
    }

    #[test]
    fn test_sanitize_file_name_fallback() {
        assert_eq!(sanitize_file_name(""), "file");
        assert_eq!(sanitize_file_name(".."), "file");
        assert_eq!(sanitize_file_name("dir/"), "file");
    }
}
