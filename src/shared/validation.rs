use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for report identifiers
    /// - Valid: "RPT-001", "RPT-1042"
    /// - Invalid: "rpt-001", "RPT-", "RPT001"
    pub static ref REPORT_ID_REGEX: Regex = Regex::new(r"^RPT-\d{3,}$").unwrap();

    /// Regex for technician identifiers, e.g. "TECH-004"
    pub static ref TECHNICIAN_ID_REGEX: Regex = Regex::new(r"^TECH-\d{3,}$").unwrap();

    /// Regex for feedback identifiers, e.g. "FB-002"
    pub static ref FEEDBACK_ID_REGEX: Regex = Regex::new(r"^FB-\d{3,}$").unwrap();

    /// Regex for phone numbers as shown on the dashboard
    /// Digits with optional leading "+", spaces, dashes and parentheses
    /// - Valid: "+1 (555) 123-4567", "555-0100", "021 555 0199"
    /// - Invalid: "call me", "+1 ext. 5", ""
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()\-]{5,}[0-9]$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_regexes() {
        assert!(REPORT_ID_REGEX.is_match("RPT-001"));
        assert!(REPORT_ID_REGEX.is_match("RPT-1042"));
        assert!(!REPORT_ID_REGEX.is_match("rpt-001"));
        assert!(!REPORT_ID_REGEX.is_match("RPT001"));
        assert!(!REPORT_ID_REGEX.is_match("RPT-"));

        assert!(TECHNICIAN_ID_REGEX.is_match("TECH-004"));
        assert!(!TECHNICIAN_ID_REGEX.is_match("tech1"));

        assert!(FEEDBACK_ID_REGEX.is_match("FB-002"));
        assert!(!FEEDBACK_ID_REGEX.is_match("FB-2"));
    }

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+1 (555) 123-4567"));
        assert!(PHONE_REGEX.is_match("555-0100"));
        assert!(PHONE_REGEX.is_match("021 555 0199"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("call me"));
        assert!(!PHONE_REGEX.is_match("+1 ext. 5"));
        assert!(!PHONE_REGEX.is_match(""));
        assert!(!PHONE_REGEX.is_match("12"));
    }
}
