#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use leme::libs::validate::{self, FieldValue, ValidationError};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_generate_id_is_unique_uuid() {
        let a = validate::generate_id();
        let b = validate::generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert_eq!(a.chars().filter(|c| *c == '-').count(), 4);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(validate::parse_integer("42", None), Ok(42));
        assert_eq!(validate::parse_integer("  -7 ", None), Ok(-7));
        assert_eq!(validate::parse_integer("", Some(0)), Ok(0));
        assert_eq!(validate::parse_integer("", None), Err(ValidationError::NotAnInteger));
        assert_eq!(validate::parse_integer("abc", Some(0)), Err(ValidationError::NotAnInteger));
        assert_eq!(validate::parse_integer("3.5", None), Err(ValidationError::NotAnInteger));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(validate::parse_float("0.85", None), Ok(0.85));
        assert_eq!(validate::parse_float("12", None), Ok(12.0));
        assert_eq!(validate::parse_float("", Some(1.0)), Ok(1.0));
        assert_eq!(validate::parse_float("", None), Err(ValidationError::NotAFloat));
        assert_eq!(validate::parse_float("xyz", None), Err(ValidationError::NotAFloat));
    }

    #[test]
    fn test_parse_string_bounds_and_default() {
        assert_eq!(validate::parse_string("  ola  ", 1, 100, None), Ok("ola".to_string()));
        assert_eq!(validate::parse_string("", 1, 100, Some("SoftSkills")), Ok("SoftSkills".to_string()));
        assert_eq!(validate::parse_string("   ", 1, 100, None), Err(ValidationError::Empty));
        assert_eq!(validate::parse_string("ab", 3, 100, None), Err(ValidationError::TooShort(3)));
        let long = "x".repeat(101);
        assert_eq!(validate::parse_string(&long, 1, 100, None), Err(ValidationError::TooLong(100)));
    }

    #[test]
    fn test_parse_string_counts_chars_not_bytes() {
        // 100 multi-byte characters still fit the bound.
        let accented = "é".repeat(100);
        assert_eq!(validate::parse_string(&accented, 1, 100, None), Ok(accented.clone()));
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(validate::parse_name("José da Silva"), Ok("José da Silva".to_string()));
        assert_eq!(validate::parse_name("  Ana  "), Ok("Ana".to_string()));
        assert_eq!(validate::parse_name("Ana123"), Err(ValidationError::InvalidName));
        assert_eq!(validate::parse_name("Ana_Silva"), Err(ValidationError::InvalidName));
        assert_eq!(validate::parse_name(""), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_parse_email_normalizes_to_lowercase() {
        assert_eq!(validate::parse_email("Jose.Silva@Example.COM"), Ok("jose.silva@example.com".to_string()));
        assert_eq!(validate::parse_email("a.b+tag@example.com"), Ok("a.b+tag@example.com".to_string()));
        assert_eq!(validate::parse_email("not-an-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate::parse_email("user@host"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate::parse_email(""), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_parse_date_empty_means_now() {
        let now = dt(2026, 8, 28, 10, 30);
        assert_eq!(validate::parse_date("", now), Ok(now));
        assert_eq!(validate::parse_date("   ", now), Ok(now));
    }

    #[test]
    fn test_parse_date_accepts_present_and_future() {
        let now = dt(2026, 8, 28, 10, 30);
        assert_eq!(validate::parse_date("28/08/2026 10:30", now), Ok(dt(2026, 8, 28, 10, 30)));
        assert_eq!(validate::parse_date("01/01/2027 00:00", now), Ok(dt(2027, 1, 1, 0, 0)));
    }

    #[test]
    fn test_parse_date_rejects_past() {
        let now = dt(2026, 8, 28, 10, 30);
        assert_eq!(validate::parse_date("28/08/2026 10:29", now), Err(ValidationError::DateInPast));
        assert_eq!(validate::parse_date("27/08/2026 23:59", now), Err(ValidationError::DateInPast));
    }

    #[test]
    fn test_parse_date_truncates_now_to_the_minute() {
        // 10:30:45 as "now" still accepts an entry at exactly 10:30.
        let now = dt(2026, 8, 28, 10, 30) + Duration::seconds(45);
        assert_eq!(validate::parse_date("28/08/2026 10:30", now), Ok(dt(2026, 8, 28, 10, 30)));
    }

    #[test]
    fn test_parse_date_rejects_bad_format() {
        let now = dt(2026, 8, 28, 10, 30);
        assert_eq!(validate::parse_date("2026-08-28 10:30", now), Err(ValidationError::BadDateFormat));
        assert_eq!(validate::parse_date("28/08/2026", now), Err(ValidationError::BadDateFormat));
        assert_eq!(validate::parse_date("31/02/2026 10:30", now), Err(ValidationError::BadDateFormat));
    }

    #[test]
    fn test_serialize_datetime() {
        let value = FieldValue::DateTime(dt(2026, 8, 28, 10, 30));
        assert_eq!(validate::serialize_datetime(&value), Ok("2026-08-28T10:30:00".to_string()));
    }

    #[test]
    fn test_serialize_datetime_rejects_other_types() {
        assert_eq!(
            validate::serialize_datetime(&FieldValue::Integer(7)),
            Err(ValidationError::UnsupportedType("Integer"))
        );
        assert_eq!(
            validate::serialize_datetime(&FieldValue::Text("2026".to_string())),
            Err(ValidationError::UnsupportedType("Text"))
        );
        assert_eq!(
            validate::serialize_datetime(&FieldValue::Float(1.5)),
            Err(ValidationError::UnsupportedType("Float"))
        );
    }
}
