#[cfg(test)]
mod normalize_tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::error::ServiceError;
    use crate::services::normalize::{
        normalize_datetime, parse_flexible_datetime, validate_range,
    };

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_keeps_wall_clock_and_drops_offset() {
        let parsed = parse_flexible_datetime("2026-08-05T14:00:00+08:00").unwrap();
        assert_eq!(parsed, at(2026, 8, 5, 14, 0));
    }

    #[test]
    fn test_parse_accepts_zulu_suffix() {
        let parsed = parse_flexible_datetime("2026-08-05T14:00:00Z").unwrap();
        assert_eq!(parsed, at(2026, 8, 5, 14, 0));
    }

    #[test]
    fn test_parse_accepts_naive_layouts() {
        assert_eq!(
            parse_flexible_datetime("2026-08-05T14:00:00").unwrap(),
            at(2026, 8, 5, 14, 0)
        );
        assert_eq!(
            parse_flexible_datetime("2026-08-05 14:00:00").unwrap(),
            at(2026, 8, 5, 14, 0)
        );
        assert_eq!(
            parse_flexible_datetime("2026-08-05T14:00").unwrap(),
            at(2026, 8, 5, 14, 0)
        );
        assert_eq!(
            parse_flexible_datetime("2026-08-05 14:00").unwrap(),
            at(2026, 8, 5, 14, 0)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = parse_flexible_datetime("next tuesday at noonish");
        assert!(matches!(result, Err(ServiceError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_future_datetime_passes_through_unchanged() {
        let now = at(2026, 8, 4, 12, 0);
        let dt = at(2026, 9, 10, 10, 0);

        assert_eq!(normalize_datetime(dt, now).unwrap(), dt);
    }

    #[test]
    fn test_past_year_still_ahead_is_rewritten_to_current_year() {
        let now = at(2026, 8, 4, 12, 0);
        let dt = at(2025, 9, 10, 10, 0);

        let corrected = normalize_datetime(dt, now).unwrap();
        assert_eq!(corrected, at(2026, 9, 10, 10, 0));
    }

    #[test]
    fn test_past_year_already_gone_is_rewritten_to_next_year() {
        let now = at(2026, 8, 4, 12, 0);
        let dt = at(2025, 3, 1, 10, 0);

        let corrected = normalize_datetime(dt, now).unwrap();
        assert_eq!(corrected, at(2027, 3, 1, 10, 0));
    }

    #[test]
    fn test_leap_day_with_no_valid_rewrite_fails() {
        // Feb 29 has no counterpart in 2026 or 2027
        let now = at(2026, 8, 4, 12, 0);
        let dt = at(2024, 2, 29, 10, 0);

        let result = normalize_datetime(dt, now);
        assert!(matches!(result, Err(ServiceError::PastDatetime { .. })));
    }

    #[test]
    fn test_current_year_past_time_is_rejected() {
        let now = at(2026, 8, 4, 12, 0);
        let dt = at(2026, 8, 1, 10, 0);

        let result = normalize_datetime(dt, now);
        assert!(matches!(result, Err(ServiceError::PastDatetime { .. })));
    }

    #[test]
    fn test_same_day_earlier_time_is_rejected() {
        let now = at(2026, 8, 4, 12, 0);
        let dt = at(2026, 8, 4, 9, 0);

        let result = normalize_datetime(dt, now);
        assert!(matches!(result, Err(ServiceError::PastDatetime { .. })));
    }

    #[test]
    fn test_validate_range_accepts_forward_range() {
        let start = at(2026, 8, 5, 10, 0);
        let end = at(2026, 8, 5, 11, 0);
        assert!(validate_range(start, end).is_ok());
    }

    #[test]
    fn test_validate_range_rejects_reversed_and_empty_ranges() {
        let start = at(2026, 8, 5, 11, 0);
        let end = at(2026, 8, 5, 10, 0);
        assert!(matches!(
            validate_range(start, end),
            Err(ServiceError::InvalidRange { .. })
        ));
        assert!(matches!(
            validate_range(start, start),
            Err(ServiceError::InvalidRange { .. })
        ));
    }
}
