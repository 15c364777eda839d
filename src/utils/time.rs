use crate::components::grouping::Event;
use crate::error::{timezone_error, GroupResult};
use chrono_tz::Tz;

/// Parse an IANA timezone name such as "Europe/Helsinki"
pub fn parse_timezone(name: &str) -> GroupResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| timezone_error(name))
}

/// Format the event's time range in the given timezone.
///
/// Events that start and end on the same day print the date once.
pub fn format_event_span(event: &Event, timezone: &Tz) -> String {
    let start = event.start_time.with_timezone(timezone);
    let end = event.end_time.with_timezone(timezone);

    if start.date_naive() == end.date_naive() {
        format!("{} - {}", start.format("%d.%m.%Y %H:%M"), end.format("%H:%M"))
    } else {
        format!(
            "{} - {}",
            start.format("%d.%m.%Y %H:%M"),
            end.format("%d.%m.%Y %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("UTC").unwrap(), chrono_tz::UTC);
        assert_eq!(parse_timezone(" Europe/Helsinki ").unwrap(), chrono_tz::Europe::Helsinki);
        assert!(parse_timezone("Mars/Olympus").is_err());
        assert!(parse_timezone("").is_err());
    }

    #[test]
    fn test_format_same_day_span() {
        let event = Event::new(
            "e1",
            "Rehearsal Gala",
            Utc.with_ymd_and_hms(2024, 1, 15, 16, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 18, 30, 0).unwrap(),
        );

        assert_eq!(format_event_span(&event, &chrono_tz::UTC), "15.01.2024 16:00 - 18:30");
        // Helsinki is UTC+2 in January
        assert_eq!(
            format_event_span(&event, &chrono_tz::Europe::Helsinki),
            "15.01.2024 18:00 - 20:30"
        );
    }

    #[test]
    fn test_format_multi_day_span() {
        let event = Event::new(
            "e2",
            "Setup Festival",
            Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 2, 2, 0, 0).unwrap(),
        );

        assert_eq!(
            format_event_span(&event, &chrono_tz::UTC),
            "01.06.2024 20:00 - 02.06.2024 02:00"
        );
    }
}
