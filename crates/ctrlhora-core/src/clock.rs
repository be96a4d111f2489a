//! Wall clock display.

use ctrlhora_config::{ClockLocale, Config};
use thiserror::Error;
use time::{Month, OffsetDateTime, UtcOffset, Weekday};

/// Clock error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    /// Offset is not `±HH:MM`.
    #[error("Invalid UTC offset '{}', expected '+HH:MM' or '-HH:MM'", value)]
    InvalidUtcOffset { value: String },
}

/// Parse a `±HH:MM` (or `±HH`) offset.
pub fn parse_utc_offset(value: &str) -> Result<UtcOffset, ClockError> {
    let invalid = || ClockError::InvalidUtcOffset {
        value: value.into(),
    };

    let trimmed = value.trim();
    let (sign, rest) = match trimmed.chars().next() {
        Some('+') => (1, &trimmed[1..]),
        Some('-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };

    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let is_number = |part: &str| {
        !part.is_empty() && part.len() <= 2 && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !is_number(hours) || !is_number(minutes) {
        return Err(invalid());
    }

    let hours: i8 = hours.parse().map_err(|_| invalid())?;
    let minutes: i8 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    UtcOffset::from_hms(sign * hours, sign * minutes, 0).map_err(|_| invalid())
}

/// Offset used to display the clock: configured, else local, else UTC.
pub fn clock_offset(config: &Config) -> UtcOffset {
    if !config.clock.utc_offset.trim().is_empty() {
        match parse_utc_offset(&config.clock.utc_offset) {
            Ok(offset) => return offset,
            Err(e) => tracing::warn!(error = %e, "Ignoring clock offset"),
        }
    }

    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Current time, in the display offset.
pub fn clock_now(config: &Config) -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(clock_offset(config))
}

/// Render a date-time the way the clock widget shows it.
pub fn format_clock(datetime: OffsetDateTime, locale: ClockLocale) -> String {
    let time = format!(
        "{:02}:{:02}:{:02}",
        datetime.hour(),
        datetime.minute(),
        datetime.second()
    );

    match locale {
        ClockLocale::EsCl => format!(
            "{}, {:02} {} {}, {}",
            weekday_es(datetime.weekday()),
            datetime.day(),
            month_es(datetime.month()),
            datetime.year(),
            time
        ),
        ClockLocale::EnUs => format!(
            "{}, {} {:02}, {}, {}",
            weekday_en(datetime.weekday()),
            month_en(datetime.month()),
            datetime.day(),
            datetime.year(),
            time
        ),
    }
}

fn weekday_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "lun",
        Weekday::Tuesday => "mar",
        Weekday::Wednesday => "mié",
        Weekday::Thursday => "jue",
        Weekday::Friday => "vie",
        Weekday::Saturday => "sáb",
        Weekday::Sunday => "dom",
    }
}

fn weekday_en(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

fn month_es(month: Month) -> &'static str {
    match month {
        Month::January => "ene",
        Month::February => "feb",
        Month::March => "mar",
        Month::April => "abr",
        Month::May => "may",
        Month::June => "jun",
        Month::July => "jul",
        Month::August => "ago",
        Month::September => "sept",
        Month::October => "oct",
        Month::November => "nov",
        Month::December => "dic",
    }
}

fn month_en(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::{Date, PrimitiveDateTime, Time};

    use super::*;

    fn datetime(year: i32, month: Month, day: u8, hms: (u8, u8, u8)) -> OffsetDateTime {
        PrimitiveDateTime::new(
            Date::from_calendar_date(year, month, day).unwrap(),
            Time::from_hms(hms.0, hms.1, hms.2).unwrap(),
        )
        .assume_utc()
    }

    #[test]
    fn format_es_cl() {
        assert_eq!(
            format_clock(
                datetime(2026, Month::October, 16, (14, 3, 22)),
                ClockLocale::EsCl
            ),
            "vie, 16 oct 2026, 14:03:22"
        );
        assert_eq!(
            format_clock(
                datetime(2025, Month::November, 5, (0, 0, 9)),
                ClockLocale::EsCl
            ),
            "mié, 05 nov 2025, 00:00:09"
        );
    }

    #[test]
    fn format_en_us() {
        assert_eq!(
            format_clock(
                datetime(2026, Month::October, 16, (14, 3, 22)),
                ClockLocale::EnUs
            ),
            "Fri, Oct 16, 2026, 14:03:22"
        );
        assert_eq!(
            format_clock(
                datetime(2025, Month::November, 5, (23, 59, 59)),
                ClockLocale::EnUs
            ),
            "Wed, Nov 05, 2025, 23:59:59"
        );
    }

    #[test]
    fn parse_offsets() {
        assert_eq!(
            parse_utc_offset("-03:00").unwrap(),
            UtcOffset::from_hms(-3, 0, 0).unwrap()
        );
        assert_eq!(
            parse_utc_offset("+05:30").unwrap(),
            UtcOffset::from_hms(5, 30, 0).unwrap()
        );
        assert_eq!(
            parse_utc_offset("+2").unwrap(),
            UtcOffset::from_hms(2, 0, 0).unwrap()
        );

        for invalid in [
            "",
            "03:00",
            "+24:00",
            "+01:60",
            "+a:00",
            "+001:00",
            "+-3",
            "+-1:-5",
            "-+2:+3",
        ] {
            assert_eq!(
                parse_utc_offset(invalid),
                Err(ClockError::InvalidUtcOffset {
                    value: invalid.into()
                })
            );
        }
    }

    #[test]
    fn clock_now_uses_configured_offset() {
        let mut config = Config::from_env_no_version();
        config.clock.utc_offset = "-04:00".into();

        assert_eq!(
            clock_now(&config).offset(),
            UtcOffset::from_hms(-4, 0, 0).unwrap()
        );
    }
}
