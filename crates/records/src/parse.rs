use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Game count for accumulation. The raw exports carry decades of
/// hand-entered data, so an unparsable or missing value is never an error:
/// it contributes zero games.
pub fn games(field: Option<&str>) -> u32 {
    field.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Optional count, kept absent when unparsable so it renders as an empty
/// output field rather than a fabricated zero.
pub fn count(field: Option<&str>) -> Option<u32> {
    field.and_then(|s| s.trim().parse().ok())
}

/// Rating-valued field. Absent means the row contributes nothing to any
/// threshold check.
pub fn rating(field: Option<&str>) -> Option<i32> {
    field.and_then(|s| s.trim().parse().ok())
}

pub fn date(field: Option<&str>) -> Option<NaiveDate> {
    field.and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
}
