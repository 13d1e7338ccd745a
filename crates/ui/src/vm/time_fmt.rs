use chrono::NaiveDate;

/// Day-first calendar date, e.g. `06.05.2025`.
#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%d.%m.%Y").to_string()
}
