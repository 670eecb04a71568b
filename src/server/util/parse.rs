use chrono::NaiveDate;

use crate::server::error::{booking::BookingError, AppError};

/// Date format accepted on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a required `YYYY-MM-DD` date field.
///
/// # Arguments
/// - `field` - Request field name, reported back on failure
/// - `value` - Raw field value, `None` when absent from the request
///
/// # Returns
/// - `Ok(NaiveDate)` - Successfully parsed date
/// - `Err(AppError::BookingErr(Validation))` - Missing, empty or malformed value
pub fn parse_required_date(field: &str, value: Option<&str>) -> Result<NaiveDate, AppError> {
    let value = value.map(str::trim).filter(|v| !v.is_empty()).ok_or_else(|| {
        BookingError::validation(field, format!("{field} is required"))
    })?;

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        BookingError::validation(field, format!("{field} must be a date formatted YYYY-MM-DD"))
    })?;

    Ok(date)
}
