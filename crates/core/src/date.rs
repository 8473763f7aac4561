//! Birth date conversion between the browser form and FHIR

use chrono::NaiveDate;

use crate::error::CoreError;

/// Date layout used by the browser search form
pub const US_DATE_FORMAT: &str = "%m/%d/%Y";

/// FHIR `date` layout
pub const FHIR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `MM/DD/YYYY` date.
///
/// Month and day take one or two digits, the year exactly four. chrono alone
/// would also take signed, short or space-padded years.
pub fn parse_us_date(input: &str) -> Result<NaiveDate, CoreError> {
    let invalid = || CoreError::InvalidBirthDate(input.to_string());

    if !has_us_date_shape(input) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, US_DATE_FORMAT).map_err(|_| invalid())
}

fn has_us_date_shape(input: &str) -> bool {
    let parts: Vec<&str> = input.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return false;
    };

    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    digits(*month, 1, 2) && digits(*day, 1, 2) && digits(*year, 4, 4)
}

/// Convert a `MM/DD/YYYY` date into the ISO form FHIR search expects
pub fn to_fhir_date(input: &str) -> Result<String, CoreError> {
    parse_us_date(input).map(|date| date.format(FHIR_DATE_FORMAT).to_string())
}
