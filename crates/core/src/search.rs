use serde::Serialize;

use crate::date::to_fhir_date;
use crate::error::CoreError;

/// Maximum number of patients requested from the repository per search
pub const SEARCH_RESULT_LIMIT: u32 = 10;

/// Query string sent to `GET {base}/Patient`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PatientSearch {
    #[serde(rename = "_count")]
    pub count: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

impl PatientSearch {
    /// Build repository filters from the browser search form.
    ///
    /// Empty values are dropped. `birth_date` must be `MM/DD/YYYY` and is sent as ISO.
    pub fn from_form(
        name: Option<String>,
        last_name: Option<String>,
        birth_date: Option<String>,
    ) -> Result<Self, CoreError> {
        let birthdate = non_empty(birth_date)
            .map(|d| to_fhir_date(&d))
            .transpose()?;

        Ok(Self {
            count: SEARCH_RESULT_LIMIT,
            name: non_empty(name),
            family: non_empty(last_name),
            birthdate,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
