//! Analysis request decoding and the prediction endpoint payload

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::CoreError;
use crate::identity::IdentityTuple;

/// Browser body for `POST /analyze`; every field is checked by [`AnalyzeInput::validate`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeInput {
    #[serde(default)]
    pub patient_id: Option<JsonValue>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, rename = "birthDate")]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
}

/// A fully populated analysis input
#[derive(Debug, Clone, PartialEq)]
pub struct ValidAnalyzeInput {
    pub patient_id: JsonValue,
    pub identity: IdentityTuple,
}

impl AnalyzeInput {
    /// Require every field; null, empty strings and falsy ids count as missing
    pub fn validate(self) -> Result<ValidAnalyzeInput, CoreError> {
        let patient_id = self
            .patient_id
            .filter(|v| !is_blank(v))
            .ok_or(CoreError::MissingField("patient_id"))?;
        let first_name = required(self.first_name, "first_name")?;
        let last_name = required(self.last_name, "last_name")?;
        let birth_date = required(self.birth_date, "birthDate")?;
        let sex = required(self.sex, "sex")?;

        Ok(ValidAnalyzeInput {
            patient_id,
            identity: IdentityTuple::new(first_name, last_name, &sex, birth_date),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, CoreError> {
    value
        .filter(|s| !s.is_empty())
        .ok_or(CoreError::MissingField(field))
}

/// Falsy JSON values: null, false, zero and empty strings, arrays or objects
fn is_blank(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
    }
}

/// Body posted to the prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRequest {
    pub patient_id: JsonValue,
    pub patient_first_name: String,
    /// Base64 encoded image bytes
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: JsonValue) -> AnalyzeInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_complete_input() {
        let valid = input(json!({
            "patient_id": "p-1",
            "first_name": "John",
            "last_name": "Smith",
            "birthDate": "1980-01-15",
            "sex": "Male"
        }))
        .validate()
        .unwrap();

        assert_eq!(valid.patient_id, json!("p-1"));
        assert_eq!(
            valid.identity,
            IdentityTuple::new("John", "Smith", "male", "1980-01-15")
        );
    }

    #[test]
    fn keeps_numeric_patient_id() {
        let valid = input(json!({
            "patient_id": 7,
            "first_name": "John",
            "last_name": "Smith",
            "birthDate": "1980-01-15",
            "sex": "male"
        }))
        .validate()
        .unwrap();

        assert_eq!(valid.patient_id, json!(7));
    }

    #[test]
    fn reports_each_missing_field() {
        let complete = json!({
            "patient_id": "p-1",
            "first_name": "John",
            "last_name": "Smith",
            "birthDate": "1980-01-15",
            "sex": "male"
        });

        for field in ["patient_id", "first_name", "last_name", "birthDate", "sex"] {
            let mut body = complete.clone();
            body.as_object_mut().unwrap().remove(field);
            assert!(
                matches!(input(body).validate(), Err(CoreError::MissingField(_))),
                "{field} should be required"
            );

            let mut body = complete.clone();
            body[field] = json!("");
            assert!(input(body).validate().is_err(), "empty {field} should be rejected");
        }
    }

    #[test]
    fn null_patient_id_is_missing() {
        let result = input(json!({
            "patient_id": null,
            "first_name": "John",
            "last_name": "Smith",
            "birthDate": "1980-01-15",
            "sex": "male"
        }))
        .validate();

        assert_eq!(result, Err(CoreError::MissingField("patient_id")));
    }

    #[test]
    fn falsy_patient_ids_are_missing() {
        for patient_id in [json!(0), json!(0.0), json!(false), json!({}), json!([])] {
            let result = input(json!({
                "patient_id": patient_id.clone(),
                "first_name": "John",
                "last_name": "Smith",
                "birthDate": "1980-01-15",
                "sex": "male"
            }))
            .validate();

            assert_eq!(
                result,
                Err(CoreError::MissingField("patient_id")),
                "{patient_id} should be rejected"
            );
        }
    }
}
