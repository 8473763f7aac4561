//! Search result rows returned to the browser

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::patient::PatientResource;

/// Placeholder for fields the repository did not supply
pub const NOT_APPLICABLE: &str = "N/A";

/// One patient row in a search response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub sex: String,
    pub xray_image: Option<String>,
}

impl PatientSummary {
    /// Project a repository resource, attaching the stored image if one was found
    pub fn from_resource(resource: &PatientResource, image: Option<&[u8]>) -> Self {
        Self {
            patient_id: or_not_applicable(resource.id()),
            first_name: or_not_applicable(resource.first_name()),
            last_name: or_not_applicable(resource.last_name()),
            birth_date: or_not_applicable(resource.birth_date()),
            sex: resource
                .gender()
                .map(capitalize)
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            xray_image: image.map(encode_image),
        }
    }
}

/// Standard padded base64, as the browser and prediction endpoint expect
pub fn encode_image(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

fn or_not_applicable(value: Option<&str>) -> String {
    value.unwrap_or(NOT_APPLICABLE).to_string()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_browser_field_names() {
        let resource: PatientResource = serde_json::from_value(json!({
            "id": "123",
            "name": [{"family": "Smith", "given": ["John"]}],
            "gender": "male",
            "birthDate": "1980-01-15"
        }))
        .unwrap();

        let summary = PatientSummary::from_resource(&resource, Some(b"xray".as_slice()));

        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "patientId": "123",
                "firstName": "John",
                "lastName": "Smith",
                "birthDate": "1980-01-15",
                "sex": "Male",
                "xrayImage": "eHJheQ=="
            })
        );
    }

    #[test]
    fn fills_missing_fields_with_placeholder() {
        let summary = PatientSummary::from_resource(&PatientResource::default(), None);

        assert_eq!(summary.patient_id, NOT_APPLICABLE);
        assert_eq!(summary.first_name, NOT_APPLICABLE);
        assert_eq!(summary.last_name, NOT_APPLICABLE);
        assert_eq!(summary.birth_date, NOT_APPLICABLE);
        assert_eq!(summary.sex, NOT_APPLICABLE);
        assert_eq!(summary.xray_image, None);
    }

    #[test]
    fn capitalizes_gender() {
        assert_eq!(capitalize("female"), "Female");
        assert_eq!(capitalize("UNKNOWN"), "Unknown");
        assert_eq!(capitalize(""), "");
    }
}
