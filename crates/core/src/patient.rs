use serde::{Deserialize, Serialize};

/// Patient resource body sent to the repository on registration.
///
/// Missing inputs serialize as `null`, matching what the browser sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub resource_type: String,
    pub name: Vec<NameText>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
}

impl NewPatient {
    /// Build a minimal Patient with the name kept as free text
    pub fn new(name: Option<String>, gender: Option<String>, birth_date: Option<String>) -> Self {
        Self {
            resource_type: "Patient".to_string(),
            name: vec![NameText { text: name }],
            gender,
            birth_date,
        }
    }
}

/// Free-text name, not split into given/family parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameText {
    pub text: Option<String>,
}

/// FHIR HumanName (only the parts the relay reads)
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct HumanName {
    #[serde(default)]
    pub family: Option<String>,

    #[serde(default)]
    pub given: Vec<String>,
}

/// Patient resource as returned by a repository search.
///
/// Every field is optional; absent fields decode to their defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientResource {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Vec<HumanName>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub birth_date: Option<String>,
}

impl PatientResource {
    /// First given name of the first recorded name
    pub fn first_name(&self) -> Option<&str> {
        self.name
            .first()
            .and_then(|n| n.given.first())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Family name of the first recorded name
    pub fn last_name(&self) -> Option<&str> {
        self.name
            .first()
            .and_then(|n| n.family.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref().filter(|s| !s.is_empty())
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref().filter(|s| !s.is_empty())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }
}
