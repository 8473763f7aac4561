use crate::patient::PatientResource;

/// Image lookup key: (first name, last name, gender, birth date).
///
/// Gender is lower-cased on construction; every other part is matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityTuple {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birth_date: String,
}

impl IdentityTuple {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: &str,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: gender.to_lowercase(),
            birth_date: birth_date.into(),
        }
    }

    /// Key for a search result, or `None` unless all four parts are present
    pub fn from_resource(resource: &PatientResource) -> Option<Self> {
        Some(Self::new(
            resource.first_name()?,
            resource.last_name()?,
            resource.gender()?,
            resource.birth_date()?,
        ))
    }
}
