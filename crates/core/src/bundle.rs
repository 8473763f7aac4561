use serde::Deserialize;

use crate::patient::PatientResource;

/// FHIR Bundle resource (simplified for reading search results)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

/// Bundle entry; entries without a resource decode to an empty Patient
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(default)]
    pub resource: PatientResource,
}

impl Bundle {
    /// Iterate over the entry resources in repository order
    pub fn resources(&self) -> impl Iterator<Item = &PatientResource> {
        self.entry.iter().map(|e| &e.resource)
    }
}
