//! HTTP clients for the services the relay forwards to

pub mod fhir;
pub mod prediction;

pub use fhir::{CreateOutcome, FhirClient};
pub use prediction::PredictionClient;
