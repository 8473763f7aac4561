//! xray-core: Shared relay types and field mapping
//!
//! This crate provides the wire types exchanged with the FHIR repository and
//! the browser client, plus the pure mapping rules between them: the Patient
//! create body, search Bundle decoding, patient summaries, the image lookup
//! key and birth date parsing.

pub mod analysis;
pub mod bundle;
pub mod date;
pub mod error;
pub mod identity;
pub mod patient;
pub mod search;
pub mod summary;

pub use analysis::{AnalysisRequest, AnalyzeInput, ValidAnalyzeInput};
pub use bundle::Bundle;
pub use date::{parse_us_date, to_fhir_date};
pub use error::CoreError;
pub use identity::IdentityTuple;
pub use patient::{NewPatient, PatientResource};
pub use search::{PatientSearch, SEARCH_RESULT_LIMIT};
pub use summary::{NOT_APPLICABLE, PatientSummary, encode_image};
