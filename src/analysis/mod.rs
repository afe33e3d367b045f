pub mod client;
pub mod outcome;
pub mod types;

pub use client::{AnalysisClient, AnalysisError, HttpAnalysisClient, RequestFlags};
pub use outcome::{AnalysisOutcome, EMPTY_MESSAGE, FAILURE_MESSAGE, resolve_outcome};
pub use types::{
    AnalysisReport, ClinicalEntity, ConditionResult, DietaryAdvice, Formulation, RawResponse,
    Remedy, Therapy, TreatmentInfo,
};
