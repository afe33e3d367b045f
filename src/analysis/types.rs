use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown when the service does not return a UMLS CUI.
pub const MISSING_IDENTIFIER: &str = "N/A";

/// Treats an explicit JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Request
// ============================================================================

/// Body of the POST sent to the analysis service.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub text: String,
    pub enrich_with_llm: bool,
    pub top_conditions: u8,
}

// ============================================================================
// Response (wire shape)
// ============================================================================

/// Entity as produced by the older NER backend (`entities_extracted`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
struct ExtractedEntity {
    #[serde(default, deserialize_with = "nullable")]
    text: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    score: f32,
}

/// Entity as produced by the Bio_ClinicalBERT backend (`clinical_entities`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
struct BertEntity {
    #[serde(default, deserialize_with = "nullable")]
    word: String,
    #[serde(default)]
    entity_group: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    score: f32,
}

/// Raw response body. Both backend generations are accepted here and
/// collapsed by [`RawResponse::into_report`]; nothing downstream sees which
/// one arrived.
///
/// `results` is the only required field. A body without it fails to parse.
#[derive(Deserialize, Debug, Clone)]
pub struct RawResponse {
    #[serde(default)]
    input_text: Option<String>,
    #[serde(default)]
    entities_extracted: Option<Vec<ExtractedEntity>>,
    #[serde(default)]
    clinical_entities: Option<Vec<BertEntity>>,
    #[serde(default)]
    umls_cui: Option<String>,
    pub results: Vec<ConditionResult>,
}

impl RawResponse {
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Normalize into the single internal report shape.
    ///
    /// `clinical_entities` wins over `entities_extracted` when both are present.
    pub fn into_report(self) -> AnalysisReport {
        let entities = match (self.clinical_entities, self.entities_extracted) {
            (Some(bert), _) if !bert.is_empty() => bert
                .into_iter()
                .map(|e| ClinicalEntity {
                    text: e.word,
                    label: e.entity_group.filter(|l| !l.is_empty()),
                    score: e.score,
                })
                .collect(),
            (_, Some(extracted)) => extracted
                .into_iter()
                .map(|e| ClinicalEntity {
                    text: e.text,
                    label: e.label.filter(|l| !l.is_empty()),
                    score: e.score,
                })
                .collect(),
            _ => Vec::new(),
        };

        let identifier_code = self
            .umls_cui
            .filter(|cui| !cui.trim().is_empty())
            .unwrap_or_else(|| MISSING_IDENTIFIER.to_string());

        AnalysisReport {
            input_text: self.input_text.unwrap_or_default(),
            entities,
            identifier_code,
            results: self.results,
        }
    }
}

// ============================================================================
// Normalized domain types
// ============================================================================

/// A clinical entity detected in the query text.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalEntity {
    pub text: String,
    pub label: Option<String>,
    /// Model confidence in 0.0..=1.0.
    pub score: f32,
}

/// Everything a successful, non-empty analysis carries.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub input_text: String,
    pub entities: Vec<ClinicalEntity>,
    pub identifier_code: String,
    pub results: Vec<ConditionResult>,
}

/// One matched condition.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ConditionResult {
    #[serde(deserialize_with = "nullable")]
    pub input_entity: String,
    #[serde(deserialize_with = "nullable")]
    pub match_type: String,
    #[serde(deserialize_with = "nullable")]
    pub match_score: f64,
    #[serde(deserialize_with = "nullable")]
    pub ita_id: String,
    #[serde(deserialize_with = "nullable")]
    pub ayurveda_term: String,
    #[serde(deserialize_with = "nullable")]
    pub sanskrit: String,
    #[serde(deserialize_with = "nullable")]
    pub snomed_code: String,
    #[serde(deserialize_with = "nullable")]
    pub snomed_name: String,
    #[serde(deserialize_with = "nullable")]
    pub who_description: String,
    #[serde(deserialize_with = "nullable")]
    pub treatment_info: TreatmentInfo,
}

/// Treatment details attached to a condition. Every field may be missing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TreatmentInfo {
    pub condition_name: Option<String>,
    pub sanskrit_name: Option<String>,
    pub brief_description: Option<String>,
    pub dosha_involvement: Option<String>,
    pub nidana_causes: Option<Vec<String>>,
    pub purvarupa_prodromal_symptoms: Option<Vec<String>>,
    pub rupa_symptoms: Option<Vec<String>>,
    pub ottamooli_single_remedies: Option<Vec<Remedy>>,
    pub classical_formulations: Option<Vec<Formulation>>,
    pub panchakarma_treatments: Option<Vec<Therapy>>,
    pub pathya_dietary_advice: Option<DietaryAdvice>,
    pub vihara_lifestyle: Option<Vec<String>>,
    pub yoga_exercises: Option<Vec<String>>,
    pub modern_correlation: Option<String>,
    pub prognosis: Option<String>,
    pub warning_signs: Option<Vec<String>>,
    pub disclaimer: Option<String>,
}

/// Single-medicine remedy (ottamooli).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Remedy {
    #[serde(deserialize_with = "nullable")]
    pub medicine_name: String,
    pub sanskrit_name: Option<String>,
    pub part_used: Option<String>,
    pub preparation: Option<String>,
    pub dosage: Option<String>,
    pub timing: Option<String>,
    pub duration: Option<String>,
}

/// Classical multi-ingredient formulation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Formulation {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub english_name: Option<String>,
    pub form: Option<String>,
    pub dosage: Option<String>,
    pub reference_text: Option<String>,
}

/// Panchakarma therapy.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Therapy {
    #[serde(deserialize_with = "nullable")]
    pub therapy_name: String,
    pub description: Option<String>,
    pub indication: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DietaryAdvice {
    pub foods_to_favor: Option<Vec<String>>,
    pub foods_to_avoid: Option<Vec<String>>,
    pub specific_dietary_rules: Option<String>,
}

/// Returns the slice only if it is present and non-empty.
pub fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

/// Returns the trimmed text only if it is present and not blank.
pub fn non_blank(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

impl TreatmentInfo {
    /// Enrichment is keyed on remedies alone: the LLM pass either produced
    /// treatment details or it did not.
    pub fn has_enriched_data(&self) -> bool {
        non_empty(&self.ottamooli_single_remedies).is_some()
    }
}
