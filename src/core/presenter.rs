//! # Result Presenter
//!
//! Turns an `AnalysisOutcome` into a `Screen`: a plain view tree with no
//! ratatui types in it. The TUI and the one-shot text report both draw from
//! the same tree, so the gating rules live in exactly one place.
//!
//! ```text
//! AnalysisOutcome ──present()──▶ Screen
//!   Idle        → Intro
//!   Pending     → Busy
//!   Empty       → NotFound (suggestions)
//!   Failed      → Error
//!   Succeeded   → Results (one ConditionCard per result, response order)
//! ```
//!
//! Each enrichment section has its own builder that returns `None` when its
//! field is absent or empty. The builders only run when the condition has
//! remedies at all; otherwise the card carries a single fallback notice.

use crate::analysis::types::{non_blank, non_empty};
use crate::analysis::{
    AnalysisOutcome, AnalysisReport, ClinicalEntity, ConditionResult, Formulation, Remedy,
    Therapy, TreatmentInfo,
};

pub const SUGGESTIONS: [&str; 8] = [
    "fever",
    "cold",
    "headache",
    "stomach pain",
    "cough",
    "insomnia",
    "piles",
    "jaundice",
];

pub const DEFAULT_DISCLAIMER: &str = "This information is for educational purposes only. \
    Consult a qualified Ayurvedic practitioner before starting any treatment.";

pub const FALLBACK_NOTICE: &str =
    "Detailed treatment data is not available for this condition yet.";

/// Placeholder for a missing SNOMED CT code.
pub const MISSING_CODE: &str = "—";

/// One step of the introductory explainer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const INTRO_STEPS: [IntroStep; 3] = [
    IntroStep {
        title: "Describe your symptoms",
        description: "Type in plain language, just like talking to a doctor.",
    },
    IntroStep {
        title: "Medical terms are extracted",
        description: "Clinical NER identifies entities and maps them to WHO ITA and SNOMED CT.",
    },
    IntroStep {
        title: "Get Ayurvedic guidance",
        description: "Single remedies, formulations, panchakarma, diet, lifestyle, and yoga.",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Intro(&'static [IntroStep]),
    Busy,
    NotFound {
        message: String,
        suggestions: &'static [&'static str],
    },
    Error {
        message: String,
    },
    Results(ResultsView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub entities: Vec<EntityChip>,
    pub identifier_code: String,
    pub cards: Vec<ConditionCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityChip {
    pub text: String,
    /// e.g. `PROBLEM · 93%`
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionCard {
    pub identifier: String,
    pub term: String,
    pub sanskrit: Option<String>,
    /// e.g. `82%`
    pub score: String,
    pub match_line: Option<String>,
    pub snomed_code: String,
    pub snomed_name: Option<String>,
    pub dosha: Option<String>,
    pub description: Option<String>,
    pub modern_correlation: Option<String>,
    pub body: CardBody,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardBody {
    Enriched(Vec<Section>),
    /// No remedies came back. The WHO description, if any, is already the
    /// card's header description.
    Fallback { notice: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Causes(Vec<String>),
    EarlySigns(Vec<String>),
    Symptoms(Vec<String>),
    Remedies(Vec<RemedyView>),
    Formulations(Vec<FormulationView>),
    Therapies(Vec<TherapyView>),
    Diet(DietView),
    Lifestyle(Vec<String>),
    Exercises(Vec<String>),
    Prognosis(String),
    Warnings(Vec<String>),
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Causes(_) => "Root Causes (Nidana)",
            Section::EarlySigns(_) => "Early Signs (Purvarupa)",
            Section::Symptoms(_) => "Symptoms (Rupa)",
            Section::Remedies(_) => "Ottamooli: Single Medicine Remedies",
            Section::Formulations(_) => "Classical Formulations",
            Section::Therapies(_) => "Panchakarma Treatments",
            Section::Diet(_) => "Pathya: Diet",
            Section::Lifestyle(_) => "Lifestyle (Vihara)",
            Section::Exercises(_) => "Yoga & Exercises",
            Section::Prognosis(_) => "Prognosis",
            Section::Warnings(_) => "Warning Signs",
        }
    }
}

/// A labelled value, only ever built for present fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemedyView {
    pub name: String,
    pub sanskrit: Option<String>,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormulationView {
    pub name: String,
    pub english_name: Option<String>,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TherapyView {
    pub name: String,
    pub description: Option<String>,
    pub indication: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DietView {
    pub favor: Vec<String>,
    pub avoid: Vec<String>,
    pub note: Option<String>,
}

// ============================================================================
// Entry point
// ============================================================================

pub fn present(outcome: &AnalysisOutcome) -> Screen {
    match outcome {
        AnalysisOutcome::Idle => Screen::Intro(&INTRO_STEPS),
        AnalysisOutcome::Pending => Screen::Busy,
        AnalysisOutcome::Empty { message } => Screen::NotFound {
            message: message.clone(),
            suggestions: &SUGGESTIONS,
        },
        AnalysisOutcome::Failed { message } => Screen::Error {
            message: message.clone(),
        },
        AnalysisOutcome::Succeeded(report) => Screen::Results(present_report(report)),
    }
}

fn present_report(report: &AnalysisReport) -> ResultsView {
    ResultsView {
        entities: report.entities.iter().map(entity_chip).collect(),
        identifier_code: report.identifier_code.clone(),
        cards: report.results.iter().map(present_condition).collect(),
    }
}

fn entity_chip(entity: &ClinicalEntity) -> EntityChip {
    let percent = (entity.score * 100.0).round() as i64;
    let detail = match entity.label.as_deref() {
        Some(label) => format!("{label} · {percent}%"),
        None => format!("{percent}%"),
    };
    EntityChip {
        text: entity.text.clone(),
        detail,
    }
}

/// Whole scores print without a decimal point: `82` → `82%`, `82.5` → `82.5%`.
pub fn score_label(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}%", score as i64)
    } else {
        format!("{:.1}%", score)
    }
}

fn present_condition(result: &ConditionResult) -> ConditionCard {
    let info = &result.treatment_info;

    let body = if info.has_enriched_data() {
        CardBody::Enriched(enrichment_sections(info))
    } else {
        CardBody::Fallback {
            notice: FALLBACK_NOTICE,
        }
    };

    ConditionCard {
        identifier: result.ita_id.clone(),
        term: result.ayurveda_term.clone(),
        sanskrit: some_text(&result.sanskrit).or_else(|| owned(non_blank(&info.sanskrit_name))),
        score: score_label(result.match_score),
        match_line: match_line(result),
        snomed_code: some_text(&result.snomed_code).unwrap_or_else(|| MISSING_CODE.to_string()),
        snomed_name: some_text(&result.snomed_name),
        dosha: owned(non_blank(&info.dosha_involvement)),
        description: description(result),
        modern_correlation: owned(non_blank(&info.modern_correlation)),
        body,
        disclaimer: owned(non_blank(&info.disclaimer))
            .unwrap_or_else(|| DEFAULT_DISCLAIMER.to_string()),
    }
}

/// Condition-level description first, then the treatment-level one.
fn description(result: &ConditionResult) -> Option<String> {
    some_text(&result.who_description)
        .or_else(|| owned(non_blank(&result.treatment_info.brief_description)))
}

fn match_line(result: &ConditionResult) -> Option<String> {
    let entity = result.input_entity.trim();
    if entity.is_empty() {
        return None;
    }
    let mut line = format!("Detected: {entity}");
    if let Some(id) = some_text(&result.ita_id) {
        line.push_str(&format!(" → {id}"));
    }
    if let Some(kind) = some_text(&result.match_type) {
        line.push_str(&format!(" · {kind}"));
    }
    Some(line)
}

// ============================================================================
// Enrichment sections
// ============================================================================

/// All sections whose fields are present, in display order.
pub fn enrichment_sections(info: &TreatmentInfo) -> Vec<Section> {
    [
        causes(info),
        early_signs(info),
        symptoms(info),
        remedies(info),
        formulations(info),
        therapies(info),
        diet(info),
        lifestyle(info),
        exercises(info),
        prognosis(info),
        warnings(info),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn causes(info: &TreatmentInfo) -> Option<Section> {
    text_list(&info.nidana_causes).map(Section::Causes)
}

fn early_signs(info: &TreatmentInfo) -> Option<Section> {
    text_list(&info.purvarupa_prodromal_symptoms).map(Section::EarlySigns)
}

fn symptoms(info: &TreatmentInfo) -> Option<Section> {
    text_list(&info.rupa_symptoms).map(Section::Symptoms)
}

fn remedies(info: &TreatmentInfo) -> Option<Section> {
    let list = non_empty(&info.ottamooli_single_remedies)?;
    Some(Section::Remedies(list.iter().map(remedy_view).collect()))
}

fn formulations(info: &TreatmentInfo) -> Option<Section> {
    let list = non_empty(&info.classical_formulations)?;
    Some(Section::Formulations(
        list.iter().map(formulation_view).collect(),
    ))
}

fn therapies(info: &TreatmentInfo) -> Option<Section> {
    let list = non_empty(&info.panchakarma_treatments)?;
    Some(Section::Therapies(list.iter().map(therapy_view).collect()))
}

fn diet(info: &TreatmentInfo) -> Option<Section> {
    let advice = info.pathya_dietary_advice.as_ref()?;
    let view = DietView {
        favor: text_list(&advice.foods_to_favor).unwrap_or_default(),
        avoid: text_list(&advice.foods_to_avoid).unwrap_or_default(),
        note: owned(non_blank(&advice.specific_dietary_rules)),
    };
    if view.favor.is_empty() && view.avoid.is_empty() && view.note.is_none() {
        return None;
    }
    Some(Section::Diet(view))
}

fn lifestyle(info: &TreatmentInfo) -> Option<Section> {
    text_list(&info.vihara_lifestyle).map(Section::Lifestyle)
}

fn exercises(info: &TreatmentInfo) -> Option<Section> {
    text_list(&info.yoga_exercises).map(Section::Exercises)
}

fn prognosis(info: &TreatmentInfo) -> Option<Section> {
    owned(non_blank(&info.prognosis)).map(Section::Prognosis)
}

fn warnings(info: &TreatmentInfo) -> Option<Section> {
    text_list(&info.warning_signs).map(Section::Warnings)
}

fn remedy_view(remedy: &Remedy) -> RemedyView {
    RemedyView {
        name: remedy.medicine_name.clone(),
        sanskrit: owned(non_blank(&remedy.sanskrit_name)),
        details: details(&[
            ("Part used", &remedy.part_used),
            ("Preparation", &remedy.preparation),
            ("Dosage", &remedy.dosage),
            ("Timing", &remedy.timing),
            ("Duration", &remedy.duration),
        ]),
    }
}

fn formulation_view(formulation: &Formulation) -> FormulationView {
    FormulationView {
        name: formulation.name.clone(),
        english_name: owned(non_blank(&formulation.english_name)),
        details: details(&[
            ("Form", &formulation.form),
            ("Dosage", &formulation.dosage),
            ("Reference", &formulation.reference_text),
        ]),
    }
}

fn therapy_view(therapy: &Therapy) -> TherapyView {
    TherapyView {
        name: therapy.therapy_name.clone(),
        description: owned(non_blank(&therapy.description)),
        indication: owned(non_blank(&therapy.indication)),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn details(fields: &[(&'static str, &Option<String>)]) -> Vec<Detail> {
    fields
        .iter()
        .filter_map(|&(label, value)| {
            non_blank(value).map(|v| Detail {
                label,
                value: v.to_string(),
            })
        })
        .collect()
}

/// Non-blank entries of a present list, or `None` if nothing is left.
fn text_list(list: &Option<Vec<String>>) -> Option<Vec<String>> {
    let items: Vec<String> = non_empty(list)?
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

fn some_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn owned(text: Option<&str>) -> Option<String> {
    text.map(str::to_string)
}
