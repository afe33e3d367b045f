//! Plain-text rendering of a [`Screen`], used by `--query` one-shot mode.
//!
//! Same view tree as the TUI, flattened into indented lines.

use crate::core::presenter::{
    CardBody, ConditionCard, Detail, ResultsView, Screen, Section,
};

const INDENT: &str = "  ";

pub fn render_text(screen: &Screen) -> String {
    let mut out = Vec::new();
    match screen {
        Screen::Intro(steps) => {
            out.push("How AyurAssist works".to_string());
            for (n, step) in steps.iter().enumerate() {
                out.push(format!("{INDENT}{}. {}: {}", n + 1, step.title, step.description));
            }
        }
        Screen::Busy => out.push("Analyzing...".to_string()),
        Screen::NotFound {
            message,
            suggestions,
        } => {
            out.push(message.clone());
            out.push(format!("Try describing common symptoms like: {}", suggestions.join(", ")));
        }
        Screen::Error { message } => out.push(format!("Error: {message}")),
        Screen::Results(view) => render_results(view, &mut out),
    }
    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn render_results(view: &ResultsView, out: &mut Vec<String>) {
    if !view.entities.is_empty() {
        let chips: Vec<String> = view
            .entities
            .iter()
            .map(|e| format!("{} ({})", e.text, e.detail))
            .collect();
        out.push(format!("Detected entities: {}", chips.join(", ")));
    }
    out.push(format!("UMLS CUI: {}", view.identifier_code));

    for card in &view.cards {
        out.push(String::new());
        render_card(card, out);
    }
}

fn render_card(card: &ConditionCard, out: &mut Vec<String>) {
    let heading = if card.identifier.is_empty() {
        card.term.clone()
    } else {
        format!("{} [{}]", card.term, card.identifier)
    };
    out.push(format!("== {heading}  {}", card.score));

    if let Some(sanskrit) = &card.sanskrit {
        out.push(format!("{INDENT}{sanskrit}"));
    }
    if let Some(line) = &card.match_line {
        out.push(format!("{INDENT}{line}"));
    }
    match &card.snomed_name {
        Some(name) => out.push(format!("{INDENT}SNOMED CT: {} {}", card.snomed_code, name)),
        None => out.push(format!("{INDENT}SNOMED CT: {}", card.snomed_code)),
    }
    if let Some(dosha) = &card.dosha {
        out.push(format!("{INDENT}Dosha: {dosha}"));
    }
    if let Some(description) = &card.description {
        out.push(format!("{INDENT}{description}"));
    }
    if let Some(correlation) = &card.modern_correlation {
        out.push(format!("{INDENT}Modern correlation: {correlation}"));
    }

    match &card.body {
        CardBody::Enriched(sections) => {
            for section in sections {
                out.push(format!("{INDENT}[{}]", section.title()));
                render_section(section, out);
            }
        }
        CardBody::Fallback { notice } => out.push(format!("{INDENT}{notice}")),
    }

    out.push(format!("{INDENT}Disclaimer: {}", card.disclaimer));
}

fn render_section(section: &Section, out: &mut Vec<String>) {
    let pad = INDENT.repeat(2);
    match section {
        Section::Causes(items)
        | Section::EarlySigns(items)
        | Section::Symptoms(items)
        | Section::Lifestyle(items)
        | Section::Exercises(items) => bullets(items, &pad, out),
        Section::Warnings(items) => {
            for item in items {
                out.push(format!("{pad}! {item}"));
            }
        }
        Section::Prognosis(text) => out.push(format!("{pad}{text}")),
        Section::Remedies(remedies) => {
            for remedy in remedies {
                match &remedy.sanskrit {
                    Some(s) => out.push(format!("{pad}{} ({s})", remedy.name)),
                    None => out.push(format!("{pad}{}", remedy.name)),
                }
                details(&remedy.details, &pad, out);
            }
        }
        Section::Formulations(formulations) => {
            for formulation in formulations {
                match &formulation.english_name {
                    Some(e) => out.push(format!("{pad}{} ({e})", formulation.name)),
                    None => out.push(format!("{pad}{}", formulation.name)),
                }
                details(&formulation.details, &pad, out);
            }
        }
        Section::Therapies(therapies) => {
            for therapy in therapies {
                out.push(format!("{pad}{}", therapy.name));
                if let Some(d) = &therapy.description {
                    out.push(format!("{pad}{INDENT}{d}"));
                }
                if let Some(i) = &therapy.indication {
                    out.push(format!("{pad}{INDENT}▸ {i}"));
                }
            }
        }
        Section::Diet(diet) => {
            if !diet.favor.is_empty() {
                out.push(format!("{pad}Favor: {}", diet.favor.join(", ")));
            }
            if !diet.avoid.is_empty() {
                out.push(format!("{pad}Avoid: {}", diet.avoid.join(", ")));
            }
            if let Some(note) = &diet.note {
                out.push(format!("{pad}Note: {note}"));
            }
        }
    }
}

fn bullets(items: &[String], pad: &str, out: &mut Vec<String>) {
    for item in items {
        out.push(format!("{pad}- {item}"));
    }
}

fn details(details: &[Detail], pad: &str, out: &mut Vec<String>) {
    for detail in details {
        out.push(format!("{pad}{INDENT}{}: {}", detail.label, detail.value));
    }
}
