//! Narrative assembly and the token-budget check.
//!
//! A narrative is a list of fixed-format sections. Rendering joins them with
//! newlines; [`Narrative::fit_to_budget`] drops optional sections until the
//! estimate fits.

use serde::{Deserialize, Serialize};

use super::{ElementAlignment, PatternMetadata, PersonalConnection};
use crate::config::{NarrativeConfig, DEFAULT_CHARS_PER_TOKEN, DEFAULT_TOKEN_BUDGET};
use crate::tables::{archetype, digit_correspondence, planet, platonic_solid, zodiac_sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Blend,
    Geometry,
    Archetypes,
    Special,
    Energy,
    Personal,
}

/// Optional sections, in the order they are dropped to meet a budget.
const DROP_ORDER: [SectionKind; 4] = [
    SectionKind::Blend,
    SectionKind::Energy,
    SectionKind::Geometry,
    SectionKind::Archetypes,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSection {
    pub kind: SectionKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub sections: Vec<NarrativeSection>,
}

impl Narrative {
    /// Compose every section that the metadata supports.
    pub fn compose(metadata: &PatternMetadata, personal: Option<&PersonalConnection>) -> Self {
        let mut narrative = Narrative::default();
        narrative.push(SectionKind::Header, header(metadata));

        if metadata.planets.len() > 1 {
            narrative.push(SectionKind::Blend, blend(metadata));
        }
        if let Some(solid) = metadata.geometry.as_deref().and_then(platonic_solid) {
            narrative.push(
                SectionKind::Geometry,
                format!(
                    "Sacred geometry: the {} ({} {} faces).",
                    solid.name, solid.faces, solid.face_shape
                ),
            );
        }
        if !metadata.archetypes.is_empty() {
            let names: Vec<&str> = metadata
                .archetypes
                .iter()
                .map(|slug| archetype(slug).map_or(slug.as_str(), |a| a.name))
                .collect();
            narrative.push(
                SectionKind::Archetypes,
                format!("Archetypes: {}.", join_names(&names)),
            );
        }
        if let Some(special) = &metadata.special {
            narrative.push(SectionKind::Special, format!("Agrippa: {}", special.note));
        }
        narrative.push(SectionKind::Energy, energy(metadata));
        if let Some(personal) = personal {
            narrative.push(SectionKind::Personal, personal_resonance(metadata, personal));
        }

        narrative
    }

    fn push(&mut self, kind: SectionKind, text: String) {
        self.sections.push(NarrativeSection { kind, text });
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop optional sections until the rendered text fits the budget.
    ///
    /// Header, special-number and personal sections are never dropped, so the
    /// result can still exceed the budget.
    pub fn fit_to_budget(mut self, config: &NarrativeConfig) -> Self {
        for kind in DROP_ORDER {
            if check_token_budget_with(&self.render(), config).within_budget {
                break;
            }
            self.sections.retain(|s| s.kind != kind);
        }
        self
    }
}

/// Build the full narrative text for a synthesis.
pub fn build_narrative(metadata: &PatternMetadata, personal: Option<&PersonalConnection>) -> String {
    Narrative::compose(metadata, personal).render()
}

/// Result of comparing a text's estimated size with a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBudget {
    pub estimated_tokens: usize,
    pub budget: usize,
    pub within_budget: bool,
}

/// Estimate tokens as character count divided by `chars_per_token`.
pub fn estimate_tokens(text: &str, chars_per_token: usize) -> usize {
    text.chars().count() / chars_per_token.max(1)
}

/// Check `text` against the default budget of 300 tokens.
pub fn check_token_budget(text: &str) -> TokenBudget {
    check_token_budget_with(
        text,
        &NarrativeConfig {
            token_budget: DEFAULT_TOKEN_BUDGET,
            chars_per_token: DEFAULT_CHARS_PER_TOKEN,
        },
    )
}

pub fn check_token_budget_with(text: &str, config: &NarrativeConfig) -> TokenBudget {
    let estimated_tokens = estimate_tokens(text, config.chars_per_token);
    TokenBudget {
        estimated_tokens,
        budget: config.token_budget,
        within_budget: estimated_tokens <= config.token_budget,
    }
}

// =============================================================================
// Section text
// =============================================================================

fn planet_name(id: &str) -> &str {
    planet(id).map_or(id, |p| p.name)
}

fn header(metadata: &PatternMetadata) -> String {
    format!(
        "Pattern {} centers on {}, resonating with the {} ({}) and the element of {}.",
        metadata.pattern,
        metadata.dominant_digit,
        planet_name(&metadata.primary_planet),
        metadata.planet_symbol,
        metadata.primary_element.display_name()
    )
}

fn blend(metadata: &PatternMetadata) -> String {
    let planets: Vec<&str> = metadata.planets.iter().map(|p| planet_name(p)).collect();
    let elements: Vec<&str> = metadata.elements.iter().map(|e| e.display_name()).collect();
    format!(
        "Blended influences: {} across {}.",
        join_names(&planets),
        join_names(&elements)
    )
}

fn energy(metadata: &PatternMetadata) -> String {
    let [first, second] = metadata.primary_element.qualities();
    let element = metadata.primary_element.display_name();

    match digit_correspondence(metadata.dominant_digit) {
        Some(c) => {
            let nature = planet(c.planet).map_or("variable", |p| p.nature.as_str());
            format!(
                "Energy: {} and {} {}, {} in tone, expressed through {}.",
                first,
                second,
                element,
                nature,
                join_names(c.traits)
            )
        }
        None => format!(
            "Energy: {} and {} {}, held as pure potential.",
            first, second, element
        ),
    }
}

fn personal_resonance(metadata: &PatternMetadata, personal: &PersonalConnection) -> String {
    let verb = match personal.alignment {
        ElementAlignment::Harmonious => "amplifies",
        ElementAlignment::Complementary => "balances",
        ElementAlignment::Challenging => "is tested by",
    };
    let mut text = format!(
        "Personal resonance ({}): your {} nature {} the pattern's {}.",
        personal.alignment.as_str(),
        personal.profile_element.display_name(),
        verb,
        metadata.primary_element.display_name()
    );
    if !personal.related_signs.is_empty() {
        let signs: Vec<&str> = personal
            .related_signs
            .iter()
            .map(|id| zodiac_sign(id).map_or(id.as_str(), |z| z.name))
            .collect();
        text.push_str(&format!(" Related signs: {}.", join_names(&signs)));
    }
    text
}

/// "a", "a and b", "a, b and c".
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
