//! Template Recommendation Engine — maps a profile to a ranked list of
//! template descriptors.
//!
//! Output order is fixed: baseline, category slot, tech/business slot, then an
//! optional specialized slot. Each slot is an ordered rule table evaluated
//! top to bottom; the first rule whose predicate holds wins.
//!
//! `AppState` holds an `Arc<dyn TemplateRecommender>` so callers can swap the
//! rule engine without touching handlers.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::profile::ProfileRecord;
use crate::recommendation::catalog::{
    default_templates, modern_minimalist, Rationale, TemplateDescriptor, TemplateSpec,
    BUSINESS_PROFESSIONAL, CONTENT_CREATOR_PORTFOLIO, CREATIVE_PORTFOLIO,
    DATA_SCIENTIST_PORTFOLIO, PROFESSIONAL_CORPORATE, TECH_INNOVATOR, UX_UI_DESIGNER_PORTFOLIO,
    VERSATILE_PORTFOLIO,
};
use crate::recommendation::keywords::CategorySignal;

const BASELINE_ID: u32 = 1;
const CATEGORY_ID: u32 = 2;
const FOCUS_ID: u32 = 3;
const SPECIALIZED_ID: u32 = 4;

#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("template {id} is missing required field '{field}'")]
    MissingField { id: u32, field: &'static str },

    #[error("duplicate template id {0} in recommendation list")]
    DuplicateId(u32),

    #[error("no rule matched the {0} slot")]
    UnmatchedSlot(&'static str),
}

// ────────────────────────────────────────────────────────────────────────────
// Rule tables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Predicate {
    Signal(CategorySignal),
    Always,
}

impl Predicate {
    fn holds(self, profile: &ProfileRecord) -> bool {
        match self {
            Predicate::Signal(signal) => signal.matches(profile),
            Predicate::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SlotRule {
    when: Predicate,
    template: TemplateSpec,
    rationale: Rationale,
}

const CATEGORY_SLOT: &[SlotRule] = &[
    SlotRule {
        when: Predicate::Signal(CategorySignal::Creative),
        template: CREATIVE_PORTFOLIO,
        rationale: Rationale::CreativeMatch,
    },
    SlotRule {
        when: Predicate::Always,
        template: PROFESSIONAL_CORPORATE,
        rationale: Rationale::CorporateFallback,
    },
];

const FOCUS_SLOT: &[SlotRule] = &[
    SlotRule {
        when: Predicate::Signal(CategorySignal::Technical),
        template: TECH_INNOVATOR,
        rationale: Rationale::TechnicalMatch,
    },
    SlotRule {
        when: Predicate::Signal(CategorySignal::Business),
        template: BUSINESS_PROFESSIONAL,
        rationale: Rationale::BusinessMatch,
    },
    SlotRule {
        when: Predicate::Always,
        template: VERSATILE_PORTFOLIO,
        rationale: Rationale::VersatileFallback,
    },
];

// No fallback row: the specialized slot is optional.
const SPECIALIZED_SLOT: &[SlotRule] = &[
    SlotRule {
        when: Predicate::Signal(CategorySignal::DataScience),
        template: DATA_SCIENTIST_PORTFOLIO,
        rationale: Rationale::DataScienceSkill,
    },
    SlotRule {
        when: Predicate::Signal(CategorySignal::UxUi),
        template: UX_UI_DESIGNER_PORTFOLIO,
        rationale: Rationale::UxUiSkill,
    },
    SlotRule {
        when: Predicate::Signal(CategorySignal::ContentCreator),
        template: CONTENT_CREATOR_PORTFOLIO,
        rationale: Rationale::ContentSkill,
    },
];

fn first_match<'a>(rules: &'a [SlotRule], profile: &ProfileRecord) -> Option<&'a SlotRule> {
    rules.iter().find(|rule| rule.when.holds(profile))
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Builds the ranked recommendation list for a profile.
///
/// Returns 3 descriptors, or 4 when a specialized skill matches. Any
/// construction failure aborts the whole list; see [`recommend_or_default`].
pub fn recommend(profile: &ProfileRecord) -> Result<Vec<TemplateDescriptor>, RecommendError> {
    let mut templates = Vec::with_capacity(4);
    templates.push(modern_minimalist(profile, BASELINE_ID));

    let category =
        first_match(CATEGORY_SLOT, profile).ok_or(RecommendError::UnmatchedSlot("category"))?;
    templates.push(category.template.to_descriptor(CATEGORY_ID, category.rationale));

    let focus = first_match(FOCUS_SLOT, profile).ok_or(RecommendError::UnmatchedSlot("focus"))?;
    templates.push(focus.template.to_descriptor(FOCUS_ID, focus.rationale));

    if let Some(specialized) = first_match(SPECIALIZED_SLOT, profile) {
        templates.push(
            specialized
                .template
                .to_descriptor(SPECIALIZED_ID, specialized.rationale),
        );
    }

    validate_list(&templates)?;

    debug!(
        title = %profile.title,
        skills = profile.skills.len(),
        picks = ?templates.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        "Recommended templates"
    );

    Ok(templates)
}

/// Rejects descriptors with blank required fields and lists with repeated ids.
pub fn validate_list(templates: &[TemplateDescriptor]) -> Result<(), RecommendError> {
    let mut seen = HashSet::new();
    for t in templates {
        let required = [
            ("name", &t.name),
            ("description", &t.description),
            ("colorScheme", &t.color_scheme),
            ("layout", &t.layout),
            ("previewImage", &t.preview_image),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(RecommendError::MissingField {
                id: t.id,
                field: *field,
            });
        }
        if !seen.insert(t.id) {
            return Err(RecommendError::DuplicateId(t.id));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Trait + fallback contract
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the recommendation backend.
pub trait TemplateRecommender: Send + Sync {
    fn recommend(&self, profile: &ProfileRecord)
        -> Result<Vec<TemplateDescriptor>, RecommendError>;

    /// Label exposed in logs, e.g. "rules".
    fn backend(&self) -> &'static str;
}

/// Keyword rule engine. Deterministic, no I/O.
pub struct RuleBasedRecommender;

impl TemplateRecommender for RuleBasedRecommender {
    fn recommend(
        &self,
        profile: &ProfileRecord,
    ) -> Result<Vec<TemplateDescriptor>, RecommendError> {
        recommend(profile)
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub templates: Vec<TemplateDescriptor>,
    pub fallback_used: bool,
}

impl Recommendation {
    /// The full static default list, used whenever no ranked list can be built.
    pub fn fallback() -> Self {
        Recommendation {
            templates: default_templates(),
            fallback_used: true,
        }
    }
}

/// Runs the recommender; on failure, substitutes the full static default list.
pub fn recommend_or_default(
    recommender: &dyn TemplateRecommender,
    profile: &ProfileRecord,
) -> Recommendation {
    match recommender.recommend(profile) {
        Ok(templates) => Recommendation {
            templates,
            fallback_used: false,
        },
        Err(e) => {
            warn!(
                backend = recommender.backend(),
                "Template recommendation failed, serving defaults: {e}"
            );
            Recommendation::fallback()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
