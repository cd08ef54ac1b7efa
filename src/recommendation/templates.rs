//! Static remediation template table
//!
//! A closed lookup keyed by (damage type, level). The table is data, not
//! derived state; the text is what reporting collaborators print.

use serde::{Deserialize, Serialize};

use crate::detection::{DamageLevel, DamageType};

/// Display tier a recommendation is reported under
///
/// Declared worst-first so an ascending sort puts the most urgent
/// recommendations at the top of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    /// Immediate structural attention
    Urgent,
    /// Schedule remediation soon
    Moderate,
    /// Cosmetic; monitor
    Minor,
    /// No action needed
    Good,
}

/// Canned remediation guidance for one (damage type, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationTemplate {
    /// Short finding title
    pub title: &'static str,
    /// One-paragraph explanation of the finding
    pub description: &'static str,
    /// Display tier
    pub severity: SeverityTier,
    /// Remediation steps, in order
    pub actions: &'static [&'static str],
}

/// Default template for photos with no detected issues
pub const CLEAN_SURFACE: RecommendationTemplate = RecommendationTemplate {
    title: "Surface in good condition",
    description: "No damage was detected. The surface appears sound and requires no \
                  remediation at this time.",
    severity: SeverityTier::Good,
    actions: &["Re-inspect during the next scheduled maintenance cycle."],
};

static SPALLING_HIGH: RecommendationTemplate = RecommendationTemplate {
    title: "Concrete spalling",
    description: "Surface concrete is breaking away, which can expose reinforcement to \
                  moisture and accelerate structural deterioration.",
    severity: SeverityTier::Urgent,
    actions: &[
        "Engage a structural engineer to evaluate the affected member.",
        "Cordon off the area below the damage to protect occupants from falling debris.",
        "Remove loose material and patch with a compatible repair mortar.",
        "Treat any exposed reinforcement for corrosion before patching.",
    ],
};

static MAJOR_CRACK_HIGH: RecommendationTemplate = RecommendationTemplate {
    title: "Major structural crack",
    description: "A wide or propagating crack suggests movement or overloading of the \
                  structural element behind it.",
    severity: SeverityTier::Urgent,
    actions: &[
        "Engage a structural engineer to determine the cause and severity.",
        "Install crack monitors to track propagation.",
        "Do not seal the crack before the underlying cause is diagnosed.",
    ],
};

static MINOR_CRACK_LOW: RecommendationTemplate = RecommendationTemplate {
    title: "Minor surface crack",
    description: "Hairline cracking is common in curing and weathering surfaces and is \
                  usually cosmetic, but can admit moisture over time.",
    severity: SeverityTier::Minor,
    actions: &[
        "Seal the crack with an elastomeric filler to keep moisture out.",
        "Photograph and re-check at the next inspection for widening.",
    ],
};

static PAINT_DAMAGE_LOW: RecommendationTemplate = RecommendationTemplate {
    title: "Paint deterioration",
    description: "Peeling or blistering paint exposes the substrate to weathering and \
                  typically indicates moisture behind the coating.",
    severity: SeverityTier::Minor,
    actions: &[
        "Strip loose coating and check the substrate for trapped moisture.",
        "Prime and repaint with a coating suited to the exposure.",
    ],
};

static ALGAE_MODERATE: RecommendationTemplate = RecommendationTemplate {
    title: "Algae growth",
    description: "Biological growth retains moisture against the surface and usually \
                  points to poor drainage or persistent damp.",
    severity: SeverityTier::Moderate,
    actions: &[
        "Wash the surface with a biocidal cleaner.",
        "Inspect gutters, downpipes and grading for the moisture source.",
        "Improve drainage or ventilation to keep the surface dry.",
    ],
};

/// Look up the template for a (damage type, level) pair
///
/// The table is closed over the fixed type-to-level mapping. A pair
/// outside it cannot arise from detection; if one is constructed anyway it
/// falls back to the clean-surface default.
pub fn template_for(damage_type: DamageType, level: DamageLevel) -> &'static RecommendationTemplate {
    match (damage_type, level) {
        (DamageType::Spalling, DamageLevel::High) => &SPALLING_HIGH,
        (DamageType::MajorCrack, DamageLevel::High) => &MAJOR_CRACK_HIGH,
        (DamageType::MinorCrack, DamageLevel::Low) => &MINOR_CRACK_LOW,
        (DamageType::PaintDamage, DamageLevel::Low) => &PAINT_DAMAGE_LOW,
        (DamageType::Algae, DamageLevel::Moderate) => &ALGAE_MODERATE,
        _ => &CLEAN_SURFACE,
    }
}
