//! Remediation recommendations
//!
//! Maps each (damage type, level) pair to a canned remediation template
//! and merges duplicate findings across photos into one recommendation
//! with an occurrence count and averaged confidence.

pub mod merge;
pub mod templates;

pub use merge::{merge_recommendations, MergedRecommendation};
pub use templates::{template_for, RecommendationTemplate, SeverityTier, CLEAN_SURFACE};
