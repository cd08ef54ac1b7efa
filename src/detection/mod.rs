//! Multi-label damage detection
//!
//! Applies independent per-class thresholding to a classifier read. The
//! five damage classes are not mutually exclusive; a photo can carry any
//! combination of them, and the plain-surface score never suppresses a
//! detection.

pub mod issues;

pub use issues::{detect_issues, DamageLevel, DamageType, DetectedIssue};
