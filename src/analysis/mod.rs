//! Risk classification and result aggregation modules
//!
//! Turns detected issues into final assessment artifacts:
//! - Image-level risk classification
//! - Worst-wins aggregation across photos and areas
//! - Result and summary types
//! - Session lifecycle state machine

pub mod aggregate;
pub mod result;
pub mod risk;
pub mod session;
