//! Body profile (V2) carried inside `Member::body_data`
//!
//! The backend stores the profile as an opaque JSON string on the member
//! record; this module gives it a typed shape plus a parse helper so
//! callers do not hand-roll the document.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StyleMatchError};

/// Body silhouette classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyShape {
    X,
    H,
    A,
    O,
}

/// Leg-to-torso proportion bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegRatio {
    Short,
    Regular,
    Long,
}

/// Standard garment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GarmentSize {
    Xs,
    S,
    M,
    L,
    Xl,
}

/// Raw measurements captured for a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurements {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub shoulder_width_cm: f64,
    pub bust_cm: f64,
    pub waist_cm: f64,
    pub hip_cm: f64,
    pub body_shape: BodyShape,
    pub leg_ratio: LegRatio,
    pub top_size: GarmentSize,
    pub bottom_size: GarmentSize,
}

/// Metrics the backend derives from the measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDerivedMetrics {
    pub bmi: f64,
    pub whr: f64,
    pub shape_class: BodyShape,
}

/// Versioned body profile document (currently version 2).
///
/// `derived` is filled in by the backend and absent on client-authored
/// documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub version: u32,
    pub measurements: BodyMeasurements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived: Option<BodyDerivedMetrics>,
}

impl BodyProfile {
    /// Parse a profile from the JSON string stored in `Member::body_data`.
    ///
    /// # Errors
    /// Returns [`StyleMatchError::InvalidInput`] when the document does not
    /// parse as a body profile.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| StyleMatchError::InvalidInput(format!("invalid body profile: {e}")))
    }

    /// Serialize the profile back into the string form the backend stores.
    ///
    /// # Errors
    /// Returns [`StyleMatchError::Internal`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| StyleMatchError::Internal(format!("failed to serialize body profile: {e}")))
    }
}
