//! Fixed-precision helpers for display decimals.
//!
//! Values are kept as `f64` internally and only rounded when they cross the
//! presentation boundary (formatted strings, serialized payloads).

/// Round to `decimals` places, halves away from zero.
///
/// Values too large to scale are already integral and come back unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Render with exactly `decimals` fractional digits.
///
/// Negative values that round to zero render without a sign.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let rounded = round_to(value, decimals as u32);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}

/// Serde adapter for `Option<f64>` fields that travel as two-decimal strings.
///
/// Accepts strings or plain numbers on input; blank strings read as absent.
pub mod fixed2 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&super::to_fixed(*v, 2)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(n)) => Ok(Some(n)),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Raw::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
