//! Coordinate input shapes and their canonical `"lat,lng"` wire form.

use crate::error::PlacesError;
use std::str::FromStr;

/// A latitude/longitude pair in any of the accepted input shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Already formatted as `"lat,lng"`
    Text(String),
    /// Named components
    Map { lat: f64, lng: f64 },
    /// Positional `[lat, lng]`
    Seq([f64; 2]),
}

impl Location {
    pub fn map(lat: f64, lng: f64) -> Self {
        Location::Map { lat, lng }
    }

    /// Canonical wire string for this location
    pub fn to_wire(&self) -> Result<String, PlacesError> {
        latlng(self)
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Location::Text(value.to_string())
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        Location::Text(value)
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lng): (f64, f64)) -> Self {
        Location::Seq([lat, lng])
    }
}

impl From<[f64; 2]> for Location {
    fn from(value: [f64; 2]) -> Self {
        Location::Seq(value)
    }
}

impl FromStr for Location {
    type Err = PlacesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = Location::Text(s.to_string());
        latlng(&text)?;
        Ok(text)
    }
}

impl TryFrom<&serde_json::Value> for Location {
    type Error = PlacesError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::String(text) => Ok(Location::Text(text.clone())),
            Value::Object(map) => {
                let pair = match (map.get("lat"), map.get("lng")) {
                    (Some(lat), Some(lng)) => Some((lat, lng)),
                    _ => match (map.get("latitude"), map.get("longitude")) {
                        (Some(lat), Some(lng)) => Some((lat, lng)),
                        _ => None,
                    },
                };
                let (lat, lng) = pair.ok_or_else(|| {
                    PlacesError::invalid_argument(
                        "Expected an object with lat/lng or latitude/longitude keys",
                    )
                })?;
                Ok(Location::Map {
                    lat: json_number(lat)?,
                    lng: json_number(lng)?,
                })
            }
            Value::Array(items) if items.len() == 2 => {
                Ok(Location::Seq([json_number(&items[0])?, json_number(&items[1])?]))
            }
            other => Err(PlacesError::invalid_argument(format!(
                "Expected a lat/lng string, object or two-element array, but got {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_number(value: &serde_json::Value) -> Result<f64, PlacesError> {
    value.as_f64().ok_or_else(|| {
        PlacesError::invalid_argument(format!(
            "Expected a numeric coordinate, but got {}",
            json_kind(value)
        ))
    })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Normalize any [`Location`] to the `"lat,lng"` wire string.
///
/// Numeric components keep at most 8 decimal places with trailing zeros
/// removed. Text input must hold exactly two finite numbers; its trimmed
/// components are kept verbatim.
pub fn latlng(location: &Location) -> Result<String, PlacesError> {
    match location {
        Location::Text(text) => normalize_text(text),
        Location::Map { lat, lng } => format_pair(*lat, *lng),
        Location::Seq([lat, lng]) => format_pair(*lat, *lng),
    }
}

fn normalize_text(text: &str) -> Result<String, PlacesError> {
    let mut parts = text.split(',').map(str::trim);
    let (lat, lng) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lng), None) => (lat, lng),
        _ => {
            return Err(PlacesError::invalid_argument(format!(
                "Expected \"lat,lng\", but got \"{text}\""
            )));
        }
    };

    for component in [lat, lng] {
        let parsed = component.parse::<f64>().map_err(|_| {
            PlacesError::invalid_argument(format!(
                "Invalid coordinate component \"{component}\" in \"{text}\""
            ))
        })?;
        if !parsed.is_finite() {
            return Err(PlacesError::invalid_argument(format!(
                "Coordinate component \"{component}\" is not finite"
            )));
        }
    }

    Ok(format!("{lat},{lng}"))
}

fn format_pair(lat: f64, lng: f64) -> Result<String, PlacesError> {
    Ok(format!("{},{}", format_float(lat)?, format_float(lng)?))
}

fn format_float(value: f64) -> Result<String, PlacesError> {
    if !value.is_finite() {
        return Err(PlacesError::invalid_argument(format!(
            "Coordinate component {value} is not finite"
        )));
    }

    let formatted = format!("{value:.8}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    // -0.000000001 rounds to "-0"
    if trimmed == "-0" {
        return Ok("0".to_string());
    }
    Ok(trimmed.to_string())
}
