//! Deserialization helpers shared by the shapes.

use geode_core::{IntoMeasure, Measure, Result, Unit};
use serde::Deserialize;

/// A measure as it appears in hand-written configuration: a bare number, a `{ value, unit }` table or
/// `"<number> <unit>"` text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawMeasure {
    Value(f64),
    Measure(Measure),
    Text(String),
}

impl IntoMeasure for RawMeasure {
    fn into_tagged(self, default: Unit) -> Result<Measure> {
        match self {
            RawMeasure::Value(value) => Ok(Measure::new(value, default)),
            RawMeasure::Measure(measure) => Ok(measure),
            RawMeasure::Text(text) => text.into_tagged(default),
        }
    }
}
