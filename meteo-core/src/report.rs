//! Field mapping from a raw response body to an ordered report.

use indexmap::IndexMap;
use tracing::debug;

use crate::extract::extract;

/// One report field: the label the renderer knows it by, and the JSON key it
/// is extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub key: &'static str,
}

/// The fields a report carries, in display order. Top-level response fields
/// first, then the `current` observation block.
pub const FIELDS: &[Field] = &[
    Field { label: "timezone", key: "timezone" },
    Field { label: "elevation", key: "elevation" },
    Field { label: "time", key: "time" },
    Field { label: "temperature", key: "temperature_2m" },
    Field { label: "feels_like", key: "apparent_temperature" },
    Field { label: "humidity", key: "relative_humidity_2m" },
    Field { label: "precipitation", key: "precipitation" },
    Field { label: "wind_speed", key: "wind_speed_10m" },
    Field { label: "wind_direction", key: "wind_direction_10m" },
    Field { label: "pressure", key: "surface_pressure" },
    Field { label: "weather_code", key: "weather_code" },
];

/// Ordered label → value mapping for one observation document.
///
/// Total over [`FIELDS`]: there is exactly one entry per declared label,
/// with `None` standing in for fields the document did not yield. Built once
/// per document and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    entries: IndexMap<&'static str, Option<String>>,
}

impl WeatherReport {
    /// Extracted value for `label`, or `None` when the field was missing
    /// from the document (or the label is not a declared field at all).
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).and_then(|value| value.as_deref())
    }

    /// Entries in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.entries.iter().map(|(label, value)| (*label, value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run the extractor over every declared field of `document`.
///
/// Fields are extracted independently; one miss never short-circuits the
/// rest. The result always has [`FIELDS`]`.len()` entries.
pub fn map_fields(document: &str) -> WeatherReport {
    let mut entries = IndexMap::with_capacity(FIELDS.len());
    for field in FIELDS {
        let value = extract(document, field.key).map(str::to_owned);
        entries.insert(field.label, value);
    }

    let missing = entries.values().filter(|value| value.is_none()).count();
    if missing > 0 {
        debug!(missing, total = entries.len(), "document did not yield every field");
    }

    WeatherReport { entries }
}
