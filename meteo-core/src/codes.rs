//! Translation of Open-Meteo numeric codes into display text.
//!
//! Both translators take the raw extracted text rather than a number: the
//! field mapper deals in text, and "the field was unparseable" must render
//! as a value, not abort the report.

/// Label used when a code field is absent or not numeric.
pub const NOT_AVAILABLE: &str = "N/A";

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Describe a WMO weather code.
///
/// Reference: <https://open-meteo.com/en/docs#weathervariables>. Codes
/// outside the table still produce a label rather than an error.
pub fn describe_weather_code(raw: &str) -> String {
    let Ok(code) = raw.trim().parse::<f64>() else {
        return NOT_AVAILABLE.to_string();
    };

    let label = match code as i64 {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45..=48 => "Fog",
        51..=55 => "Drizzle",
        61..=65 => "Rain",
        71..=75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85..=86 => "Snow showers",
        95..=99 => "Thunderstorm",
        other => return format!("Unknown (code {other})"),
    };

    label.to_string()
}

/// Describe a wind direction in degrees as a compass point.
///
/// The circle is split into 16 sectors of 22.5° each; 360° wraps back to N.
pub fn describe_wind_direction(raw: &str) -> String {
    let Ok(degrees) = raw.trim().parse::<f64>() else {
        return NOT_AVAILABLE.to_string();
    };

    let sector = ((degrees / 22.5).round() as usize) % COMPASS_POINTS.len();
    format!("{} ({}°)", COMPASS_POINTS[sector], degrees as i64)
}
