//! Fixed-layout box-table rendering of a weather report.
//!
//! Display policy lives here: the core only reports found-or-not, and this
//! module decides that missing values read as `N/A`.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use meteo_core::{
    Location, NOT_AVAILABLE, WeatherReport, describe_weather_code, describe_wind_direction,
};

const INNER_WIDTH: usize = 49;
const LABEL_WIDTH: usize = 10;
// "  " + label + ": " + value fills the interior exactly.
const VALUE_WIDTH: usize = INNER_WIDTH - LABEL_WIDTH - 4;

/// Render the full report as a string ending in a newline.
pub fn render_report(
    location: &Location,
    report: &WeatherReport,
    fetched_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    edge(&mut out, '╔', '═', '╗');
    center_line(&mut out, '║', "Open-Meteo Weather Report");
    edge(&mut out, '╚', '═', '╝');

    edge(&mut out, '┌', '─', '┐');
    row(&mut out, "Location", &location.label);
    row(&mut out, "Timezone", value_or_na(report, "timezone"));
    let coords = format!("Lat {:.2}  Lon {:.2}", location.latitude, location.longitude);
    row(&mut out, "Coords", &coords);
    row(&mut out, "Elevation", &with_unit(report, "elevation", "m"));
    row(&mut out, "Time", value_or_na(report, "time"));

    edge(&mut out, '├', '─', '┤');
    center_line(&mut out, '│', "CURRENT CONDITIONS");
    edge(&mut out, '├', '─', '┤');

    let weather = match report.get("weather_code") {
        Some(code) => describe_weather_code(code),
        None => NOT_AVAILABLE.to_string(),
    };
    row(&mut out, "Weather", &weather);
    row(&mut out, "Temp", &with_unit(report, "temperature", "°C"));
    row(&mut out, "Feels like", &with_unit(report, "feels_like", "°C"));
    row(&mut out, "Humidity", &with_unit(report, "humidity", "%"));
    row(&mut out, "Precip", &with_unit(report, "precipitation", "mm"));
    row(&mut out, "Wind", &wind_cell(report));
    row(&mut out, "Pressure", &with_unit(report, "pressure", "hPa"));

    edge(&mut out, '├', '─', '┤');
    center_line(&mut out, '│', "Data source: Open-Meteo (open-meteo.com)");
    center_line(&mut out, '│', &format!("Fetched {}", fetched_at.format("%Y-%m-%d %H:%M UTC")));
    edge(&mut out, '└', '─', '┘');

    out
}

fn value_or_na<'a>(report: &'a WeatherReport, label: &str) -> &'a str {
    report.get(label).unwrap_or(NOT_AVAILABLE)
}

fn with_unit(report: &WeatherReport, label: &str, unit: &str) -> String {
    match report.get(label) {
        Some(value) => format!("{value} {unit}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Speed and compass direction combined, e.g. `11.2 km/h from NW (315°)`.
fn wind_cell(report: &WeatherReport) -> String {
    match (report.get("wind_speed"), report.get("wind_direction")) {
        (Some(speed), Some(direction)) => {
            format!("{speed} km/h from {}", describe_wind_direction(direction))
        }
        (Some(speed), None) => format!("{speed} km/h"),
        (None, _) => NOT_AVAILABLE.to_string(),
    }
}

fn edge(out: &mut String, left: char, fill: char, right: char) {
    let _ = writeln!(out, "{left}{}{right}", fill.to_string().repeat(INNER_WIDTH));
}

fn center_line(out: &mut String, border: char, text: &str) {
    let _ = writeln!(out, "{border}{text:^width$}{border}", width = INNER_WIDTH);
}

fn row(out: &mut String, label: &str, value: &str) {
    // Overlong values are clipped so the frame never breaks.
    let value: String = value.chars().take(VALUE_WIDTH).collect();
    let _ = writeln!(
        out,
        "{border}  {label:<lw$}: {value:<vw$}{border}",
        border = '│',
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use meteo_core::map_fields;

    fn populated_report() -> WeatherReport {
        map_fields(
            r#"{"timezone": "America/New_York", "elevation": 32.0,
                "current": {"time": "2026-08-06T09:15", "temperature_2m": 27.3,
                "apparent_temperature": 29.1, "relative_humidity_2m": 64,
                "precipitation": 0.0, "wind_speed_10m": 11.2,
                "wind_direction_10m": 315.0, "surface_pressure": 1016.4,
                "weather_code": 2}}"#,
        )
    }

    fn render(report: &WeatherReport) -> String {
        let location = Location::default_city();
        render_report(&location, report, DateTime::from_timestamp(1_754_470_800, 0).unwrap())
    }

    #[test]
    fn every_line_has_the_same_display_width() {
        let text = render(&populated_report());
        for line in text.lines() {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2, "misaligned line: {line}");
        }
    }

    #[test]
    fn populated_report_renders_translated_values() {
        let text = render(&populated_report());
        assert!(text.contains("New York City"));
        assert!(text.contains("Partly cloudy"));
        assert!(text.contains("27.3 °C"));
        assert!(text.contains("11.2 km/h from NW (315°)"));
        assert!(text.contains("1016.4 hPa"));
        assert!(!text.contains(NOT_AVAILABLE));
    }

    #[test]
    fn missing_fields_render_as_not_available() {
        let report = map_fields("{}");
        let text = render(&report);
        assert!(text.contains("N/A"));
        // The frame must stay aligned even when everything is missing.
        for line in text.lines() {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2);
        }
    }

    #[test]
    fn overlong_values_are_clipped_not_overflowed() {
        let location = Location::new(0.0, 0.0, "x".repeat(100));
        let report = map_fields("{}");
        let text = render_report(&location, &report, Utc::now());
        for line in text.lines() {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2);
        }
    }
}
