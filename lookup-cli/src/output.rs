use lookup_core::WeatherRecord;

/// Render the result block: current conditions first, then the original
/// request context the backend echoed back. The notes line is omitted when
/// notes is empty.
pub fn render_record(record: &WeatherRecord) -> String {
    let current = &record.weather.current;
    let place = &record.weather.location;

    let mut out = String::new();
    out.push_str("Weather Details\n");
    out.push_str(&format!("  {}°C  {}, {}\n", current.temperature, place.name, place.country));
    if let Some(icon) = current.weather_icons.first() {
        // First description doubles as the icon's caption.
        match current.weather_descriptions.first() {
            Some(caption) => out.push_str(&format!("  Icon: {icon} ({caption})\n")),
            None => out.push_str(&format!("  Icon: {icon}\n")),
        }
    }
    out.push_str(&format!("  Description: {}\n", current.weather_descriptions.join(", ")));
    out.push_str(&format!("  Wind: {} km/h\n", current.wind_speed));
    out.push_str(&format!("  Humidity: {}%\n", current.humidity));
    out.push_str(&format!("  Local Time: {}\n", place.localtime));
    out.push('\n');
    out.push_str("Original Request\n");
    out.push_str(&format!("  Date: {}\n", record.request.date));
    out.push_str(&format!("  Location: {}", record.request.location));
    if !record.request.notes.is_empty() {
        out.push_str(&format!("\n  Notes: {}", record.request.notes));
    }
    out
}

/// Render the error block.
pub fn render_error(message: &str) -> String {
    format!("Error: {message}")
}
