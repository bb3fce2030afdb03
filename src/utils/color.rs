// Color utilities shared by the grid editor and the chart renderer.

/// Gray used whenever a row's color text does not look like a hex color.
pub const DEFAULT_COLOR: &str = "#CCCCCC";

/// Parse a `#RRGGBB` hex color string into an RGB triple.
///
/// The leading '#' is optional here; the stricter "must start with '#'"
/// rule belongs to the row expansion step, which substitutes
/// [`DEFAULT_COLOR`] before this ever runs.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Parse with the default-gray fallback applied.
pub fn parse_hex_or_gray(hex: &str) -> (u8, u8, u8) {
    parse_hex(hex)
        .or_else(|| parse_hex(DEFAULT_COLOR))
        .unwrap_or((204, 204, 204))
}

/// Hex color as an egui color, gray when unparsable.
pub fn to_color32(hex: &str) -> egui::Color32 {
    let (r, g, b) = parse_hex_or_gray(hex);
    egui::Color32::from_rgb(r, g, b)
}
