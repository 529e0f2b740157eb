//! RGB colors and linear gradients for chart shading.

/// An RGB color with channels expressed as fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Color { red, green, blue }
    }

    /// Format the color as a `#rrggbb` hex triplet, clamping each channel
    /// into [0, 1] before quantization.
    pub fn to_hex_rgb(&self) -> String {
        let quantize = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue)
        )
    }
}

/// Linear interpolation between two colors, channel by channel.
///
/// Arguments
/// ---------
/// * `min_color`: color returned when `value` is 0
/// * `max_color`: color returned when `value` is 1
/// * `value`: interpolation parameter, not clamped
///
/// Return
/// ------
/// * The blended color `value * max_color + (1 - value) * min_color`
pub fn gradient(min_color: Color, max_color: Color, value: f64) -> Color {
    Color::new(
        value * max_color.red + (1.0 - value) * min_color.red,
        value * max_color.green + (1.0 - value) * min_color.green,
        value * max_color.blue + (1.0 - value) * min_color.blue,
    )
}
