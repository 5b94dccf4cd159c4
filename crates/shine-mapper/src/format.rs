//! Value formatting for style properties and readouts

/// Marker shown in place of a value the sensor could not provide
pub const UNAVAILABLE: &str = "N/A";

/// Unit suffix of a channel value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Degrees,
    Bare,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Degrees => "deg",
            Self::Bare => "",
        }
    }
}

/// Style property value: two decimals plus unit
pub fn format_value(value: f64, unit: Unit) -> String {
    format_readout(value, 2, unit)
}

/// Fixed-precision value plus unit. Never renders `-0`.
pub fn format_readout(value: f64, decimals: usize, unit: Unit) -> String {
    let text = format!("{:.*}", decimals, value);
    // "-0.0" and friends
    let text = match text.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0' || b == b'.') => digits.to_string(),
        _ => text,
    };
    format!("{text}{}", unit.suffix())
}
