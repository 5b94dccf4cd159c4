//! Gradient Layers
//!
//! Reads the rendered size of the `::before` / `::after` gradient layers so
//! the mapper can use the same size factor the stylesheet declares.

use std::collections::HashMap;

/// Pseudo-element carrying a shine gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoElement {
    Before,
    After,
}

impl PseudoElement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "::before",
            Self::After => "::after",
        }
    }
}

/// Host access to computed style
pub trait ComputedStyleSource {
    /// Computed `background-size` of a pseudo-element, if the host can tell
    fn background_size(&self, pseudo: PseudoElement) -> Option<String>;
}

/// Computed style from fixed values
#[derive(Debug, Clone, Default)]
pub struct StaticComputedStyle {
    sizes: HashMap<PseudoElement, String>,
}

impl StaticComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, pseudo: PseudoElement, background_size: &str) -> Self {
        self.sizes.insert(pseudo, background_size.to_string());
        self
    }
}

impl ComputedStyleSource for StaticComputedStyle {
    fn background_size(&self, pseudo: PseudoElement) -> Option<String> {
        self.sizes.get(&pseudo).cloned()
    }
}

/// Size factor from a `background-size` value.
///
/// Only the horizontal (first) component counts, and only when it is a
/// positive percentage: `"350% 100%"` gives `3.5`, `"cover"` gives `None`.
pub fn parse_size_factor(background_size: &str) -> Option<f64> {
    let first = background_size.split_whitespace().next()?;
    let number = first.strip_suffix('%')?;
    let factor = number.trim().parse::<f64>().ok()? / 100.0;
    (factor.is_finite() && factor > 0.0).then_some(factor)
}

/// Horizontal size factors of the two gradient layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFactors {
    pub before: f64,
    pub after: f64,
}

impl Default for LayerFactors {
    fn default() -> Self {
        Self {
            before: 3.5,
            after: 3.0,
        }
    }
}

impl LayerFactors {
    /// Defaults overridden by whatever the host reports
    pub fn from_computed_style(source: &dyn ComputedStyleSource) -> Self {
        Self::from_computed_style_or(source, Self::default())
    }

    pub fn from_computed_style_or(source: &dyn ComputedStyleSource, fallback: Self) -> Self {
        let read = |pseudo: PseudoElement, default: f64| {
            match source.background_size(pseudo).as_deref().and_then(parse_size_factor) {
                Some(factor) => factor,
                None => {
                    tracing::debug!(pseudo = pseudo.as_str(), fallback = default, "Using default layer size factor");
                    default
                }
            }
        };

        let factors = Self {
            before: read(PseudoElement::Before, fallback.before),
            after: read(PseudoElement::After, fallback.after),
        };
        tracing::debug!(before = factors.before, after = factors.after, "Gradient layer factors");
        factors
    }

    /// One factor shared by both layers
    pub fn average(&self) -> f64 {
        (self.before + self.after) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_factor() {
        assert_eq!(parse_size_factor("350% 100%"), Some(3.5));
        assert_eq!(parse_size_factor("  300%"), Some(3.0));
        assert_eq!(parse_size_factor("cover"), None);
        assert_eq!(parse_size_factor("200px 100%"), None);
        assert_eq!(parse_size_factor("0% 100%"), None);
        assert_eq!(parse_size_factor("-50%"), None);
        assert_eq!(parse_size_factor(""), None);
    }

    #[test]
    fn test_defaults_when_host_is_silent() {
        let factors = LayerFactors::from_computed_style(&StaticComputedStyle::new());
        assert_eq!(factors, LayerFactors::default());
        assert_eq!(factors.average(), 3.25);
    }

    #[test]
    fn test_reads_each_layer() {
        let style = StaticComputedStyle::new()
            .with(PseudoElement::Before, "400% 100%")
            .with(PseudoElement::After, "auto");
        let factors = LayerFactors::from_computed_style(&style);

        assert_eq!(factors.before, 4.0);
        assert_eq!(factors.after, 3.0);
        assert_eq!(factors.average(), 3.5);
    }
}
