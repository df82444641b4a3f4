use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hands out one color per series.
pub trait ColorSource {
    /// Color for the series at `series_index` within its chart.
    fn color_for(&mut self, series_index: usize) -> String;
}

/// Independent random `#rrggbb` color per call.
///
/// Two series may end up with the same or very similar colors; that is
/// accepted for this scheme.
pub struct RandomColors<R> {
    rng: R,
}

impl<R: Rng> RandomColors<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomColors<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn color_for(&mut self, _series_index: usize) -> String {
        format!("#{:06x}", self.rng.gen_range(0..=0xFF_FFFFu32))
    }
}

/// Fixed palette indexed by series position, wrapping after ten series.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteColors;

pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

impl ColorSource for PaletteColors {
    fn color_for(&mut self, series_index: usize) -> String {
        PALETTE[series_index % PALETTE.len()].to_string()
    }
}

/// Configured color assignment policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Random,
    Palette,
}

impl ColorScheme {
    pub fn source(self) -> Box<dyn ColorSource> {
        match self {
            ColorScheme::Random => Box::new(RandomColors::from_entropy()),
            ColorScheme::Palette => Box::new(PaletteColors),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Random => write!(f, "random"),
            ColorScheme::Palette => write!(f, "palette"),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(ColorScheme::Random),
            "palette" => Ok(ColorScheme::Palette),
            other => Err(format!("unknown color scheme '{}' (expected random or palette)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_colors_are_six_digit_hex() {
        let mut colors = RandomColors::new(StdRng::seed_from_u64(7));
        for index in 0..200 {
            let color = colors.color_for(index);
            assert_eq!(color.len(), 7, "{}", color);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_seeded_random_colors_repeat() {
        let mut first = RandomColors::new(StdRng::seed_from_u64(42));
        let mut second = RandomColors::new(StdRng::seed_from_u64(42));
        assert_eq!(first.color_for(0), second.color_for(0));
    }

    #[test]
    fn test_palette_is_positional() {
        let mut colors = PaletteColors;
        assert_eq!(colors.color_for(0), "#1f77b4");
        assert_eq!(colors.color_for(1), "#ff7f0e");
        assert_eq!(colors.color_for(10), colors.color_for(0));
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!("Palette".parse::<ColorScheme>(), Ok(ColorScheme::Palette));
        assert_eq!("random".parse::<ColorScheme>(), Ok(ColorScheme::Random));
        assert!("rainbow".parse::<ColorScheme>().is_err());
    }
}
