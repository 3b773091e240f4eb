use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (booster versions, sites) to distinct colours.
/// Hues follow the order the labels are given in.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    order: Vec<String>,
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let palette = generate_palette(labels.len());
        let order: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        let mapping = order.iter().cloned().zip(palette).collect();
        ColorMap { order, mapping }
    }

    /// Look up the colour for a label; unknown labels are grey.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }

    /// Return the legend entries (label → colour) in label order.
    pub fn legend_entries(&self) -> Vec<(&str, Color32)> {
        self.order
            .iter()
            .map(|l| (l.as_str(), self.color_for(l)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_color_map_lookup_and_legend_order() {
        let cm = ColorMap::new(&["v1.1", "FT", "B4"]);
        let legend = cm.legend_entries();

        let labels: Vec<&str> = legend.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["v1.1", "FT", "B4"]);
        assert_eq!(cm.color_for("FT"), legend[1].1);
        assert_eq!(cm.color_for("unknown"), Color32::GRAY);
    }
}
