use anyhow::{Context, Result};

/// A named pair of hex color codes used as find/replace keys when
/// recoloring an SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub name: &'static str,
    /// Primary color, hex digits without the leading `#`.
    pub color1: &'static str,
    /// Accent color, hex digits without the leading `#`.
    pub color2: &'static str,
}

/// The fixed style table. Order only affects listings; lookup is
/// first-match by name.
pub const STYLES: &[Style] = &[
    Style { name: "black", color1: "2b2b2b", color2: "444444" },
    Style { name: "cyan", color1: "00bfbf", color2: "9acee6" },
    Style { name: "blue", color1: "9acee6", color2: "BF7E96" },
    Style { name: "green", color1: "619E73", color2: "B1FFFF" },
    Style { name: "purple", color1: "AF84A3", color2: "9acee6" },
    Style { name: "red", color1: "d10c0c", color2: "BF7E96" },
];

impl Style {
    pub fn all() -> &'static [Style] {
        STYLES
    }

    /// Look up a style by name (linear scan, first match).
    pub fn lookup(name: &str) -> Option<Style> {
        STYLES.iter().find(|s| s.name == name).copied()
    }

    /// Terminal color name accepted by the `colored` crate.
    pub fn terminal_color(&self) -> &'static str {
        match self.name {
            "cyan" => "cyan",
            "blue" => "blue",
            "green" => "green",
            "purple" => "magenta",
            "red" => "red",
            _ => "white",
        }
    }
}

/// A `<base>-<style>.svg` filename split into its two segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantName {
    pub base: String,
    pub style: String,
}

/// Split a variant filename on the last `-` before the `.svg` extension.
pub fn split_variant(file_name: &str) -> Result<VariantName> {
    let stem = file_name
        .strip_suffix(".svg")
        .with_context(|| format!("{file_name} is not an .svg file"))?;
    let (base, style) = stem
        .rsplit_once('-')
        .with_context(|| format!("{file_name} does not match <base>-<style>.svg"))?;
    Ok(VariantName {
        base: base.to_string(),
        style: style.to_string(),
    })
}
