use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::styles::{split_variant, Style};

/// One line of the generated topic list, shaped for pasting straight into
/// the frontend's configuration array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(rename = "imageLink")]
    pub image_link: String,
}

impl ManifestEntry {
    pub fn new(base: &str, style: &str) -> Self {
        Self {
            name: format!("{} ({})", title_case(base), title_case(style)),
            image_link: format!("{base}-{style}.svg"),
        }
    }

    /// Derive an entry from a variant filename.
    pub fn for_file(file_name: &str) -> Result<Self> {
        let v = split_variant(file_name)?;
        Ok(Self::new(&v.base, &v.style))
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{ name: "{}", imageLink: "{}" }},"#,
            self.name, self.image_link
        )
    }
}

/// True for filenames carrying one of the six style suffixes or the
/// generated `-colorful` one.
pub fn recognized(file_name: &str) -> bool {
    split_variant(file_name)
        .map(|v| v.style == "colorful" || Style::lookup(&v.style).is_some())
        .unwrap_or(false)
}

/// Walk `dir` and build one entry per file with a recognized variant
/// suffix, sorted by filename.
pub fn collect(dir: &Path) -> Result<Vec<ManifestEntry>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if recognized(name) {
            files.push(name.to_string());
        }
    }
    files.sort();
    files.iter().map(|f| ManifestEntry::for_file(f)).collect()
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_single_word() {
        assert_eq!(title_case("mountain"), "Mountain");
        assert_eq!(title_case("CYAN"), "Cyan");
    }

    #[test]
    fn title_case_restarts_after_separator() {
        assert_eq!(title_case("snow_peak"), "Snow_Peak");
        assert_eq!(title_case("a1b"), "A1B");
    }

    #[test]
    fn entry_display_matches_list_literal_shape() {
        let entry = ManifestEntry::new("mountain", "cyan");
        assert_eq!(
            entry.to_string(),
            r#"{ name: "Mountain (Cyan)", imageLink: "mountain-cyan.svg" },"#
        );
    }

    #[test]
    fn entry_for_colorful_file() {
        let entry = ManifestEntry::for_file("mountain-colorful.svg").unwrap();
        assert_eq!(entry.name, "Mountain (Colorful)");
        assert_eq!(entry.image_link, "mountain-colorful.svg");
    }

    #[test]
    fn recognized_accepts_styles_and_colorful_only() {
        assert!(recognized("mountain-black.svg"));
        assert!(recognized("mountain-colorful.svg"));
        assert!(!recognized("mountain-orange.svg"));
        assert!(!recognized("mountain.svg"));
        assert!(!recognized("notes.txt"));
    }

    #[test]
    fn collect_walks_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mountain-black.svg"), "<svg/>").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/river-red.svg"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "").unwrap();

        let entries = collect(dir.path()).unwrap();
        let links: Vec<_> = entries.iter().map(|e| e.image_link.as_str()).collect();
        assert_eq!(links, vec!["mountain-black.svg", "river-red.svg"]);
    }

    #[test]
    fn entry_serializes_with_image_link_field() {
        let entry = ManifestEntry::new("mountain", "cyan");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""imageLink":"mountain-cyan.svg""#));
        let back: ManifestEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
