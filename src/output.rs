use crate::manifest::ManifestEntry;

/// Output format for manifest listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Text,
    Json,
}

/// Format entries as JSON.
pub fn format_json(entries: &[ManifestEntry]) -> String {
    serde_json::to_string_pretty(entries).expect("entries should be serializable")
}

/// Format entries as the plain `DEFAULT_TOPICS` list literal.
pub fn format_text(entries: &[ManifestEntry]) -> String {
    let mut out = String::new();
    out.push_str("export const DEFAULT_TOPICS = [\n");
    for entry in entries {
        out.push_str(&format!("{entry}\n"));
    }
    out.push_str("];");
    out
}

/// Format entries with terminal colors, each line tinted by its style.
#[cfg(feature = "cli")]
pub fn format_pretty(entries: &[ManifestEntry]) -> String {
    use colored::Colorize;

    use crate::styles::{split_variant, Style};

    let mut out = String::new();
    out.push_str(&format!("{}\n", "export const DEFAULT_TOPICS = [".bold()));
    for entry in entries {
        let style = split_variant(&entry.image_link)
            .ok()
            .and_then(|v| Style::lookup(&v.style));
        let line = match style {
            Some(style) => entry.to_string().color(style.terminal_color()).to_string(),
            // No table entry for colorful; leave its line untinted.
            None => entry.to_string(),
        };
        out.push_str(&format!("{line}\n"));
    }
    out.push_str(&format!("{}", "];".bold()));
    out
}
