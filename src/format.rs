//! Display helpers for catalog names and measurements.

/// Highest base stat value; stat bars are drawn relative to it.
pub const MAX_BASE_STAT: u16 = 255;

/// Turn a hyphenated API name into a display name.
///
/// Each hyphen-separated word gets its first character uppercased and the
/// words are joined with single spaces: `"mr-mime"` becomes `"Mr Mime"`.
pub fn format_name(raw: &str) -> String {
    raw.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `25` -> `"#025"`.
pub fn format_dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Decimeters as meters with one decimal.
pub fn format_height(decimeters: u32) -> String {
    format!("{:.1} m", f64::from(decimeters) / 10.0)
}

/// Hectograms as kilograms with one decimal.
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}

/// Stat, ability and move names with hyphens shown as spaces.
pub fn humanize_label(raw: &str) -> String {
    raw.replace('-', " ")
}

/// Share of [`MAX_BASE_STAT`] as a percentage, capped at 100.
pub fn stat_percentage(base: u16) -> f64 {
    (f64::from(base) / f64::from(MAX_BASE_STAT) * 100.0).min(100.0)
}
