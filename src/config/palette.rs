use std::collections::BTreeMap;

/// Built-in shade maps for the palettes the site theme pulls in.
/// Shade keys run from 50 (lightest) to 900 (darkest).
fn shades(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn cool_gray() -> BTreeMap<String, String> {
    shades(&[
        ("50", "#F9FAFB"),
        ("100", "#F3F4F6"),
        ("200", "#E5E7EB"),
        ("300", "#D1D5DB"),
        ("400", "#9CA3AF"),
        ("500", "#6B7280"),
        ("600", "#4B5563"),
        ("700", "#374151"),
        ("800", "#1F2937"),
        ("900", "#111827"),
    ])
}

pub fn emerald() -> BTreeMap<String, String> {
    shades(&[
        ("50", "#ECFDF5"),
        ("100", "#D1FAE5"),
        ("200", "#A7F3D0"),
        ("300", "#6EE7B7"),
        ("400", "#34D399"),
        ("500", "#10B981"),
        ("600", "#059669"),
        ("700", "#047857"),
        ("800", "#065F46"),
        ("900", "#064E3B"),
    ])
}

pub fn teal() -> BTreeMap<String, String> {
    shades(&[
        ("50", "#F0FDFA"),
        ("100", "#CCFBF1"),
        ("200", "#99F6E4"),
        ("300", "#5EEAD4"),
        ("400", "#2DD4BF"),
        ("500", "#14B8A6"),
        ("600", "#0D9488"),
        ("700", "#0F766E"),
        ("800", "#115E59"),
        ("900", "#134E4A"),
    ])
}

pub const BLACK: &str = "#000";
