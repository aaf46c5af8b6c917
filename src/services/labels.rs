//! Display labels for coded course values.

use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelCategory {
    Delivery,
    Frequency,
    GeoTargeting,
}

static LABELS: LazyLock<HashMap<LabelCategory, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                LabelCategory::Delivery,
                HashMap::from([
                    ("in_class", "In Class"),
                    ("blended", "Blended"),
                    ("online", "Online"),
                    ("virtual", "Virtual"),
                ]),
            ),
            (
                LabelCategory::Frequency,
                HashMap::from([
                    ("SELF_PACED", "Self Paced"),
                    ("FULL_TIME", "Full Time"),
                    ("PART_TIME", "Part Time"),
                ]),
            ),
            (
                LabelCategory::GeoTargeting,
                HashMap::from([
                    ("NONE", "none"),
                    ("WARNING", "warning"),
                    ("RESTRICTION", "restriction"),
                ]),
            ),
        ])
    });

/// Exact, case-sensitive lookup. Unknown codes come back unchanged.
pub fn resolve<'a>(category: LabelCategory, code: &'a str) -> &'a str {
    match LABELS.get(&category).and_then(|table| table.get(code)) {
        Some(label) => *label,
        None => code,
    }
}

/// Labels every code and joins them with ", ", keeping input order and duplicates.
pub fn join_labels(category: LabelCategory, codes: &[String]) -> String {
    codes
        .iter()
        .map(|code| resolve(category, code))
        .collect::<Vec<_>>()
        .join(", ")
}
