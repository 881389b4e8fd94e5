//! Built-in sample data used when no input lists are given

/// Texts to find matches for
pub const DEMO_SOURCES: [&str; 5] = ["мама", "мыла", "раму", "Мама мыла раму", "Мамина моет рамы"];

/// Texts to pick matches from
pub const DEMO_CANDIDATES: [&str; 5] = [
    "человек развивает свой ум",
    "мама любит котят",
    "мама ремонтирует раму",
    "папа моет рамы",
    "мама установила приложение",
];

/// Owned copies of the demo lists, in (sources, candidates) order
pub fn demo_lists() -> (Vec<String>, Vec<String>) {
    (
        DEMO_SOURCES.iter().map(|s| s.to_string()).collect(),
        DEMO_CANDIDATES.iter().map(|s| s.to_string()).collect(),
    )
}
