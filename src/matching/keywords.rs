// Domain keyword categories.
//
// Each category names a mathematical area and the substrings that signal it.
// A category fires for a (template, topic) pair when one of its keywords
// appears in the topic name AND one appears in the template's skill name or
// stem. Matching is by substring, so "sin" also hits "using".

use serde::Serialize;

/// A named group of keywords that all point to the same topic area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl KeywordCategory {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Does any keyword occur as a substring of `text` (already lowercased)?
    pub fn hits(&self, text: &str) -> bool {
        self.keywords.iter().any(|kw| text.contains(kw.as_str()))
    }
}

/// Built-in category table, in evaluation order.
const DEFAULT_TABLE: &[(&str, &[&str])] = &[
    ("quadratic", &["quadratic", "parabola", "vertex"]),
    (
        "trig",
        &["sin", "cos", "tan", "sine", "cosine", "tangent", "trigonometric", "trig"],
    ),
    ("circle", &["circle", "circumference", "radius", "diameter"]),
    ("compound", &["compound", "interest"]),
    ("distance", &["distance", "midpoint"]),
    ("gradient", &["gradient", "slope"]),
    (
        "volume",
        &["volume", "prism", "cylinder", "sphere", "cone", "pyramid"],
    ),
    ("surface", &["surface", "area"]),
    ("probability", &["probability", "prob"]),
    ("statistics", &["statistics", "mean", "median", "mode", "quartile"]),
    ("similar", &["similar", "similarity"]),
    ("congruent", &["congruent", "congruence"]),
    ("polynomial", &["polynomial", "expand", "factorise"]),
    ("logarithm", &["log", "logarithm", "exponential"]),
    ("matrix", &["matrix", "matrices"]),
    ("vector", &["vector"]),
    ("complex", &["complex", "imaginary"]),
    ("calculus", &["differentiate", "derivative", "integral"]),
];

/// The default keyword categories used by `KeywordMatcher::default()`.
pub fn default_categories() -> Vec<KeywordCategory> {
    DEFAULT_TABLE
        .iter()
        .map(|(name, keywords)| KeywordCategory::new(name, keywords))
        .collect()
}
