//! Lexical complexity of a query prompt.
//!
//! Complexity is a transparent linear model: a length factor plus weighted
//! counts of whole-word, case-insensitive matches from a handful of word
//! groups, clamped to `[1, 10]`.

use once_cell::sync::Lazy;
use regex::Regex;

/// A weighted word group matched as whole words, ignoring case.
#[derive(Debug, Clone)]
pub struct LexicalPattern {
    name: String,
    words: Vec<String>,
    weight: f64,
    regex: Regex,
}

impl LexicalPattern {
    pub fn new(
        name: impl Into<String>,
        words: &[&str],
        weight: f64,
    ) -> Result<Self, regex::Error> {
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))?;

        Ok(Self {
            name: name.into(),
            words: words.iter().map(|w| w.to_string()).collect(),
            weight,
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of whole-word matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    pub fn contribution(&self, text: &str) -> f64 {
        self.count(text) as f64 * self.weight
    }
}

static DEFAULT_PATTERNS: Lazy<Vec<LexicalPattern>> = Lazy::new(|| {
    let groups: [(&str, &[&str], f64); 5] = [
        (
            "question_words",
            &["how", "what", "why", "when", "where", "who", "which"],
            0.5,
        ),
        (
            "technical_terms",
            &[
                "algorithm",
                "api",
                "framework",
                "database",
                "integration",
                "optimization",
                "analytics",
            ],
            0.8,
        ),
        (
            "conditionals",
            &["if", "unless", "provided", "assuming", "given", "considering"],
            0.4,
        ),
        (
            "multi_part",
            &["and", "or", "also", "additionally", "furthermore", "moreover"],
            0.3,
        ),
        (
            "specificity",
            &["specific", "exactly", "precisely", "detailed", "comprehensive"],
            0.6,
        ),
    ];

    groups
        .into_iter()
        .map(|(name, words, weight)| {
            LexicalPattern::new(name, words, weight).expect("built-in word lists compile")
        })
        .collect()
});

/// Prompt complexity model.
#[derive(Debug, Clone)]
pub struct ComplexityModel {
    /// Characters at which the length factor saturates.
    pub length_saturation: f64,
    pub length_weight: f64,
    pub patterns: Vec<LexicalPattern>,
    pub min: f64,
    pub max: f64,
}

impl Default for ComplexityModel {
    fn default() -> Self {
        Self {
            length_saturation: 100.0,
            length_weight: 2.0,
            patterns: DEFAULT_PATTERNS.clone(),
            min: 1.0,
            max: 10.0,
        }
    }
}

impl ComplexityModel {
    pub fn length_factor(&self, prompt: &str) -> f64 {
        let len = prompt.chars().count() as f64;
        (len / self.length_saturation).min(1.0) * self.length_weight
    }

    /// Complexity in `[min, max]`.
    pub fn score(&self, prompt: &str) -> f64 {
        let lexical: f64 = self.patterns.iter().map(|p| p.contribution(prompt)).sum();
        (self.length_factor(prompt) + lexical).clamp(self.min, self.max)
    }
}
