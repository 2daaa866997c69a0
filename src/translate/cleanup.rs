//! Cleanup of the provider's raw answer.
//!
//! Chat models tend to wrap a translation in framing such as
//! `Here is the translation: ...` or append a note after it. The pipeline is
//! an ordered list of rules; each rule sees the output of the previous one.
//! The whole list is re-run until the text stops changing, so cleaning an
//! already clean string is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static DEFAULT_PIPELINE: Lazy<CleanupPipeline> = Lazy::new(CleanupPipeline::default);

/// Label patterns, tried in this order. All are case-insensitive, anchored at
/// the start and swallow a trailing colon (ASCII or fullwidth) and whitespace.
const LABEL_PATTERNS: [(&str, &str); 4] = [
    ("translation-from-clause", r"(?i)^The translation from .+? is[:：\s]*"),
    // No word boundary: "Translational" loses its first eleven letters too.
    ("translation-label", r"(?i)^Translation[:：\s]*"),
    ("here-is-the-translation", r"(?i)^Here is the translation[:：\s]*"),
    ("translated-text-label", r"(?i)^Translated text[:：\s]*"),
];

#[derive(Debug, Clone)]
pub enum CleanupRule {
    /// Remove the matched prefix.
    StripPrefix { name: &'static str, pattern: Regex },
    /// Trim surrounding whitespace.
    Trim,
    /// Reduce multi-line text to its first non-empty line. This drops trailing
    /// model commentary, and with it any genuine second line.
    FirstNonEmptyLine,
}

impl CleanupRule {
    pub fn strip_prefix(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(CleanupRule::StripPrefix {
            name,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            CleanupRule::StripPrefix { name, .. } => *name,
            CleanupRule::Trim => "trim",
            CleanupRule::FirstNonEmptyLine => "first-non-empty-line",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            CleanupRule::StripPrefix { pattern, .. } => match pattern.find(text) {
                Some(m) if m.start() == 0 => text[m.end()..].to_string(),
                _ => text.to_string(),
            },
            CleanupRule::Trim => text.trim().to_string(),
            CleanupRule::FirstNonEmptyLine => {
                if !text.contains('\n') {
                    return text.to_string();
                }
                text.lines()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .unwrap_or(text)
                    .to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanupPipeline {
    rules: Vec<CleanupRule>,
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        let mut rules: Vec<CleanupRule> = LABEL_PATTERNS
            .iter()
            .map(|&(name, pattern)| {
                CleanupRule::strip_prefix(name, pattern).expect("valid cleanup pattern")
            })
            .collect();
        rules.push(CleanupRule::Trim);
        rules.push(CleanupRule::FirstNonEmptyLine);
        Self { rules }
    }
}

impl CleanupPipeline {
    #[cfg(test)]
    pub fn rules(&self) -> &[CleanupRule] {
        &self.rules
    }

    /// Insert a rule before the trailing whitespace/line rules of the default list,
    /// or at the end if the list has none.
    #[cfg(test)]
    pub fn with_label_rule(mut self, rule: CleanupRule) -> Self {
        let pos = self
            .rules
            .iter()
            .position(|r| !matches!(r, CleanupRule::StripPrefix { .. }))
            .unwrap_or(self.rules.len());
        self.rules.insert(pos, rule);
        self
    }

    /// One pass over the rule list.
    pub fn apply_once(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, rule| {
                let next = rule.apply(&current);
                if next != current {
                    trace!("cleanup rule {} applied", rule.name());
                }
                next
            })
    }

    /// Repeat passes until nothing changes. No rule ever lengthens the text,
    /// so this terminates.
    pub fn apply(&self, raw: &str) -> String {
        let mut current = raw.to_string();
        loop {
            let next = self.apply_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

pub fn clean_translation(raw: &str) -> String {
    DEFAULT_PIPELINE.apply(raw)
}
