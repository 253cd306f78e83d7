//! Suggestions and their match-weight ordering.

use std::collections::BTreeMap;

use crate::diagnostic::KwArg;

/// A total order over how well a suggestion matches a typed prefix, with a
/// distinguished `Failed` band that filters the suggestion out entirely.
/// Lower sorts first. `StrFind` beats `Other` so substring matches rank
/// above "always offered" candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleWeight {
    StrFind,
    Other,
    Failed,
}

impl RuleWeight {
    pub fn is_failed(self) -> bool {
        matches!(self, RuleWeight::Failed)
    }
}

/// `fn(prefix) -> RuleWeight`.
pub type MatchRule = fn(&str) -> RuleWeight;

pub fn char_rule_for(expected: char) -> impl Fn(&str) -> RuleWeight {
    move |prefix| {
        if prefix.is_empty() || prefix.chars().eq(std::iter::once(expected)) {
            RuleWeight::Other
        } else {
            RuleWeight::Failed
        }
    }
}

pub fn str_find_rule(candidate: impl Into<String>) -> impl Fn(&str) -> RuleWeight + 'static {
    let candidate = candidate.into();
    move |prefix| {
        if candidate.contains(prefix) {
            RuleWeight::StrFind
        } else {
            RuleWeight::Failed
        }
    }
}

pub fn char_class_rule(allowed: &'static str) -> impl Fn(&str) -> RuleWeight {
    move |prefix| {
        if prefix.chars().all(|c| allowed.contains(c)) {
            RuleWeight::Other
        } else {
            RuleWeight::Failed
        }
    }
}

/// `{label_key, label_kwargs, inserts, note_key?, match_rule}`.
///
/// Boxed match rule rather than the `fn(&str) -> RuleWeight` type alias
/// because `str_find_rule`/`char_rule_for` close over a candidate string
/// computed at suggestion-build time (e.g. the literal a `Keyword` node
/// holds, or an id pulled dynamically out of the `IdTable`).
pub struct Suggestion {
    pub label_key: String,
    pub label_kwargs: BTreeMap<&'static str, KwArg>,
    pub inserts: String,
    pub note_key: Option<String>,
    pub match_rule: Box<dyn Fn(&str) -> RuleWeight>,
}

impl Suggestion {
    pub fn new(
        label_key: impl Into<String>,
        inserts: impl Into<String>,
        match_rule: impl Fn(&str) -> RuleWeight + 'static,
    ) -> Self {
        Suggestion {
            label_key: label_key.into(),
            label_kwargs: BTreeMap::new(),
            inserts: inserts.into(),
            note_key: None,
            match_rule: Box::new(match_rule),
        }
    }

    pub fn with_note(mut self, note_key: impl Into<String>) -> Self {
        self.note_key = Some(note_key.into());
        self
    }

    pub fn with_kwarg(mut self, name: &'static str, value: impl Into<KwArg>) -> Self {
        self.label_kwargs.insert(name, value.into());
        self
    }

    pub fn weight(&self, prefix: &str) -> RuleWeight {
        (self.match_rule)(prefix)
    }
}

impl std::fmt::Debug for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suggestion")
            .field("label_key", &self.label_key)
            .field("inserts", &self.inserts)
            .field("note_key", &self.note_key)
            .finish()
    }
}

/// Sorts suggestions ascending by weight against `prefix`, dropping
/// `Failed` rows.
pub fn rank(mut suggestions: Vec<Suggestion>, prefix: &str) -> Vec<Suggestion> {
    let mut weighted: Vec<(RuleWeight, Suggestion)> = suggestions
        .drain(..)
        .filter_map(|s| {
            let w = s.weight(prefix);
            if w.is_failed() {
                None
            } else {
                Some((w, s))
            }
        })
        .collect();
    weighted.sort_by_key(|(w, _)| *w);
    weighted.into_iter().map(|(_, s)| s).collect()
}
