//! Secret reference expansion.
//!
//! Resolves `${NAME}` placeholders inside secret values by substituting the
//! (already expanded) value of the secret called `NAME`.
//!
//! - Each distinct key is expanded at most once per call (memoized).
//! - A placeholder naming a missing key stays as literal text.
//! - A placeholder naming a key that refers back to itself, directly or
//!   through a chain of other secrets, stays as literal text. Every key on
//!   such a cycle keeps its placeholders unexpanded.
//! - When a key appears twice (personal and shared), references resolve to
//!   the first record carrying it. Each record still expands its own value.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::core::domain::Secret;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]*)\}").expect("placeholder pattern is valid"))
}

/// Literal placeholder text for `name`.
pub fn placeholder(name: &str) -> String {
    format!("${{{}}}", name)
}

/// Names referenced by `value`, in order of appearance (duplicates kept).
pub fn references(value: &str) -> Vec<String> {
    placeholder_pattern()
        .captures_iter(value)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Expand every placeholder in `secrets`.
///
/// Returns one secret per input secret, in input order, with key, type and id
/// unchanged.
///
/// Only the first record of a key is memoized. A later record with the same
/// key expands its own value instead of reusing that memo, so a personal
/// override keeps its value while `${KEY}` elsewhere still means the first
/// record.
pub fn expand(secrets: &[Secret]) -> Vec<Secret> {
    let mut expander = Expander::new(secrets);
    let mut seen = HashSet::new();

    let expanded: Vec<Secret> = secrets
        .iter()
        .map(|secret| {
            let value = if seen.insert(secret.key()) {
                expander.expand_key(secret.key())
            } else {
                expander.expand_duplicate(secret)
            };
            secret.with_value(value)
        })
        .collect();

    debug!(
        secrets = expanded.len(),
        unresolved = expander.cyclic.len(),
        "expanded secret references"
    );
    expanded
}

/// Per-call expansion state.
struct Expander<'a> {
    /// First record for each key.
    by_key: HashMap<&'a str, &'a Secret>,
    /// Fully expanded value per key.
    memo: HashMap<String, String>,
    /// Keys that reference themselves, directly or through a cycle.
    cyclic: HashSet<String>,
    /// Keys currently being expanded, outermost first.
    visiting: Vec<String>,
}

impl<'a> Expander<'a> {
    fn new(secrets: &'a [Secret]) -> Self {
        let mut by_key = HashMap::new();
        for secret in secrets {
            by_key.entry(secret.key()).or_insert(secret);
        }

        Self {
            by_key,
            memo: HashMap::new(),
            cyclic: HashSet::new(),
            visiting: Vec::new(),
        }
    }

    /// Expanded value of the first secret named `name`, memoized.
    fn expand_key(&mut self, name: &str) -> String {
        if let Some(value) = self.memo.get(name) {
            return value.clone();
        }

        let value = match self.by_key.get(name).copied() {
            Some(secret) => self.expand_value(secret.key(), secret.value()),
            None => {
                trace!(key = name, "reference to missing secret");
                placeholder(name)
            }
        };

        self.memo.insert(name.to_string(), value.clone());
        value
    }

    /// Expand a value belonging to `key`, tracking `key` on the visiting stack.
    fn expand_value(&mut self, key: &str, value: &str) -> String {
        let names = references(value);
        if names.is_empty() {
            return value.to_string();
        }

        self.visiting.push(key.to_string());
        let mut output = value.to_string();

        for name in names {
            if name == key {
                self.cyclic.insert(name);
                continue;
            }

            if let Some(start) = self.visiting.iter().position(|k| *k == name) {
                trace!(key = %name, "reference cycle");
                let members: Vec<String> = self.visiting[start..].to_vec();
                self.cyclic.extend(members);
                continue;
            }

            let expanded = self.expand_key(&name);

            if self.cyclic.contains(&name) {
                continue;
            }
            output = output.replace(&placeholder(&name), &expanded);
        }

        self.visiting.pop();
        output
    }

    /// Expand a record whose key already appeared earlier in the list.
    ///
    /// References still resolve through the first record of each key; a
    /// reference to its own key stays literal.
    fn expand_duplicate(&mut self, secret: &Secret) -> String {
        let mut output = secret.value().to_string();

        for name in references(secret.value()) {
            if name == secret.key() {
                continue;
            }
            let expanded = self.expand_key(&name);
            if self.cyclic.contains(&name) {
                continue;
            }
            output = output.replace(&placeholder(&name), &expanded);
        }

        output
    }
}
