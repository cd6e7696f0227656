//! Personal/shared override resolution.
//!
//! A key may carry both a personal and a shared value. Resolving for a scope
//! keeps one record per key, preferring the record of the requested scope.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::core::domain::{Secret, SecretType};

/// Collapse `secrets` to one record per key, preferring `scope`.
///
/// Within a scope the last record for a key wins. Keys that have no record in
/// the requested scope keep their first record. Output follows the order in
/// which keys first appear.
pub fn override_secrets(secrets: &[Secret], scope: SecretType) -> Vec<Secret> {
    let mut preferred: HashMap<&str, &Secret> = HashMap::new();
    for secret in secrets.iter().filter(|s| s.kind() == scope) {
        preferred.insert(secret.key(), secret);
    }

    let mut emitted = HashSet::new();
    let mut merged = Vec::new();
    for secret in secrets {
        if !emitted.insert(secret.key()) {
            continue;
        }
        let chosen = preferred.get(secret.key()).copied().unwrap_or(secret);
        merged.push(chosen.clone());
    }

    debug!(
        input = secrets.len(),
        output = merged.len(),
        %scope,
        "applied overrides"
    );
    merged
}
