//! Namespace removal across step skill lists.

use crate::skills::tag;

/// Drop every tag under `prefix` from every step.
///
/// A trailing `/` on the prefix is ignored. Returns whether anything was
/// removed; an unknown prefix is a silent no-op.
pub fn remove_namespace(steps: &mut [Vec<String>], prefix: &str) -> bool {
    let prefix = tag::normalize_prefix(prefix);
    let mut removed = false;
    for skills in steps.iter_mut() {
        let before = skills.len();
        skills.retain(|skill| !tag::has_prefix(skill, prefix));
        removed |= skills.len() != before;
    }
    removed
}
