use std::sync::OnceLock;

use regex::Regex;

/// Ordered chain of split heuristics. Each is a pure function returning the
/// observer/target halves of the name, or `None` when the pattern does not
/// apply; the first hit wins.
const SPLIT_STRATEGIES: [fn(&str) -> Option<(String, String)>; 3] =
    [split_on_to, split_on_separators, split_camel_runs];

/// Derive a filesystem directory name from a human-readable preset name.
///
/// Names like "Dover to Calais" become `dover_calais`; camel-case names like
/// "LondonEye" become `london_eye`. When no split heuristic applies, the
/// whole name is lowercased with spaces turned into underscores. The result
/// is a heuristic, not guaranteed collision-free.
pub fn derive_candidate(name: &str) -> String {
    for split in SPLIT_STRATEGIES {
        if let Some((observer, target)) = split(name) {
            return format!("{}_{}", clean_part(&observer), clean_part(&target));
        }
    }
    name.to_lowercase().replace(' ', "_")
}

/// Split at the first literal `" to "`.
fn split_on_to(name: &str) -> Option<(String, String)> {
    let (observer, target) = name.split_once(" to ")?;
    Some((observer.to_string(), target.to_string()))
}

/// Split on a dash/en-dash/em-dash, the word "and", or a slash.
fn split_on_separators(name: &str) -> Option<(String, String)> {
    let mut parts = separator_pattern().splitn(name, 3);
    let observer = parts.next()?;
    let target = parts.next()?;
    Some((observer.to_string(), target.to_string()))
}

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\s*[-–—]\s*|\s+and\s+|\s*/\s*").expect("separator pattern is valid")
    })
}

/// Segment into runs that each begin with an ASCII uppercase letter and use
/// the first two. Text before the first uppercase letter is dropped.
fn split_camel_runs(name: &str) -> Option<(String, String)> {
    let mut runs: Vec<String> = Vec::new();
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            runs.push(ch.to_string());
        } else if let Some(run) = runs.last_mut() {
            run.push(ch);
        }
    }

    let mut runs = runs.into_iter();
    let observer = runs.next()?;
    let target = runs.next()?;
    Some((observer, target))
}

fn clean_part(part: &str) -> String {
    let kept: String = part
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .collect();
    kept.trim().to_lowercase().replace(' ', "_")
}
