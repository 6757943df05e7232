use std::fs;
use std::path::Path;

/// Matches below this ratio are not worth reporting.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// An existing directory name scored against a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatch {
    pub name: String,
    pub ratio: f64,
}

/// Normalized sequence similarity in [0, 1]: twice the length of the longest
/// common subsequence over the combined length. Symmetric, and 1.0 exactly
/// when the two strings are identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * lcs_length(&a, &b) as f64 / total as f64
}

fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Scan the immediate subdirectories of `images_root` for names similar to
/// `candidate`. A missing root means no existing directories, not an error.
/// Results are sorted by descending ratio, ties broken by name so the
/// ordering is reproducible.
pub fn find_similar_directories(candidate: &str, images_root: &Path) -> Vec<SimilarityMatch> {
    let mut matches = Vec::new();
    if !images_root.is_dir() {
        return matches;
    }

    if let Ok(read_dir) = fs::read_dir(images_root) {
        for entry in read_dir.flatten() {
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(String::from) else {
                continue;
            };

            let ratio = similarity_ratio(candidate, &name);
            if ratio > SIMILARITY_THRESHOLD {
                matches.push(SimilarityMatch { name, ratio });
            }
        }
    }

    matches.sort_by(|a, b| b.ratio.total_cmp(&a.ratio).then_with(|| a.name.cmp(&b.name)));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity_ratio("dover_calais", "dover_calais"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn ratio_is_symmetric() {
        let forward = similarity_ratio("dover_calais", "dover_calais_old");
        let backward = similarity_ratio("dover_calais_old", "dover_calais");
        assert_eq!(forward, backward);
    }

    #[test]
    fn near_duplicates_score_above_threshold() {
        let ratio = similarity_ratio("dover_calais", "dover_calais_old");
        assert!(
            ratio > SIMILARITY_THRESHOLD,
            "expected near-duplicate above threshold, got {ratio}"
        );
    }

    #[test]
    fn ranks_existing_directories_and_drops_unrelated_ones() {
        let root = tempfile::tempdir().expect("tempdir");
        for dir in ["dover_calais", "dover_calais_old", "unrelated"] {
            fs::create_dir(root.path().join(dir)).expect("create fixture dir");
        }
        // Plain files must be ignored even when the name would match.
        fs::write(root.path().join("dover_calais.txt"), b"").expect("write file");

        let matches = find_similar_directories("dover_calais", root.path());

        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["dover_calais", "dover_calais_old"]);
        assert_eq!(matches[0].ratio, 1.0);
        assert!(matches[1].ratio < 1.0);
    }

    #[test]
    fn equal_ratios_are_ordered_by_name() {
        let root = tempfile::tempdir().expect("tempdir");
        for dir in ["xbcd", "abcx"] {
            fs::create_dir(root.path().join(dir)).expect("create fixture dir");
        }

        let matches = find_similar_directories("abcd", root.path());
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["abcx", "xbcd"]);
        assert_eq!(matches[0].ratio, matches[1].ratio);
    }

    #[test]
    fn missing_root_yields_no_matches() {
        let root = tempfile::tempdir().expect("tempdir");
        let missing = root.path().join("nope");
        assert!(find_similar_directories("dover_calais", &missing).is_empty());
    }
}
