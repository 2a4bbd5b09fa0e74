//! Filesystem-safe name derivation.
//!
//! Two distinct guards for two distinct path-segment classes: file names are
//! normalized to lowercase-hyphenated form, folder names only have the
//! characters removed that common filesystems reject. The two functions are
//! never composed.

/// Characters that cannot appear in a folder name on common filesystems.
const FORBIDDEN_FOLDER_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Lowercase the input and collapse every whitespace run to a single hyphen.
/// Leading and trailing whitespace is dropped. No other character class is
/// touched; non-ASCII and punctuation pass through.
pub fn normalize_file_name(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Replace path-unsafe characters with hyphens. Case and whitespace are
/// left untouched.
pub fn sanitize_folder_name(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if FORBIDDEN_FOLDER_CHARS.contains(&c) {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Uppercase the first letter of each whitespace-separated word.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_hyphenates() {
        assert_eq!(normalize_file_name("Group A Stage"), "group-a-stage");
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_file_name("  Multi   Space "), "multi-space");
        assert_eq!(normalize_file_name("tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn test_normalize_leaves_other_characters_alone() {
        assert_eq!(normalize_file_name("Ñandú (B)"), "ñandú-(b)");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_file_name(""), "");
    }

    #[test]
    fn test_sanitize_replaces_forbidden_characters() {
        assert_eq!(sanitize_folder_name("A/B:C*D"), "A-B-C-D");
        assert_eq!(sanitize_folder_name(r#"a\b?c"d<e>f|g"#), "a-b-c-d-e-f-g");
    }

    #[test]
    fn test_sanitize_leaves_case_and_whitespace() {
        assert_eq!(sanitize_folder_name("South America (CONMEBOL)"), "South America (CONMEBOL)");
        assert_eq!(sanitize_folder_name("Côte d'Ivoire"), "Côte d'Ivoire");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_folder_name(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("north america"), "North America");
        assert_eq!(title_case("asia"), "Asia");
    }
}
