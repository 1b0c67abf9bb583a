//! Name-case conversion
//!
//! Derives the canonical case-style renderings of a project name. The
//! boundary heuristic splits before an uppercase run followed by a
//! lowercase letter ("HTTPServer" -> "http_server") and between a
//! lowercase letter/digit and an uppercase letter ("CppQuickStarter"
//! -> "cpp_quick_starter").

use regex::Regex;
use std::sync::LazyLock;

static UPPER_RUN_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());

static LOWER_UPPER_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

static WORD_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_\s]+").unwrap());

/// Convert a free-text name to snake_case.
pub fn to_snake_case(name: &str) -> String {
    let s1 = UPPER_RUN_BOUNDARY.replace_all(name, "${1}_${2}");
    let s2 = LOWER_UPPER_BOUNDARY.replace_all(&s1, "${1}_${2}");
    s2.to_lowercase().replace(['-', ' '], "_")
}

/// Convert a free-text name to kebab-case.
pub fn to_kebab_case(name: &str) -> String {
    to_snake_case(name).replace('_', "-")
}

/// Convert a free-text name to PascalCase.
///
/// Each word keeps its tail as given; only the first letter is raised.
pub fn to_pascal_case(name: &str) -> String {
    WORD_SEPARATORS
        .split(name)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Convert a free-text name to UPPER_SNAKE_CASE.
pub fn to_upper_snake_case(name: &str) -> String {
    to_snake_case(name).to_uppercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The four derived forms of a project name, computed once and never
/// recomputed mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariants {
    pub snake: String,
    pub kebab: String,
    pub pascal: String,
    pub upper_snake: String,
}

impl NameVariants {
    /// Derive all four forms from a free-text project name.
    pub fn derive(name: &str) -> Self {
        Self {
            snake: to_snake_case(name),
            kebab: to_kebab_case(name),
            pascal: to_pascal_case(name),
            upper_snake: to_upper_snake_case(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_from_pascal() {
        assert_eq!(to_snake_case("CppQuickStarter"), "cpp_quick_starter");
        assert_eq!(to_snake_case("MyAwesomeLib"), "my_awesome_lib");
    }

    #[test]
    fn test_snake_case_uppercase_run() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("JSONParser2000"), "json_parser2000");
    }

    #[test]
    fn test_snake_case_passthrough() {
        // Already snake/kebab names have no case boundaries to split
        assert_eq!(to_snake_case("my_lib"), "my_lib");
        assert_eq!(to_snake_case("my-lib"), "my_lib");
    }

    #[test]
    fn test_snake_case_separator_before_capital_doubles_underscore() {
        // The boundary split inserts an underscore before the capital
        // and the separator itself maps to a second one
        assert_eq!(to_snake_case("My Project"), "my__project");
        assert_eq!(to_snake_case("My Fancy-Tool"), "my__fancy__tool");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("CppQuickStarter"), "cpp-quick-starter");
        assert_eq!(to_kebab_case("my-lib"), "my-lib");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("my-awesome-lib"), "MyAwesomeLib");
        assert_eq!(to_pascal_case("my_project"), "MyProject");
        assert_eq!(to_pascal_case("a b c"), "ABC");
    }

    #[test]
    fn test_pascal_case_preserves_word_tails() {
        // The tail of each word is kept as given, not lowercased
        assert_eq!(to_pascal_case("my-XMLLib"), "MyXMLLib");
    }

    #[test]
    fn test_pascal_case_collapses_separator_runs() {
        assert_eq!(to_pascal_case("my--awesome__lib"), "MyAwesomeLib");
        assert_eq!(to_pascal_case("-leading-and-trailing-"), "LeadingAndTrailing");
    }

    #[test]
    fn test_upper_snake_case() {
        assert_eq!(to_upper_snake_case("my-lib"), "MY_LIB");
        assert_eq!(to_upper_snake_case("CppQuickStarter"), "CPP_QUICK_STARTER");
    }

    #[test]
    fn test_variants_are_deterministic() {
        let a = NameVariants::derive("MyFancyTool");
        let b = NameVariants::derive("MyFancyTool");
        assert_eq!(a, b);
        assert_eq!(a.snake, "my_fancy_tool");
        assert_eq!(a.kebab, "my-fancy-tool");
        assert_eq!(a.pascal, "MyFancyTool");
        assert_eq!(a.upper_snake, "MY_FANCY_TOOL");
    }
}
