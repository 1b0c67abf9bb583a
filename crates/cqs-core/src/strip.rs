//! Bilingual documentation stripping
//!
//! The template's docs interleave English and Chinese content delimited
//! by `<!-- [EN] -->`/`<!-- [/EN] -->` and `<!-- [ZH] -->`/`<!-- [/ZH] -->`
//! marker blocks, plus `left / right` bilingual headings and inline
//! pairs. Stripping one language removes its blocks, unwraps the kept
//! language's markers, and collapses bilingual pairs to the kept side.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static EN_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!-- \[EN\] -->\s*\n?(.*?)\n?<!-- \[/EN\] -->\s*\n?").unwrap()
});
static ZH_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!-- \[ZH\] -->\s*\n?(.*?)\n?<!-- \[/ZH\] -->\s*\n?").unwrap()
});
static EN_MARKER_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!-- \[EN\] -->\s*\n?").unwrap());
static EN_MARKER_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!-- \[/EN\] -->\s*\n?").unwrap());
static ZH_MARKER_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!-- \[ZH\] -->\s*\n?").unwrap());
static ZH_MARKER_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!-- \[/ZH\] -->\s*\n?").unwrap());
static BILINGUAL_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#+\s*)([^/\n]+)\s*/\s*(.+)$").unwrap());
static BILINGUAL_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z][A-Za-z\s]+)\s*/\s*([\u{4e00}-\u{9fff}]+)").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// A documentation language that can be stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocLang {
    En,
    Zh,
}

impl DocLang {
    /// Parse a user-supplied language token.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(DocLang::En),
            "zh" | "chinese" => Some(DocLang::Zh),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocLang::En => "English (EN)",
            DocLang::Zh => "Chinese (ZH)",
        }
    }
}

/// Strip one language from bilingual markdown content.
///
/// `lang` names the language to REMOVE; the other language's markers
/// are unwrapped and its content kept. Runs of three or more newlines
/// collapse to a single blank line.
pub fn strip_language(content: &str, lang: DocLang) -> String {
    let stripped = match lang {
        DocLang::En => {
            let s = EN_BLOCK.replace_all(content, "");
            let s = ZH_MARKER_OPEN.replace_all(&s, "");
            let s = ZH_MARKER_CLOSE.replace_all(&s, "");
            let s = BILINGUAL_HEADING.replace_all(&s, "${1}${3}");
            BILINGUAL_INLINE.replace_all(&s, "${2}").into_owned()
        }
        DocLang::Zh => {
            let s = ZH_BLOCK.replace_all(content, "");
            let s = EN_MARKER_OPEN.replace_all(&s, "");
            let s = EN_MARKER_CLOSE.replace_all(&s, "");
            let s = BILINGUAL_HEADING.replace_all(&s, "${1}${2}");
            BILINGUAL_INLINE.replace_all(&s, "${1}").into_owned()
        }
    };

    BLANK_RUNS.replace_all(&stripped, "\n\n").into_owned()
}

/// Strip one language from a markdown file in place.
///
/// Returns true when the file was rewritten. Unreadable or non-UTF-8
/// files are skipped.
pub fn strip_language_from_file(path: &Path, lang: DocLang) -> bool {
    let Ok(original) = fs::read_to_string(path) else {
        return false;
    };

    let stripped = strip_language(&original, lang);
    if stripped != original {
        fs::write(path, stripped).is_ok()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BILINGUAL: &str = "\
# Title / 标题

<!-- [EN] -->
English paragraph.
<!-- [/EN] -->
<!-- [ZH] -->
中文段落。
<!-- [/ZH] -->

Done.
";

    #[test]
    fn test_strip_english_keeps_chinese() {
        let out = strip_language(BILINGUAL, DocLang::En);
        assert!(!out.contains("English paragraph."));
        assert!(out.contains("中文段落。"));
        assert!(!out.contains("<!-- [ZH] -->"));
        assert!(!out.contains("<!-- [/ZH] -->"));
        assert!(out.contains("# 标题"));
    }

    #[test]
    fn test_strip_chinese_keeps_english() {
        let out = strip_language(BILINGUAL, DocLang::Zh);
        assert!(out.contains("English paragraph."));
        assert!(!out.contains("中文段落。"));
        assert!(!out.contains("<!-- [EN] -->"));
        assert!(out.starts_with("# Title"));
    }

    #[test]
    fn test_inline_bilingual_pair_collapses() {
        // Group 1 keeps the whitespace before the slash, as written
        let out = strip_language("Install / 安装 first.\n", DocLang::Zh);
        assert_eq!(out, "Install  first.\n");

        let out = strip_language("Install / 安装 first.\n", DocLang::En);
        assert_eq!(out, "安装 first.\n");
    }

    #[test]
    fn test_no_markers_is_byte_identical_modulo_blank_runs() {
        let content = "# Notes\n\nPlain text only.\n";
        assert_eq!(strip_language(content, DocLang::En), content);
    }

    #[test]
    fn test_blank_runs_collapse() {
        let out = strip_language("a\n\n\n\n\nb\n", DocLang::En);
        assert_eq!(out, "a\n\nb\n");
    }

    #[test]
    fn test_parse_language_tokens() {
        assert_eq!(DocLang::parse("en"), Some(DocLang::En));
        assert_eq!(DocLang::parse("ENGLISH"), Some(DocLang::En));
        assert_eq!(DocLang::parse("zh"), Some(DocLang::Zh));
        assert_eq!(DocLang::parse("chinese"), Some(DocLang::Zh));
        assert_eq!(DocLang::parse("fr"), None);
    }
}
