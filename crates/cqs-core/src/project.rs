//! Template markers, the fixed file manifest, and project detection

use crate::casing::{self, NameVariants};
use crate::substitute::ReplacementMap;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Files the init flow rewrites with the new project name. Absent files
/// are skipped, not errors.
pub const FILES_TO_UPDATE: &[&str] = &[
    "CMakeLists.txt",
    "CMakePresets.json",
    "xmake.lua",
    "vcpkg.json",
    "conanfile.txt",
    "mkdocs.yml",
    "README.md",
    "README_CN.md",
    "docs/index.md",
    "docs/getting-started.md",
    ".github/workflows/ci.yml",
    ".github/workflows/code-quality.yml",
    ".github/workflows/release.yml",
    "src/main.cpp",
    "examples/example_01.cpp",
    "tests/unit/greeting_test.cpp",
    "tests/unit/string_utils_test.cpp",
    "tests/integration/smoke_test.cpp",
    "benchmarks/string_utils_bench.cpp",
];

// Placeholder tokens baked into the template
pub const OLD_PROJECT_NAME: &str = "cpp_quick_starter";
pub const OLD_PROJECT_NAME_KEBAB: &str = "cpp-quick-starter";
pub const OLD_PROJECT_NAME_PASCAL: &str = "CppQuickStarter";
pub const OLD_PROJECT_NAME_UPPER: &str = "CPP_QUICK_STARTER";
pub const OLD_HEADER_DIR: &str = "project_name";
pub const OLD_AUTHOR_PLACEHOLDER: &str = "Your Name";
pub const OLD_AUTHOR: &str = "AstroAir";
pub const OLD_DESCRIPTION: &str =
    "A modern C++20 project template with best practices for quick project bootstrapping.";

static PROJECT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_\- ]*$").unwrap());

static MODULE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());

static CMAKE_PROJECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"project\s*\(\s*(\w+)").unwrap());

/// A project name must start with a letter and contain only letters,
/// digits, underscores, hyphens, or spaces.
pub fn is_valid_project_name(name: &str) -> bool {
    PROJECT_NAME_RE.is_match(name)
}

/// Module names are lowercase identifiers.
pub fn is_valid_module_name(name: &str) -> bool {
    MODULE_NAME_RE.is_match(name)
}

/// Build the ordered replacement map for the init flow.
///
/// Order matters: the map is applied key-by-key, so a later key can
/// match text introduced by an earlier replacement.
pub fn base_replacements(
    variants: &NameVariants,
    header_dir: &str,
    author: Option<&str>,
    description: Option<&str>,
) -> ReplacementMap {
    let mut replacements: ReplacementMap = vec![
        (OLD_PROJECT_NAME.to_string(), variants.snake.clone()),
        (OLD_PROJECT_NAME_KEBAB.to_string(), variants.kebab.clone()),
        (OLD_PROJECT_NAME_PASCAL.to_string(), variants.pascal.clone()),
        (OLD_HEADER_DIR.to_string(), header_dir.to_string()),
        (OLD_PROJECT_NAME_UPPER.to_string(), variants.upper_snake.clone()),
    ];

    if let Some(author) = author.filter(|a| !a.is_empty()) {
        replacements.push((OLD_AUTHOR_PLACEHOLDER.to_string(), author.to_string()));
        replacements.push((OLD_AUTHOR.to_string(), author.to_string()));
    }

    if let Some(description) = description.filter(|d| !d.is_empty()) {
        replacements.push((OLD_DESCRIPTION.to_string(), description.to_string()));
    }

    replacements
}

/// Project identity detected from an existing checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub header_dir: String,
}

/// Detect the project name and include directory from CMakeLists.txt.
///
/// Returns None when no CMakeLists.txt exists or it carries no
/// `project(...)` call.
pub fn detect_project_info(root: &Path) -> Option<ProjectInfo> {
    let content = std::fs::read_to_string(root.join("CMakeLists.txt")).ok()?;
    let name = CMAKE_PROJECT_RE.captures(&content)?.get(1)?.as_str().to_string();

    // The include directory is whatever single directory lives under
    // include/, falling back to the snake form of the project name.
    let mut header_dir = casing::to_snake_case(&name);
    if let Ok(entries) = std::fs::read_dir(root.join("include")) {
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let dir_name = file_name.to_string_lossy();
            if entry.path().is_dir() && !dir_name.starts_with('.') {
                header_dir = dir_name.into_owned();
                break;
            }
        }
    }

    Some(ProjectInfo { name, header_dir })
}
