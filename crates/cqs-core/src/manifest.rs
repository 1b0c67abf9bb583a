//! Package manifest editing (vcpkg.json and conanfile.txt)

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Append a package to the `dependencies` array of vcpkg.json.
///
/// Re-adding a package that is already listed is a no-op; the file is
/// always rewritten pretty-printed with 2-space indentation.
pub fn add_vcpkg_dependency(root: &Path, package: &str) -> Result<()> {
    let path = root.join("vcpkg.json");
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut config: Value =
        serde_json::from_str(&content).context("Failed to parse vcpkg.json")?;

    let deps = config
        .as_object_mut()
        .context("vcpkg.json is not a JSON object")?
        .entry("dependencies")
        .or_insert_with(|| json!([]));
    let deps = deps
        .as_array_mut()
        .context("vcpkg.json \"dependencies\" is not an array")?;

    if !deps.iter().any(|d| d.as_str() == Some(package)) {
        deps.push(Value::String(package.to_string()));
    }

    let pretty = serde_json::to_string_pretty(&config)?;
    fs::write(&path, pretty).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Insert a package line right after the `[requires]` heading of
/// conanfile.txt, creating the section when missing.
///
/// A package already mentioned anywhere in the file is left alone.
pub fn add_conan_dependency(root: &Path, package: &str, version: Option<&str>) -> Result<()> {
    let path = root.join("conanfile.txt");
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let pkg_line = match version {
        Some(version) => format!("{}/{}", package, version),
        None => package.to_string(),
    };

    let updated = if content.contains("[requires]") {
        if content.contains(&pkg_line) || content.contains(package) {
            content
        } else {
            content.replace("[requires]", &format!("[requires]\n{}", pkg_line))
        }
    } else {
        format!("[requires]\n{}\n\n{}", pkg_line, content)
    };

    fs::write(&path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_vcpkg_add() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("vcpkg.json"),
            r#"{"name": "acme", "dependencies": ["spdlog"]}"#,
        )
        .unwrap();

        add_vcpkg_dependency(dir.path(), "fmt").unwrap();

        let config: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("vcpkg.json")).unwrap())
                .unwrap();
        let deps: Vec<&str> = config["dependencies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d.as_str().unwrap())
            .collect();
        assert_eq!(deps, vec!["spdlog", "fmt"]);
    }

    #[test]
    fn test_vcpkg_add_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vcpkg.json"), r#"{"dependencies": ["fmt"]}"#).unwrap();

        add_vcpkg_dependency(dir.path(), "fmt").unwrap();
        add_vcpkg_dependency(dir.path(), "fmt").unwrap();

        let content = fs::read_to_string(dir.path().join("vcpkg.json")).unwrap();
        assert_eq!(content.matches("fmt").count(), 1);
    }

    #[test]
    fn test_vcpkg_creates_dependencies_array() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vcpkg.json"), r#"{"name": "acme"}"#).unwrap();

        add_vcpkg_dependency(dir.path(), "fmt").unwrap();

        let config: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("vcpkg.json")).unwrap())
                .unwrap();
        assert_eq!(config["dependencies"][0], "fmt");
    }

    #[test]
    fn test_vcpkg_output_is_two_space_indented() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vcpkg.json"), r#"{"dependencies": []}"#).unwrap();

        add_vcpkg_dependency(dir.path(), "fmt").unwrap();

        let content = fs::read_to_string(dir.path().join("vcpkg.json")).unwrap();
        assert!(content.contains("\n  \"dependencies\""));
    }

    #[test]
    fn test_conan_add_after_requires_heading() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("conanfile.txt"),
            "[requires]\nspdlog/1.12.0\n\n[generators]\nCMakeDeps\n",
        )
        .unwrap();

        add_conan_dependency(dir.path(), "fmt", None).unwrap();

        let content = fs::read_to_string(dir.path().join("conanfile.txt")).unwrap();
        assert!(content.starts_with("[requires]\nfmt\nspdlog/1.12.0\n"));
    }

    #[test]
    fn test_conan_add_is_idempotent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("conanfile.txt"), "[requires]\nfmt/10.0.0\n").unwrap();

        add_conan_dependency(dir.path(), "fmt", None).unwrap();

        let content = fs::read_to_string(dir.path().join("conanfile.txt")).unwrap();
        assert_eq!(content.matches("fmt").count(), 1);
    }

    #[test]
    fn test_conan_creates_missing_section() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("conanfile.txt"), "[generators]\nCMakeDeps\n").unwrap();

        add_conan_dependency(dir.path(), "fmt", Some("10.0.0")).unwrap();

        let content = fs::read_to_string(dir.path().join("conanfile.txt")).unwrap();
        assert!(content.starts_with("[requires]\nfmt/10.0.0\n\n[generators]"));
    }

    #[test]
    fn test_conan_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(add_conan_dependency(dir.path(), "fmt", None).is_err());
    }
}
