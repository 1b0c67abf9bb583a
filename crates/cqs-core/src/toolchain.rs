//! Development-environment probing
//!
//! Detects build systems, compilers, package managers, and
//! documentation tools by checking executable availability on the
//! search path.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A tool the doctor command reports on.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub cmd: &'static str,
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// Everything doctor probes, required tools first in display order.
pub const TOOLS: &[Tool] = &[
    Tool { cmd: "cmake", name: "CMake", required: true, description: "Build system" },
    Tool { cmd: "ninja", name: "Ninja", required: false, description: "Fast build tool" },
    Tool { cmd: "g++", name: "GCC", required: false, description: "GNU C++ Compiler" },
    Tool { cmd: "clang++", name: "Clang", required: false, description: "LLVM C++ Compiler" },
    Tool { cmd: "cl", name: "MSVC", required: false, description: "Microsoft C++ Compiler" },
    Tool { cmd: "xmake", name: "xmake", required: false, description: "Build system" },
    Tool { cmd: "vcpkg", name: "vcpkg", required: false, description: "Package manager" },
    Tool { cmd: "conan", name: "Conan", required: false, description: "Package manager" },
    Tool { cmd: "clang-format", name: "clang-format", required: false, description: "Code formatter" },
    Tool { cmd: "clang-tidy", name: "clang-tidy", required: false, description: "Static analyzer" },
    Tool { cmd: "cppcheck", name: "cppcheck", required: false, description: "Static analyzer" },
    Tool { cmd: "doxygen", name: "Doxygen", required: false, description: "Documentation generator" },
    Tool { cmd: "mkdocs", name: "MkDocs", required: false, description: "Documentation generator" },
    Tool { cmd: "git", name: "Git", required: true, description: "Version control" },
];

/// C++ compilers; doctor requires at least one of these.
pub const COMPILERS: &[&str] = &["g++", "clang++", "cl"];

/// Search a list of directories for an executable.
pub fn find_in<I>(dirs: I, cmd: &str) -> Option<PathBuf>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    for dir in dirs {
        let candidate = dir.as_ref().join(cmd);
        if candidate.is_file() {
            return Some(candidate);
        }
        // Windows executables carry an extension
        let exe = dir.as_ref().join(format!("{}.exe", cmd));
        if exe.is_file() {
            return Some(exe);
        }
    }
    None
}

/// Search the PATH environment for an executable.
pub fn find_in_path(cmd: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    find_in(env::split_paths(&path), cmd)
}

/// Whether an executable is available on the search path.
pub fn is_available(cmd: &str) -> bool {
    find_in_path(cmd).is_some()
}

/// Probe a tool's version via `--version`, taking the first output line.
pub fn tool_version(cmd: &str) -> Option<String> {
    let output = Command::new(cmd).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .and_then(|s| s.lines().next().map(|line| line.trim().to_string()))
}

/// The configured git user name, used as the default author.
pub fn git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "user.name"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_locates_executable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cmake"), "").unwrap();

        let found = find_in([dir.path()], "cmake");
        assert_eq!(found, Some(dir.path().join("cmake")));
    }

    #[test]
    fn test_find_in_misses_absent_executable() {
        let dir = TempDir::new().unwrap();
        assert!(find_in([dir.path()], "cmake").is_none());
    }

    #[test]
    fn test_find_in_checks_exe_suffix() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cl.exe"), "").unwrap();

        let found = find_in([dir.path()], "cl");
        assert_eq!(found, Some(dir.path().join("cl.exe")));
    }

    #[test]
    fn test_tool_version_missing_command_is_none() {
        assert!(tool_version("definitely-not-a-real-tool-xyz").is_none());
    }

    #[test]
    fn test_required_tools_listed_first_need() {
        assert!(TOOLS.iter().any(|t| t.cmd == "cmake" && t.required));
        assert!(TOOLS.iter().any(|t| t.cmd == "git" && t.required));
    }
}
