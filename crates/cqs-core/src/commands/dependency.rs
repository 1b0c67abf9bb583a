//! Add-dependency wizard for vcpkg and Conan manifests

use crate::manifest;
use crate::tui::widgets::{print_banner, print_error, print_info, print_success};
use crate::tui::{KeyInput, Prompter, Select, Spinner, Text};
use crate::CLI_VERSION;
use anyhow::Result;
use std::path::Path;

const COMMON_PACKAGES: &[(&str, &str)] = &[
    ("fmt", "Modern formatting library"),
    ("spdlog", "Fast C++ logging library"),
    ("nlohmann-json", "JSON for Modern C++"),
    ("boost", "Boost C++ Libraries"),
    ("catch2", "Test framework"),
    ("cxxopts", "Command line parser"),
    ("Other", "Enter custom package name"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Manager {
    Vcpkg,
    Conan,
}

impl Manager {
    fn label(self) -> &'static str {
        match self {
            Manager::Vcpkg => "vcpkg",
            Manager::Conan => "Conan",
        }
    }
}

/// Run the add-dependency wizard against the project in `root`.
pub fn cmd_add_dependency<I: KeyInput>(ui: &mut Prompter<I>, root: &Path) -> Result<bool> {
    let theme = *ui.theme();
    print_banner(
        &theme,
        "Add Dependency",
        "Add a package dependency to your project",
        CLI_VERSION,
    );

    let has_vcpkg = root.join("vcpkg.json").exists();
    let has_conan = root.join("conanfile.txt").exists();

    let mut managers = Vec::new();
    if has_vcpkg {
        managers.push(Manager::Vcpkg);
    }
    if has_conan {
        managers.push(Manager::Conan);
    }

    let manager = match managers.len() {
        0 => {
            print_error(&theme, "No package manager configuration found.");
            print_info(&theme, "Create vcpkg.json or conanfile.txt first.");
            return Ok(false);
        }
        1 => {
            print_info(&theme, &format!("Using {}", theme.cyan(managers[0].label())));
            managers[0]
        }
        _ => {
            let mut picker = Select::new("Which package manager?");
            for m in &managers {
                picker = picker.item(m.label(), "");
            }
            managers[picker.interact(ui)?]
        }
    };

    let mut picker = Select::new("Select package");
    for (name, description) in COMMON_PACKAGES {
        picker = picker.item(*name, *description);
    }
    let picked = picker.interact(ui)?;

    let package = if COMMON_PACKAGES[picked].0 == "Other" {
        Text::new("Package name").interact(ui)?
    } else {
        COMMON_PACKAGES[picked].0.to_string()
    };

    println!();

    let spinner = Spinner::start(
        theme,
        format!("Adding {} to {}...", package, manager.label()),
    );
    let result = match manager {
        Manager::Vcpkg => manifest::add_vcpkg_dependency(root, &package),
        Manager::Conan => manifest::add_conan_dependency(root, &package, None),
    };
    match result {
        Ok(()) => spinner.succeed(format!("Added {}", package)),
        Err(e) => {
            spinner.fail(format!("Failed: {}", e));
            return Ok(false);
        }
    }

    println!();
    print_success(
        &theme,
        &format!("Added {} to {}", theme.cyan(&package), manager.label()),
    );
    match manager {
        Manager::Vcpkg => print_info(&theme, &format!("Run: {}", theme.dim("vcpkg install"))),
        Manager::Conan => print_info(
            &theme,
            &format!(
                "Run: {}",
                theme.dim("conan install . --output-folder=build --build=missing")
            ),
        ),
    }

    Ok(true)
}
