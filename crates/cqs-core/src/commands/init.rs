//! Interactive project initialization wizard

use crate::casing::NameVariants;
use crate::project::{self, FILES_TO_UPDATE, OLD_HEADER_DIR};
use crate::substitute::{self, ReplacementMap};
use crate::toolchain;
use crate::tui::widgets::{
    print_banner, print_box, print_info, print_list, print_step, print_success, print_warning,
};
use crate::tui::{Confirm, KeyInput, MultiSelect, Prompter, Select, Spinner, Text};
use crate::CLI_VERSION;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

const BUILD_SYSTEMS: &[(&str, &str)] = &[
    ("CMake", "Industry standard, wide IDE support"),
    ("xmake", "Fast, Lua-based, modern"),
    ("Both", "Keep both build systems"),
];

const CPP_STANDARDS: &[&str] = &["C++20", "C++23", "C++17"];

const FEATURES: &[&str] = &[
    "Unit Tests (Google Test)",
    "Benchmarks (Google Benchmark)",
    "Examples",
    "Documentation (Doxygen + MkDocs)",
    "vcpkg Integration",
    "Conan Integration",
];

#[derive(Debug, Clone, Copy, Default)]
struct FeatureFlags {
    vcpkg: bool,
    conan: bool,
}

/// Run the 5-step init wizard and, on confirmation, rewrite the
/// template in place.
pub fn cmd_init<I: KeyInput>(ui: &mut Prompter<I>, root: &Path, quick: bool) -> Result<bool> {
    let theme = *ui.theme();
    print_banner(
        &theme,
        "C++ Quick Starter",
        "Modern C++20 Project Scaffolding",
        CLI_VERSION,
    );
    print_info(
        &theme,
        &format!("Project root: {}\n", theme.cyan(&root.display().to_string())),
    );

    // Step 1: Project name
    print_step(&theme, 1, 5, "Project Information");

    let project_name = Text::new("What is your project name?")
        .default_value("my-awesome-lib")
        .validate(|value| {
            if project::is_valid_project_name(value) {
                Ok(())
            } else {
                Err("Name must start with a letter and contain only letters, numbers, \
                     underscores, hyphens, or spaces"
                    .to_string())
            }
        })
        .interact(ui)?;

    let variants = NameVariants::derive(&project_name);

    if !quick {
        println!();
        print_box(
            &theme,
            &[
                format!("snake_case:  {}", theme.cyan(&variants.snake)),
                format!("kebab-case:  {}", theme.cyan(&variants.kebab)),
                format!("PascalCase:  {}", theme.cyan(&variants.pascal)),
                format!("UPPER_SNAKE: {}", theme.cyan(&variants.upper_snake)),
            ],
            "Generated Names",
        );
    }

    // Step 2: Author and description
    print_step(&theme, 2, 5, "Author Information");

    let author = Text::new("Author name")
        .default_value(toolchain::git_user_name().unwrap_or_else(|| "Your Name".to_string()))
        .optional()
        .interact(ui)?;

    let description = Text::new("Project description")
        .default_value("A modern C++ library")
        .optional()
        .interact(ui)?;

    // Step 3: Features
    print_step(&theme, 3, 5, "Features");

    let mut features_prompt = MultiSelect::new("Select features to include");
    for feature in FEATURES {
        features_prompt = features_prompt.item(*feature);
    }
    // Tests and Examples on by default
    let selected_features = features_prompt.initial(&[0, 2]).interact(ui)?;
    let features = FeatureFlags {
        vcpkg: selected_features.contains(&4),
        conan: selected_features.contains(&5),
    };

    // Step 4: Build system
    print_step(&theme, 4, 5, "Build Configuration");

    let mut build_prompt = Select::new("Primary build system");
    for (label, description) in BUILD_SYSTEMS {
        build_prompt = build_prompt.item(*label, *description);
    }
    let build_system = BUILD_SYSTEMS[build_prompt.initial(2).interact(ui)?].0;

    let mut standard_prompt = Select::new("C++ standard");
    for standard in CPP_STANDARDS {
        standard_prompt = standard_prompt.item(*standard, "");
    }
    let cpp_standard = CPP_STANDARDS[standard_prompt.interact(ui)?];

    // Step 5: Git
    print_step(&theme, 5, 5, "Version Control");

    let reset_git = Confirm::new("Reset git history for a fresh start?")
        .default_value(false)
        .interact(ui)?;

    // Summary
    println!();
    print_box(
        &theme,
        &[
            format!("Project:     {}", theme.cyan(&project_name)),
            format!("Author:      {}", theme.cyan(&author)),
            format!("Description: {}", theme.cyan(&description)),
            format!("Build:       {}", theme.cyan(build_system)),
            format!("Standard:    {}", theme.cyan(cpp_standard)),
            format!("Git Reset:   {}", theme.cyan(if reset_git { "Yes" } else { "No" })),
        ],
        "Configuration Summary",
    );
    println!();

    if !Confirm::new("Proceed with initialization?").interact(ui)? {
        print_warning(&theme, "Initialization cancelled.");
        return Ok(false);
    }

    println!();
    execute_init(
        &theme,
        root,
        &InitConfig {
            project_name,
            author,
            description,
            features,
            build_system,
            cpp_standard,
            reset_git,
        },
    )
}

struct InitConfig {
    project_name: String,
    author: String,
    description: String,
    features: FeatureFlags,
    build_system: &'static str,
    cpp_standard: &'static str,
    reset_git: bool,
}

fn execute_init(theme: &crate::tui::Theme, root: &Path, config: &InitConfig) -> Result<bool> {
    let variants = NameVariants::derive(&config.project_name);
    let header_dir = variants.snake.clone();

    let mut replacements: ReplacementMap = project::base_replacements(
        &variants,
        &header_dir,
        Some(&config.author),
        Some(&config.description),
    );
    append_standard_replacements(&mut replacements, config.cpp_standard);

    // Step 1: Update files
    let spinner = Spinner::start(*theme, "Updating project files...");
    let mut updated = 0;
    for file_rel in FILES_TO_UPDATE {
        if substitute::apply_replacements(&root.join(file_rel), &replacements) {
            updated += 1;
        }
    }
    spinner.succeed(format!("Updated {} files", updated));

    // Step 2: Update includes
    let spinner = Spinner::start(*theme, "Updating #include directives...");
    let include_count = substitute::rewrite_include_prefixes(root, OLD_HEADER_DIR, &header_dir);
    spinner.succeed(format!("Updated {} source files", include_count));

    // Step 3: Rename the include directory
    let spinner = Spinner::start(*theme, "Renaming directories...");
    let old_dir = root.join("include").join(OLD_HEADER_DIR);
    let new_dir = root.join("include").join(&header_dir);
    if substitute::rename_directory(&old_dir, &new_dir) {
        spinner.succeed(format!(
            "Renamed include/{} {} include/{}",
            OLD_HEADER_DIR, theme.symbols.arrow_right, header_dir
        ));
    } else {
        spinner.info("No directories to rename");
    }

    // Step 4: Fresh CHANGELOG
    let spinner = Spinner::start(*theme, "Creating fresh CHANGELOG...");
    fs::write(root.join("CHANGELOG.md"), fresh_changelog(&config.project_name))
        .context("Failed to write CHANGELOG.md")?;
    spinner.succeed("Created fresh CHANGELOG.md");

    // Step 5: Reset git
    if config.reset_git {
        let spinner = Spinner::start(*theme, "Resetting git history...");
        let git_dir = root.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir).context("Failed to remove .git")?;
        }
        Command::new("git")
            .arg("init")
            .current_dir(root)
            .output()
            .context("Failed to run git init")?;
        spinner.succeed("Initialized fresh git repository");
    } else {
        print_info(theme, "Keeping existing git history");
    }

    // Remove unused build system files
    match config.build_system {
        "CMake" => {
            if remove_if_present(&root.join("xmake.lua")) {
                print_info(theme, "Removed xmake.lua (CMake-only mode)");
            }
        }
        "xmake" => {
            let mut removed = false;
            for file in ["CMakeLists.txt", "CMakePresets.json"] {
                removed |= remove_if_present(&root.join(file));
            }
            if removed {
                print_info(theme, "Removed CMake files (xmake-only mode)");
            }
        }
        _ => {}
    }

    // Remove unused package manager files
    if !config.features.vcpkg {
        remove_if_present(&root.join("vcpkg.json"));
    }
    if !config.features.conan {
        remove_if_present(&root.join("conanfile.txt"));
    }

    println!();
    print_success(
        theme,
        &theme.bold(&format!(
            "Project '{}' initialized successfully!",
            config.project_name
        )),
    );
    println!();

    let ok = theme.green(theme.symbols.success);
    print_box(
        theme,
        &[
            format!("{} Build:   {}", ok, theme.dim("cmake --preset ninja-debug")),
            format!("{} Test:    {}", ok, theme.dim("ctest --preset ninja-debug")),
            format!("{} Format:  {}", ok, theme.dim("./scripts/format.sh")),
        ],
        "Next Steps",
    );

    println!();
    print_list(
        theme,
        &[
            "Review and update README.md".to_string(),
            "Update LICENSE with your information".to_string(),
            "Start coding in src/ and include/".to_string(),
        ],
    );
    println!();

    Ok(true)
}

/// Rewrites that retarget the template's C++20 defaults; a no-op for
/// C++20 itself.
fn append_standard_replacements(replacements: &mut ReplacementMap, standard: &str) {
    let suffix = match standard {
        "C++23" => "23",
        "C++17" => "17",
        _ => return,
    };
    replacements.push(("cxx_std_20".to_string(), format!("cxx_std_{}", suffix)));
    replacements.push(("cxx20".to_string(), format!("cxx{}", suffix)));
    replacements.push(("C++20".to_string(), format!("C++{}", suffix)));
}

fn fresh_changelog(project_name: &str) -> String {
    format!(
        "# Changelog\n\n\
         All notable changes to {} will be documented in this file.\n\n\
         The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.1.0/),\n\
         and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).\n\n\
         ## [Unreleased]\n\n\
         ### Added\n\n\
         - Initial project setup from cpp-quick-starter template\n\n",
        project_name
    )
}

fn remove_if_present(path: &Path) -> bool {
    path.exists() && fs::remove_file(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::{ScriptedInput, Theme};
    use console::Key;
    use tempfile::TempDir;

    #[test]
    fn test_scripted_wizard_rewrites_template() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("include/project_name")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(
            root.join("CMakeLists.txt"),
            "project(cpp_quick_starter VERSION 0.1.0)\n\
             add_compile_definitions(CPP_QUICK_STARTER_EXPORTS)\n",
        )
        .unwrap();
        fs::write(root.join("include/project_name/greeting.hpp"), "#pragma once\n").unwrap();
        fs::write(
            root.join("src/main.cpp"),
            "#include \"project_name/greeting.hpp\"\n",
        )
        .unwrap();
        fs::write(root.join("xmake.lua"), "set_project(\"cpp_quick_starter\")\n").unwrap();
        fs::write(root.join("vcpkg.json"), "{\"name\": \"cpp-quick-starter\"}\n").unwrap();
        fs::write(root.join("conanfile.txt"), "[requires]\n").unwrap();
        fs::write(root.join("CHANGELOG.md"), "old history\n").unwrap();

        // Lines feed the text/confirm prompts (name, author, description,
        // git reset, proceed); keys drive the feature multiselect, the
        // build-system select, and the standard select on their defaults.
        let input = ScriptedInput::new()
            .lines(["MyLib", "Jane Doe", "A tiny library", "", ""])
            .keys([Key::Enter, Key::Enter, Key::Enter]);
        let mut ui = Prompter::new(Theme::plain(), input);

        assert!(cmd_init(&mut ui, root, true).unwrap());

        let cmake = fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
        assert!(cmake.contains("project(my_lib"));
        assert!(cmake.contains("MY_LIB_EXPORTS"));
        assert!(!cmake.contains("cpp_quick_starter"));

        assert!(root.join("include/my_lib/greeting.hpp").exists());
        assert!(!root.join("include/project_name").exists());
        assert_eq!(
            fs::read_to_string(root.join("src/main.cpp")).unwrap(),
            "#include \"my_lib/greeting.hpp\"\n"
        );

        let changelog = fs::read_to_string(root.join("CHANGELOG.md")).unwrap();
        assert!(changelog.contains("All notable changes to MyLib"));

        // Unselected package managers drop their manifests; the default
        // "Both" build system keeps xmake.lua alongside CMake.
        assert!(!root.join("vcpkg.json").exists());
        assert!(!root.join("conanfile.txt").exists());
        assert!(root.join("xmake.lua").exists());
    }

    #[test]
    fn test_cancelled_confirmation_leaves_tree_untouched() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("CMakeLists.txt"), "project(cpp_quick_starter)\n").unwrap();

        let input = ScriptedInput::new()
            .lines(["MyLib", "", "", "", "n"])
            .keys([Key::Enter, Key::Enter, Key::Enter]);
        let mut ui = Prompter::new(Theme::plain(), input);

        assert!(!cmd_init(&mut ui, root, true).unwrap());
        assert_eq!(
            fs::read_to_string(root.join("CMakeLists.txt")).unwrap(),
            "project(cpp_quick_starter)\n"
        );
    }

    #[test]
    fn test_standard_replacements_for_cpp23() {
        let mut replacements = ReplacementMap::new();
        append_standard_replacements(&mut replacements, "C++23");
        assert_eq!(
            replacements,
            vec![
                ("cxx_std_20".to_string(), "cxx_std_23".to_string()),
                ("cxx20".to_string(), "cxx23".to_string()),
                ("C++20".to_string(), "C++23".to_string()),
            ]
        );
    }

    #[test]
    fn test_standard_replacements_noop_for_cpp20() {
        let mut replacements = ReplacementMap::new();
        append_standard_replacements(&mut replacements, "C++20");
        assert!(replacements.is_empty());
    }

    #[test]
    fn test_fresh_changelog_mentions_project() {
        let changelog = fresh_changelog("acme");
        assert!(changelog.starts_with("# Changelog\n"));
        assert!(changelog.contains("All notable changes to acme"));
    }
}
