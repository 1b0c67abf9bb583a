//! Project information report

use crate::project::detect_project_info;
use crate::tui::widgets::{print_banner, print_box, print_error, print_info};
use crate::tui::Theme;
use anyhow::Result;
use std::path::Path;
use walkdir::WalkDir;

fn count_files(dir: &Path, extension: &str) -> usize {
    if !dir.exists() {
        return 0;
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == extension)
        })
        .count()
}

/// Print a report about the project in `root`.
pub fn cmd_info(theme: &Theme, root: &Path) -> Result<bool> {
    let Some(info) = detect_project_info(root) else {
        print_error(theme, "Could not detect project information.");
        print_info(theme, "Are you in a cpp-quick-starter project directory?");
        return Ok(false);
    };

    print_banner(theme, &info.name, "Project Information", "");

    let feature_files: &[(&str, &str)] = &[
        ("CMakeLists.txt", "CMake"),
        ("xmake.lua", "xmake"),
        ("vcpkg.json", "vcpkg"),
        ("conanfile.txt", "Conan"),
        ("tests", "Tests"),
        ("benchmarks", "Benchmarks"),
        ("docs", "Documentation"),
    ];
    let features: Vec<String> = feature_files
        .iter()
        .filter(|(path, _)| root.join(path).exists())
        .map(|(_, label)| format!("{} {}", theme.green(theme.symbols.success), label))
        .collect();

    print_box(
        theme,
        &[
            format!("Name:       {}", theme.cyan(&info.name)),
            format!("Root:       {}", theme.cyan(&root.display().to_string())),
            format!(
                "Include:    {}",
                theme.cyan(&format!("include/{}/", info.header_dir))
            ),
        ],
        "Project",
    );

    println!();
    println!("  {}", theme.bold("Features:"));
    for feature in &features {
        println!("    {}", feature);
    }

    let src_files = count_files(&root.join("src"), "cpp");
    let header_files = count_files(&root.join("include"), "hpp");
    let test_files = count_files(&root.join("tests"), "cpp");

    println!();
    print_box(
        theme,
        &[
            format!("Source files:  {}", theme.cyan(&src_files.to_string())),
            format!("Header files:  {}", theme.cyan(&header_files.to_string())),
            format!("Test files:    {}", theme.cyan(&test_files.to_string())),
        ],
        "Statistics",
    );

    Ok(true)
}
