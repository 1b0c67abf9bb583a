//! Development-environment check

use crate::toolchain::{is_available, tool_version, COMPILERS, TOOLS};
use crate::tui::widgets::{print_banner, print_box, print_error, print_info, print_list, print_success};
use crate::tui::Theme;
use anyhow::Result;

/// First `--version` line of an installed tool, for the report.
fn probed_version(theme: &Theme, cmd: &str) -> String {
    tool_version(cmd)
        .map(|v| format!(" {}", theme.dim(&v)))
        .unwrap_or_default()
}

/// Probe the toolchain and report what is missing.
///
/// Returns Ok(true) only when every required tool and at least one C++
/// compiler are on the PATH.
pub fn cmd_doctor(theme: &Theme) -> Result<bool> {
    print_banner(theme, "Environment Doctor", "Checking your development environment", "");

    println!("  {}", theme.bold("Required Tools:"));
    let mut all_required = true;
    for tool in TOOLS.iter().filter(|t| t.required) {
        let detail = theme.dim(&format!("- {}", tool.description));
        if is_available(tool.cmd) {
            println!(
                "    {} {} {}{}",
                theme.green(theme.symbols.success),
                tool.name,
                detail,
                probed_version(theme, tool.cmd)
            );
        } else {
            println!(
                "    {} {} {} {}",
                theme.red(theme.symbols.error),
                tool.name,
                detail,
                theme.red("[MISSING]")
            );
            all_required = false;
        }
    }

    println!();
    println!("  {}", theme.bold("Optional Tools:"));
    let mut compiler_found = false;
    for tool in TOOLS.iter().filter(|t| !t.required) {
        let found = is_available(tool.cmd);
        if found && COMPILERS.contains(&tool.cmd) {
            compiler_found = true;
        }
        let detail = theme.dim(&format!("- {}", tool.description));
        if found {
            println!(
                "    {} {} {}{}",
                theme.green(theme.symbols.success),
                tool.name,
                detail,
                probed_version(theme, tool.cmd)
            );
        } else {
            println!("    {} {} {}", theme.yellow(theme.symbols.circle), tool.name, detail);
        }
    }

    println!();

    if !compiler_found {
        print_error(theme, "No C++ compiler found!");
        print_info(theme, "Install GCC, Clang, or MSVC to compile C++ code.");
        all_required = false;
    }

    if all_required {
        print_success(theme, "All required tools are available!");
        println!();
        print_box(
            theme,
            &[
                "cmake --preset ninja-debug".to_string(),
                "cmake --build --preset ninja-debug".to_string(),
                "ctest --preset ninja-debug".to_string(),
            ],
            "Quick Start",
        );
    } else {
        print_error(theme, "Some required tools are missing!");
        println!();
        print_info(theme, "Installation suggestions:");
        print_list(
            theme,
            &[
                "Windows: Install Visual Studio with C++ workload".to_string(),
                "Linux: sudo apt install build-essential cmake ninja-build".to_string(),
                "macOS: xcode-select --install && brew install cmake ninja".to_string(),
            ],
        );
    }

    Ok(all_required)
}
