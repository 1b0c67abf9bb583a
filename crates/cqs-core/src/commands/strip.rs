//! Strip one language out of the bilingual docs tree

use crate::strip::{strip_language_from_file, DocLang};
use crate::tui::widgets::{print_banner, print_error, print_info, print_success, print_warning};
use crate::tui::{Confirm, KeyInput, Prompter, Spinner};
use crate::CLI_VERSION;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Remove one language from every markdown file under `root`/docs.
pub fn cmd_strip_language<I: KeyInput>(
    ui: &mut Prompter<I>,
    root: &Path,
    lang: DocLang,
) -> Result<bool> {
    let theme = *ui.theme();
    let removed = match lang {
        DocLang::Zh => "Chinese",
        DocLang::En => "English",
    };
    print_banner(
        &theme,
        "Strip Language",
        &format!("Remove {} content from docs", removed),
        CLI_VERSION,
    );

    let docs_dir = root.join("docs");
    if !docs_dir.exists() {
        print_error(&theme, "docs/ directory not found.");
        return Ok(false);
    }

    let md_files: Vec<PathBuf> = WalkDir::new(&docs_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "md")
        })
        .map(|entry| entry.into_path())
        .collect();

    if md_files.is_empty() {
        print_error(&theme, "No markdown files found in docs/");
        return Ok(false);
    }

    print_info(&theme, &format!("Found {} markdown files", md_files.len()));
    println!();

    let confirmed = Confirm::new(format!(
        "Remove {} content from all docs?",
        lang.display_name()
    ))
    .default_value(false)
    .interact(ui)?;
    if !confirmed {
        print_warning(&theme, "Cancelled.");
        return Ok(false);
    }

    println!();

    let spinner = Spinner::start(
        theme,
        format!("Stripping {} content...", lang.display_name()),
    );
    let mut processed = 0usize;
    for md_file in &md_files {
        if strip_language_from_file(md_file, lang) {
            processed += 1;
        }
    }
    spinner.succeed(format!("Processed {} files", processed));

    println!();
    print_success(
        &theme,
        &format!("Removed {} content from documentation.", lang.display_name()),
    );

    Ok(true)
}
