//! Token substitution across the template file tree
//!
//! Replacements are an explicit ordered list, applied key-by-key with a
//! full pass per key. Earlier replacements can introduce text that a
//! later key then matches; that composition is part of the contract.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Ordered literal-text replacement pairs.
pub type ReplacementMap = Vec<(String, String)>;

/// C/C++ source and header extensions considered by the include rewrite.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "hpp", "h", "cc", "cxx", "hxx"];

/// Apply all replacements to a single file, in order.
///
/// Returns true only when the file was actually rewritten. A missing
/// file, non-UTF-8 content, or a read/write failure is treated as "no
/// change" rather than an error; the engine never raises.
pub fn apply_replacements(path: &Path, replacements: &[(String, String)]) -> bool {
    let Ok(original) = fs::read_to_string(path) else {
        return false;
    };

    let mut content = original.clone();
    for (old, new) in replacements {
        content = content.replace(old.as_str(), new.as_str());
    }

    if content != original {
        fs::write(path, content).is_ok()
    } else {
        false
    }
}

/// Rewrite `#include "old_dir/..."` and `#include <old_dir/...>` across
/// every source-like file under `root`. Returns the number of files
/// modified.
///
/// The match string includes the trailing separator, so `old_dir2/` is
/// never a partial match.
pub fn rewrite_include_prefixes(root: &Path, old_dir: &str, new_dir: &str) -> usize {
    let quoted_old = format!("#include \"{}/", old_dir);
    let quoted_new = format!("#include \"{}/", new_dir);
    let angled_old = format!("#include <{}/", old_dir);
    let angled_new = format!("#include <{}/", new_dir);

    let mut count = 0;
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || !has_source_extension(entry.path()) {
            continue;
        }

        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };

        let rewritten = content
            .replace(&quoted_old, &quoted_new)
            .replace(&angled_old, &angled_new);

        if rewritten != content && fs::write(entry.path(), rewritten).is_ok() {
            count += 1;
        }
    }

    count
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Rename a directory, skipping (not failing) when the source is absent
/// or the destination already exists.
pub fn rename_directory(old: &Path, new: &Path) -> bool {
    if !old.exists() || new.exists() {
        return false;
    }
    fs::rename(old, new).is_ok()
}
