//! Static output widgets: banner, boxes, lists, step headers

use super::theme::Theme;
use console::measure_text_width;

const BANNER_ART: &str = r"
  _____ _____  _____     _____ _             _
 / ____|  __ \|  __ \   / ____| |           | |
| |    | |__) | |__) | | (___ | |_ __ _ _ __| |_ ___ _ __
| |    |  ___/|  ___/   \___ \| __/ _` | '__| __/ _ \ '__|
| |____| |    | |       ____) | || (_| | |  | ||  __/ |
 \_____|_|    |_|      |_____/ \__\__,_|_|   \__\___|_|
";

/// Print the ASCII banner with a title, optional subtitle, and version.
pub fn print_banner(theme: &Theme, title: &str, subtitle: &str, version: &str) {
    println!("{}", theme.cyan(BANNER_ART));
    println!("  {}", theme.bold(title));
    if !subtitle.is_empty() {
        println!("  {}", theme.dim(subtitle));
    }
    if !version.is_empty() {
        println!("  {}", theme.dim(&format!("v{}", version)));
    }
    println!();
}

/// Print content lines inside a box with an optional title.
pub fn print_box(theme: &Theme, content: &[String], title: &str) {
    let s = &theme.symbols;

    let max_len = content
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);
    let width = 60.max(max_len + 4).max(title.len() + 4);

    if title.is_empty() {
        println!("{}{}{}", s.corner_tl, s.line.repeat(width - 2), s.corner_tr);
    } else {
        let title_str = format!(" {} ", title);
        let padding = width.saturating_sub(title_str.len() + 3);
        println!(
            "{}{}{}{}{}",
            s.corner_tl,
            s.line,
            title_str,
            s.line.repeat(padding),
            s.corner_tr
        );
    }

    for line in content {
        let visible = measure_text_width(line);
        let padding = width.saturating_sub(visible + 4);
        println!("{} {}{} {}", s.vertical, line, " ".repeat(padding), s.vertical);
    }

    println!("{}{}{}", s.corner_bl, s.line.repeat(width - 2), s.corner_br);
}

/// Print a bulleted list.
pub fn print_list(theme: &Theme, items: &[String]) {
    for item in items {
        println!("  {} {}", theme.green(theme.symbols.bullet), item);
    }
}

/// Print a `[n/m]` wizard step header.
pub fn print_step(theme: &Theme, step: usize, total: usize, message: &str) {
    println!(
        "\n{} {}",
        theme.dim(&format!("[{}/{}]", step, total)),
        theme.bold(message)
    );
}

pub fn print_success(theme: &Theme, message: &str) {
    println!("{} {}", theme.green(theme.symbols.success), message);
}

pub fn print_error(theme: &Theme, message: &str) {
    println!("{} {}", theme.red(theme.symbols.error), message);
}

pub fn print_warning(theme: &Theme, message: &str) {
    println!("{} {}", theme.yellow(theme.symbols.warning), message);
}

pub fn print_info(theme: &Theme, message: &str) {
    println!("{} {}", theme.blue(theme.symbols.info), message);
}
