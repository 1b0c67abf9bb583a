//! cqs - Interactive scaffolding CLI for C++ projects

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};
use cqs_core::commands::{
    cmd_add_dependency, cmd_add_module, cmd_doctor, cmd_info, cmd_init, cmd_strip_language,
};
use cqs_core::tui::widgets::print_warning;
use cqs_core::tui::{PromptError, Prompter, TermInput, Theme};
use cqs_core::{DocLang, CLI_VERSION};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cqs")]
#[command(about = "Modern C++20 Project Scaffolding")]
#[command(version)]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Args {
    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Show version number
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new project interactively
    Init {
        /// Skip optional questions and use defaults
        #[arg(short, long)]
        quick: bool,
    },
    /// Add a module or dependency to the project
    Add {
        #[command(subcommand)]
        what: AddCommand,
    },
    /// Remove one language from bilingual docs
    Strip {
        /// Language to remove: en or zh
        #[arg(value_parser = parse_lang)]
        lang: DocLang,
    },
    /// Show project information
    Info,
    /// Check development environment
    Doctor,
    /// Show the full command overview
    Help,
}

#[derive(Subcommand, Debug)]
pub enum AddCommand {
    /// Add a new module/component
    #[command(visible_alias = "mod", alias = "m")]
    Module,
    /// Add a package dependency
    #[command(visible_alias = "dependency", alias = "d", alias = "pkg", alias = "package")]
    Dep,
}

fn parse_lang(s: &str) -> Result<DocLang, String> {
    DocLang::parse(s).ok_or_else(|| format!("unknown language: {} (use en or zh)", s))
}

fn print_help_screen(theme: &Theme) {
    use cqs_core::tui::widgets::print_banner;

    print_banner(
        theme,
        "C++ Quick Starter CLI",
        "Modern C++20 Project Scaffolding",
        CLI_VERSION,
    );

    println!("  {}", theme.bold("Usage:"));
    println!(
        "    {} {} {}",
        theme.cyan("cqs"),
        theme.dim("<command>"),
        theme.dim("[options]")
    );
    println!();

    println!("  {}", theme.bold("Commands:"));
    let commands = [
        ("init", "Initialize a new project interactively"),
        ("add module", "Add a new module/component"),
        ("add dep", "Add a package dependency"),
        ("strip en", "Remove English from bilingual docs"),
        ("strip zh", "Remove Chinese from bilingual docs"),
        ("info", "Show project information"),
        ("doctor", "Check development environment"),
        ("help", "Show this help message"),
    ];
    for (cmd, desc) in commands {
        println!("    {} {}", theme.cyan(&format!("{:<12}", cmd)), desc);
    }

    println!();
    println!("  {}", theme.bold("Examples:"));
    println!("    {} cqs init", theme.dim("$"));
    println!("    {} cqs add module", theme.dim("$"));
    println!("    {} cqs add dep", theme.dim("$"));
    println!();

    println!("  {}", theme.bold("Options:"));
    println!("    {}    Disable colored output", theme.cyan("--no-color"));
    println!("    {}     Show version number", theme.cyan("--version"));
    println!("    {}        Show help", theme.cyan("--help"));
    println!();
}

fn run(args: Args, root: &PathBuf) -> Result<bool> {
    let theme = Theme::auto(args.no_color);
    let mut ui = Prompter::new(theme, TermInput::new());

    match args.command {
        Some(Command::Init { quick }) => cmd_init(&mut ui, root, quick),
        Some(Command::Add { what }) => match what {
            AddCommand::Module => cmd_add_module(&mut ui, root),
            AddCommand::Dep => cmd_add_dependency(&mut ui, root),
        },
        Some(Command::Strip { lang }) => cmd_strip_language(&mut ui, root, lang),
        Some(Command::Info) => cmd_info(&theme, root),
        Some(Command::Doctor) => cmd_doctor(&theme),
        Some(Command::Help) | None => {
            print_help_screen(&theme);
            Ok(true)
        }
    }
}

/// Usage errors exit 1; `--help`/`--version` renderings exit 0.
fn parse_error_exit_code(e: &clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_exit_code(&e));
        }
    };
    let no_color = args.no_color;
    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: cannot determine working directory: {}", e);
            std::process::exit(1);
        }
    };

    let code = match run(args, &root) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            let _ = console::Term::stderr().show_cursor();
            if matches!(e.downcast_ref::<PromptError>(), Some(PromptError::Aborted)) {
                println!();
                print_warning(&Theme::auto(no_color), "Aborted.");
                130
            } else {
                eprintln!("error: {:#}", e);
                1
            }
        }
    };

    let _ = console::Term::stderr().show_cursor();
    std::process::exit(code);
}
