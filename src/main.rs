use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use uberfind::{Config, RunSummary, run};

mod cli;

const BANNER: &str = r"
$$\   $$\ $$\                           $$$$$$$$\ $$\                 $$\
$$ |  $$ |$$ |                          $$  _____|\__|                $$ |
$$ |  $$ |$$$$$$$\   $$$$$$\   $$$$$$\  $$ |      $$\ $$$$$$$\   $$$$$$$ |
$$ |  $$ |$$  __$$\ $$  __$$\ $$  __$$\ $$$$$\    $$ |$$  __$$\ $$  __$$ |
$$ |  $$ |$$ |  $$ |$$$$$$$$ |$$ |  \__|$$  __|   $$ |$$ |  $$ |$$ /  $$ |
$$ |  $$ |$$ |  $$ |$$   ____|$$ |      $$ |      $$ |$$ |  $$ |$$ |  $$ |
\$$$$$$  |$$$$$$$  |\$$$$$$$\ $$ |      $$ |      $$ |$$ |  $$ |\$$$$$$$ |
 \______/ \_______/  \_______|\__|      \__|      \__|\__|  \__| \_______|
";

fn main() -> ExitCode {
    let cfg = match cli::parse() {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    print_header(&cfg);

    match run(&cfg) {
        Ok(summary) => {
            print_summary(&cfg, summary);
            ExitCode::from(0)
        }
        Err(err) => {
            eprintln!("uberfind error: {}", err);
            ExitCode::from(2)
        }
    }
}

fn print_header(cfg: &Config) {
    println!("{}", BANNER.cyan());
    println!("Search path: {}", cfg.root.display());
    println!("Keywords: {}", cfg.keywords.join(" "));
    println!("File extensions: {}", cfg.extensions.join(" "));
    println!(
        "Number of characters before and after a keyword: {}",
        cfg.context_radius
    );
    if cfg.all_files {
        println!("{}", "Searching ALL files!".yellow());
    }
    println!();
}

fn print_summary(cfg: &Config, summary: RunSummary) {
    let resolved = fs::canonicalize(&cfg.report_path).unwrap_or_else(|_| cfg.report_path.clone());
    println!(
        "Searched through {} files.",
        summary.files_searched.to_string().bold()
    );
    println!(
        "Found keyword in {} files.",
        summary.files_matched.to_string().bold()
    );
    println!(
        "For more details, check the results file: {}",
        resolved.display()
    );
}
