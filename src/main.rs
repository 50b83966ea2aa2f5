use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use treesmith::{ClassifierRules, Materializer, Outcome, StructureParser};

#[derive(Parser)]
#[command(name = "treesmith")]
#[command(about = "Create project structures from text descriptions")]
#[command(version, long_about = None)]
#[command(after_help = "Examples:\n  \
    treesmith structure.txt ~/projects/my_project\n  \
    treesmith --check structure.md\n  \
    tree -F | treesmith - ./copy --dry-run")]
struct Cli {
    /// File containing the structure description (`-` reads stdin)
    #[arg(default_value = "structure.txt")]
    input: PathBuf,

    /// Directory the structure is created in
    output: Option<PathBuf>,

    /// Only validate the input, never touch the filesystem
    #[arg(long)]
    check: bool,

    /// Print the parsed entries as JSON instead of creating them
    #[arg(long)]
    print: bool,

    /// Show what would be created without writing anything
    #[arg(long)]
    dry_run: bool,

    /// JSON file with extra `file_extensions` / `well_known_files`
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress per-entry output
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(format!("treesmith={}", default_level))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read structure from stdin")?;
        return Ok(text);
    }

    if !input.exists() {
        bail!("Input file '{}' not found", input.display());
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read structure from {}", input.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rules = match &cli.rules {
        Some(path) => ClassifierRules::from_json_file(path)?,
        None => ClassifierRules::default(),
    };
    let parser = StructureParser::with_rules(rules);

    let text = read_input(&cli.input)?;
    let lines: Vec<&str> = text.lines().collect();

    if cli.check {
        let validation = parser.validate(&lines);
        if validation.valid {
            println!("✓ {}", validation.diagnostic);
            return Ok(());
        }
        bail!("{}", validation.diagnostic);
    }

    let outcome = parser
        .parse(&lines)
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;

    if cli.print {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let Some(output) = cli.output else {
        bail!("An output directory is required unless --check or --print is given");
    };

    if !cli.quiet {
        println!("Reading structure from: {}", cli.input.display());
        println!("Detected format: {}", outcome.format);
        println!("Creating structure at: {}\n", output.display());
    }

    let materializer = Materializer::new(&output);
    let report = if cli.dry_run {
        materializer.plan(&outcome.entries)?
    } else {
        materializer
            .materialize(&outcome.entries)
            .context("Failed to create structure")?
    };

    if !cli.quiet {
        for record in &report.records {
            let prefix = if cli.dry_run { "[dry-run] " } else { "" };
            println!("{}{}: {}", prefix, record.outcome, record.path.display());
        }
    }

    let skipped = report.count(Outcome::FileSkipped);
    if cli.dry_run {
        println!("\n✓ Dry run: {} entries would be created", report.created());
    } else {
        println!(
            "\n✓ Project structure created at '{}' ({} created, {} skipped)",
            output.display(),
            report.created(),
            skipped
        );
    }

    Ok(())
}
