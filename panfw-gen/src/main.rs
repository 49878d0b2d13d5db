use anyhow::{bail, Context, Result};
use clap::Parser;
use panfw_gen::document::build_document;
use panfw_gen::inspect::render_tree;
use panfw_gen::policy::load_policy;
use panfw_gen::report::{render_notices, render_summary, RunReport};
use panfw_gen::translate::{translate, TranslateOptions, Translation};
use xml_build_core::{parse_file, write, write_file};

mod cli;

use cli::{CheckArgs, Cli, Command, InspectArgs, OutputFormat, TranslateArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Translate(args) => run_translate(args),
        Command::Check(args) => run_check(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_translate(args: TranslateArgs) -> Result<()> {
    let translation = load_and_translate(&args.policy, args.exp_weeks)?;
    let report = RunReport::from_translation(&translation);

    if !args.quiet && !translation.notices.is_empty() {
        eprintln!("{}", render_notices(&translation.notices));
    }
    if args.strict && report.warnings > 0 {
        bail!("strict mode failed: {} warning(s) present", report.warnings);
    }

    let document = build_document(&translation);
    match &args.output {
        Some(path) => {
            write_file(&document, path)
                .with_context(|| format!("failed to write output XML {}", path.display()))?;
            match args.format {
                OutputFormat::Text => println!("{}", render_summary(&report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        None => {
            let bytes = write(&document).context("failed to serialize output XML")?;
            let text = String::from_utf8(bytes).context("output XML was not UTF-8")?;
            print!("{text}");
        }
    }

    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let translation = load_and_translate(&args.policy, args.exp_weeks)?;
    let report = RunReport::from_translation(&translation);

    match args.format {
        OutputFormat::Text => {
            if !translation.notices.is_empty() {
                println!("{}", render_notices(&translation.notices));
            }
            println!("{}", render_summary(&report));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if args.strict && report.warnings > 0 {
        bail!("strict mode failed: {} warning(s) present", report.warnings);
    }

    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let node = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let target = if let Some(section) = &args.section {
        node.get_child(section)
            .with_context(|| format!("section '{}' not found", section))?
    } else {
        &node
    };

    print!("{}", render_tree(target, args.depth));
    Ok(())
}

fn load_and_translate(path: &std::path::Path, exp_weeks: i64) -> Result<Translation> {
    let policy =
        load_policy(path).with_context(|| format!("failed to load policy {}", path.display()))?;
    let options = TranslateOptions {
        expiration_weeks: exp_weeks,
        today: None,
    };
    let translation = translate(&policy, options)
        .with_context(|| format!("failed to translate policy {}", path.display()))?;
    Ok(translation)
}
