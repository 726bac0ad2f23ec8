use crate::{
    batch::{run_batch, BatchOptions, BatchReport},
    config::TintConfig,
    discovery::{DensityBuckets, ExplicitPaths, ImageSource},
    gradient::{Color, GradientSpec},
};
use anyhow::Result;
use std::path::PathBuf;

/// Options of a single `icon-tint` run
#[derive(Debug, Clone)]
pub struct Args {
    pub files: Vec<PathBuf>,
    pub res: PathBuf,
    pub pattern: String,
    pub file_names: Vec<String>,
    pub start: Option<Color>,
    pub end: Option<Color>,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub report_missing: bool,
}

pub fn resolve_gradient(args: &Args) -> Result<GradientSpec> {
    let from_file = match &args.config {
        Some(path) => TintConfig::load(path)?,
        None => TintConfig::default(),
    };
    let from_cli = TintConfig {
        start_color: args.start,
        end_color: args.end,
    };

    Ok(from_file.merge(from_cli).resolve())
}

pub fn image_source(args: &Args) -> Box<dyn ImageSource> {
    if !args.files.is_empty() {
        return Box::new(ExplicitPaths(args.files.clone()));
    }

    Box::new(DensityBuckets {
        res_dir: args.res.clone(),
        folder_pattern: args.pattern.clone(),
        file_names: args.file_names.clone(),
        skip_missing: !args.report_missing,
    })
}

pub fn tint_icons(args: Args) -> Result<BatchReport> {
    let spec = resolve_gradient(&args)?;
    let locations = image_source(&args).locations()?;

    println!("Applying gradient {} → {}...", spec.start, spec.end);
    if locations.is_empty() {
        println!("No icons found");
    }

    let report = run_batch(
        locations,
        &spec,
        BatchOptions {
            dry_run: args.dry_run,
        },
    );

    println!(
        "Done: {} recolored, {} failed",
        report.succeeded(),
        report.failed()
    );
    Ok(report)
}
