use anyhow::{bail, Result};
use clap::Parser;
use icon_tint::{
    discovery::{DEFAULT_FOLDER_PATTERN, DEFAULT_ICON_NAME, DEFAULT_RES_DIR},
    tint, Color,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "icon-tint",
    about = "Recolor launcher icons with a vertical gradient, keeping their transparency"
)]
struct Args {
    /// PNG files to recolor in place. When omitted, icons are looked up in the density folders of --res.
    #[clap(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Android resource directory containing the mipmap-* folders.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_RES_DIR)]
    res: PathBuf,

    /// Folder name pattern of the density buckets (`*` and `?` wildcards).
    #[clap(long, value_name = "GLOB", default_value = DEFAULT_FOLDER_PATTERN)]
    pattern: String,

    /// Icon file name to recolor inside every density folder. Can be repeated.
    #[clap(short, long = "file", value_name = "NAME", default_value = DEFAULT_ICON_NAME)]
    file_names: Vec<String>,

    /// Top color of the gradient (CSS color format). Defaults to #00E5FF.
    #[clap(short, long, value_name = "COLOR")]
    start: Option<Color>,

    /// Bottom color of the gradient (CSS color format). Defaults to #FF00FF.
    #[clap(short, long, value_name = "COLOR")]
    end: Option<Color>,

    /// JSON file with `startColor` and `endColor`.
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Recolor in memory only, without writing any file
    #[clap(long)]
    dry_run: bool,

    /// Report density folders that don't contain the icon as errors
    #[clap(long)]
    report_missing: bool,
}

impl From<Args> for tint::Args {
    fn from(args: Args) -> Self {
        tint::Args {
            files: args.files,
            res: args.res,
            pattern: args.pattern,
            file_names: args.file_names,
            start: args.start,
            end: args.end,
            config: args.config,
            dry_run: args.dry_run,
            report_missing: args.report_missing,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let report = tint::tint_icons(args.into())?;

    if !report.is_success() {
        bail!("{} icon(s) could not be recolored", report.failed());
    }
    Ok(())
}
