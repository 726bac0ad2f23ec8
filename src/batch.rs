//! Processing a list of icons one at a time
//!
//! Every location gets exactly one [`Outcome`]. A failing icon is reported and the
//! batch moves on to the next one.

use crate::{
    error::RecolorError,
    gradient::GradientSpec,
    recolor::{recolor_file, recolor_to_png},
};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Outcome {
    Success,
    Failure(RecolorError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl From<Result<(), RecolorError>> for Outcome {
    fn from(result: Result<(), RecolorError>) -> Self {
        match result {
            Ok(()) => Outcome::Success,
            Err(err) => Outcome::Failure(err),
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(PathBuf, Outcome)>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &RecolorError)> {
        self.outcomes.iter().filter_map(|(path, outcome)| match outcome {
            Outcome::Failure(err) => Some((path.as_path(), err)),
            Outcome::Success => None,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Recolor in memory only; nothing is written
    pub dry_run: bool,
}

/// Recolor a single location, or only check that it would recolor cleanly.
pub fn process_one(path: &Path, spec: &GradientSpec, options: BatchOptions) -> Outcome {
    if options.dry_run {
        recolor_to_png(path, spec).map(|_| ()).into()
    } else {
        recolor_file(path, spec).into()
    }
}

/// Recolor every location in order.
pub fn run_batch<I>(locations: I, spec: &GradientSpec, options: BatchOptions) -> BatchReport
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut report = BatchReport::default();

    for path in locations {
        println!("Processing: {}", path.display());

        let outcome = process_one(&path, spec, options);
        match &outcome {
            Outcome::Success if options.dry_run => {
                println!("  ✓ Would apply gradient to {}", path.display())
            }
            Outcome::Success => println!("  ✓ Applied gradient to {}", path.display()),
            Outcome::Failure(err) => {
                log::debug!("{}: {err:?}", path.display());
                eprintln!("  ✗ Error: {err}");
            }
        }

        report.outcomes.push((path, outcome));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn one_outcome_per_location_and_failures_do_not_stop_the_batch() {
        let tmp = TempDir::new().unwrap();
        let good_a = tmp.path().join("a.png");
        let bad = tmp.path().join("b.png");
        let missing = tmp.path().join("c.png");
        let good_d = tmp.path().join("d.png");

        RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 128]))
            .save(&good_a)
            .unwrap();
        fs::write(&bad, b"text, not pixels").unwrap();
        fs::copy(&good_a, &good_d).unwrap();

        let report = run_batch(
            vec![good_a, bad.clone(), missing.clone(), good_d],
            &GradientSpec::default(),
            BatchOptions::default(),
        );

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 2);
        assert!(!report.is_success());

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures[0].0, bad.as_path());
        assert!(matches!(failures[0].1, RecolorError::Decode(_)));
        assert_eq!(failures[1].0, missing.as_path());
        assert!(failures[1].1.is_not_found());
    }

    #[test]
    fn dry_run_leaves_files_alone() {
        let tmp = TempDir::new().unwrap();
        let icon = tmp.path().join("icon.png");
        RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]))
            .save(&icon)
            .unwrap();
        let before = fs::read(&icon).unwrap();

        let report = run_batch(
            vec![icon.clone()],
            &GradientSpec::default(),
            BatchOptions { dry_run: true },
        );

        assert!(report.is_success());
        assert_eq!(fs::read(&icon).unwrap(), before);
    }

    #[test]
    fn empty_batch_is_a_success() {
        let report = run_batch(
            Vec::<PathBuf>::new(),
            &GradientSpec::default(),
            BatchOptions::default(),
        );
        assert!(report.is_success());
        assert_eq!(report.succeeded(), 0);
    }
}
