//! Locating the icons to recolor
//!
//! Android keeps one copy of every launcher icon per density bucket
//! (`mipmap-mdpi`, `mipmap-hdpi`, ...). [`DensityBuckets`] walks those folders and
//! yields the icon files inside them; [`ExplicitPaths`] takes files from the
//! command line as they are.

use anyhow::{bail, Context, Result};
use glob::Pattern;
use std::path::PathBuf;
use walkdir::WalkDir;

pub const DEFAULT_RES_DIR: &str = "app/src/main/res";
pub const DEFAULT_FOLDER_PATTERN: &str = "mipmap-*";
pub const DEFAULT_ICON_NAME: &str = "ic_launcher_foreground.png";

/// A finite, restartable sequence of image locations
pub trait ImageSource {
    fn locations(&self) -> Result<Vec<PathBuf>>;
}

/// Icon files inside density-bucket folders of an Android `res` directory
#[derive(Debug, Clone)]
pub struct DensityBuckets {
    pub res_dir: PathBuf,
    pub folder_pattern: String,
    pub file_names: Vec<String>,
    /// Drop candidates that don't exist instead of yielding them
    pub skip_missing: bool,
}

impl DensityBuckets {
    pub fn new(res_dir: impl Into<PathBuf>) -> Self {
        Self {
            res_dir: res_dir.into(),
            folder_pattern: DEFAULT_FOLDER_PATTERN.to_string(),
            file_names: vec![DEFAULT_ICON_NAME.to_string()],
            skip_missing: true,
        }
    }

    fn bucket_dirs(&self) -> Result<Vec<PathBuf>> {
        let matcher = Pattern::new(&self.folder_pattern)
            .with_context(|| format!("Invalid folder pattern: {}", self.folder_pattern))?;

        let mut dirs = Vec::new();
        for entry in WalkDir::new(&self.res_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.with_context(|| {
                format!("Failed to read directory {}", self.res_dir.display())
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if matcher.matches(&name) {
                dirs.push(entry.into_path());
            } else {
                log::trace!("Skipping folder {name}");
            }
        }

        dirs.sort();
        Ok(dirs)
    }
}

impl ImageSource for DensityBuckets {
    fn locations(&self) -> Result<Vec<PathBuf>> {
        if !self.res_dir.is_dir() {
            bail!(
                "Resource directory not found: {}",
                self.res_dir.display()
            );
        }

        let mut found = Vec::new();
        for dir in self.bucket_dirs()? {
            for name in &self.file_names {
                let candidate = dir.join(name);
                if self.skip_missing && !candidate.is_file() {
                    log::debug!("No {name} in {}", dir.display());
                    continue;
                }
                found.push(candidate);
            }
        }

        log::debug!(
            "Found {} candidate(s) under {}",
            found.len(),
            self.res_dir.display()
        );
        Ok(found)
    }
}

/// Files named directly by the user, in the order given
#[derive(Debug, Clone, Default)]
pub struct ExplicitPaths(pub Vec<PathBuf>);

impl ImageSource for ExplicitPaths {
    fn locations(&self) -> Result<Vec<PathBuf>> {
        Ok(self.0.clone())
    }
}
