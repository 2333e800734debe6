//! Static bundle locator.
//!
//! The front-end build step produces a fixed layout this crate consumes
//! but does not own: an `index.html` entry document next to an `assets/`
//! directory of content-hashed files. Hashed names change on every
//! build, so the three required artifacts are found by prefix/suffix
//! pattern instead of by exact name.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GlobedockError, GlobedockResult};

/// Entry document name inside the bundle root.
pub const ENTRY_DOCUMENT: &str = "index.html";

/// Hashed-asset directory name inside the bundle root.
pub const ASSETS_DIR: &str = "assets";

/// Prefix/suffix file-name pattern, the `prefix-*.ext` convention the
/// bundler uses for hashed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetPattern {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl AssetPattern {
    /// Entry script chunk.
    pub const MAIN_SCRIPT: AssetPattern = AssetPattern {
        prefix: "index-",
        suffix: ".js",
    };

    /// Globe renderer chunk, split out by the bundler.
    pub const GLOBE_SCRIPT: AssetPattern = AssetPattern {
        prefix: "globe-",
        suffix: ".js",
    };

    /// Main stylesheet.
    pub const STYLESHEET: AssetPattern = AssetPattern {
        prefix: "index-",
        suffix: ".css",
    };

    /// All patterns a usable bundle must resolve.
    pub const REQUIRED: [AssetPattern; 3] =
        [Self::MAIN_SCRIPT, Self::GLOBE_SCRIPT, Self::STYLESHEET];

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.len() >= self.prefix.len() + self.suffix.len()
            && file_name.starts_with(self.prefix)
            && file_name.ends_with(self.suffix)
    }
}

impl fmt::Display for AssetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}

/// Resolved paths for one build output. Read-only; lives for a single
/// render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifacts {
    pub entry: PathBuf,
    pub main_script: PathBuf,
    pub globe_script: PathBuf,
    pub stylesheet: PathBuf,
}

/// Verify the bundle layout under `root` and resolve all required
/// patterns.
///
/// Fails with `BundleNotFound` when the entry document or assets
/// directory is absent, and `RequiredAssetMissing` when a pattern has
/// zero matches. Never panics on a half-built bundle.
pub fn locate_bundle(root: &Path) -> GlobedockResult<BundleArtifacts> {
    let entry = root.join(ENTRY_DOCUMENT);
    let assets = root.join(ASSETS_DIR);

    if !entry.is_file() || !assets.is_dir() {
        return Err(GlobedockError::BundleNotFound {
            root: root.to_path_buf(),
        });
    }

    Ok(BundleArtifacts {
        entry,
        main_script: resolve_pattern(&assets, AssetPattern::MAIN_SCRIPT)?,
        globe_script: resolve_pattern(&assets, AssetPattern::GLOBE_SCRIPT)?,
        stylesheet: resolve_pattern(&assets, AssetPattern::STYLESHEET)?,
    })
}

/// Find the file in `dir` matching `pattern`.
///
/// A fresh build leaves exactly one match per pattern. Stale builds can
/// leave several; directory iteration order is not stable, so ties are
/// broken by taking the lexicographically smallest name. Repeated
/// renders of an unchanged directory therefore resolve the same file.
pub fn resolve_pattern(dir: &Path, pattern: AssetPattern) -> GlobedockResult<PathBuf> {
    let mut matches: Vec<String> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if pattern.matches(name) {
            matches.push(name.to_string());
        }
    }

    matches.sort();

    match matches.into_iter().next() {
        Some(name) => Ok(dir.join(name)),
        None => Err(GlobedockError::RequiredAssetMissing {
            pattern: pattern.to_string(),
            dir: dir.to_path_buf(),
        }),
    }
}
