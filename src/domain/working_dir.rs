use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory entry whose presence marks a repository root.
pub const REPOSITORY_MARKER: &str = ".git";

/// Resolves the repository working directory for the given project context.
///
/// With no active file, a single open folder is the unambiguous answer and
/// multiple open folders are no answer at all. With an active file, the
/// directories between it and the longest common string prefix of the open
/// folders are probed deepest-first, and the first one containing the
/// repository marker wins.
///
/// Absence is the only failure signal; this function never errors.
pub fn resolve(folders: &[PathBuf], active_file: Option<&Path>) -> Option<PathBuf> {
    if folders.is_empty() {
        return None;
    }

    let Some(active_file) = active_file else {
        if folders.len() == 1 {
            return Some(folders[0].clone());
        }

        return None;
    };

    let prefix = common_prefix(folders);

    let mut ancestors = Vec::<PathBuf>::new();
    let mut current = active_file.parent();

    while let Some(dir) = current {
        // the revisit check is the cycle guard at the filesystem root
        if ancestors.iter().any(|seen| seen == dir) || !dir.to_string_lossy().starts_with(&prefix) {
            break;
        }

        ancestors.push(dir.to_path_buf());
        current = dir.parent();
    }

    // reverse lexicographic order; deepest-first for a single ancestor chain
    ancestors.sort_by(|a, b| b.as_os_str().cmp(a.as_os_str()));

    debug!(
        prefix = %prefix,
        candidates = ancestors.len(),
        "resolving working directory"
    );

    ancestors
        .into_iter()
        .find(|dir| dir.join(REPOSITORY_MARKER).exists())
}

/// Longest common character-wise prefix of the folder paths, computed as a
/// string operation (not segment-wise, and without canonicalizing symlinks).
fn common_prefix(folders: &[PathBuf]) -> String {
    folders
        .iter()
        .map(|folder| folder.to_string_lossy().into_owned())
        .reduce(|prefix, folder| {
            prefix
                .chars()
                .zip(folder.chars())
                .take_while(|(left, right)| left == right)
                .map(|(left, _)| left)
                .collect()
        })
        .unwrap_or_default()
}
