use anyhow::Result;

// optional leading whitespace, the modification marker, whitespace, then the
// reported path (possibly double-quoted) up to the end of the line
const MODIFIED_LINE_REGEX: &str = r"(?m)^\s*M\s+(.+)$";

/// Extracts the paths of files modified in the working tree from
/// `git status --short` output, in the order they were reported.
///
/// Staged-added, deleted, renamed and untracked lines do not qualify. Paths
/// are returned exactly as reported, double-quotes included; stripping them
/// is the caller's concern. Empty output yields an empty list, not an error.
pub fn parse_modified_files(status_output: &str) -> Result<Vec<String>> {
    let modified_line = regex::Regex::new(MODIFIED_LINE_REGEX)?;

    Ok(modified_line
        .captures_iter(status_output)
        .map(|captures| captures[1].to_string())
        .collect())
}
