use crate::line::{starts_link_block, starts_release_section};
use crate::types::UNRELEASED;

/// Index of the first line opening the `## [version]` section
pub fn find_release_position<S: AsRef<str>>(lines: &[S], version: &str) -> Option<usize> {
    let header = format!("## [{version}]");
    lines
        .iter()
        .position(|line| line.as_ref().starts_with(&header))
}

pub fn find_unreleased_position<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    find_release_position(lines, UNRELEASED)
}

/// Exclusive end of the notes following the header at `header_idx`
///
/// The next `## ` section wins; without one the notes stop at the first
/// line opening with `[`, otherwise at the end of the document.
pub fn find_notes_end<S: AsRef<str>>(lines: &[S], header_idx: usize) -> usize {
    let after_header = || lines.iter().enumerate().skip(header_idx + 1);

    after_header()
        .find(|(_, line)| starts_release_section(line.as_ref()))
        .or_else(|| after_header().find(|(_, line)| starts_link_block(line.as_ref())))
        .map_or(lines.len(), |(idx, _)| idx)
}
