use crate::model::CommitBlock;

/// A line is blank when it is empty or contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn remove_blank_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines.iter().copied().filter(|line| !is_blank(line)).collect()
}

/// Drops blocks whose every line is blank, including blocks with no lines.
pub fn remove_blank_blocks<'a>(blocks: Vec<CommitBlock<'a>>) -> Vec<CommitBlock<'a>> {
    blocks
        .into_iter()
        .filter(|block| !block.lines().iter().all(|line| is_blank(line)))
        .collect()
}

/// Removes blank lines and trims the rest, keeping line order.
pub fn normalize(block: CommitBlock<'_>) -> CommitBlock<'_> {
    remove_blank_lines(block.lines())
        .into_iter()
        .map(str::trim)
        .collect()
}
