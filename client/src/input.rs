//! Reading opponent names from a line stream

use std::io::{self, BufRead};

/// Names from `reader`, one per line, trimmed. Blank lines are skipped.
pub fn query_names<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(Ok(line.trim().to_string())),
        Err(e) => Some(Err(e)),
    })
}
