use std::fs;
use std::path::Path;

use pf_core::PatternFilter;

#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    pub files: usize,
    pub lines: usize,
    pub patterns: usize,
}

/// Lines of a list file as raw bytes, without the `\n` or `\r\n` terminator.
pub fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let has_lines = !content.is_empty();
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&b| b == b'\n')
        .filter(move |_| has_lines)
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Patterns in a list: every non-empty line, verbatim. Lines holding only
/// whitespace are patterns too. List files need not be UTF-8.
pub fn parse_pattern_list(content: &[u8]) -> Vec<&[u8]> {
    split_lines(content).filter(|line| !line.is_empty()).collect()
}

pub fn load_pattern_lists(filter: &PatternFilter, paths: &[String]) -> Result<LoadStats, String> {
    if paths.is_empty() {
        return Err("No pattern lists specified".to_string());
    }

    let mut stats = LoadStats::default();

    for path in paths {
        let content = fs::read(path)
            .map_err(|e| format!("Failed to read '{}': {}", path, e))?;

        let line_count = split_lines(&content).count();
        let patterns = parse_pattern_list(&content);
        log::debug!(
            "{} - {} lines, {} patterns",
            Path::new(path).file_name().unwrap_or_default().to_string_lossy(),
            line_count,
            patterns.len()
        );

        stats.files += 1;
        stats.lines += line_count;
        stats.patterns += patterns.len();
        filter.add_patterns(patterns);
    }

    Ok(stats)
}
