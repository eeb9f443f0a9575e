use serde::Serialize;

use pf_core::{FilterConfig, MatchResult, MatchStrategy, PatternFilter};

use crate::lists::load_pattern_lists;

pub struct CheckOptions {
    pub pattern_paths: Vec<String>,
    pub urls: Vec<String>,
    pub strategy: MatchStrategy,
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    url: &'a str,
    blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl<'a> CheckReport<'a> {
    fn new(url: &'a str, result: &MatchResult) -> Self {
        Self {
            url,
            blocked: result.blocked,
            matched_pattern: result.matched_pattern.as_ref().map(|p| p.to_string()),
            reason: result.reason(),
        }
    }
}

pub fn run_check(opts: CheckOptions) -> Result<(), String> {
    let filter = PatternFilter::with_config(FilterConfig::default().with_strategy(opts.strategy))
        .map_err(|e| e.to_string())?;
    let stats = load_pattern_lists(&filter, &opts.pattern_paths)?;
    log::info!(
        "Loaded {} patterns from {} list(s), strategy {}",
        stats.patterns,
        stats.files,
        opts.strategy.name()
    );

    for url in &opts.urls {
        let result = filter.check_url(url);
        println!("{}", format_report(url, &result, opts.json)?);
    }

    Ok(())
}

fn format_report(url: &str, result: &MatchResult, json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string(&CheckReport::new(url, result))
            .map_err(|e| format!("Failed to serialize JSON: {}", e));
    }

    Ok(match &result.matched_pattern {
        Some(pattern) => format!("BLOCK {} ({})", url, pattern),
        None => format!("ALLOW {}", url),
    })
}
