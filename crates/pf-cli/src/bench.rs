use std::cmp::Ordering;
use std::time::Instant;

use pf_core::{FilterConfig, MatchStrategy, PatternFilter};

use crate::lists::load_pattern_lists;

pub struct BenchOptions {
    pub pattern_paths: Vec<String>,
    pub iterations: usize,
    pub strategy: MatchStrategy,
}

const REALISTIC_MIX: &[&str] = &[
    "https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js",
    "https://www.google-analytics.com/analytics.js",
    "https://connect.facebook.net/en_US/fbevents.js",
    "https://example.com/style.css",
    "https://cdn.example.com/image.png",
    "https://api.example.com/data.json",
    "https://fonts.googleapis.com/css2?family=Inter",
    "https://static.doubleclick.net/instream/ad_status.js",
    "https://www.youtube.com/embed/abc123",
    "https://cdn.jsdelivr.net/npm/vue@3/dist/vue.global.js",
];

pub fn run_bench(opts: BenchOptions) -> Result<(), String> {
    if opts.iterations == 0 {
        return Err("Iterations must be at least 1".to_string());
    }

    println!("============================================================");
    println!("PatternFilter Benchmark");
    println!("============================================================");

    let load_start = Instant::now();
    let filter = PatternFilter::with_config(FilterConfig::default().with_strategy(opts.strategy))
        .map_err(|e| e.to_string())?;
    let stats = load_pattern_lists(&filter, &opts.pattern_paths)?;
    let load_ms = load_start.elapsed().as_secs_f64() * 1000.0;

    // The first query after loading builds the automaton, if any.
    let build_start = Instant::now();
    let _ = filter.check_url(REALISTIC_MIX[0]);
    let first_query_ms = build_start.elapsed().as_secs_f64() * 1000.0;

    println!("Patterns:     {} ({} list(s), {} lines)", stats.patterns, stats.files, stats.lines);
    println!("Strategy:     {}", opts.strategy.name());
    println!("Load:         {:.2}ms", load_ms);
    println!("First query:  {:.2}ms", first_query_ms);

    println!("Warmup...");
    for _ in 0..1000 {
        for url in REALISTIC_MIX {
            let _ = filter.check_url(url);
        }
    }

    println!("Measuring match latency...");
    let (latencies, blocked) = measure_match_latency(&filter, opts.iterations);

    println!("------------------------------------------------------------");
    println!("Requests:     {}", latencies.len());
    println!("Blocked:      {}", blocked);
    println!("p50:          {:.3}μs", percentile(&latencies, 0.50));
    println!("p99:          {:.3}μs", percentile(&latencies, 0.99));
    println!("max:          {:.3}μs", latencies.last().copied().unwrap_or(0.0));

    Ok(())
}

fn measure_match_latency(filter: &PatternFilter, iterations: usize) -> (Vec<f64>, usize) {
    let mut latencies = Vec::with_capacity(iterations * REALISTIC_MIX.len());
    let mut blocked = 0usize;

    for _ in 0..iterations {
        for url in REALISTIC_MIX {
            let start = Instant::now();
            let result = filter.check_url(url);
            latencies.push(start.elapsed().as_secs_f64() * 1_000_000.0);
            if result.blocked {
                blocked += 1;
            }
        }
    }

    latencies.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    (latencies, blocked)
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64) * p).ceil() as usize;
    let idx = idx.saturating_sub(1).min(sorted.len() - 1);
    sorted[idx]
}
