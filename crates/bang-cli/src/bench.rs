use std::time::Instant;

use bang_core::SearchHandler;

pub struct BenchOptions {
    pub iterations: usize,
}

const BUDGET_BUILD_MS: f64 = 50.0;
const BUDGET_SEARCH_P50_US: f64 = 10.0;
const BUDGET_SEARCH_P99_US: f64 = 50.0;

/// One query per dispatch path: direct bang, late bang, hash alias,
/// hash alias into the default, and plain default fallback.
const SAMPLE_QUERIES: &[&str] = &[
    "!g rust lifetimes explained",
    "mechanical keyboard switches !gr",
    "#gi aurora borealis",
    "#d privacy search",
    "!dhl 00340434161234567890",
    "how do I exit vim",
    "C# async await",
];

pub fn run_bench(opts: BenchOptions) -> Result<(), String> {
    println!("Dispatch Performance Budget");
    println!("==================================================");

    let build_begin = Instant::now();
    let handler = SearchHandler::builtin()
        .map_err(|e| format!("Failed to build provider chain: {}", e))?;
    let build_ms = build_begin.elapsed().as_secs_f64() * 1000.0;

    println!("Warming up...");
    for _ in 0..1000 {
        for query in SAMPLE_QUERIES {
            let _ = handler.search(query);
        }
    }

    println!("Measuring search latency...");
    let latencies = measure_search_latency(&handler, opts.iterations);
    let p50_us = percentile(&latencies, 0.50);
    let p99_us = percentile(&latencies, 0.99);

    let mut passed = true;
    println!();
    println!("Results ({} samples)", latencies.len());
    println!("--------------------------------------------------");

    passed &= report_budget("Chain Build", build_ms, BUDGET_BUILD_MS, "ms");
    passed &= report_budget("Search P50 Latency", p50_us, BUDGET_SEARCH_P50_US, "μs");
    passed &= report_budget("Search P99 Latency", p99_us, BUDGET_SEARCH_P99_US, "μs");

    println!();
    println!("==================================================");

    if passed {
        println!("✓ All performance budgets passed");
        Ok(())
    } else {
        Err("Performance budget exceeded".to_string())
    }
}

fn report_budget(name: &str, actual: f64, limit: f64, unit: &str) -> bool {
    let passed = actual <= limit;
    let status = if passed { "✓" } else { "✗" };
    println!(
        "{} {}: {:.2} {} (limit: {:.2} {})",
        status, name, actual, unit, limit, unit
    );
    passed
}

fn measure_search_latency(handler: &SearchHandler, iterations: usize) -> Vec<f64> {
    let mut latencies = Vec::with_capacity(iterations * SAMPLE_QUERIES.len());

    for _ in 0..iterations {
        for query in SAMPLE_QUERIES {
            let start = Instant::now();
            let _ = handler.search(query);
            let elapsed = start.elapsed().as_secs_f64() * 1_000_000.0;
            latencies.push(elapsed);
        }
    }

    latencies.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    latencies
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64) * p).ceil() as usize;
    let idx = idx.saturating_sub(1).min(sorted.len() - 1);
    sorted[idx]
}
