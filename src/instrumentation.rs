//! Span timing for the search drivers.
//!
//! Compiled only with `--features instrumentation`. The drivers (`run`, `run_until`,
//! `step_for_budget_with`, `increment_depth_for_budget`) carry tracing spans; the layer
//! below times every entry into them and [`print_timing_statistics`] reports the totals.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use thread_local::ThreadLocal;
use tracing::span;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Clone, Copy, Debug, Default)]
struct SpanTiming {
    calls: u64,
    total: Duration,
    longest: Duration,
}

impl SpanTiming {
    fn record(&mut self, elapsed: Duration) {
        self.calls += 1;
        self.total += elapsed;
        self.longest = self.longest.max(elapsed);
    }

    fn merge(&mut self, other: &SpanTiming) {
        self.calls += other.calls;
        self.total += other.total;
        self.longest = self.longest.max(other.longest);
    }
}

/// Per-thread timings, keyed by span name. A search that is resumed from
/// another thread simply lands in that thread's table.
static TIMINGS: Lazy<ThreadLocal<Mutex<HashMap<&'static str, SpanTiming>>>> =
    Lazy::new(ThreadLocal::new);

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = match span.extensions_mut().remove::<Instant>() {
            Some(started) => started,
            None => return,
        };

        let table = TIMINGS.get_or(|| Mutex::new(HashMap::new()));
        if let Ok(mut table) = table.lock() {
            table
                .entry(span.metadata().name())
                .or_default()
                .record(started.elapsed());
        }
    }
}

/// Installs the timing layer as the global subscriber.
///
/// With `RUST_LOG` unset or `off`, spans are only timed. Otherwise the filter
/// from `RUST_LOG` applies and span events are printed as well.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let filter = std::env::var("RUST_LOG").unwrap_or_default();

    if filter.is_empty() || filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    }
}

fn collect() -> Vec<(&'static str, SpanTiming)> {
    let mut merged: HashMap<&'static str, SpanTiming> = HashMap::new();
    for table in TIMINGS.iter() {
        if let Ok(table) = table.lock() {
            for (name, timing) in table.iter() {
                merged.entry(*name).or_default().merge(timing);
            }
        }
    }

    let mut entries: Vec<_> = merged.into_iter().collect();
    entries.sort_by_key(|(_, timing)| std::cmp::Reverse(timing.total));
    entries
}

/// Prints the timings of all instrumented drivers, slowest first, to stderr.
pub fn print_timing_statistics() {
    let entries = collect();
    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    eprintln!("\n{:=<80}", "");
    eprintln!(
        "{:<32} {:>10} {:>12} {:>12} {:>10}",
        "Span", "Calls", "Total (ms)", "Avg (µs)", "Max (ms)"
    );
    eprintln!("{:-<80}", "");

    for (name, timing) in &entries {
        let total_ms = timing.total.as_secs_f64() * 1_000.0;
        let avg_micros = timing.total.as_secs_f64() * 1_000_000.0 / timing.calls.max(1) as f64;
        eprintln!(
            "{:<32} {:>10} {:>12.2} {:>12.2} {:>10.2}",
            name,
            timing.calls,
            total_ms,
            avg_micros,
            timing.longest.as_secs_f64() * 1_000.0
        );
    }
    eprintln!("{:=<80}", "");
}
