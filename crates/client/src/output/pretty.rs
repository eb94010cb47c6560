//! Pretty output formatting.

use rsvp_core::rsvp::Rsvp;

use crate::client::health::{CacheStats, ReadyStatus};

/// Format an RSVP for display.
pub fn format_rsvp(rsvp: &Rsvp) -> String {
    format!(
        "{}\n  ID: {}\n  Attending: {}",
        rsvp.guest_name, rsvp.id, rsvp.total_attending
    )
}

/// Format RSVPs for display.
pub fn format_rsvps(rsvps: &[Rsvp]) -> String {
    if rsvps.is_empty() {
        return "No RSVPs found.".to_string();
    }
    let total: i64 = rsvps.iter().map(|r| i64::from(r.total_attending)).sum();
    let mut output = format!("RSVPS ({}, {} attending)\n", rsvps.len(), total);
    output.push_str(&"-".repeat(40));
    for rsvp in rsvps {
        output.push_str(&format!("\n{}", format_rsvp(rsvp)));
        output.push('\n');
    }
    output
}

/// Format a readiness status for display.
pub fn format_ready(status: &ReadyStatus) -> String {
    let mut output = format!(
        "Readiness:\n  Healthy: {}",
        if status.healthy { "yes" } else { "no" }
    );
    if let Some(error) = &status.error {
        output.push_str(&format!("\n  Error: {}", error));
    }
    output
}

/// Format cache statistics for display.
pub fn format_cache_stats(stats: &CacheStats) -> String {
    format!("Cache:\n  Cached RSVPs: {}", stats.cached_rsvps)
}
