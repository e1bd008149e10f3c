//! Prometheus text rendering for the service counters.

use std::fmt::Write;

use noteshare_store::Counters;

/// Content type for the text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Render the service counters in Prometheus text exposition format.
#[must_use]
pub fn render(counters: &Counters) -> String {
    let mut out = String::new();
    write_counter(
        &mut out,
        "noteshare_requests_submitted_total",
        "Total access requests successfully submitted.",
        counters.requests_submitted(),
    );
    write_counter(
        &mut out,
        "noteshare_approvals_processed_total",
        "Total request approvals processed.",
        counters.approvals_processed(),
    );
    out
}

fn write_counter(out: &mut String, name: &str, help: &str, value: u64) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} counter");
    let _ = writeln!(out, "{name} {value}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_counters() {
        let counters = Counters::new();
        counters.record_submission();
        counters.record_submission();
        counters.record_approval();

        let body = render(&counters);
        assert!(body.contains("# TYPE noteshare_requests_submitted_total counter"));
        assert!(body.contains("noteshare_requests_submitted_total 2"));
        assert!(body.contains("noteshare_approvals_processed_total 1"));
    }

    #[test]
    fn renders_zeroes_before_any_traffic() {
        let body = render(&Counters::new());
        assert!(body.contains("noteshare_requests_submitted_total 0"));
        assert!(body.contains("noteshare_approvals_processed_total 0"));
    }
}
