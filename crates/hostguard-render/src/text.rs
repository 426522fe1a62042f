use crate::model::{domain_label, RenderableOutcome, RenderableReport, RenderableVerdict};

/// Human report: one section per domain, one `<setting>: PASS|FAIL` line per
/// sub-check, offending lists inlined on the failing line, aggregate verdict
/// at the end.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("--- Security Baseline Report ---\n");

    for domain in &report.domains {
        out.push('\n');
        out.push_str(&format!("{}:\n", domain_label(&domain.id)));

        for entry in &domain.entries {
            let line = match entry.outcome {
                RenderableOutcome::Pass => format!("  {}: PASS\n", entry.code),
                RenderableOutcome::NotImplemented => {
                    format!("  {}: PASS (check not implemented)\n", entry.code)
                }
                RenderableOutcome::Fail => {
                    if entry.offending.is_empty() {
                        format!("  {}: FAIL\n", entry.code)
                    } else {
                        format!(
                            "  {}: FAIL ({}: [{}])\n",
                            entry.code,
                            offending_label(&entry.code),
                            entry.offending.join(", ")
                        )
                    }
                }
            };
            out.push_str(&line);
        }
    }

    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push('\n');
    out.push_str(&format!(
        "Overall: {} ({} of {} checks failed)\n",
        verdict, report.data.checks_failed, report.data.checks_evaluated
    ));

    out
}

fn offending_label(code: &str) -> &'static str {
    match code {
        "allowed_ports" => "unexpected ports",
        "disable_services" => "running services",
        _ => "offending",
    }
}
