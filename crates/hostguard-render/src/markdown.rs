use crate::model::{domain_label, RenderableOutcome, RenderableReport, RenderableVerdict};

/// CI-comment flavored Markdown: verdict, counts, failing checks only.
pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Hostguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Checks: {} failed / {} evaluated",
        verdict, report.data.checks_failed, report.data.checks_evaluated
    ));
    if report.data.checks_not_implemented > 0 {
        out.push_str(&format!(
            " ({} not implemented)",
            report.data.checks_not_implemented
        ));
    }
    out.push_str("\n\n");

    let failing: Vec<String> = report
        .domains
        .iter()
        .flat_map(|domain| {
            domain.entries.iter().filter_map(|entry| {
                if entry.outcome != RenderableOutcome::Fail {
                    return None;
                }
                let mut line = format!("- **{}** / `{}`", domain_label(&domain.id), entry.code);
                if !entry.offending.is_empty() {
                    line.push_str(&format!(" — {}", entry.offending.join(", ")));
                }
                line.push('\n');
                Some(line)
            })
        })
        .collect();

    if failing.is_empty() {
        out.push_str("No failing checks.\n");
        return out;
    }

    out.push_str("## Failing checks\n\n");
    for line in failing {
        out.push_str(&line);
    }

    out
}
