#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableOutcome {
    Pass,
    Fail,
    NotImplemented,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEntry {
    pub code: String,
    pub outcome: RenderableOutcome,
    pub offending: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDomain {
    /// Stable domain id, e.g. `firewall_policy`.
    pub id: String,
    pub entries: Vec<RenderableEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub checks_evaluated: u32,
    pub checks_failed: u32,
    pub checks_not_implemented: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub domains: Vec<RenderableDomain>,
    pub data: RenderableData,
}

/// Section heading for a domain id: `firewall_policy` -> `Firewall Policy`.
pub fn domain_label(id: &str) -> String {
    id.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
