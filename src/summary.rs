//! Derived summary fields for a fetched CVE record: the description to
//! display and the CVSS score to put on the badge.

use serde::Serialize;

use crate::nvd::schema::{LangString, Metrics, QueryResponse};
use crate::nvd::{Error, NvdClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CvssVersion {
    #[serde(rename = "4.0")]
    V40,
    #[serde(rename = "3.1")]
    V31,
    #[serde(rename = "2.0")]
    V2,
}

impl std::fmt::Display for CvssVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CvssVersion::V40 => write!(f, "4.0"),
            CvssVersion::V31 => write!(f, "3.1"),
            CvssVersion::V2 => write!(f, "2.0"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedScore {
    pub score: f64,
    pub version: CvssVersion,
}

/// Qualitative severity rating for a base score, used as a display
/// annotation next to the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn from_score(score: f64) -> Self {
        if score <= 0.0 {
            Severity::None
        } else if score < 4.0 {
            Severity::Low
        } else if score < 7.0 {
            Severity::Medium
        } else if score < 9.0 {
            Severity::High
        } else {
            Severity::Critical
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::None => write!(f, "none"),
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Pick the description to display: the first English entry wins, then
/// the first entry of any language, then a fixed fallback.
pub fn resolve_description(descriptions: &[LangString]) -> String {
    descriptions
        .iter()
        .find(|desc| desc.lang == "en")
        .or_else(|| descriptions.first())
        .map(|desc| desc.value.clone())
        .unwrap_or_else(|| "No description available.".to_string())
}

/// Pick the score to display. A CVE is commonly scored under several
/// CVSS generations at once; the newest generation supersedes the older
/// ones, and within a generation the first entry wins.
pub fn resolve_score(metrics: &Metrics) -> Option<ResolvedScore> {
    if let Some(entry) = metrics.cvss_metric_v40.first() {
        return Some(ResolvedScore {
            score: entry.cvss_data.base_score,
            version: CvssVersion::V40,
        });
    }

    if let Some(entry) = metrics.cvss_metric_v31.first() {
        return Some(ResolvedScore {
            score: entry.cvss_data.base_score,
            version: CvssVersion::V31,
        });
    }

    if let Some(entry) = metrics.cvss_metric_v2.first() {
        return Some(ResolvedScore {
            score: entry.cvss_data.base_score,
            version: CvssVersion::V2,
        });
    }

    None
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub details: QueryResponse,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvss: Option<ResolvedScore>,
}

/// Fetch a CVE record and derive its summary fields. A single-CVE query
/// returns at most one vulnerability entry; an empty sequence means the
/// identifier resolved to nothing and is reported as such.
pub async fn lookup(client: &NvdClient, cve_id: &str) -> Result<Report, Error> {
    let details = client.get_cve(cve_id).await?;

    let Some(entry) = details.vulnerabilities.first() else {
        return Err(Error::NoSuchCve {
            id: cve_id.to_string(),
        });
    };

    let summary = resolve_description(&entry.cve.descriptions);
    let cvss = resolve_score(&entry.cve.metrics);

    Ok(Report {
        details,
        summary,
        cvss,
    })
}
