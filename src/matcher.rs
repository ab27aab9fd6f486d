//! Platform matching over a CVE's CPE configuration tree.
//!
//! A record's `configurations` describe which products are affected as a
//! boolean expression over CPE criteria. This module evaluates that
//! expression against a short list of known platforms so the rendered
//! page can carry an "affects" line.

use crate::nvd::schema::{Configuration, Node, Operator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Linux, Platform::Windows];

    fn cpe_prefix(&self) -> &'static str {
        match self {
            Platform::Linux => "cpe:2.3:o:linux:linux_kernel:",
            Platform::Windows => "cpe:2.3:o:microsoft:windows_",
        }
    }

    pub fn matches_cpe(&self, criteria: &str) -> bool {
        criteria.starts_with(self.cpe_prefix())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Linux => write!(f, "Linux kernel"),
            Platform::Windows => write!(f, "Microsoft Windows"),
        }
    }
}

/// The platforms the record's configuration tree matches, in declaration
/// order of [`Platform::ALL`].
pub fn affected_platforms(configurations: &[Configuration]) -> Vec<Platform> {
    Platform::ALL
        .into_iter()
        .filter(|platform| matches_platform(configurations, *platform))
        .collect()
}

/// A record matches when any one of its configurations evaluates true.
/// A record with no configurations matches nothing.
pub fn matches_platform(configurations: &[Configuration], platform: Platform) -> bool {
    configurations
        .iter()
        .any(|configuration| evaluate_configuration(platform, configuration))
}

fn evaluate_configuration(platform: Platform, configuration: &Configuration) -> bool {
    if configuration.nodes.is_empty() {
        return false;
    }

    // AND requires every node to match; the default (OR) requires any.
    // `negate` is not evaluated.
    if matches!(configuration.operator, Some(Operator::And)) {
        configuration
            .nodes
            .iter()
            .all(|node| evaluate_node(platform, node))
    } else {
        configuration
            .nodes
            .iter()
            .any(|node| evaluate_node(platform, node))
    }
}

fn evaluate_node(platform: Platform, node: &Node) -> bool {
    if node.cpe_match.is_empty() {
        return false;
    }

    if matches!(node.operator, Some(Operator::And)) {
        node.cpe_match
            .iter()
            .all(|cpe| platform.matches_cpe(&cpe.criteria))
    } else {
        node.cpe_match
            .iter()
            .any(|cpe| platform.matches_cpe(&cpe.criteria))
    }
}
