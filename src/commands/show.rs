use askama::Template;
use clap::Args as ClapArgs;
use miette::IntoDiagnostic as _;
use termimad::MadSkin;

use crate::config::Config;
use crate::matcher;
use crate::nvd::NvdClient;
use crate::summary::{self, Report, Severity};

#[derive(ClapArgs)]
pub struct Args {
    /// CVE identifier to look up (e.g. CVE-2024-3094)
    pub cve_id: String,
}

// ============================================================================
// Askama Template
// ============================================================================

#[derive(Template)]
#[template(path = "cve/show.md")]
struct CveShowTemplate<'a> {
    view: &'a CveView,
}

impl<'a> CveShowTemplate<'a> {
    fn render_view(view: &'a CveView) -> String {
        CveShowTemplate { view }
            .render()
            .expect("Template rendering failed")
    }
}

// ============================================================================
// Command Entry Point
// ============================================================================

pub fn run(args: Args, config: &Config) -> miette::Result<()> {
    let client = NvdClient::new(config);

    let report = super::block_on_runtime_aware(async {
        summary::lookup(&client, &args.cve_id).await.into_diagnostic()
    })?;

    let view = build_cve_view(&report)?;
    render_cve_view(&view);
    Ok(())
}

// ============================================================================
// View Building (Materialization)
// ============================================================================

#[derive(Debug, Clone)]
struct ScoreBadge {
    score: String,
    version: String,
    severity: String,
}

#[derive(Debug, Clone)]
struct WeaknessView {
    source: String,
    description: String,
}

#[derive(Debug, Clone)]
struct ReferenceView {
    url: String,
    tags: Vec<String>,
}

#[derive(Debug, Clone)]
struct CveView {
    id: String,
    status: String,
    published: String,
    last_modified: String,
    badge: Option<ScoreBadge>,
    summary: String,
    platforms: Vec<String>,
    weaknesses: Vec<WeaknessView>,
    references: Vec<ReferenceView>,
}

fn build_cve_view(report: &Report) -> miette::Result<CveView> {
    let Some(entry) = report.details.vulnerabilities.first() else {
        miette::bail!("fetched report carries no vulnerability entry");
    };

    let cve = &entry.cve;

    let badge = report.cvss.map(|resolved| ScoreBadge {
        score: format!("{:.1}", resolved.score),
        version: resolved.version.to_string(),
        severity: Severity::from_score(resolved.score).to_string(),
    });

    let platforms = matcher::affected_platforms(&cve.configurations)
        .into_iter()
        .map(|platform| platform.to_string())
        .collect();

    let weaknesses = cve
        .weaknesses
        .iter()
        .map(|weakness| WeaknessView {
            source: weakness.source.clone(),
            description: summary::resolve_description(&weakness.description),
        })
        .collect();

    let references = cve
        .references
        .iter()
        .map(|reference| ReferenceView {
            url: reference.url.clone(),
            tags: reference.tags.clone(),
        })
        .collect();

    Ok(CveView {
        id: cve.id.clone(),
        status: cve
            .vuln_status
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        published: cve.published.format("%Y-%m-%d").to_string(),
        last_modified: cve.last_modified.format("%Y-%m-%d").to_string(),
        badge,
        summary: report.summary.clone(),
        platforms,
        weaknesses,
        references,
    })
}

// ============================================================================
// Rendering
// ============================================================================

fn render_cve_view(view: &CveView) {
    let markdown = CveShowTemplate::render_view(view);
    let skin = MadSkin::default();
    skin.print_text(&markdown);
}
