//! HTML report builder

use tracing::info;

use crate::report::UpgradeEntry;
use crate::resolver::coordinate::RemoteRepository;
use crate::version::micro::is_same_minor;

const BASIC_STYLES: &str = "font-family: Verdana,sans-serif;font-size: 10pt;";
const BOLD_FONT: &str = "font-weight: bold;";
const TABLE_STYLES: &str = "margin: 2em 0;border-collapse: collapse;";
const CAPTION_STYLES: &str = "text-align: left;font-weight: bold;";
const PADDING: &str = "padding: 5px;";
const BORDER_TOP: &str = "border-top: 1px solid #ddd;";
const TH_TD_STYLES: &str = "padding: 5px;text-align: left;";
const SUBITEM_STYLES: &str = "padding-left: 2em;color: #999;";
const GAV_STYLES: &str = "font-family: \"Courier New\";";
const UL_STYLES: &str = "list-style-type: circle;";
const LI_STYLES: &str = "margin: 7px 0;";
const REPO_LABEL_STYLES: &str = "border-radius: 5px;padding: 3px; margin-left: 1em;";

const BACKGROUNDS: [&str; 4] = [
    "background-color: #a8df65;",
    "background-color: #edf492;",
    "background-color: #efb960;",
    "background-color: #ee91bc;",
];

/// Builds the component upgrade report.
///
/// Entries are sorted alphabetically; entries sharing a group, baseline
/// version and candidate list are collapsed into one row with a counter.
pub struct ReportBuilder {
    repositories: Vec<RemoteRepository>,
    upgrades: Vec<UpgradeEntry>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
            upgrades: Vec::new(),
        }
    }

    pub fn with_repositories(mut self, repositories: Vec<RemoteRepository>) -> Self {
        self.repositories = repositories;
        self
    }

    pub fn with_upgrades(mut self, upgrades: Vec<UpgradeEntry>) -> Self {
        self.upgrades = upgrades;
        self
    }

    /// Renders the report, or `None` when there is nothing to report.
    pub fn build(self) -> Option<String> {
        if self.upgrades.is_empty() {
            info!("No components to upgrade.");
            return None;
        }

        let mut sorted = self.upgrades.clone();
        sorted.sort_by(|a, b| {
            (&a.stream.group_id, &a.stream.artifact_id, &a.stream.version).cmp(&(
                &b.stream.group_id,
                &b.stream.artifact_id,
                &b.stream.version,
            ))
        });

        let aggregated = aggregate(sorted);

        let mut out = String::new();
        out.push_str(&format!("<div style=\"{BASIC_STYLES}\">"));
        out.push_str("<h2>Component Upgrade Report</h2>");
        out.push_str("<p>Following repositories were searched:</p>");
        self.render_repositories(&mut out);
        self.render_upgrade_table(&mut out, &aggregated);
        out.push_str(&format!(
            "<p>Generated on {}</p>",
            chrono::Local::now().format("%Y-%m-%d")
        ));
        out.push_str("</div>");
        Some(out)
    }

    fn render_repositories(&self, out: &mut String) {
        out.push_str(&format!("<ul style=\"{UL_STYLES}\">"));
        for repository in &self.repositories {
            out.push_str(&format!(
                "<li style=\"{LI_STYLES}\">{} {}</li>",
                self.repository_label(&repository.id),
                escape(&repository.url)
            ));
        }
        out.push_str("</ul>");
    }

    fn render_upgrade_table(&self, out: &mut String, aggregated: &[(UpgradeEntry, usize)]) {
        out.push_str(&format!("<table style=\"{BASIC_STYLES}{TABLE_STYLES}\">"));
        out.push_str(&format!(
            "<caption style=\"{CAPTION_STYLES}\">Possible Component Upgrades</caption>"
        ));
        out.push_str(&format!(
            "<thead><tr><th style=\"{TH_TD_STYLES}\">GAV</th><th style=\"{TH_TD_STYLES}\">New Version</th></tr></thead>"
        ));

        for (entry, more) in aggregated {
            out.push_str("<tbody>");
            for (index, version) in entry.candidates.iter().enumerate() {
                let gav_cell = if index == 0 {
                    format!(
                        "<td style=\"{PADDING}{GAV_STYLES}\">{}</td>",
                        escape(&entry.stream.to_string())
                    )
                } else {
                    format!("<td style=\"{SUBITEM_STYLES}\">&#8627;</td>")
                };
                out.push_str(&format!(
                    "<tr style=\"{BORDER_TOP}\">{gav_cell}<td style=\"{PADDING}\">{}{}</td></tr>",
                    self.version_span(&entry.stream.version, version),
                    entry
                        .origins
                        .get(version)
                        .map(|id| self.repository_label(id))
                        .unwrap_or_default()
                ));
            }
            if *more > 0 {
                out.push_str(&format!(
                    "<tr><td style=\"{SUBITEM_STYLES}\">{more} more artifacts from the same groupId</td></tr>"
                ));
            }
            out.push_str("</tbody>");
        }

        out.push_str(&format!(
            "<tr><td colspan=\"2\" style=\"{TH_TD_STYLES}{BORDER_TOP}\">{} items</td></tr>",
            aggregated.len()
        ));
        out.push_str("</table>");
    }

    /// Same-minor candidates are the ones safe to auto-apply; render bold.
    fn version_span(&self, baseline: &str, version: &str) -> String {
        let style = if is_same_minor(baseline, version) {
            BOLD_FONT
        } else {
            ""
        };
        format!("<span style=\"{style}\">{}</span>", escape(version))
    }

    fn repository_label(&self, id: &str) -> String {
        format!(
            "<span style=\"{REPO_LABEL_STYLES}{}\">{}</span>",
            self.repository_color(id),
            escape(id)
        )
    }

    fn repository_color(&self, id: &str) -> &'static str {
        let index = self
            .repositories
            .iter()
            .position(|r| r.id == id)
            .unwrap_or(0);
        BACKGROUNDS[index % BACKGROUNDS.len()]
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses consecutive entries sharing a group, baseline version and
/// candidate list; the count of collapsed duplicates rides along.
fn aggregate(sorted: Vec<UpgradeEntry>) -> Vec<(UpgradeEntry, usize)> {
    let mut aggregated: Vec<(UpgradeEntry, usize)> = Vec::new();
    for entry in sorted {
        let found = aggregated.iter_mut().find(|(kept, _)| {
            kept.stream.group_id == entry.stream.group_id
                && kept.stream.version == entry.stream.version
                && kept.candidates == entry.candidates
        });
        match found {
            Some((_, counter)) => *counter += 1,
            None => aggregated.push((entry, 0)),
        }
    }
    aggregated
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
