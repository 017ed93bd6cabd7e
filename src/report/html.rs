//! Standalone HTML report pages

use super::{format_avg, format_ratio, stats_cells, STATS_HEADERS};
use crate::predict::{form_verdict, PredictionSummary};
use crate::{Result, TeamAnalysis};
use std::fmt::Write;
use std::path::Path;

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
        color: #eee;
        min-height: 100vh;
        padding: 2rem;
    }
    .container { max-width: 900px; margin: 0 auto; }
    h1 { font-size: 1.8rem; margin-bottom: 0.5rem; color: #e94560; }
    h2 { margin-top: 2rem; margin-bottom: 0.75rem; color: #e94560; }
    .subtitle { color: #a0a0a0; margin-bottom: 2rem; }
    table {
        width: 100%;
        border-collapse: collapse;
        background: rgba(255,255,255,0.05);
        border-radius: 8px;
        overflow: hidden;
        box-shadow: 0 4px 20px rgba(0,0,0,0.3);
    }
    th, td { padding: 0.9rem 1rem; text-align: center; }
    th { background: #e94560; color: white; font-weight: 600; }
    tr:nth-child(even) { background: rgba(255,255,255,0.03); }
    tr:hover { background: rgba(233,69,96,0.15); }
    ul { margin-top: 0.5rem; line-height: 1.6; padding-left: 1.25rem; }
    .note { margin-top: 1rem; font-size: 0.9rem; color: #bbb; }
    .footer { margin-top: 2rem; font-size: 0.85rem; color: #888; }
"#;

/// Escape text for inclusion in HTML element content or attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{}</title>
<style>{}</style>
</head>
<body>
<div class="container">
{}
</div>
</body>
</html>
"#,
        escape(title),
        STYLE,
        body
    )
}

fn stats_table(analysis: &TeamAnalysis) -> String {
    let mut html = String::from("<table>\n<thead><tr><th>Category</th>");
    for h in STATS_HEADERS {
        let _ = write!(html, "<th>{}</th>", h);
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (label, stats) in [
        ("Total", &analysis.total),
        ("Home", &analysis.home),
        ("Away", &analysis.away),
    ] {
        let _ = write!(html, "<tr><td><strong>{}</strong></td>", label);
        for cell in stats_cells(stats) {
            let _ = write!(html, "<td>{}</td>", cell);
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn matches_table(analysis: &TeamAnalysis) -> String {
    let mut html = String::from(
        "<table>\n<thead><tr><th>Date</th><th>Home</th><th>Score</th><th>Away</th><th>Result</th></tr></thead>\n<tbody>\n",
    );
    for m in &analysis.matches {
        let result = m
            .outcome(&analysis.team_name)
            .map(|o| o.code().to_string())
            .unwrap_or_default();
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{} - {}</td><td>{}</td><td>{}</td></tr>",
            m.date.format("%Y-%m-%d"),
            escape(&m.home_team),
            m.home_goals,
            m.away_goals,
            escape(&m.away_team),
            result
        );
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn legend() -> &'static str {
    r#"<p class="footer">P = played | W = won | D = drawn | L = lost | Pts = form points (3/1/0)<br>
Over 2.5 = more than two goals in the match | BTTS = both teams scored</p>
"#
}

/// Single-team report page
pub fn team_report_html(analysis: &TeamAnalysis) -> String {
    let name = escape(&analysis.team_name);
    let mut body = String::new();

    let _ = writeln!(body, "<h1>Form Report</h1>");
    let _ = writeln!(
        body,
        r#"<p class="subtitle">{} &mdash; last {} matches &mdash; form {}</p>"#,
        name,
        analysis.total.played,
        analysis.form_guide()
    );
    body.push_str(&stats_table(analysis));
    body.push_str("<h2>Recent Matches</h2>\n");
    body.push_str(&matches_table(analysis));
    body.push_str(legend());

    page(&format!("Form Report - {}", analysis.team_name), &body)
}

fn summary_list(summary: &PredictionSummary) -> String {
    let mut html = String::from("<ul>\n");
    for (market, verdict, justification) in summary.markets() {
        let _ = writeln!(
            html,
            "<li><strong>{}:</strong> {} ({})</li>",
            market.label(),
            escape(&verdict),
            escape(justification)
        );
    }
    if let Some(note) = &summary.risk_note {
        let _ = writeln!(html, "<li><strong>Risk note:</strong> {}</li>", escape(note));
    }
    html.push_str("</ul>\n");
    html
}

/// Two-team comparison page with optional comment and prediction summary
pub fn comparison_report_html(
    a: &TeamAnalysis,
    b: &TeamAnalysis,
    comment: Option<&str>,
    summary: Option<&PredictionSummary>,
) -> String {
    let (name_a, name_b) = (escape(&a.team_name), escape(&b.team_name));
    let (ta, tb) = (&a.total, &b.total);
    let mut body = String::new();

    let _ = writeln!(body, "<h1>Team Comparison</h1>");
    let _ = writeln!(
        body,
        r#"<p class="subtitle">{} vs {} &mdash; last {} / {} matches</p>"#,
        name_a, name_b, ta.played, tb.played
    );

    let _ = writeln!(
        body,
        "<table>\n<thead><tr><th>Metric</th><th>{}</th><th>{}</th></tr></thead>\n<tbody>",
        name_a, name_b
    );
    let rows = [
        ("Form points", ta.form_points.to_string(), tb.form_points.to_string()),
        (
            "Goals per match",
            format_avg(ta.goals_for_rate()),
            format_avg(tb.goals_for_rate()),
        ),
        (
            "Conceded per match",
            format_avg(ta.goals_against_rate()),
            format_avg(tb.goals_against_rate()),
        ),
        ("Over 2.5", format_ratio(ta.over_rate()), format_ratio(tb.over_rate())),
        (
            "BTTS",
            format_ratio(ta.both_scored_rate()),
            format_ratio(tb.both_scored_rate()),
        ),
        ("Recent form", a.form_guide(), b.form_guide()),
    ];
    for (label, left, right) in rows {
        let _ = writeln!(body, "<tr><td>{}</td><td>{}</td><td>{}</td></tr>", label, left, right);
    }
    body.push_str("</tbody>\n</table>\n");
    let _ = writeln!(body, r#"<p class="note"><em>{}</em></p>"#, escape(&form_verdict(a, b)));

    if let Some(comment) = comment {
        let _ = writeln!(body, "<h2>Match Comment</h2>\n<p class=\"note\">{}</p>", escape(comment));
    }
    if let Some(summary) = summary {
        body.push_str("<h2>Prediction Summary</h2>\n");
        body.push_str(&summary_list(summary));
    }
    body.push_str(legend());

    page(
        &format!("Team Comparison - {} vs {}", a.team_name, b.team_name),
        &body,
    )
}

/// Write a report page to disk, creating parent directories
pub fn write_report<P: AsRef<Path>>(path: P, html: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, html)?;
    log::info!("Wrote report to {}", path.display());
    Ok(())
}
