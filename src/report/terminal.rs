//! Console report formatting

use super::{format_avg, format_ratio, stats_cells, STATS_HEADERS};
use crate::predict::{form_verdict, PredictionSummary};
use crate::TeamAnalysis;
use std::fmt::Write;

const WIDE: usize = 78;
const NARROW: usize = 50;

/// Total/home/away table for a single team
pub fn format_team_report(analysis: &TeamAnalysis) -> String {
    let mut out = String::new();
    let rule = "═".repeat(WIDE);

    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(
        out,
        "  FORM REPORT - {} (last {} matches)",
        analysis.team_name, analysis.total.played
    );
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "  Recent form (newest first): {}", analysis.form_guide());
    let _ = writeln!(out);

    let mut header = format!("  {:<10}", "");
    for h in STATS_HEADERS {
        let _ = write!(header, "{:>8}", h);
    }
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "  {}", "─".repeat(WIDE - 2));

    for (label, stats) in [
        ("Total", &analysis.total),
        ("Home", &analysis.home),
        ("Away", &analysis.away),
    ] {
        let mut row = format!("  {:<10}", label);
        for cell in stats_cells(stats) {
            let _ = write!(row, "{:>8}", cell);
        }
        let _ = writeln!(out, "{}", row);
    }

    let _ = writeln!(out, "  {}", "─".repeat(WIDE - 2));
    let _ = writeln!(
        out,
        "  P=played W=won D=drawn L=lost Pts=form points (3/1/0) GF/GA=goals per match"
    );
    let _ = writeln!(
        out,
        "  Over 2.5: more than two goals in the match, BTTS: both teams scored"
    );
    out
}

/// Side-by-side summary of two teams plus the form verdict
pub fn format_comparison(a: &TeamAnalysis, b: &TeamAnalysis) -> String {
    let mut out = String::new();
    let rule = "═".repeat(NARROW);

    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "  TEAM COMPARISON");
    let _ = writeln!(out, "{}\n", rule);

    for analysis in [a, b] {
        let t = &analysis.total;
        let _ = writeln!(out, "{} (last {} matches):", analysis.team_name, t.played);
        let _ = writeln!(out, "  Form points:   {}", t.form_points);
        let _ = writeln!(out, "  Goals/match:   {}", format_avg(t.goals_for_rate()));
        let _ = writeln!(out, "  Over 2.5:      {}", format_ratio(t.over_rate()));
        let _ = writeln!(out, "  BTTS:          {}", format_ratio(t.both_scored_rate()));
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", "─".repeat(NARROW));
    let _ = writeln!(out, "Verdict: {}", form_verdict(a, b));
    out
}

pub fn format_match_comment(comment: &str) -> String {
    format!("MATCH COMMENT\n{}\n{}\n", "─".repeat(NARROW), comment)
}

pub fn format_prediction_summary(summary: &PredictionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PREDICTION SUMMARY");
    let _ = writeln!(out, "{}", "─".repeat(NARROW));
    for (market, verdict, justification) in summary.markets() {
        let _ = writeln!(out, "- {}: {} ({})", market.label(), verdict, justification);
    }
    if let Some(note) = &summary.risk_note {
        let _ = writeln!(out, "- Risk note: {}", note);
    }
    out
}
