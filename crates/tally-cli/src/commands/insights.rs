//! Insight command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::{AnalysisContext, Insight, InsightConfig, InsightEngine, InsightKind, Snapshot};

/// Run the engine over the snapshot at `file` as of `date`
pub fn cmd_insights(
    file: &Path,
    config: &InsightConfig,
    date: NaiveDate,
    all: bool,
    json: bool,
) -> Result<()> {
    let snapshot = Snapshot::from_path(file)
        .with_context(|| format!("Failed to load snapshot {}", file.display()))?;

    if snapshot.skipped > 0 {
        tracing::warn!(
            skipped = snapshot.skipped,
            "Ignored transactions without a usable date or amount"
        );
    }

    let insights = analyze_snapshot(&snapshot, config, date, all);

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!();
    println!("💡 Insights for {}", date.format("%Y-%m"));
    println!("   ─────────────────────────────────────────────────────────────");

    if insights.is_empty() {
        println!("   No insights right now. Spending looks ordinary.");
        return Ok(());
    }

    for insight in &insights {
        println!("{}", format_insight(insight));
    }

    Ok(())
}

/// Ranked insights for a snapshot; only the top one unless `all`
pub fn analyze_snapshot(
    snapshot: &Snapshot,
    config: &InsightConfig,
    date: NaiveDate,
    all: bool,
) -> Vec<Insight> {
    let ctx = AnalysisContext::new(
        &snapshot.transactions,
        &snapshot.budget,
        &snapshot.category_names,
        date,
    );
    let engine = InsightEngine::with_config(config);

    let mut insights = engine.analyze(&ctx);
    if !all {
        insights.truncate(1);
    }
    insights
}

/// Two-line text rendering of one insight
pub fn format_insight(insight: &Insight) -> String {
    let icon = match insight.kind {
        InsightKind::Danger => "🚨",
        InsightKind::Warning => "⚠️ ",
        InsightKind::Success => "✅",
    };
    format!(
        "   {} {} [{}]\n      {}",
        icon, insight.title, insight.priority, insight.message
    )
}
