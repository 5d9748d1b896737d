// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Human and machine renderings of tick reports and settings.

use airspace_core::{PairResult, SimSettings, TickReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use serde::Serialize;

/// Pretty JSON for anything serializable.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn closest_label(closest: &PairResult) -> String {
    closest.as_pair().map_or_else(
        || "none".to_string(),
        |pair| {
            let (a, b) = pair.ids();
            format!("{a} / {b}")
        },
    )
}

/// Summary table followed by one row per risk pair.
pub fn tick_table(report: &TickReport) -> String {
    let mut summary = base_table();
    summary.set_header(vec!["metric", "value"]);
    let distance = report
        .closest
        .as_pair()
        .map_or_else(|| "-".to_string(), |p| format!("{:.3}", p.distance()));
    let rows = [
        ("tick", report.tick.to_string()),
        ("aircraft", report.snapshot.count.to_string()),
        ("closest pair", closest_label(&report.closest)),
        ("closest distance", distance),
        ("comparisons", report.algorithm.comparisons.to_string()),
        ("recursive calls", report.algorithm.recursive_calls.to_string()),
        ("risk pairs", report.risk_pairs.len().to_string()),
        (
            "collisions avoided",
            report.snapshot.collisions_avoided.to_string(),
        ),
        (
            "all outside bounds",
            report.snapshot.all_outside_bounds.to_string(),
        ),
    ];
    for (metric, value) in rows {
        summary.add_row(vec![Cell::new(metric), Cell::new(value)]);
    }

    if report.risk_pairs.is_empty() {
        return summary.to_string();
    }
    let mut risks = base_table();
    risks.set_header(vec!["aircraft", "aircraft", "distance"]);
    for pair in &report.risk_pairs {
        let (a, b) = pair.ids();
        risks.add_row(vec![
            Cell::new(a),
            Cell::new(b),
            Cell::new(format!("{:.3}", pair.distance())),
        ]);
    }
    format!("{summary}\n{risks}")
}

/// Two-column table of every setting.
pub fn settings_table(settings: &SimSettings) -> String {
    let mut table = base_table();
    table.set_header(vec!["setting", "value"]);
    let seed = settings
        .seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());
    let rows = [
        ("range", settings.range.to_string()),
        ("initial_count", settings.initial_count.to_string()),
        ("min_separation", settings.min_separation.to_string()),
        ("spawn_separation", settings.spawn_separation.to_string()),
        ("default_threshold", settings.default_threshold.to_string()),
        ("threshold_scale", settings.threshold_scale.to_string()),
        ("max_aircraft", settings.max_aircraft.to_string()),
        (
            "max_placement_attempts",
            settings.max_placement_attempts.to_string(),
        ),
        ("history_limit", settings.history_limit.to_string()),
        ("speed_min", settings.speed_min.to_string()),
        ("speed_max", settings.speed_max.to_string()),
        ("seed", seed),
    ];
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    table.to_string()
}
