// src/export/html.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::entry::ScheduleEntry;
use crate::models::week::{WEEKDAYS, WeekKey};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

const STYLE: &str = r#"
        table { border-collapse: collapse; width: 100%; font-family: -apple-system, sans-serif; }
        th, td { border: 1px solid #e2e8f0; padding: 10px 5px; text-align: center; font-size: 13px; }
        th { background-color: #f8fafc; color: #334155; }
        .staff-col { background-color: #f1f5f9; font-weight: bold; }
"#;

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Standalone, read-only page: staff names as text, each scheduled day as
/// two stacked time labels, blank cells for days off. No totals, no buttons.
pub fn render_html(rows: &[ScheduleEntry], week: &WeekKey) -> String {
    let title = escape(&week.to_string());

    let mut head = String::from("<th class=\"staff-col\">Staff</th>");
    for (name, label) in WEEKDAYS.iter().zip(week.header_labels()) {
        head.push_str(&format!(
            "<th class=\"day-col\">{}<br><span class=\"date-label\">{}</span></th>",
            name, label
        ));
    }

    let mut body = String::new();
    for entry in rows {
        body.push_str("<tr>");
        body.push_str(&format!(
            "<td class=\"staff-col\">{}</td>",
            escape(&entry.staff_name)
        ));
        for slot in &entry.days {
            match slot.bounds() {
                Some((start, end)) => body.push_str(&format!(
                    "<td><div style=\"margin-bottom:4px;\">{}</div><div>{}</div></td>",
                    start, end
                )),
                None => body.push_str("<td></td>"),
            }
        }
        body.push_str("</tr>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Weekly Schedule</title>
    <style>{STYLE}    </style>
</head>
<body>
    <h2 style="text-align:center;">{title}</h2>
    <table class="schedule-table">
        <thead><tr>{head}</tr></thead>
        <tbody>
{body}        </tbody>
    </table>
</body>
</html>
"#
    )
}

pub(crate) fn export_html(rows: &[ScheduleEntry], week: &WeekKey, path: &Path) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));

    fs::write(path, render_html(rows, week))?;

    notify_export_success("HTML", path);
    Ok(())
}
