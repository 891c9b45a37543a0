use chrono::{DateTime, Utc};

use super::{report::AnalysisReport, request::AnalysisRequest};

const RULE_WIDTH: usize = 50;

/// Plain-text rendition used for clipboard copy and the `.txt` download.
pub fn format_report_text(
    request: &AnalysisRequest,
    report: &AnalysisReport,
    generated_at: DateTime<Utc>,
) -> String {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);
    let mut text = String::new();

    text.push_str("RCFA ANALYSIS RESULTS\n");
    text.push_str(&format!("{heavy_rule}\n\n"));

    text.push_str("EQUIPMENT INFORMATION\n");
    text.push_str(&format!("{rule}\n"));
    text.push_str(&format!("Equipment: {}\n", request.equipment_description));
    push_optional(&mut text, "Make", &request.make, "");
    push_optional(&mut text, "Model", &request.model, "");
    push_optional(&mut text, "Serial Number", &request.serial_number, "");
    push_optional(&mut text, "Age", &request.age, " years");
    text.push_str(&format!(
        "\nFailure Description: {}\n\n",
        request.failure_description
    ));

    text.push_str("FOLLOW-UP QUESTIONS\n");
    text.push_str(&format!("{rule}\n"));
    for (index, question) in report.follow_up_questions.iter().enumerate() {
        text.push_str(&format!("{}. {question}\n", index + 1));
    }
    text.push('\n');

    text.push_str("TOP ROOT CAUSE CONTENDERS\n");
    text.push_str(&format!("{rule}\n"));
    for (index, contender) in report.root_cause_contenders.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", index + 1, contender.cause));
        text.push_str(&format!("   Rationale: {}\n", contender.rationale));
        text.push_str(&format!("   Confidence: {}\n\n", contender.confidence));
    }

    text.push_str("TOP ACTION ITEMS\n");
    text.push_str(&format!("{rule}\n"));
    for (index, item) in report.action_items.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", index + 1, item.action));
        text.push_str(&format!("   Owner: {}\n", item.owner));
        text.push_str(&format!("   Priority: {}\n", item.priority));
        text.push_str(&format!("   Timeframe: {}\n", item.timeframe));
        text.push_str(&format!(
            "   Success Criteria: {}\n\n",
            item.success_criteria
        ));
    }

    text.push_str(&format!("{rule}\n"));
    text.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    text
}

/// Download name for an export generated at `generated_at`.
pub fn export_filename(generated_at: DateTime<Utc>) -> String {
    format!("rcfa-analysis-{}.txt", generated_at.timestamp_millis())
}

fn push_optional(text: &mut String, label: &str, value: &str, suffix: &str) {
    if !value.is_empty() {
        text.push_str(&format!("{label}: {value}{suffix}\n"));
    }
}
