use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub follow_up_questions: Vec<String>,
    pub root_cause_contenders: Vec<RootCauseContender>,
    pub action_items: Vec<ActionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootCauseContender {
    pub cause: String,
    pub rationale: String,
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub action: String,
    pub owner: String,
    pub priority: String,
    pub timeframe: String,
    pub success_criteria: String,
}

const FOLLOW_UP_QUESTIONS: [&str; 6] = [
    "When did the failure start and was it sudden or gradual?",
    "What changed recently (load, product, settings, environment, operator)?",
    "Any alarms, vibration, temperature, or unusual noise before failure?",
    "What was the last maintenance performed and by whom?",
    "Has this asset failed similarly before? If yes, when and what was done?",
    "What operating conditions were present (speed, load, pressure, flow)?",
];

// (cause, rationale, confidence)
const CONTENDERS: [(&str, &str, &str); 3] = [
    (
        "Lubrication breakdown or contamination",
        "Common driver of premature wear; confirm lubricant type, interval, storage/handling, and contamination sources.",
        "definetly not high",
    ),
    (
        "Misalignment / soft foot / imbalance",
        "Can elevate vibration and fatigue components; verify alignment checks, coupling condition, base/grouting, and vibration data if available.",
        "medium",
    ),
    (
        "Operating outside design envelope",
        "Overload, excessive starts/stops, or process upset can cause rapid failure; confirm duty cycle and whether conditions differed from normal.",
        "low",
    ),
];

// (action, owner, priority, timeframe, success criteria)
const ACTION_ITEMS: [(&str, &str, &str, &str, &str); 5] = [
    (
        "Capture evidence: photos of failed parts, nameplate, and any visible damage; record observations (noise, smell, heat, vibration)",
        "Maintenance",
        "P1",
        "Immediate",
        "Evidence captured and attached to case notes; key observations documented with timestamps.",
    ),
    (
        "Review last 12–24 months work orders for repeat patterns (same component, same symptoms, same downtime driver)",
        "Reliability",
        "P1",
        "Immediate",
        "WO summary created listing repeat failure modes, dates, and prior corrective actions; pattern documented.",
    ),
    (
        "Confirm lubrication standard: correct lubricant, interval, and contamination controls; update PM if needed",
        "Maintenance",
        "P2",
        "Short-term",
        "Lubrication spec confirmed; PM updated (if required) and communicated to technicians.",
    ),
    (
        "Check alignment and base condition (soft foot, looseness); correct and document readings",
        "Maintenance",
        "P2",
        "Short-term",
        "Alignment/soft foot checked; readings recorded; corrective work completed if out of tolerance.",
    ),
    (
        "Define a verification check (30/90 days): confirm no recurrence and track leading indicators (vibration/temp/leaks/noise)",
        "Reliability",
        "P3",
        "Long-term",
        "Follow-up check completed at agreed interval; trend shows stable operation and no repeat failures.",
    ),
];

/// The canned report served for every valid request. No analysis engine sits
/// behind it yet.
pub fn fixed_report() -> AnalysisReport {
    AnalysisReport {
        follow_up_questions: FOLLOW_UP_QUESTIONS
            .iter()
            .map(|question| question.to_string())
            .collect(),
        root_cause_contenders: CONTENDERS
            .iter()
            .map(|(cause, rationale, confidence)| RootCauseContender {
                cause: cause.to_string(),
                rationale: rationale.to_string(),
                confidence: confidence.to_string(),
            })
            .collect(),
        action_items: ACTION_ITEMS
            .iter()
            .map(
                |(action, owner, priority, timeframe, success_criteria)| ActionItem {
                    action: action.to_string(),
                    owner: owner.to_string(),
                    priority: priority.to_string(),
                    timeframe: timeframe.to_string(),
                    success_criteria: success_criteria.to_string(),
                },
            )
            .collect(),
    }
}
