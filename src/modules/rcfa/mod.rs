use std::borrow::Cow;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use tracing::{info, warn};

mod report;
mod request;
mod text;

pub use report::{AnalysisReport, fixed_report};
pub use request::{AnalysisRequest, FORM_FIELDS, FieldKind, FormField};
pub use text::{export_filename, format_report_text};

use crate::web::{
    AppState, ToolPageLayout, escape_html,
    auth::require_session_json,
    payload::parse_json_body,
    render_footer, render_tool_page,
    responses::ApiError,
    templates::APP_TITLE,
};

const INVALID_JSON_MESSAGE: &str = "Request body must be valid JSON.";
const RCFA_CLIENT_SCRIPT: &str = include_str!("rcfa_client.js");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/analyze/export", post(export_report))
}

/// `POST /api/analyze`: presence check on the required fields, then the
/// canned report.
async fn analyze(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Json<AnalysisReport>, ApiError> {
    require_session_json(&state, &jar)?;
    let request = read_request(&body)?;

    info!(
        equipment_len = request.equipment_description.len(),
        failure_len = request.failure_description.len(),
        "serving canned analysis report"
    );
    Ok(Json(fixed_report()))
}

/// `POST /api/analyze/export`: the same report as a downloadable text file.
async fn export_report(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, ApiError> {
    require_session_json(&state, &jar)?;
    let request = read_request(&body)?;

    let generated_at = Utc::now();
    let text = format_report_text(&request, &fixed_report(), generated_at);
    let disposition = format!(
        r#"attachment; filename="{}""#,
        export_filename(generated_at)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    )
        .into_response())
}

fn read_request(body: &Bytes) -> Result<AnalysisRequest, ApiError> {
    let payload = parse_json_body(body).map_err(|err| {
        warn!(%err, "rejected analysis request with malformed JSON");
        ApiError::validation(INVALID_JSON_MESSAGE)
    })?;
    AnalysisRequest::from_payload(payload)
}

pub fn render_analysis_page(show_logout: bool) -> String {
    let fields_html = FORM_FIELDS
        .iter()
        .map(render_field)
        .collect::<Vec<_>>()
        .join("\n");

    let body_html = format!(
        r#"        <section class="panel">
            <form id="rcfa-form" novalidate>
{fields_html}
                <div class="actions">
                    <button type="submit" id="analyze-button">Analyze</button>
                    <button type="button" class="secondary" id="clear-button">Clear Form</button>
                </div>
            </form>
            <div id="analysis-progress" class="note hidden"></div>
            <div class="note">Analysis may take up to 60 seconds depending on failure complexity.</div>
            <div id="analysis-error" class="status-box error hidden"></div>
        </section>
        <div id="analysis-result" class="hidden">
            <div class="actions">
                <button type="button" class="secondary" id="copy-button">Copy to Clipboard</button>
                <button type="button" class="secondary" id="download-button">Download as Text</button>
                <span id="copy-notice" class="status-box success"></span>
            </div>
            <section class="panel">
                <h2>Follow-up Questions</h2>
                <ul id="report-questions"></ul>
            </section>
            <section class="panel">
                <h2>Top Root Cause Contenders</h2>
                <div id="report-contenders"></div>
            </section>
            <section class="panel">
                <h2>Top Action Items</h2>
                <div id="report-actions"></div>
            </section>
        </div>"#,
        fields_html = fields_html,
    );

    render_tool_page(ToolPageLayout {
        meta_title: APP_TITLE,
        page_heading: APP_TITLE,
        note_html: Cow::Borrowed(
            "Enter failure details and click Analyze to generate RCFA insights.",
        ),
        body_html: Cow::Owned(body_html),
        show_logout,
        footer_html: Cow::Owned(render_footer()),
        extra_style_blocks: Vec::new(),
        body_scripts: vec![Cow::Owned(format!(
            "<script>\n{RCFA_CLIENT_SCRIPT}\n</script>"
        ))],
    })
}

fn render_field(field: &FormField) -> String {
    let placeholder = field
        .placeholder
        .map(|text| format!(r#" placeholder="{}""#, escape_html(text)))
        .unwrap_or_default();
    let label = escape_html(field.label);
    let key = field.key;

    match field.kind {
        FieldKind::Input => format!(
            r#"                <label>{label}<input name="{key}" data-field="{key}"{placeholder}></label>"#
        ),
        FieldKind::Textarea => format!(
            r#"                <label>{label}<textarea name="{key}" data-field="{key}"{placeholder}></textarea></label>"#
        ),
    }
}
