use std::borrow::Cow;

use chrono::{Datelike, Utc};

pub const APP_TITLE: &str = "RCFA AI Demo";

const TOOL_PAGE_BASE_STYLES: &str = r#"
        :root { color-scheme: light; }
        body { font-family: "Helvetica Neue", Arial, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
        header { background: #ffffff; padding: 2rem 1.5rem; border-bottom: 1px solid #e2e8f0; }
        .header-bar { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; max-width: 960px; margin: 0 auto; }
        .header-bar h1 { margin: 0; }
        .logout-button { background: #e0f2fe; color: #1d4ed8; border: 1px solid #bfdbfe; border-radius: 999px; padding: 0.5rem 0.95rem; }
        .logout-button:hover { background: #bfdbfe; }
        main { padding: 2rem 1.5rem; max-width: 960px; margin: 0 auto; box-sizing: border-box; }
        section { margin-bottom: 2rem; }
        .panel { background: #ffffff; border-radius: 12px; border: 1px solid #e2e8f0; padding: 1.5rem; box-shadow: 0 18px 40px rgba(15, 23, 42, 0.08); }
        .panel h2 { margin-top: 0; }
        label { display: block; margin-bottom: 1rem; font-weight: 600; color: #0f172a; }
        input, textarea { display: block; width: 100%; margin-top: 0.4rem; padding: 0.75rem; border-radius: 8px; border: 1px solid #cbd5f5; background: #f8fafc; color: #0f172a; box-sizing: border-box; font: inherit; font-weight: 400; }
        textarea { min-height: 100px; resize: vertical; }
        input:focus, textarea:focus { outline: none; border-color: #2563eb; box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.12); }
        button { padding: 0.75rem 1.2rem; border: none; border-radius: 8px; background: #2563eb; color: #ffffff; font-weight: 600; cursor: pointer; transition: background 0.15s ease; }
        button:hover { background: #1d4ed8; }
        button.secondary { background: #64748b; }
        button.secondary:hover { background: #475569; }
        button:disabled { opacity: 0.6; cursor: not-allowed; }
        .actions { display: flex; gap: 0.75rem; flex-wrap: wrap; align-items: center; }
        .note { color: #475569; font-size: 0.9rem; line-height: 1.6; }
        .status-box { margin-top: 1rem; padding: 0.85rem 1rem; border-radius: 10px; }
        .status-box.error { background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c; }
        .status-box.success { color: #166534; }
        .report-card { border: 1px solid #e2e8f0; border-radius: 10px; padding: 0.9rem 1rem; margin-bottom: 0.75rem; }
        .report-card p { margin: 0.4rem 0 0; }
        .report-meta { color: #64748b; font-size: 0.9rem; }
        .hidden { display: none; }
        .app-footer { margin-top: 3rem; text-align: center; font-size: 0.85rem; color: #94a3b8; }
        @media (max-width: 768px) {
            header { padding: 1.5rem 1rem; }
            main { padding: 1.5rem 1rem; }
            .header-bar { flex-direction: column; align-items: flex-start; }
        }
"#;

pub struct ToolPageLayout<'a> {
    pub meta_title: &'a str,
    pub page_heading: &'a str,
    pub note_html: Cow<'a, str>,
    pub body_html: Cow<'a, str>,
    pub show_logout: bool,
    pub footer_html: Cow<'a, str>,
    pub extra_style_blocks: Vec<Cow<'a, str>>,
    pub body_scripts: Vec<Cow<'a, str>>,
}

pub fn render_tool_page(layout: ToolPageLayout<'_>) -> String {
    let ToolPageLayout {
        meta_title,
        page_heading,
        note_html,
        body_html,
        show_logout,
        footer_html,
        extra_style_blocks,
        body_scripts,
    } = layout;

    let logout_html = if show_logout {
        r#"<button type="button" class="logout-button" id="logout-button">Log out</button>"#
    } else {
        ""
    };

    let styles = std::iter::once(Cow::Borrowed(TOOL_PAGE_BASE_STYLES))
        .chain(extra_style_blocks)
        .map(|block| block.into_owned())
        .collect::<Vec<_>>()
        .join("\n");

    let scripts = body_scripts
        .into_iter()
        .map(|script| script.into_owned())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{meta_title}</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="robots" content="noindex,nofollow">
    <style>
{styles}
    </style>
</head>
<body>
    <header>
        <div class="header-bar">
            <h1>{page_heading}</h1>
            {logout_html}
        </div>
    </header>
    <main>
        <p class="note">{note_html}</p>
{body_html}
        {footer_html}
    </main>
{scripts}
</body>
</html>"#,
        meta_title = meta_title,
        page_heading = page_heading,
        logout_html = logout_html,
        note_html = note_html,
        body_html = body_html,
        footer_html = footer_html,
        styles = styles,
        scripts = scripts,
    )
}

const LOGIN_SCRIPT: &str = r#"<script>
const loginForm = document.getElementById('login-form');
const passwordInput = document.getElementById('password');
const loginError = document.getElementById('login-error');

loginForm.addEventListener('submit', async (event) => {
    event.preventDefault();
    loginError.classList.add('hidden');
    loginError.textContent = '';

    try {
        const response = await fetch('/api/auth', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ password: passwordInput.value }),
        });
        const payload = await response.json().catch(() => ({}));

        if (!response.ok) {
            showLoginError(payload.error || 'Authentication failed');
            return;
        }

        passwordInput.value = '';
        window.location.reload();
    } catch (err) {
        showLoginError((err && err.message) || 'Authentication failed');
    }
});

function showLoginError(message) {
    loginError.textContent = 'Error: ' + message;
    loginError.classList.remove('hidden');
}
</script>"#;

pub fn render_login_page() -> String {
    render_login_page_with_notice(None)
}

/// Login screen, optionally showing a notice such as an expired session.
pub fn render_login_page_with_notice(notice: Option<&str>) -> String {
    let footer = render_footer();
    let (notice_class, notice_text) = match notice {
        Some(message) => ("status-box error", format!("Error: {}", escape_html(message))),
        None => ("status-box error hidden", String::new()),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="robots" content="noindex,nofollow">
    <style>
        :root {{ color-scheme: light; }}
        body {{ font-family: "Helvetica Neue", Arial, sans-serif; display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; margin: 0; background: #f1f5f9; color: #0f172a; padding: 1.5rem; box-sizing: border-box; gap: 1.5rem; }}
        main {{ width: 100%; max-width: 480px; display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }}
        .panel {{ background: #ffffff; padding: 2.5rem 2.25rem; border-radius: 18px; box-shadow: 0 20px 60px rgba(15, 23, 42, 0.08); width: 100%; border: 1px solid #e2e8f0; box-sizing: border-box; }}
        h1 {{ margin: 0 0 1rem; font-size: 1.8rem; text-align: center; }}
        input {{ width: 100%; padding: 0.85rem; margin-top: 0.65rem; border-radius: 10px; border: 1px solid #cbd5f5; background: #f8fafc; color: #0f172a; font-size: 1rem; box-sizing: border-box; }}
        input:focus {{ outline: none; border-color: #2563eb; box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.15); }}
        button {{ margin-top: 1.5rem; width: 100%; padding: 0.95rem; border: none; border-radius: 10px; background: #0f172a; color: #ffffff; font-weight: 600; font-size: 1.05rem; cursor: pointer; transition: background 0.15s ease; }}
        button:hover {{ background: #1e293b; }}
        .status-box {{ margin-top: 1.25rem; padding: 0.85rem 1rem; border-radius: 10px; background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c; }}
        .hidden {{ display: none; }}
        .app-footer {{ margin-top: 2.5rem; text-align: center; font-size: 0.85rem; color: #64748b; }}
    </style>
</head>
<body>
    <main>
        <section class="panel">
            <h1>{title}</h1>
            <form id="login-form">
                <input id="password" type="password" name="password" placeholder="Access password" autofocus>
                <button type="submit">Enter</button>
            </form>
            <div id="login-error" class="{notice_class}">{notice_text}</div>
        </section>
        {footer}
    </main>
{script}
</body>
</html>"#,
        title = APP_TITLE,
        notice_class = notice_class,
        notice_text = notice_text,
        footer = footer,
        script = LOGIN_SCRIPT,
    )
}

pub fn render_footer() -> String {
    let current_year = Utc::now().year();
    format!(
        r#"<footer class="app-footer">© {year} RCFA AI Demo. Canned analysis for demonstration only.</footer>"#,
        year = current_year
    )
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
