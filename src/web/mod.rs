pub mod auth;
pub mod landing;
pub mod payload;
pub mod responses;
pub mod router;
pub mod state;
pub mod templates;

pub use state::AppState;
pub use templates::{
    ToolPageLayout, escape_html, render_footer, render_login_page, render_login_page_with_notice,
    render_tool_page,
};
