//! Server-rendered HTML pages: the public home page, the login form and the
//! admin shells.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Router,
};
use clevio_template::preview::FOCUS_ATTR;
use clevio_template::{full_page_preview, preview_keys, render};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiResult;
use crate::session::AdminPage;
use crate::state::AppState;

const SITE_TITLE: &str = "Clevio Kindergarten";
const SITE_DESCRIPTION: &str =
    "Website Clevio Kindergarten lengkap dengan admin dashboard dan kontrol konten dinamis.";
const TEMPLATE_ROOT_ID: &str = "clevio-template-root";
const DEFAULT_LOGIN_TARGET: &str = "/admin";

const STYLESHEETS: &[&str] = &[
    "bootstrap.min",
    "all.min",
    "animate",
    "icomoon",
    "magnific-popup",
    "meanmenu",
    "swiper-bundle.min",
    "nice-select",
    "main",
];

const SCRIPTS: &[&str] = &[
    "jquery-3.7.1.min",
    "viewport.jquery",
    "bootstrap.bundle.min",
    "jquery.nice-select.min",
    "jquery.waypoints",
    "jquery.counterup.min",
    "swiper-bundle.min",
    "jquery.meanmenu.min",
    "jquery.magnific-popup.min",
    "wow.min",
    "main",
];

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/admin", get(admin))
        .route("/admin/preview/{section}", get(admin_preview))
}

/// Wrap `body` in the theme's document shell.
fn layout(title: &str, body: &str, theme_scripts: bool) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str(&format!("<title>{title}</title>\n"));
    page.push_str(&format!(
        "<meta name=\"description\" content=\"{SITE_DESCRIPTION}\">\n"
    ));
    for sheet in STYLESHEETS {
        page.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"/assets/css/{sheet}.css\">\n"
        ));
    }
    page.push_str("</head>\n<body>\n");
    page.push_str(body);
    if theme_scripts {
        for script in SCRIPTS {
            page.push_str(&format!("\n<script src=\"/assets/js/{script}.js\"></script>"));
        }
    }
    page.push_str("\n</body>\n</html>\n");
    page
}

/// Scrolls the full-page preview to the first visible previewed section.
fn focus_script() -> String {
    format!(
        "<script>document.addEventListener(\"DOMContentLoaded\", () => {{ \
         document.querySelector(\"[{FOCUS_ATTR}]\")?.scrollIntoView({{ block: \"start\" }}); }});</script>"
    )
}

fn template_root(markup: &str) -> String {
    format!("<div id=\"{TEMPLATE_ROOT_ID}\">{markup}</div>")
}

/// Serialize `value` for a `<script>` element. `</` is escaped so embedded
/// markup cannot close the element early.
fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Only same-site absolute paths are followed after login.
fn login_target(from: Option<&str>) -> &str {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => DEFAULT_LOGIN_TARGET,
    }
}

async fn home(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let content = state.store().load().await?;
    let template = state.template().markup().await?;
    let markup = render(&template, &content);
    Ok(Html(layout(SITE_TITLE, &template_root(&markup), true)))
}

#[derive(Debug, Deserialize)]
struct LoginQuery {
    from: Option<String>,
}

async fn login(Query(query): Query<LoginQuery>) -> Html<String> {
    let target = json!(login_target(query.from.as_deref()));
    let body = format!(
        r#"<main class="login-shell">
<form class="login-card" id="login-form">
<div class="login-hero">
<span class="login-pill">Clevio Admin</span>
<h1>Masuk Ke Dashboard</h1>
<p class="login-subtitle">Akses panel admin dengan kredensial yang sudah dibagikan tim. Jaga kerahasiaan dan keluar jika tidak aktif.</p>
</div>
<label>Email <input type="email" name="email" placeholder="Email" required></label>
<label>Password <input type="password" name="password" placeholder="Password" required></label>
<p class="login-error" id="login-error" hidden></p>
<button type="submit" class="theme-btn">Masuk</button>
<a href="/" class="login-back">&lt; Kembali ke website</a>
</form>
</main>
<script>
document.getElementById("login-form").addEventListener("submit", async (event) => {{
  event.preventDefault();
  const form = event.target;
  const error = document.getElementById("login-error");
  error.hidden = true;
  try {{
    const response = await fetch("/api/auth/login", {{
      method: "POST",
      headers: {{ "Content-Type": "application/json" }},
      credentials: "include",
      body: JSON.stringify({{ email: form.email.value, password: form.password.value }}),
    }});
    if (!response.ok) {{
      const data = await response.json().catch(() => null);
      error.textContent = (data && data.message) || "Email/password salah";
      error.hidden = false;
      return;
    }}
    window.location.replace({target});
  }} catch (err) {{
    error.textContent = "Terjadi kesalahan, coba ulang.";
    error.hidden = false;
  }}
}});
</script>"#,
        target = script_json(&target),
    );
    Html(layout("Clevio Admin Login", &body, false))
}

/// Dashboard shell. The client reads the current document and the raw theme
/// markup from `#clevio-admin-data`.
async fn admin(_page: AdminPage, State(state): State<AppState>) -> ApiResult<Html<String>> {
    let content = state.store().load().await?;
    let template = state.template().markup().await?;

    let data = json!({ "content": content, "template": template });
    let body = format!(
        "<main id=\"clevio-admin\"></main>\n<script id=\"clevio-admin-data\" type=\"application/json\">{}</script>",
        script_json(&data)
    );
    Ok(Html(layout("Clevio Admin Dashboard", &body, false)))
}

/// The saved home page with everything outside `section` hidden.
async fn admin_preview(
    _page: AdminPage,
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> ApiResult<Html<String>> {
    let content = state.store().load().await?;
    let template = state.template().markup().await?;
    let markup = full_page_preview(&template, &content, &preview_keys(&section));
    let body = format!(
        "<div class=\"preview-scoped\">{}</div>\n{}",
        template_root(&markup),
        focus_script()
    );
    Ok(Html(layout(SITE_TITLE, &body, true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::routes::test_support::{body_string, TestApp};

    #[test]
    fn login_target_stays_on_site() {
        assert_eq!(login_target(Some("/admin/preview/hero")), "/admin/preview/hero");
        assert_eq!(login_target(Some("//evil.example")), "/admin");
        assert_eq!(login_target(Some("https://evil.example")), "/admin");
        assert_eq!(login_target(None), "/admin");
    }

    #[test]
    fn embedded_json_cannot_close_the_script() {
        let escaped = script_json(&json!({ "template": "<script></script>" }));
        assert!(!escaped.contains("</script>"));
        let parsed: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(parsed["template"], "<script></script>");
    }

    #[tokio::test]
    async fn home_page_binds_content_into_the_shell() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_string(response).await;
        assert!(page.contains("<div id=\"clevio-template-root\">"));
        assert!(page.contains("/assets/css/bootstrap.min.css"));
        assert!(page.contains("/assets/js/main.js"));
        assert!(page.contains("Creative Play"));
    }

    #[tokio::test]
    async fn admin_redirects_without_a_session() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(Request::get("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login?from=/admin"
        );
    }

    #[tokio::test]
    async fn admin_embeds_content_and_template() {
        let app = TestApp::new();
        let request = app.authed(Request::get("/admin")).body(Body::empty()).unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_string(response).await;
        let start = page.find("type=\"application/json\">").unwrap() + 24;
        let end = start + page[start..].find("</script>").unwrap();
        let data: serde_json::Value = serde_json::from_str(&page[start..end]).unwrap();
        assert_eq!(data["content"]["branding"]["name"], "Clevio Innovator Camp");
        assert!(data["template"].as_str().unwrap().contains("preloader"));
    }

    #[tokio::test]
    async fn section_preview_hides_other_sections_and_scrolls_to_focus() {
        let app = TestApp::new();
        let request = app
            .authed(Request::get("/admin/preview/programs"))
            .body(Body::empty())
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_string(response).await;
        assert!(page.contains("preview-scoped"));
        assert!(page.contains("data-preview-focus"));
        assert!(page.contains("display: none"));

        let focus = page.find(" data-preview-focus").unwrap();
        let script = page
            .find("document.querySelector(\"[data-preview-focus]\")?.scrollIntoView")
            .unwrap();
        assert!(script > focus);
    }

    #[tokio::test]
    async fn login_page_follows_from_parameter() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(
                Request::get("/login?from=/admin/preview/programs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let page = body_string(response).await;
        assert!(page.contains("window.location.replace(\"/admin/preview/programs\")"));
        assert!(page.contains("/api/auth/login"));
    }
}
