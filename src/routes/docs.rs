use axum::response::Html;
use utoipa::OpenApi;

use crate::{ApiDoc, OPENAPI_URL, SWAGGER_UI_PATH};

// Swagger UI assets come from the vendored bundle, ReDoc has no local copy
const REDOC_CDN: &str = "https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js";

fn swagger_ui_html(title: &str, openapi_url: &str, assets: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<link type="text/css" rel="stylesheet" href="{assets}/swagger-ui.css">
<title>{title} - Swagger UI</title>
</head>
<body>
<div id="swagger-ui"></div>
<script src="{assets}/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '{openapi_url}',
    dom_id: '#swagger-ui',
    layout: 'BaseLayout',
    deepLinking: true,
    showExtensions: true,
    showCommonExtensions: true,
    presets: [
        SwaggerUIBundle.presets.apis,
        SwaggerUIBundle.SwaggerUIStandalonePreset
    ],
}})
</script>
</body>
</html>
"#
    )
}

fn redoc_html(title: &str, openapi_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title} - ReDoc</title>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
    body {{
        margin: 0;
        padding: 0;
    }}
</style>
</head>
<body>
<noscript>
    ReDoc requires Javascript to function. Please enable it to browse the documentation.
</noscript>
<redoc spec-url="{openapi_url}"></redoc>
<script src="{REDOC_CDN}"></script>
</body>
</html>
"#
    )
}

/// Swagger UI
pub async fn swagger_ui() -> Html<String> {
    log::debug!("fn: routes::docs::swagger_ui");

    let title = ApiDoc::openapi().info.title;
    Html(swagger_ui_html(&title, OPENAPI_URL, SWAGGER_UI_PATH))
}

/// ReDoc
pub async fn redoc() -> Html<String> {
    log::debug!("fn: routes::docs::redoc");

    let title = ApiDoc::openapi().info.title;
    Html(redoc_html(&title, OPENAPI_URL))
}
