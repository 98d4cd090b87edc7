use axum::response::Html;

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

///
/// Wraps page content in common document skeleton.
///
/// `body` must already be escaped.
///
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/generate-ticket">Generate ticket</a>
        <a href="/login">Log in</a>
        <a href="/logout">Log out</a>
    </nav>
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape_html(title),
    ))
}
