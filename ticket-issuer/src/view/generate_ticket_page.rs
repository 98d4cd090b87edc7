use super::layout::page;
use axum::response::Html;

pub fn generate_ticket_page() -> Html<String> {
    page(
        "Generate ticket",
        r#"        <h1>Generate ticket</h1>
        <form action="/generate" method="post">
            <label for="taxpayerId">OIB</label>
            <input id="taxpayerId" name="taxpayerId" required pattern="[0-9]{11}" maxlength="11">
            <label for="firstName">First name</label>
            <input id="firstName" name="firstName" required pattern="[A-Za-z]+">
            <label for="lastName">Last name</label>
            <input id="lastName" name="lastName" required pattern="[A-Za-z]+">
            <button type="submit">Generate</button>
        </form>"#,
    )
}
