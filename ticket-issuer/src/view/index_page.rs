use super::layout::page;
use axum::response::Html;

pub fn index_page(total_tickets: u64) -> Html<String> {
    page(
        "Ticket issuer",
        &format!(
            r#"        <h1>Ticket issuer</h1>
        <p>Total tickets generated: <strong>{total_tickets}</strong></p>
        <a href="/generate-ticket">Generate new ticket</a>"#
        ),
    )
}
