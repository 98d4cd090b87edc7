use super::layout::{escape_html, page};
use axum::response::Html;

pub fn ticket_qr_code_page(qr_code_data_url: &str, ticket_url: &str) -> Html<String> {
    let qr_code_data_url = escape_html(qr_code_data_url);
    let ticket_url = escape_html(ticket_url);

    page(
        "Your ticket",
        &format!(
            r#"        <h1>Your ticket</h1>
        <img src="{qr_code_data_url}" alt="Ticket QR code">
        <p><a href="{ticket_url}">{ticket_url}</a></p>"#
        ),
    )
}
