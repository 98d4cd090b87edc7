use super::layout::{escape_html, page};
use crate::dto::output;
use axum::response::Html;
use time::{macros::format_description, UtcOffset};

pub fn ticket_details_page(ticket: &output::Ticket, viewer_name: &str) -> Html<String> {
    let created_at = ticket
        .created_at
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[day]/[month]/[year], [hour]:[minute]"
        ))
        .unwrap_or_else(|_| ticket.created_at.to_string());

    page(
        "Ticket details",
        &format!(
            r#"        <h1>Ticket details</h1>
        <dl>
            <dt>OIB</dt><dd>{vatin}</dd>
            <dt>First name</dt><dd>{first_name}</dd>
            <dt>Last name</dt><dd>{last_name}</dd>
            <dt>Created at</dt><dd>{created_at}</dd>
        </dl>
        <p>Logged in as {viewer_name}</p>"#,
            vatin = escape_html(&ticket.vatin),
            first_name = escape_html(&ticket.first_name),
            last_name = escape_html(&ticket.last_name),
            viewer_name = escape_html(viewer_name),
        ),
    )
}
