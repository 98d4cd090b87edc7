use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::{session, AuthError, IdentityProvider, User},
    dto::input,
    error::Error,
    service::{qr_code_service::QrCodeService, tickets_service::TicketsService},
    view,
};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Form, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/generate", post(generate))
        .route("/generate/:id", get(get_ticket_qr_code))
        .route("/ticket/:id", get(get_ticket_details))
        .route_layer(application_middleware.auth.clone())
        .route("/", get(index))
        .route("/generate-ticket", get(generate_ticket_form))
        .route("/login", get(login))
        .route("/callback", get(callback_redirect).post(callback))
        .route("/logout", get(logout))
}

async fn index(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Html<String>, Error> {
    let total_tickets = tickets_service.count_tickets().await?;

    Ok(view::index_page(total_tickets))
}

async fn generate_ticket_form() -> Html<String> {
    view::generate_ticket_page()
}

async fn generate(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    form: Result<Form<input::Ticket>, FormRejection>,
) -> Result<Redirect, Error> {
    let Form(ticket) = form?;
    let ticket = tickets_service.create_ticket(ticket).await?;

    Ok(Redirect::to(&format!("/generate/{}", ticket.id)))
}

async fn get_ticket_qr_code(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(qr_code_service): State<Arc<dyn QrCodeService>>,
    Path(id): Path<String>,
) -> Result<Html<String>, Error> {
    let ticket = tickets_service.find_ticket(&id).await?;
    let qr_code = qr_code_service.render_data_url(&ticket.url)?;

    Ok(view::ticket_qr_code_page(&qr_code, &ticket.url))
}

async fn get_ticket_details(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Html<String>, Error> {
    let ticket = tickets_service.find_ticket(&id).await?;

    Ok(view::ticket_details_page(&ticket, &user.name))
}

async fn login(State(identity_provider): State<Arc<dyn IdentityProvider>>) -> Response {
    let nonce = session::generate_nonce();
    let login_url = identity_provider.login_url(&nonce);

    (
        AppendHeaders([(SET_COOKIE, session::create_nonce_cookie(&nonce))]),
        Redirect::to(&login_url),
    )
        .into_response()
}

async fn callback_redirect() -> Redirect {
    Redirect::to("/")
}

async fn callback(
    State(identity_provider): State<Arc<dyn IdentityProvider>>,
    headers: HeaderMap,
    Form(callback): Form<input::IdTokenCallback>,
) -> Result<Response, Error> {
    let nonce =
        session::find_cookie(&headers, session::NONCE_COOKIE).ok_or(AuthError::MissingCredentials)?;

    let user = identity_provider.verify_login(&callback.id_token, nonce)?;
    tracing::info!(id = %user.id, "user logged in");

    let return_to = session::find_return_to(&headers).unwrap_or_else(|| "/".to_string());

    Ok((
        AppendHeaders([
            (SET_COOKIE, session::create_session_cookie(&callback.id_token)),
            (SET_COOKIE, session::create_expired_cookie(session::NONCE_COOKIE)),
            (SET_COOKIE, session::create_expired_cookie(session::RETURN_TO_COOKIE)),
        ]),
        Redirect::to(&return_to),
    )
        .into_response())
}

async fn logout(State(identity_provider): State<Arc<dyn IdentityProvider>>) -> Response {
    (
        AppendHeaders([(
            SET_COOKIE,
            session::create_expired_cookie(session::SESSION_COOKIE),
        )]),
        Redirect::to(&identity_provider.logout_url()),
    )
        .into_response()
}
