use super::ApplicationState;
use crate::auth::RequireAuthLayer;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub auth: RequireAuthLayer,
    pub body_limit: RequestBodyLimitLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(
    state: &ApplicationState,
    max_http_content_len: usize,
) -> ApplicationMiddleware {
    let auth = RequireAuthLayer::new(state.identity_provider.clone());

    let body_limit = RequestBodyLimitLayer::new(max_http_content_len);

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        auth,
        body_limit,
        trace,
    }
}
