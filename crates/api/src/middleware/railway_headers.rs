use crate::railway_headers::RailwayHeaders;
use axum::{extract::Request, http::Extensions, middleware::Next, response::Response};
use tracing::debug;

/// Extension key for the stored headers. Private so nothing outside this
/// module can insert or shadow it.
#[derive(Clone)]
struct RailwayHeadersKey(RailwayHeaders);

/// Middleware that parses the Railway headers and passes them to the next handler
///
/// The parsed [`RailwayHeaders`] are stored in the request extensions; read
/// them back with [`headers_from_extensions`] or the `RailwayHeaders` extractor.
pub async fn railway_headers_middleware(mut request: Request, next: Next) -> Response {
    let headers = RailwayHeaders::from_request(&request);

    debug!(
        railway_request_id = %headers.railway_request_id,
        railway_edge = %headers.railway_edge,
        "Railway headers parsed"
    );

    request.extensions_mut().insert(RailwayHeadersKey(headers));

    next.run(request).await
}

/// Headers stored by [`railway_headers_middleware`], or `None` if it did not run.
pub fn headers_from_extensions(extensions: &Extensions) -> Option<RailwayHeaders> {
    extensions
        .get::<RailwayHeadersKey>()
        .map(|RailwayHeadersKey(headers)| headers.clone())
}
