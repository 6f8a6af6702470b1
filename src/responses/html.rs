use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let body = markup.into_string();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// 204: the event was handled and there is nothing to swap in.
pub fn no_content() -> ResultResp {
    status_response(204)
}

pub fn status_response(status: u16) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// 303 back to a page after a plain form post.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
