use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup, DOCTYPE};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),

        ServerError::BadRequest(msg) => render_error(400, &msg),

        ServerError::Storage(e) => render_error(500, &format!("Storage Error: {e}")),

        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to listings" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Inline block shown in place of the listings when the dataset failed to load.
pub fn load_error(reason: &str) -> Markup {
    html! {
        div class="col-12 text-center py-5 load-error" {
            i class="bi bi-exclamation-triangle display-1 text-danger" {}
            h3 class="mt-3" { "Failed to load listings" }
            p class="text-muted" { (reason) }
            button
                class="btn btn-danger"
                hx-post="/retry"
                hx-target="#listings-region"
                hx-swap="outerHTML"
            {
                i class="bi bi-arrow-clockwise me-1" {} " Retry"
            }
        }
    }
}
