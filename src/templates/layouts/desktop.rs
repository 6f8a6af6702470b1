use crate::domain::Theme;
use maud::{html, Markup, DOCTYPE};

// Third-party assets come from a CDN; only the app stylesheet is served locally.
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, theme: Theme, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.to_string()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                link rel="stylesheet" href=(BOOTSTRAP_ICONS_CSS);
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_JS) defer {}
                script src=(BOOTSTRAP_JS) defer {}
            }
            body {
                header class="navbar px-4 py-3 shadow-sm" {
                    a class="navbar-brand fw-bold text-danger" href="/" {
                        i class="bi bi-house-heart-fill me-2" {}
                        "Stays"
                    }
                }
                (content)
            }
        }
    }
}
