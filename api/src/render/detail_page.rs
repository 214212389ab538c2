use std::fmt::Write;

use screens::{DetailScreen, DetailView, Route};

use super::{APP_TITLE, escape, layout};

pub fn render_detail_page(screen: &DetailScreen) -> String {
    match screen.view() {
        DetailView::Loading => layout(APP_TITLE, "<p>Loading...</p>"),
        DetailView::Failed { message } => {
            let body = format!(
                "<p class=\"error\">{}</p>\n<p><a href=\"{}\">Back to search</a></p>",
                escape(message),
                Route::Search.path(),
            );
            layout(APP_TITLE, &body)
        }
        DetailView::Loaded { detail } => {
            let mut body = String::from("<div class=\"detail\">\n");
            let _ = writeln!(body, "<h1>{}</h1>", escape(&detail.title));
            let _ = writeln!(
                body,
                "<img src=\"{}\" alt=\"{}\">",
                escape(&detail.poster_url),
                escape(&detail.title)
            );
            let _ = writeln!(body, "<p>Year: {}</p>", escape(&detail.year));
            let _ = writeln!(body, "<p>Plot: {}</p>", escape(&detail.plot));
            let _ = writeln!(body, "<p>Actors: {}</p>", escape(&detail.actors));
            body.push_str("<div class=\"ratings\">\n<p>Ratings:</p>\n");
            for rating in &detail.ratings {
                let _ = writeln!(
                    body,
                    "<span class=\"rating\">{} ({})</span>",
                    escape(&rating.source),
                    escape(&rating.value)
                );
            }
            body.push_str("</div>\n</div>");
            layout(&detail.title, &body)
        }
    }
}
