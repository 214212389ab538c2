use std::fmt::Write;

use screens::{SearchScreen, SearchView};

use super::{APP_TITLE, escape, layout};

pub fn render_search_page(screen: &SearchScreen) -> String {
    let view = screen.view();
    let loading = matches!(view, SearchView::Loading { .. });
    let disabled = if loading { " disabled" } else { "" };

    let mut body = format!(
        "<form method=\"get\" action=\"/\">\
         <input type=\"text\" name=\"q\" placeholder=\"Search for a movie by title...\" value=\"{}\"{disabled}>\
         <button type=\"submit\"{disabled}>{}</button></form>\n",
        escape(screen.query()),
        if loading { "Searching..." } else { "Search" },
    );

    match view {
        SearchView::Loading { .. } => {}
        SearchView::Failed { message } => {
            let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(message));
        }
        SearchView::NoResults { query } => {
            let _ = writeln!(body, "<p>No movies found for &quot;{}&quot;</p>", escape(query));
        }
        SearchView::Results { items } => {
            body.push_str("<div class=\"results\">\n<h2>Search Results:</h2>\n");
            for item in items {
                let href = screen.activate_result(&item.identifier).path();
                let _ = writeln!(
                    body,
                    "<a class=\"card\" href=\"{}\"><img src=\"{}\" alt=\"{}\">\
                     <div class=\"card-body\"><h5>{}</h5><p>{}</p></div></a>",
                    escape(&href),
                    escape(&item.poster_url),
                    escape(&item.title),
                    escape(&item.title),
                    escape(&item.year),
                );
            }
            body.push_str("</div>");
        }
    }

    layout(APP_TITLE, &body)
}
