//! Server-side HTML for the two screens.
//!
//! Every string that comes from the directory or the user passes through
//! [`escape`] before it is written into markup.

pub mod detail_page;
pub mod search_page;

pub const APP_TITLE: &str = "My Movie Search App";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0}\
.container{width:90%;max-width:1000px;margin:1.5rem auto}\
form{display:flex;gap:.5rem}\
input[type=text]{flex:1;padding:.4rem}\
.error{color:#dc3545}\
.card{display:block;border:1px solid #ddd;border-radius:6px;margin-bottom:1rem;color:inherit;text-decoration:none}\
.card img{max-width:100%}\
.card-body{padding:.75rem}\
.detail{display:flex;flex-direction:column;align-items:center}\
.detail img{width:100%;max-width:500px}\
.rating{margin-right:.5rem}";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `body` in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<div class=\"container\">\n{body}\n</div>\n</body>\n</html>\n",
        escape(title)
    )
}
