use crate::models::StatisticsEntry;

const HTML_START: &str = "<!doctype html><html><body>";
const HTML_END: &str = "</body></html>";

pub fn render_html(entries: &[StatisticsEntry]) -> String {
    let mut html = String::from(HTML_START);

    for entry in entries {
        html.push_str("<div>");
        for (key, value) in entry.fields() {
            html.push_str(&format!("<p>{key}: {value}</p>"));
        }
        html.push_str("</div>");
    }

    html.push_str(HTML_END);
    html
}
