use crate::models::StatisticsEntry;

const XML_START: &str = r#"<?xml version="1.0" encoding="UTF-8" ?><root>"#;
const XML_END: &str = "</root>";

pub fn render_xml(entries: &[StatisticsEntry]) -> String {
    let mut xml = String::from(XML_START);

    for entry in entries {
        xml.push_str("<row>");
        for (key, value) in entry.fields() {
            xml.push_str(&format!("<{key}>{value}</{key}>"));
        }
        xml.push_str("</row>");
    }

    xml.push_str(XML_END);
    xml
}
