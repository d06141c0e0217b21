use crate::models::StatisticsEntry;

pub fn render_json(entries: &[StatisticsEntry]) -> String {
    serde_json::to_string(entries).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_compact_array_with_stable_key_order() {
        let entries = vec![StatisticsEntry {
            id: "a".to_string(),
            description: "Opt A".to_string(),
            count: 3,
        }];
        assert_eq!(
            render_json(&entries),
            r#"[{"id":"a","description":"Opt A","count":3}]"#
        );
    }

    #[test]
    fn parses_back_to_the_same_entries() {
        let entries = vec![
            StatisticsEntry {
                id: "cats".to_string(),
                description: "Cats <3".to_string(),
                count: 2,
            },
            StatisticsEntry {
                id: "dogs".to_string(),
                description: "Dogs & \"friends\"".to_string(),
                count: 0,
            },
        ];
        let parsed: Vec<StatisticsEntry> = serde_json::from_str(&render_json(&entries)).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn renders_empty_list() {
        assert_eq!(render_json(&[]), "[]");
    }
}
