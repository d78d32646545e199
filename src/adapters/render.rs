use crate::domain::model::ScopeState;

/// Plain-text rendering of a scope, items in the order they were received.
pub fn render(state: &ScopeState) -> String {
    let mut lines = Vec::new();

    match &state.order_prop {
        Some(key) => lines.push(format!("orderProp: {}", key)),
        None => lines.push("orderProp: -".to_string()),
    }

    match &state.phones {
        Some(phones) => {
            lines.push(format!("phones ({}):", phones.len()));
            for phone in phones {
                lines.push(format!("  {}", phone));
            }
        }
        None => lines.push("phones: (not loaded)".to_string()),
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ItemList, SortKey};
    use serde_json::json;

    #[test]
    fn test_render_blank_scope() {
        assert_eq!(
            render(&ScopeState::default()),
            "orderProp: -\nphones: (not loaded)"
        );
    }

    #[test]
    fn test_render_keeps_received_order() {
        let state = ScopeState {
            phones: Some(ItemList::new(vec![
                json!({"age": 3, "name": "Motorola"}),
                json!({"age": 1, "name": "Nexus"}),
            ])),
            order_prop: Some(SortKey::default()),
        };

        let lines: Vec<String> = render(&state).lines().map(String::from).collect();

        assert_eq!(lines[0], "orderProp: age");
        assert_eq!(lines[1], "phones (2):");
        assert!(lines[2].contains("Motorola"));
        assert!(lines[3].contains("Nexus"));
    }

    #[test]
    fn test_render_empty_list_differs_from_absent() {
        let state = ScopeState {
            phones: Some(ItemList::default()),
            order_prop: Some(SortKey::default()),
        };
        assert_eq!(render(&state), "orderProp: age\nphones (0):");
    }
}
