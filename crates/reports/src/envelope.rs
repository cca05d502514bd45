use configuration::ReportSettings;
use serde_json::{Value, json};
use ui_ast::tags::components;
use ui_ast::{DynamicValue, Node, Props, node_to_json, props, text};

/// Wraps a report tree in the modal the renderer opens for report output.
///
/// ```text
/// { "ui": { "modal": { size, headerContent, footerContent, content } } }
/// ```
pub fn wrap_modal(content: &Node, settings: &ReportSettings) -> Value {
    let header = components::space(vec![text(settings.title.as_str())], Props::new());

    let close_action = json!({ "action": "CloseModal" }).to_string();
    let close_button = components::button(
        vec![text("Close")],
        props([
            ("className", DynamicValue::from("form_action_button")),
            ("borderType", "danger".into()),
            ("buttonType", "outlined".into()),
            ("onClick", close_action.into()),
        ]),
    );
    let footer = components::space(
        vec![close_button],
        props([("justifyContent", DynamicValue::from("space-between"))]),
    );

    json!({
        "ui": {
            "modal": {
                "size": settings.modal_size,
                "headerContent": [node_to_json(&header)],
                "footerContent": [node_to_json(&footer)],
                "content": [node_to_json(content)],
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ui_ast::{element, none};

    #[test]
    fn test_modal_shape() {
        let content = element("div", none(), Props::new());
        let out = wrap_modal(&content, &ReportSettings::default());
        let modal = &out["ui"]["modal"];

        assert_eq!(
            modal.as_object().unwrap().keys().collect::<Vec<_>>(),
            ["size", "headerContent", "footerContent", "content"]
        );
        assert_eq!(modal["size"], "xxxl");
        assert_eq!(
            modal["headerContent"],
            json!([{
                "type": "Space",
                "children": [{"type": "#text", "props": {"value": "Pending Trades report"}}]
            }])
        );
        assert_eq!(
            modal["footerContent"],
            json!([{
                "type": "Space",
                "props": {"justifyContent": "space-between"},
                "children": [{
                    "type": "Button",
                    "props": {
                        "className": "form_action_button",
                        "borderType": "danger",
                        "buttonType": "outlined",
                        "onClick": "{\"action\":\"CloseModal\"}"
                    },
                    "children": [{"type": "#text", "props": {"value": "Close"}}]
                }]
            }])
        );
        assert_eq!(modal["content"], json!([{"type": "div"}]));
    }
}
