//! Documentation assignment notifications
//!
//! Only the `assigned` action produces a message; completions and
//! reassignment churn stay out of the room. Assignments picked up by the
//! automation account are suppressed as well.

use bridge_core::{EvalError, Mapping};
use serde_json::{json, Value};

use super::fields::{escape_html, obj_field, opt_str, str_field};

/// Mapping for documentation assignment webhooks
#[derive(Debug)]
pub struct DocsAssignmentMapping;

impl Mapping for DocsAssignmentMapping {
    fn evaluate(&self, payload: &Value) -> Result<Value, EvalError> {
        if str_field(payload, "action")? != "assigned" {
            return Ok(Value::Null);
        }

        let assignee = str_field(payload, "assignee")?;
        if assignee == "docs-bot" {
            return Ok(Value::Null);
        }

        let document = obj_field(payload, "document")?;
        let title = str_field(document, "title")?;
        let url = opt_str(document, "url");
        let assigner = opt_str(payload, "assigner");
        let due = opt_str(payload, "due");

        let mut plain = format!("📝 Documentation assigned to {assignee}");
        let mut html = format!(
            "📝 <b>Documentation assigned</b> to <b>{}</b>",
            escape_html(assignee)
        );

        if let Some(assigner) = assigner {
            plain.push_str(&format!(" by {assigner}"));
            html.push_str(&format!(" by {}", escape_html(assigner)));
        }

        plain.push_str(&format!(": \"{title}\""));
        match url {
            Some(url) => html.push_str(&format!(
                ": <a href=\"{}\">{}</a>",
                escape_html(url),
                escape_html(title)
            )),
            None => html.push_str(&format!(": <b>{}</b>", escape_html(title))),
        }

        if let Some(due) = due {
            plain.push_str(&format!(" (due {due})"));
            html.push_str(&format!(" (due {})", escape_html(due)));
        }

        Ok(json!({ "plain": plain, "html": html }))
    }
}
