//! GlitchTip error tracker alerts
//!
//! GlitchTip posts Slack-compatible webhook payloads: a top-level `text`
//! plus one attachment carrying the issue title, link, and metadata fields.
//! The project name travels inside the attachment's `fields` list.

use bridge_core::{EvalError, Mapping};
use serde_json::{json, Value};

use super::fields::{arr_field, escape_html, opt_str, str_field};

/// Mapping for GlitchTip alert webhooks
#[derive(Debug)]
pub struct GlitchtipMapping;

impl Mapping for GlitchtipMapping {
    fn evaluate(&self, payload: &Value) -> Result<Value, EvalError> {
        let text = str_field(payload, "text")?;

        let attachments = arr_field(payload, "attachments")?;
        let attachment = attachments
            .first()
            .ok_or_else(|| EvalError::missing("attachments[0]"))?;

        let title = str_field(attachment, "title")?;
        let link = str_field(attachment, "title_link")?;

        let mut html = format!("<b>{}:</b> ", escape_html(text));
        if let Some(project) = project_field(attachment) {
            html.push_str(&escape_html(project));
            html.push_str(": ");
        }
        html.push_str(&format!(
            "{} (<a href=\"{}\">View Issue</a>)",
            escape_html(title),
            escape_html(link),
        ));

        Ok(json!({ "plain": text, "html": html }))
    }
}

/// The project name, carried as an attachment metadata field
fn project_field(attachment: &Value) -> Option<&str> {
    let fields = attachment.get("fields")?.as_array()?;
    fields
        .iter()
        .find(|f| opt_str(f, "title") == Some("Project"))
        .and_then(|f| opt_str(f, "value"))
}
