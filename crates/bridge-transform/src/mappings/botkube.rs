//! Botkube Kubernetes event notifications
//!
//! Botkube wraps every event in `{source, data, timeStamp}`; the interesting
//! content lives under `data`. Recommendations and warnings are rendered as
//! list sections only when they carry entries.

use bridge_core::{EvalError, Mapping};
use serde_json::{json, Value};

use super::fields::{escape_html, obj_field, opt_arr, opt_str, str_field};

/// Mapping for Botkube event webhooks
#[derive(Debug)]
pub struct BotkubeMapping;

impl Mapping for BotkubeMapping {
    fn evaluate(&self, payload: &Value) -> Result<Value, EvalError> {
        let data = obj_field(payload, "data")?;
        let title = str_field(data, "Title")?;

        let level = opt_str(data, "Level").unwrap_or("info");
        let icon = level_icon(level);

        let mut plain = format!("{icon} {title}");
        let mut html = format!("<b>{icon} {}</b>", escape_html(title));

        let location = location_line(data);
        if let Some((plain_loc, html_loc)) = location {
            plain.push_str(": ");
            plain.push_str(&plain_loc);
            html.push_str("<br/>");
            html.push_str(&html_loc);
        }

        let recommendations = string_items(opt_arr(data, "Recommendations")?);
        let warnings = string_items(opt_arr(data, "Warnings")?);
        append_list(&mut plain, &mut html, "Recommendations", &recommendations);
        append_list(&mut plain, &mut html, "Warnings", &warnings);

        Ok(json!({ "plain": plain, "html": html }))
    }
}

fn level_icon(level: &str) -> &'static str {
    match level {
        "success" => "✅",
        "error" | "critical" => "❌",
        "warn" | "warning" => "⚠️",
        _ => "ℹ️",
    }
}

/// Resource coordinates: kind, namespace/name, and cluster, whichever exist
fn location_line(data: &Value) -> Option<(String, String)> {
    let kind = opt_str(data, "Kind");
    let cluster = opt_str(data, "Cluster");
    let coords = match (opt_str(data, "Namespace"), opt_str(data, "Name")) {
        (Some(ns), Some(name)) => Some(format!("{ns}/{name}")),
        (None, Some(name)) => Some(name.to_string()),
        _ => None,
    };

    let mut plain_parts: Vec<String> = Vec::new();
    let mut html_parts: Vec<String> = Vec::new();

    match (kind, &coords) {
        (Some(kind), Some(coords)) => {
            plain_parts.push(format!("{kind} {coords}"));
            html_parts.push(format!(
                "{} <code>{}</code>",
                escape_html(kind),
                escape_html(coords)
            ));
        }
        (Some(kind), None) => {
            plain_parts.push(kind.to_string());
            html_parts.push(escape_html(kind));
        }
        (None, Some(coords)) => {
            plain_parts.push(coords.clone());
            html_parts.push(format!("<code>{}</code>", escape_html(coords)));
        }
        (None, None) => {}
    }

    if let Some(cluster) = cluster {
        plain_parts.push(format!("on cluster {cluster}"));
        html_parts.push(format!("on cluster <b>{}</b>", escape_html(cluster)));
    }

    if plain_parts.is_empty() {
        None
    } else {
        Some((plain_parts.join(" "), html_parts.join(" ")))
    }
}

fn string_items<'a>(items: &'a [Value]) -> Vec<&'a str> {
    items.iter().filter_map(Value::as_str).collect()
}

fn append_list(plain: &mut String, html: &mut String, label: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    plain.push_str(&format!("\n{label}:"));
    html.push_str(&format!("<br/><b>{label}:</b><ul>"));
    for item in items {
        plain.push_str(&format!("\n- {item}"));
        html.push_str(&format!("<li>{}</li>", escape_html(item)));
    }
    html.push_str("</ul>");
}
