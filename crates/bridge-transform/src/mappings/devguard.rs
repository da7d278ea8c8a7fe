//! DevGuard vulnerability findings
//!
//! Findings that were triaged away (`accepted`, `falsePositive`) are
//! suppressed; everything else becomes a severity-tagged report.

use bridge_core::{EvalError, Mapping};
use serde_json::{json, Value};

use super::fields::{escape_html, opt_str, str_field};

/// Mapping for DevGuard dependency-risk webhooks
#[derive(Debug)]
pub struct DevguardMapping;

impl Mapping for DevguardMapping {
    fn evaluate(&self, payload: &Value) -> Result<Value, EvalError> {
        let state = opt_str(payload, "state").unwrap_or("open");
        if matches!(state, "accepted" | "falsePositive") {
            return Ok(Value::Null);
        }

        let severity = str_field(payload, "severity")?;
        let cve = str_field(payload, "cveId")?;
        let package = str_field(payload, "packageName")?;
        let fixed_version = opt_str(payload, "fixedVersion");
        let asset = opt_str(payload, "assetName");
        let link = opt_str(payload, "link");

        let marker = severity_marker(severity);

        let mut plain = format!("{marker} {severity}: {cve} in {package}");
        let mut html = format!(
            "<b>{marker} {}</b>: <code>{}</code> in <code>{}</code>",
            escape_html(severity),
            escape_html(cve),
            escape_html(package)
        );

        if let Some(asset) = asset {
            plain.push_str(&format!(" (asset {asset})"));
            html.push_str(&format!(" (asset <b>{}</b>)", escape_html(asset)));
        }

        match fixed_version {
            Some(fixed) => {
                plain.push_str(&format!(". Fix available: {fixed}"));
                html.push_str(&format!(
                    ". Fix available: <code>{}</code>",
                    escape_html(fixed)
                ));
            }
            None => {
                plain.push_str(". No fixed version available yet");
                html.push_str(". No fixed version available yet");
            }
        }

        if let Some(link) = link {
            html.push_str(&format!(
                " (<a href=\"{}\">View finding</a>)",
                escape_html(link)
            ));
        }

        Ok(json!({ "plain": plain, "html": html }))
    }
}

fn severity_marker(severity: &str) -> &'static str {
    match severity.to_ascii_lowercase().as_str() {
        "critical" => "🔴",
        "high" => "🟠",
        "medium" => "🟡",
        "low" => "🟢",
        _ => "⚪",
    }
}
