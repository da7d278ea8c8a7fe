//! Test fixtures and payload generators
//!
//! Reusable webhook payloads, one per source system, shaped like the
//! bodies those systems actually send.

use serde_json::{json, Value};
use uuid::Uuid;

/// Generate a unique room id
pub fn unique_room() -> String {
    format!("!{}:example.org", Uuid::new_v4().simple())
}

/// GlitchTip error-tracker alert
pub fn glitchtip_alert() -> Value {
    json!({
        "alias": "GlitchTip",
        "text": "GlitchTip Alert",
        "attachments": [
            {
                "title": "*errors.errorString: Failed to setup database connection",
                "title_link": "https://glitchtip.example.org/devguard/issues/5",
                "text": "Failed to setup database connection",
                "color": "#e52b50",
                "fields": [
                    {"title": "Project", "value": "devguard-api", "short": true},
                    {"title": "Environment", "value": "production", "short": true}
                ]
            }
        ]
    })
}

/// DevGuard critical finding with a fix available
pub fn devguard_critical() -> Value {
    json!({
        "state": "open",
        "severity": "critical",
        "cveId": "CVE-2024-3094",
        "packageName": "xz-utils",
        "fixedVersion": "5.6.2",
        "assetName": "devguard-api",
        "link": "https://devguard.example.org/findings/42"
    })
}

/// DevGuard finding already triaged away
pub fn devguard_accepted() -> Value {
    let mut payload = devguard_critical();
    payload["state"] = json!("accepted");
    payload
}

/// Botkube resource-created event without recommendations
pub fn botkube_creation() -> Value {
    json!({
        "source": "k8s-events",
        "data": {
            "APIVersion": "v1",
            "Cluster": "prod-eu",
            "Kind": "Pod",
            "Level": "success",
            "Name": "nginx",
            "Namespace": "default",
            "Recommendations": [],
            "Resource": "v1/pods",
            "Title": "v1/pods created",
            "Type": "create",
            "Warnings": null
        },
        "timeStamp": "0001-01-01T00:00:00Z"
    })
}

/// GitHub pull request opened by a human
pub fn github_pr_opened() -> Value {
    json!({
        "action": "opened",
        "pull_request": {
            "number": 97,
            "title": "Handle branch deletions in push events",
            "html_url": "https://github.example.org/core/bridge/pull/97",
            "merged": false,
            "user": {"login": "mara"}
        },
        "repository": {"full_name": "core/bridge"},
        "sender": {"login": "mara"}
    })
}

/// GitHub pull request opened by a bot account
pub fn github_bot_pr() -> Value {
    let mut payload = github_pr_opened();
    payload["sender"]["login"] = json!("dependabot[bot]");
    payload["pull_request"]["user"]["login"] = json!("dependabot[bot]");
    payload
}

/// GitLab pipeline success event
pub fn gitlab_pipeline_success() -> Value {
    json!({
        "object_kind": "pipeline",
        "user": {"name": "Mara Salvi", "username": "mara"},
        "object_attributes": {"status": "success", "ref": "main"},
        "project": {"path_with_namespace": "core/bridge"}
    })
}

/// Documentation assignment event
pub fn docs_assignment() -> Value {
    json!({
        "action": "assigned",
        "assignee": "mara",
        "assigner": "jun",
        "due": "2025-09-01",
        "document": {
            "title": "Operating the webhook bridge",
            "url": "https://docs.example.org/ops/webhook-bridge"
        }
    })
}
