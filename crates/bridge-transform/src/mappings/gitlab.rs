//! GitLab webhook events
//!
//! GitLab labels every payload with `object_kind`, which makes dispatch
//! simpler than GitHub's shape sniffing. Comment (`note`) events and
//! anything from service accounts (`ghost`, `*_bot*`) are suppressed.

use bridge_core::{EvalError, Mapping};
use serde_json::{json, Value};

use super::fields::{escape_html, obj_field, opt_arr, opt_str, str_field, u64_field};

/// Mapping for GitLab project webhooks
#[derive(Debug)]
pub struct GitlabMapping;

impl Mapping for GitlabMapping {
    fn evaluate(&self, payload: &Value) -> Result<Value, EvalError> {
        if actor_is_bot(payload) {
            return Ok(Value::Null);
        }

        match str_field(payload, "object_kind")? {
            "push" => push_event(payload),
            "merge_request" => merge_request_event(payload),
            "issue" => issue_event(payload),
            "pipeline" => pipeline_event(payload),
            _ => Ok(Value::Null),
        }
    }
}

/// Push events carry `user_username` at the top level, everything else
/// nests a `user` object.
fn actor_is_bot(payload: &Value) -> bool {
    let username = payload
        .get("user")
        .and_then(|user| user.get("username"))
        .and_then(Value::as_str)
        .or_else(|| opt_str(payload, "user_username"));
    username.is_some_and(|name| name == "ghost" || name.contains("_bot"))
}

fn project_path(payload: &Value) -> Option<&str> {
    payload
        .get("project")
        .and_then(|project| project.get("path_with_namespace"))
        .and_then(Value::as_str)
}

fn push_event(payload: &Value) -> Result<Value, EvalError> {
    // Branch deletions arrive as pushes with a zero commit count.
    let count = payload
        .get("total_commits_count")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    if count == 0 {
        return Ok(Value::Null);
    }

    let who = str_field(payload, "user_name")?;
    let reference = opt_str(payload, "ref").unwrap_or("unknown");
    let branch = reference.strip_prefix("refs/heads/").unwrap_or(reference);
    let noun = if count == 1 { "commit" } else { "commits" };

    let mut plain = format!("{who} pushed {count} {noun} to {branch}");
    let mut html = format!(
        "<b>{}</b> pushed {count} {noun} to <code>{}</code>",
        escape_html(who),
        escape_html(branch)
    );

    if let Some(project) = project_path(payload) {
        plain.push_str(&format!(" in {project}"));
        html.push_str(&format!(" in <b>{}</b>", escape_html(project)));
    }

    // Commits are listed oldest first.
    let head = opt_arr(payload, "commits")?
        .last()
        .and_then(|commit| commit.get("title").or_else(|| commit.get("message")))
        .and_then(Value::as_str)
        .and_then(|message| message.lines().next());
    if let Some(head) = head {
        plain.push_str(&format!(": {head}"));
        html.push_str(&format!(": {}", escape_html(head)));
    }

    Ok(json!({ "plain": plain, "html": html }))
}

fn merge_request_event(payload: &Value) -> Result<Value, EvalError> {
    let attrs = obj_field(payload, "object_attributes")?;
    let verb = match str_field(attrs, "action")? {
        "open" => "opened",
        "reopen" => "reopened",
        "merge" => "merged",
        "close" => "closed",
        _ => return Ok(Value::Null),
    };

    let iid = u64_field(attrs, "iid")?;
    let title = str_field(attrs, "title")?;
    let url = opt_str(attrs, "url");
    let author = payload
        .get("user")
        .and_then(|user| user.get("name").or_else(|| user.get("username")))
        .and_then(Value::as_str);

    let mut plain = format!("Merge request !{iid} {verb}");
    let mut html = match url {
        Some(url) => format!(
            "Merge request <a href=\"{}\">!{iid}</a> {verb}",
            escape_html(url)
        ),
        None => format!("Merge request !{iid} {verb}"),
    };

    if let Some(project) = project_path(payload) {
        plain.push_str(&format!(" in {project}"));
        html.push_str(&format!(" in <b>{}</b>", escape_html(project)));
    }
    plain.push_str(&format!(": {title}"));
    html.push_str(&format!(": {}", escape_html(title)));
    if let Some(author) = author {
        plain.push_str(&format!(" (by {author})"));
        html.push_str(&format!(" (by {})", escape_html(author)));
    }

    Ok(json!({ "plain": plain, "html": html }))
}

fn issue_event(payload: &Value) -> Result<Value, EvalError> {
    let attrs = obj_field(payload, "object_attributes")?;
    let verb = match str_field(attrs, "action")? {
        "open" => "opened",
        "reopen" => "reopened",
        "close" => "closed",
        _ => return Ok(Value::Null),
    };

    let iid = u64_field(attrs, "iid")?;
    let title = str_field(attrs, "title")?;
    let url = opt_str(attrs, "url");

    let mut plain = format!("Issue #{iid} {verb}");
    let mut html = match url {
        Some(url) => format!("Issue <a href=\"{}\">#{iid}</a> {verb}", escape_html(url)),
        None => format!("Issue #{iid} {verb}"),
    };

    if let Some(project) = project_path(payload) {
        plain.push_str(&format!(" in {project}"));
        html.push_str(&format!(" in <b>{}</b>", escape_html(project)));
    }
    plain.push_str(&format!(": {title}"));
    html.push_str(&format!(": {}", escape_html(title)));

    Ok(json!({ "plain": plain, "html": html }))
}

fn pipeline_event(payload: &Value) -> Result<Value, EvalError> {
    let attrs = obj_field(payload, "object_attributes")?;
    let (icon, verb) = match str_field(attrs, "status")? {
        "success" => ("✅", "succeeded"),
        "failed" => ("❌", "failed"),
        _ => return Ok(Value::Null),
    };

    let mut plain = format!("{icon} Pipeline {verb}");
    let mut html = format!("{icon} <b>Pipeline {verb}</b>");

    if let Some(reference) = opt_str(attrs, "ref") {
        plain.push_str(&format!(" on {reference}"));
        html.push_str(&format!(" on <code>{}</code>", escape_html(reference)));
    }
    if let Some(project) = project_path(payload) {
        plain.push_str(&format!(" in {project}"));
        html.push_str(&format!(" in <b>{}</b>", escape_html(project)));
    }

    Ok(json!({ "plain": plain, "html": html }))
}
