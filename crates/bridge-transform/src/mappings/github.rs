//! GitHub webhook events
//!
//! GitHub does not label its payloads with an event name in the body, so the
//! shape decides: `pull_request`, `issue`, `pusher`, or `release`. Events
//! from `[bot]` accounts and comment threads are suppressed, as are actions
//! that would only add noise (label changes, synchronize pushes on PRs).

use bridge_core::{EvalError, Mapping};
use serde_json::{json, Value};

use super::fields::{escape_html, flag, obj_field, opt_arr, opt_str, str_field, u64_field};

/// Mapping for GitHub repository webhooks
#[derive(Debug)]
pub struct GithubMapping;

impl Mapping for GithubMapping {
    fn evaluate(&self, payload: &Value) -> Result<Value, EvalError> {
        if sender_is_bot(payload) {
            return Ok(Value::Null);
        }
        if payload.get("comment").is_some() {
            return Ok(Value::Null);
        }

        if payload.get("pull_request").is_some() {
            return pull_request_event(payload);
        }
        if payload.get("issue").is_some() {
            return issue_event(payload);
        }
        if payload.get("pusher").is_some() {
            return push_event(payload);
        }
        if payload.get("release").is_some() {
            return release_event(payload);
        }

        Ok(Value::Null)
    }
}

fn sender_is_bot(payload: &Value) -> bool {
    payload
        .get("sender")
        .and_then(|sender| sender.get("login"))
        .and_then(Value::as_str)
        .is_some_and(|login| login.ends_with("[bot]"))
}

fn repo_name(payload: &Value) -> Option<&str> {
    payload
        .get("repository")
        .and_then(|repo| repo.get("full_name"))
        .and_then(Value::as_str)
}

fn pull_request_event(payload: &Value) -> Result<Value, EvalError> {
    let pr = obj_field(payload, "pull_request")?;
    let action = str_field(payload, "action")?;
    let verb = match action {
        "opened" => "opened",
        "reopened" => "reopened",
        "ready_for_review" => "marked ready for review",
        "closed" if flag(pr, "merged") => "merged",
        "closed" => "closed",
        _ => return Ok(Value::Null),
    };

    let number = u64_field(pr, "number")?;
    let title = str_field(pr, "title")?;
    let url = opt_str(pr, "html_url");
    let author = pr
        .get("user")
        .and_then(|user| user.get("login"))
        .and_then(Value::as_str);

    let mut plain = format!("PR #{number} {verb}");
    let mut html = match url {
        Some(url) => format!("PR <a href=\"{}\">#{number}</a> {verb}", escape_html(url)),
        None => format!("PR #{number} {verb}"),
    };

    if let Some(repo) = repo_name(payload) {
        plain.push_str(&format!(" in {repo}"));
        html.push_str(&format!(" in <b>{}</b>", escape_html(repo)));
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
    let issue = obj_field(payload, "issue")?;
    let action = str_field(payload, "action")?;
    if !matches!(action, "opened" | "reopened" | "closed") {
        return Ok(Value::Null);
    }

    let number = u64_field(issue, "number")?;
    let title = str_field(issue, "title")?;
    let url = opt_str(issue, "html_url");

    let mut plain = format!("Issue #{number} {action}");
    let mut html = match url {
        Some(url) => format!(
            "Issue <a href=\"{}\">#{number}</a> {action}",
            escape_html(url)
        ),
        None => format!("Issue #{number} {action}"),
    };

    if let Some(repo) = repo_name(payload) {
        plain.push_str(&format!(" in {repo}"));
        html.push_str(&format!(" in <b>{}</b>", escape_html(repo)));
    }
    plain.push_str(&format!(": {title}"));
    html.push_str(&format!(": {}", escape_html(title)));

    Ok(json!({ "plain": plain, "html": html }))
}

fn push_event(payload: &Value) -> Result<Value, EvalError> {
    // Branch deletions arrive as pushes with no commits.
    if flag(payload, "deleted") {
        return Ok(Value::Null);
    }
    let commits = opt_arr(payload, "commits")?;
    if commits.is_empty() {
        return Ok(Value::Null);
    }

    let pusher = obj_field(payload, "pusher")?;
    let who = str_field(pusher, "name")?;
    let reference = opt_str(payload, "ref").unwrap_or("unknown");
    let branch = reference.strip_prefix("refs/heads/").unwrap_or(reference);

    let count = commits.len();
    let noun = if count == 1 { "commit" } else { "commits" };
    let head = payload
        .get("head_commit")
        .or_else(|| commits.last())
        .and_then(|commit| commit.get("message"))
        .and_then(Value::as_str)
        .and_then(|message| message.lines().next());

    let mut plain = format!("{who} pushed {count} {noun} to {branch}");
    let mut html = format!(
        "<b>{}</b> pushed {count} {noun} to <code>{}</code>",
        escape_html(who),
        escape_html(branch)
    );

    if let Some(repo) = repo_name(payload) {
        plain.push_str(&format!(" in {repo}"));
        html.push_str(&format!(" in <b>{}</b>", escape_html(repo)));
    }
    if let Some(head) = head {
        plain.push_str(&format!(": {head}"));
        html.push_str(&format!(": {}", escape_html(head)));
    }
    if let Some(compare) = opt_str(payload, "compare") {
        html.push_str(&format!(
            " (<a href=\"{}\">Compare</a>)",
            escape_html(compare)
        ));
    }

    Ok(json!({ "plain": plain, "html": html }))
}

fn release_event(payload: &Value) -> Result<Value, EvalError> {
    if opt_str(payload, "action") != Some("published") {
        return Ok(Value::Null);
    }

    let release = obj_field(payload, "release")?;
    let tag = str_field(release, "tag_name")?;
    let url = opt_str(release, "html_url");
    let name = opt_str(release, "name").filter(|name| !name.is_empty());

    let mut plain = format!("Release {tag} published");
    let mut html = match url {
        Some(url) => format!(
            "Release <a href=\"{}\">{}</a> published",
            escape_html(url),
            escape_html(tag)
        ),
        None => format!("Release {} published", escape_html(tag)),
    };

    if let Some(repo) = repo_name(payload) {
        plain.push_str(&format!(" in {repo}"));
        html.push_str(&format!(" in <b>{}</b>", escape_html(repo)));
    }
    if let Some(name) = name {
        plain.push_str(&format!(": {name}"));
        html.push_str(&format!(": {}", escape_html(name)));
    }

    Ok(json!({ "plain": plain, "html": html }))
}
