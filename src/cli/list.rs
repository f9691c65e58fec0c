//! List command.
//!
//! Renders stored token names as a tree or JSON. Secrets are never printed.

use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::cli::output;
use crate::core::constants::DEFAULT_GROUP;
use crate::core::domain::{group_key, TokenGroup, TokenStore};
use crate::core::types::Timestamp;
use crate::error::Result;

/// List tokens, optionally restricted to one group and/or to expired tokens.
pub fn execute(file: Option<&Path>, group: Option<&str>, expired: bool, json: bool) -> Result<()> {
    let manager = crate::cli::open_existing(file)?;
    let now = Utc::now().timestamp();

    let mut document = match group {
        Some(name) => {
            let tokens = manager.list_group(name)?;
            let mut single = TokenStore::new();
            *single.group_entry(name) = tokens;
            single
        }
        None => manager.list_tokens()?,
    };
    if expired {
        document = document.expired(now);
    }

    if json {
        output::data(&serde_json::to_string_pretty(&to_json(&document, now))?);
    } else if document.is_empty() {
        match group {
            Some(name) if !expired => output::dimmed(&format!("group {} is empty", group_key(name))),
            _ if expired => output::dimmed("no expired tokens"),
            _ => output::dimmed("no tokens stored"),
        }
    } else {
        for line in render_tree(&document, now) {
            output::data(&line);
        }
    }
    Ok(())
}

/// Groups in display order: `DEFAULT` first, the rest alphabetically.
fn ordered(document: &TokenStore) -> Vec<(&str, &TokenGroup)> {
    let mut groups: Vec<_> = document.iter().collect();
    groups.sort_by_key(|(name, _)| (*name != DEFAULT_GROUP, *name));
    groups
}

fn render_tree(document: &TokenStore, now: Timestamp) -> Vec<String> {
    let mut lines = Vec::new();
    for (group, tokens) in ordered(document) {
        lines.push(group.to_string());
        let count = tokens.len();
        for (i, (name, token)) in tokens.iter().enumerate() {
            let branch = if i + 1 == count { "└──" } else { "├──" };
            let mut line = format!("{} {}", branch, output::key(name));
            if let Some(expires) = token.expires() {
                line.push_str(&format!(" : {}", expires));
                if token.is_expired_at(now) {
                    line.push_str(&format!(" {}", output::expired("(expired)")));
                }
            }
            lines.push(line);
        }
    }
    lines
}

fn to_json(document: &TokenStore, now: Timestamp) -> serde_json::Value {
    let groups: serde_json::Map<String, serde_json::Value> = ordered(document)
        .into_iter()
        .map(|(group, tokens)| {
            let entries: Vec<_> = tokens
                .iter()
                .map(|(name, token)| {
                    json!({
                        "name": name,
                        "expires": token.expires(),
                        "expired": token.is_expired_at(now),
                    })
                })
                .collect();
            (group.to_string(), serde_json::Value::Array(entries))
        })
        .collect();

    json!({
        "groups": groups,
        "count": document.token_count(),
    })
}
