//! The plaintext token document.
//!
//! `TokenStore` maps uppercase group names to `TokenGroup`s, which map
//! lowercase token names to `Token`s. Every lookup and insert normalizes its
//! key, so callers never have to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;
use zeroize::Zeroizing;

use super::Token;
use crate::core::types::{GroupName, Timestamp, TokenName};
use crate::error::{Result, StoreError};

/// Canonical form of a token name.
pub fn token_key(name: &str) -> TokenName {
    name.trim().to_lowercase()
}

/// Canonical form of a group name.
pub fn group_key(group: &str) -> GroupName {
    group.trim().to_uppercase()
}

/// Tokens of one group, keyed by lowercase name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenGroup {
    tokens: BTreeMap<TokenName, Token>,
}

impl TokenGroup {
    /// Look up a token.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.tokens.get(&token_key(name))
    }

    /// Check whether a token exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(&token_key(name))
    }

    /// Insert or replace a token, returning the previous one.
    pub fn insert(&mut self, name: &str, token: Token) -> Option<Token> {
        self.tokens.insert(token_key(name), token)
    }

    /// Remove a token.
    pub fn remove(&mut self, name: &str) -> Option<Token> {
        self.tokens.remove(&token_key(name))
    }

    /// Tokens in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.tokens.iter().map(|(name, token)| (name.as_str(), token))
    }

    /// Tokens that have expired as of `now`.
    pub fn expired(&self, now: Timestamp) -> TokenGroup {
        let tokens = self
            .tokens
            .iter()
            .filter(|(_, token)| token.is_expired_at(now))
            .map(|(name, token)| (name.clone(), token.clone()))
            .collect();
        TokenGroup { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// The whole document: every group and token in the store file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStore {
    groups: BTreeMap<GroupName, TokenGroup>,
}

impl TokenStore {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a decrypted document.
    ///
    /// Keys are normalized on the way in. When two keys collapse into one,
    /// groups are merged and the token under the later key (in byte order)
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidFormat` if the bytes are not a document.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let raw: TokenStore = serde_json::from_slice(bytes)
            .map_err(|e| StoreError::InvalidFormat(e.to_string()))?;
        Ok(raw.normalized())
    }

    /// Serialize the whole document.
    pub fn to_json(&self) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(serde_json::to_vec(self)?))
    }

    fn normalized(self) -> Self {
        let mut out = TokenStore::new();
        for (group, tokens) in &self.groups {
            let target = out.group_entry(group);
            for (name, token) in tokens.iter() {
                if target.insert(name, token.clone()).is_some() {
                    warn!(
                        group = %group_key(group),
                        name = %token_key(name),
                        "duplicate token name after case folding; keeping the last one"
                    );
                }
            }
        }
        out
    }

    /// Look up a group.
    pub fn group(&self, group: &str) -> Option<&TokenGroup> {
        self.groups.get(&group_key(group))
    }

    /// Look up a group for modification.
    pub fn group_mut(&mut self, group: &str) -> Option<&mut TokenGroup> {
        self.groups.get_mut(&group_key(group))
    }

    /// Get a group, creating it empty if absent.
    pub fn group_entry(&mut self, group: &str) -> &mut TokenGroup {
        self.groups.entry(group_key(group)).or_default()
    }

    /// Remove a whole group.
    pub fn remove_group(&mut self, group: &str) -> Option<TokenGroup> {
        self.groups.remove(&group_key(group))
    }

    /// Groups in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenGroup)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    /// Only the tokens that have expired as of `now`, dropping groups left empty.
    pub fn expired(&self, now: Timestamp) -> TokenStore {
        let groups = self
            .groups
            .iter()
            .map(|(name, group)| (name.clone(), group.expired(now)))
            .filter(|(_, group)| !group.is_empty())
            .collect();
        TokenStore { groups }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of tokens across all groups.
    pub fn token_count(&self) -> usize {
        self.groups.values().map(TokenGroup::len).sum()
    }
}
