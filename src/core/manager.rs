//! The primary interface for token operations.
//!
//! `Manager` composes a [`Store`] and a [`Cipher`]. Every operation runs one
//! full cycle: read the blob, decrypt, parse, (mutate, serialize, encrypt,
//! write). Nothing is cached between calls; the store file is the only state.

use tracing::{debug, info};

use crate::core::cipher::{Age, Cipher};
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{group_key, token_key, Token, TokenGroup, TokenStore};
use crate::core::key::Key;
use crate::core::store::{Filesystem, Fingerprint, Store};
use crate::core::types::{GroupName, TokenName};
use crate::error::{Result, TokenError, ValidationError};

/// Encrypted token registry.
pub struct Manager {
    store: Box<dyn Store>,
    cipher: Box<dyn Cipher>,
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("path", &self.store.path())
            .field("cipher", &self.cipher.name())
            .finish()
    }
}

impl Manager {
    /// Compose a manager from its parts.
    pub fn new(store: impl Store + 'static, cipher: impl Cipher + 'static) -> Self {
        Self {
            store: Box::new(store),
            cipher: Box::new(cipher),
        }
    }

    /// Manager over `store` using the age cipher with `key`.
    pub fn with_key(store: impl Store + 'static, key: Key) -> Self {
        Self::new(store, Age::new(key))
    }

    /// Manager for the store file and key named by `settings`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError` if the key variable is unset or invalid.
    pub fn open(settings: &Settings) -> Result<Self> {
        let key = Key::from_env(&settings.key_var)?;
        Ok(Self::with_key(Filesystem::new(&settings.path), key))
    }

    /// Check whether the store file exists.
    pub fn has_file(&self) -> bool {
        self.store.exists()
    }

    /// Create the store file holding an empty document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileOverwrite` if the file already holds data.
    pub fn make_file(&self) -> Result<()> {
        let encrypted = self.cipher.encrypt(constants::EMPTY_DOCUMENT)?;
        self.store.initialize(&encrypted)?;
        info!(path = %self.store.path().display(), "store file created");
        Ok(())
    }

    /// Read and decrypt the whole document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no store file and
    /// `CipherError::DecryptionFailed` if it cannot be decrypted.
    pub fn read_document(&self) -> Result<TokenStore> {
        self.load().map(|(document, _)| document)
    }

    /// Store a token under `name` in `group`.
    ///
    /// The group is created if needed. Nothing is written when the call fails.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Overwrite` if the name is taken and `force` is false,
    /// and `ValidationError` for empty names or secrets.
    pub fn store_token(&self, token: Token, name: &str, group: &str, force: bool) -> Result<()> {
        let (name, group) = normalize(name, group)?;
        if token.secret().is_empty() {
            return Err(ValidationError::EmptySecret(name).into());
        }

        let (mut document, seen) = self.load()?;
        let tokens = document.group_entry(&group);

        if tokens.contains(&name) && !force {
            return Err(TokenError::Overwrite { name, group }.into());
        }

        let replaced = tokens.insert(&name, token).is_some();
        self.save(&document, &seen)?;

        debug!(name = %name, group = %group, replaced, "token stored");
        Ok(())
    }

    /// Read the token `name` from `group`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::GroupNotFound` if the group does not exist and
    /// `TokenError::TokenNotFound` if the group has no such token.
    pub fn read_token(&self, name: &str, group: &str) -> Result<Token> {
        let (name, group) = normalize(name, group)?;
        let document = self.read_document()?;

        let tokens = document
            .group(&group)
            .ok_or_else(|| TokenError::GroupNotFound(group.clone()))?;
        let token = tokens
            .get(&name)
            .ok_or_else(|| TokenError::TokenNotFound {
                name: name.clone(),
                group: group.clone(),
            })?;

        debug!(name = %name, group = %group, "token read");
        Ok(token.clone())
    }

    /// List every group and token.
    pub fn list_tokens(&self) -> Result<TokenStore> {
        self.read_document()
    }

    /// List the tokens of one group.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::GroupNotFound` if the group does not exist.
    pub fn list_group(&self, group: &str) -> Result<TokenGroup> {
        let group = normalize_group(group)?;
        let mut document = self.read_document()?;
        document
            .remove_group(&group)
            .ok_or_else(|| TokenError::GroupNotFound(group).into())
    }

    /// Delete the token `name` from `group`.
    ///
    /// A group left without tokens is removed as well.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::TokenNotFound` if there is no such token, whether
    /// or not the group exists.
    pub fn delete_token(&self, name: &str, group: &str) -> Result<()> {
        let (name, group) = normalize(name, group)?;
        let (mut document, seen) = self.load()?;

        let not_found = || TokenError::TokenNotFound {
            name: name.clone(),
            group: group.clone(),
        };

        let tokens = document.group_mut(&group).ok_or_else(not_found)?;
        tokens.remove(&name).ok_or_else(not_found)?;
        if tokens.is_empty() {
            document.remove_group(&group);
        }

        self.save(&document, &seen)?;

        debug!(name = %name, group = %group, "token deleted");
        Ok(())
    }

    fn load(&self) -> Result<(TokenStore, Fingerprint)> {
        let encrypted = self.store.read_raw()?;
        let seen = Fingerprint::of(&encrypted);
        let plaintext = self.cipher.decrypt(&encrypted)?;
        let document = TokenStore::from_json(&plaintext)?;
        debug!(
            groups = document.len(),
            tokens = document.token_count(),
            "document loaded"
        );
        Ok((document, seen))
    }

    fn save(&self, document: &TokenStore, seen: &Fingerprint) -> Result<()> {
        let plaintext = document.to_json()?;
        let encrypted = self.cipher.encrypt(&plaintext)?;
        self.store.replace(seen, &encrypted)
    }
}

fn normalize(name: &str, group: &str) -> Result<(TokenName, GroupName)> {
    let name = token_key(name);
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    Ok((name, normalize_group(group)?))
}

fn normalize_group(group: &str) -> Result<GroupName> {
    let group = group_key(group);
    if group.is_empty() {
        return Err(ValidationError::EmptyGroup.into());
    }
    Ok(group)
}
