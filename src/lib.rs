//! tkmanager - safe local storage for tokens.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── make_file     # Create the store file
//! │   ├── store         # Store a token
//! │   ├── read          # Print a token
//! │   ├── list          # Tree / JSON listing
//! │   ├── delete        # Delete a token
//! │   ├── keygen        # Print a fresh key
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # Authenticated encryption codec
//!     │   ├── mod       # Cipher trait
//!     │   └── age       # age implementation
//!     ├── config        # Store path and key variable resolution
//!     ├── domain/       # Token, TokenGroup, TokenStore, expiration parsing
//!     ├── key           # Key material
//!     ├── manager       # Read-decrypt-mutate-encrypt-write operations
//!     └── store/        # Blob storage
//!         ├── mod       # Store trait
//!         ├── fs        # Atomic file storage
//!         └── memory    # In-memory storage
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tkmanager::{Key, Manager, Token};
//! use tkmanager::core::store::Filesystem;
//!
//! # fn main() -> tkmanager::error::Result<()> {
//! let manager = Manager::with_key(Filesystem::new("/tmp/TKMANAGER"), Key::generate());
//! manager.make_file()?;
//! manager.store_token(Token::new("ghp_xxx", None), "github", "DEFAULT", false)?;
//! assert_eq!(manager.read_token("GitHub", "default")?.secret(), "ghp_xxx");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{Token, TokenGroup, TokenStore};
pub use crate::core::key::Key;
pub use crate::core::manager::Manager;
