//! Deterministic avatar core: seed hashing, pool selection and generative
//! styles. Everything here is synchronous and free of shared mutable state.

pub mod catalog;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod pool;
pub mod seed;
pub mod styles;
pub mod url;

pub use error::AvatarError;
pub use hash::{cyrb53, hash_seed};
pub use manifest::Manifest;
pub use pool::{select_filename, select_pool_index};
pub use styles::{render_style, RenderOptions};
pub use url::AvatarUrl;
