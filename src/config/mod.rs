// src/config/mod.rs

//! Configuration loading for replicator.
//!
//! Responsibilities:
//! - Define the typed model and its defaults (`model.rs`).
//! - Hold decoded documents in a generic tree (`tree.rs`).
//! - Turn HCL or TOML text into that tree (`decode.rs`).
//! - Overlay the tree onto the defaults, field by field (`merge.rs`).
//! - Tie the steps together for a file on disk (`loader.rs`).

pub mod decode;
pub mod loader;
pub mod merge;
pub mod model;
pub mod tree;

pub use decode::{DocumentDecoder, HclDecoder, TomlDecoder, decoder_for};
pub use loader::{Loader, default_config_path, load};
pub use merge::{Merger, merge};
pub use model::{ClusterScaling, Config, JobScaling, Telemetry, default_config};
pub use tree::{Node, Tree};
