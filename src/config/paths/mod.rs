//! Filesystem locations for configuration.

pub mod xdg_root;

pub use xdg_root::{config_home, user_config_path};
