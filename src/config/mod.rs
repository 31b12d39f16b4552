//! 実行設定の読み込みとバリデーション

mod loader;
mod types;

pub use loader::load_settings;
pub use types::{
    ConfigError,
    Settings,
    ValidationError,
};
