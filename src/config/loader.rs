//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    Settings,
};

/// 設定ファイル名（カタログフォルダ直下）
const CONFIG_FILE_NAME: &str = ".resx-diff.json";

/// カタログフォルダから設定を読み込む
///
/// `.resx-diff.json` ファイルを探して読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_folder(folder: &Path) -> Result<Option<Settings>, ConfigError> {
    let config_path = folder.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: Settings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// フォルダの設定を読み込み、バリデーションして返す
///
/// 設定ファイルが無い場合は既定値を使う。
///
/// # Errors
/// - ファイル読み込みまたは JSON パースエラー
/// - バリデーションエラー
pub fn load_settings(folder: &Path) -> Result<Settings, ConfigError> {
    let settings = load_from_folder(folder)?.map_or_else(Settings::default, |loaded| {
        tracing::debug!("Loaded folder settings: {:?}", loaded);
        loaded
    });

    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(settings)
}
