//! リソースフォルダの読み込み
//!
//! フォルダを走査し、フラットな JSON リソースファイルをカタログへ
//! 読み込みます。ファイル名の言語サフィックスでチャネルを判別します:
//! `Strings.json`（Neutral）、`Strings.de.json`（German）、
//! `Strings.fr.json`（French）。`Strings.invariant.json` は翻訳対象外
//! エントリのキー一覧です。

use std::collections::{
    BTreeMap,
    BTreeSet,
    HashMap,
    HashSet,
};
use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use thiserror::Error;

use crate::catalog::entry::ResourceEntry;
use crate::config::Settings;
use crate::types::{
    Channel,
    ChannelValues,
    ResourceKey,
};

/// エントリキーに対するコメントを持つキーの接頭辞
const COMMENT_PREFIX: &str = "_comment.";

/// invariant キー一覧ファイルのサフィックス
const INVARIANT_SUFFIX: &str = "invariant";

/// Defines errors that may occur while loading a resource folder.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when the folder does not exist
    #[error("folder \"{0}\" does not exist")]
    FolderNotFound(PathBuf),
    /// Error when a configured glob pattern is invalid
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    /// Error when a resource file is not valid JSON
    #[error("failed to parse resource file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// メモリ上のリソースカタログ
///
/// エントリは 1 回のロードで構築され、以降は読み取り専用。スナップ
/// ショットの適用（履歴値の設定）だけがクレート内部から行われる。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ResourceEntry>,
}

/// 1 リソースファイル（project + base name）分の収集バッファ
#[derive(Debug, Default)]
struct FileBuilder {
    values: HashMap<String, ChannelValues>,
    comments: HashMap<String, ChannelValues>,
    invariant_keys: HashSet<String>,
}

impl Catalog {
    /// フォルダからカタログを読み込む
    ///
    /// # Errors
    /// - フォルダが存在しない
    /// - 設定の glob パターンが不正
    /// - リソースファイルの JSON パースエラー
    ///
    /// 読み込めないファイルは警告を出して処理を続行する。
    pub fn load(folder: &Path, settings: &Settings) -> Result<Self, CatalogError> {
        if !folder.is_dir() {
            return Err(CatalogError::FolderNotFound(folder.to_path_buf()));
        }

        tracing::debug!(folder = %folder.display(), "Loading resource folder");

        let include_set = build_glob_set(&settings.include_patterns)?;
        let exclude_set = build_glob_set(&settings.exclude_patterns)?;

        let mut files: BTreeMap<(String, String), FileBuilder> = BTreeMap::new();

        for result in WalkBuilder::new(folder)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            // ファイルのみを対象
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();

            // フォルダからの相対パスでパターン判定する
            let Ok(relative_path) = path.strip_prefix(folder) else {
                continue;
            };
            if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
                continue;
            }

            load_resource_file(folder, path, relative_path, &mut files)?;
        }

        let entries = build_entries(files);
        tracing::info!(entries = entries.len(), "Loaded resource folder");

        Ok(Self { entries })
    }

    /// テストや別ホスト実装向けに、構築済みエントリからカタログを作る
    #[must_use]
    pub fn from_entries(entries: Vec<ResourceEntry>) -> Self {
        Self { entries }
    }

    /// カタログの全エントリ
    #[must_use]
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ResourceEntry] {
        &mut self.entries
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, CatalogError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| CatalogError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| CatalogError::InvalidPattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}

/// 1 ファイルを読み込み、対応する収集バッファへ取り込む
fn load_resource_file(
    folder: &Path,
    path: &Path,
    relative_path: &Path,
    files: &mut BTreeMap<(String, String), FileBuilder>,
) -> Result<(), CatalogError> {
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return Ok(());
    };

    // "Strings" / "Strings.de" / "Strings.invariant" を分解する
    let (base_name, suffix) = match stem.split_once('.') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (stem, None),
    };

    let project_name = project_name_for(folder, relative_path);

    // 読み込めないファイルは警告として扱い、処理を続行
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read resource file");
            return Ok(());
        }
    };

    let builder = files.entry((project_name, base_name.to_string())).or_default();

    if suffix == Some(INVARIANT_SUFFIX) {
        let keys: Vec<String> = serde_json::from_str(&content)
            .map_err(|e| CatalogError::Parse { path: path.to_path_buf(), source: e })?;
        builder.invariant_keys.extend(keys);
        return Ok(());
    }

    let Some(channel) = Channel::from_file_suffix(suffix) else {
        // 未対応の言語サフィックスは対象外
        tracing::debug!(path = %path.display(), "Skipping file with unsupported language suffix");
        return Ok(());
    };

    let map: BTreeMap<String, String> = serde_json::from_str(&content)
        .map_err(|e| CatalogError::Parse { path: path.to_path_buf(), source: e })?;

    for (key, value) in map {
        // "_comment.<key>" はコメント、それ以外は値
        if let Some(target_key) = key.strip_prefix(COMMENT_PREFIX) {
            builder.comments.entry(target_key.to_string()).or_default().set(channel, value);
        } else {
            builder.values.entry(key).or_default().set(channel, value);
        }
    }

    Ok(())
}

/// プロジェクト名はフォルダからの相対ディレクトリ。フォルダ直下の
/// ファイルはフォルダ名自体をプロジェクト名とする
fn project_name_for(folder: &Path, relative_path: &Path) -> String {
    relative_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(
            || {
                folder
                    .file_name()
                    .map_or_else(|| ".".to_string(), |n| n.to_string_lossy().into_owned())
            },
            |p| p.to_string_lossy().replace('\\', "/"),
        )
}

/// 収集バッファからエントリ列を構築する
fn build_entries(files: BTreeMap<(String, String), FileBuilder>) -> Vec<ResourceEntry> {
    let mut entries = Vec::new();

    for ((project_name, file_name), mut builder) in files {
        // 値とコメントの双方に現れるキーの和集合を、決定的な順序で処理する
        let keys: BTreeSet<String> =
            builder.values.keys().chain(builder.comments.keys()).cloned().collect();

        for key in keys {
            let values = builder.values.remove(&key).unwrap_or_default();
            let comments = builder.comments.remove(&key).unwrap_or_default();
            let is_invariant = builder.invariant_keys.contains(&key);

            let mut entry = ResourceEntry::new(
                ResourceKey::new(project_name.clone(), file_name.clone(), key),
                values,
            );
            entry.comments = comments;
            entry.is_invariant = is_invariant;
            entries.push(entry);
        }
    }

    entries
}
