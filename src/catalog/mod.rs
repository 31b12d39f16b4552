//! リソースカタログ（外部コラボレータ側）
//!
//! フォルダ上のリソースファイル群をメモリ上のカタログへ読み込み、
//! スナップショットの履歴値を適用するモジュール。diff コアは
//! ここで構築されたエントリ列を読み取り専用で消費する。

mod entry;
mod host;
pub mod snapshot;

pub use entry::ResourceEntry;
pub use host::{
    Catalog,
    CatalogError,
};
pub use snapshot::{
    SnapshotError,
    SnapshotRecord,
};
