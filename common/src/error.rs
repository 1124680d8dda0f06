//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// メッセージはそのままユーザー向け表示文として使う。
#[derive(Error, Debug)]
pub enum Error {
    #[error("画像ファイルを選択してください（不正な形式: {media_type}）")]
    InvalidType { media_type: String },

    #[error("ファイルサイズは10MB以下にしてください（{byte_size} bytes）")]
    TooLarge { byte_size: u64 },

    #[error("共有できませんでした: {0}")]
    ShareUnsupported(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
