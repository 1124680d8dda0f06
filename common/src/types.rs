//! 共有される型定義
//!
//! - FileDescriptor: アップロードされたファイルの記述子
//! - MatchResult: マッチング結果（候補情報 + 抽選された一致度）
//! - SharePayload: 共有アクション用ペイロード

use serde::{Deserialize, Serialize};

/// アップロードされたファイルの記述子
///
/// `preview_source` は不透明な参照（通常はdata URL）。
/// コアは中身を検査しない。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileDescriptor {
    pub media_type: String,
    pub byte_size: u64,
    pub preview_source: String,
}

/// マッチング結果
///
/// `name` / `source_work` / `image_ref` は選ばれた候補の値そのまま。
/// `confidence` はマッチごとに新しく抽選された値（0〜100）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub name: String,
    pub source_work: String,
    pub image_ref: String,
    pub confidence: u8,
}

/// 共有アクション用ペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}
