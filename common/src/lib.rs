//! Movie Match Common Library
//!
//! そっくり俳優マッチングのコアロジック。
//! Web(WASM)フロントエンドから利用される:
//! - candidates: 固定の候補テーブル
//! - simulator: ランダム抽選シミュレータ
//! - workflow: アップロードセッションの状態機械
//! - share: 共有ペイロード生成

pub mod candidates;
pub mod error;
pub mod share;
pub mod simulator;
pub mod types;
pub mod workflow;

pub use candidates::{CandidateEntry, CandidateTable};
pub use error::{Error, Result};
pub use simulator::MatchSimulator;
pub use types::{FileDescriptor, MatchResult, SharePayload};
pub use workflow::{
    Accepted, SessionState, TimerToken, UploadWorkflow, MAX_UPLOAD_BYTES, PROCESSING_DELAY_MS,
};
