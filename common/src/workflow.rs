//! アップロードセッションの状態機械
//!
//! 1回のアップロードを1セッションとして扱う:
//! 受付 → 検証 → プレビュー → 疑似処理 → 結果表示。
//!
//! タイマーはホスト側（ブラウザ等）が管理する。`accept_file` が返す
//! [`TimerToken`] を所定の時間後に [`UploadWorkflow::processing_complete`]
//! へ渡すのが契約。新しいアップロードや `clear` で世代が進むため、
//! 古いトークンは無視され、キャンセル漏れで結果が遅れて届くことはない。

use crate::candidates::CandidateTable;
use crate::error::{Error, Result};
use crate::share;
use crate::simulator::MatchSimulator;
use crate::types::{FileDescriptor, MatchResult, SharePayload};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// アップロードサイズ上限（10MiB）
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// 疑似処理の待ち時間（ミリ秒）
pub const PROCESSING_DELAY_MS: u32 = 3000;

/// セッション状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// プレビュー受理。ユーザー操作のゲートがなく `accept_file` 内で
    /// 即座に `Processing` へ進むため、外部からは観測されない論理状態。
    Previewing,
    Processing,
    ResultReady,
    Error,
}

/// 疑似処理タイマーの識別トークン
///
/// 発行時点の世代番号を持つ。セッションが進むと古い世代は無効になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// `accept_file` 成功時の戻り値
///
/// `preview_source` はそのままプレビュー表示に使い、`timer` は
/// [`PROCESSING_DELAY_MS`] 後に `processing_complete` へ渡す。
#[derive(Debug, Clone)]
pub struct Accepted {
    pub preview_source: String,
    pub timer: TimerToken,
}

/// アップロードワークフロー
///
/// ページインスタンスごとに1つ。状態はページを離れると破棄される。
#[derive(Debug)]
pub struct UploadWorkflow<R: Rng = StdRng> {
    state: SessionState,
    uploaded_file: Option<FileDescriptor>,
    result: Option<MatchResult>,
    timer_generation: u64,
    simulator: MatchSimulator,
    rng: R,
}

impl UploadWorkflow<StdRng> {
    /// 組み込み候補テーブルとシード指定の乱数源で構築
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            MatchSimulator::new(CandidateTable::builtin()),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> UploadWorkflow<R> {
    pub fn new(simulator: MatchSimulator, rng: R) -> Self {
        Self {
            state: SessionState::Idle,
            uploaded_file: None,
            result: None,
            timer_generation: 0,
            simulator,
            rng,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn uploaded_file(&self) -> Option<&FileDescriptor> {
        self.uploaded_file.as_ref()
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// ファイルを受け付ける
    ///
    /// 検証順: (a) メディア種別が `image/` で始まること、(b) サイズが
    /// 10MiB以下であること。失敗時は `Error` 状態に遷移するが、直前の
    /// プレビューや結果は保持する（次の有効なファイルで上書きされる）。
    ///
    /// 成功時はプレビューを経て即座に `Processing` へ遷移する（ユーザー
    /// 操作は挟まない）。`Processing` 中の再アップロードも受け付け、
    /// 保留中のタイマーを無効化してパイプラインをやり直す。
    pub fn accept_file(&mut self, file: FileDescriptor) -> Result<Accepted> {
        if let Err(e) = validate(&file) {
            self.state = SessionState::Error;
            return Err(e);
        }

        let preview_source = file.preview_source.clone();
        self.uploaded_file = Some(file);
        self.result = None;

        // 世代を進めて保留中のタイマーを無効化
        self.timer_generation += 1;

        // Previewing にはユーザー操作のゲートがなく、即 Processing へ進む
        self.state = SessionState::Processing;

        Ok(Accepted {
            preview_source,
            timer: TimerToken(self.timer_generation),
        })
    }

    /// 疑似処理タイマーの発火通知
    ///
    /// 現行世代のトークンかつ `Processing` 中の場合のみマッチを1回
    /// 抽選し、`ResultReady` に遷移して結果を返す。古いトークンや
    /// リセット後の発火は `None` を返し、何も変更しない。
    pub fn processing_complete(&mut self, token: TimerToken) -> Option<MatchResult> {
        if token.0 != self.timer_generation || self.state != SessionState::Processing {
            return None;
        }

        let result = self.simulator.pick(&mut self.rng);
        self.result = Some(result.clone());
        self.state = SessionState::ResultReady;
        Some(result)
    }

    /// セッションを初期状態へ戻す
    ///
    /// どの状態からでも呼べて冪等。ファイル・結果を破棄し、
    /// 保留中のタイマーも無効化する。
    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.uploaded_file = None;
        self.result = None;
        self.timer_generation += 1;
    }

    /// もう一度やり直す
    ///
    /// `clear` と同義。過去のマッチを再実行することはない。
    pub fn retry(&mut self) {
        self.clear();
    }

    /// 共有ペイロードを生成
    ///
    /// `ResultReady` のときのみ有効。共有の失敗はセッション状態を
    /// 変えない（結果表示のまま）。
    pub fn share_payload(&self, url: &str) -> Result<SharePayload> {
        match (&self.state, &self.result) {
            (SessionState::ResultReady, Some(result)) => Ok(share::build_payload(result, url)),
            _ => Err(Error::ShareUnsupported(
                "共有できる結果がありません".to_string(),
            )),
        }
    }
}

impl Default for UploadWorkflow<StdRng> {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

fn validate(file: &FileDescriptor) -> Result<()> {
    if !file.media_type.starts_with("image/") {
        return Err(Error::InvalidType {
            media_type: file.media_type.clone(),
        });
    }

    if file.byte_size > MAX_UPLOAD_BYTES {
        return Err(Error::TooLarge {
            byte_size: file.byte_size,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(byte_size: u64) -> FileDescriptor {
        FileDescriptor {
            media_type: "image/png".to_string(),
            byte_size,
            preview_source: "data:image/png;base64,xxxx".to_string(),
        }
    }

    #[test]
    fn test_accept_valid_file_transitions_to_processing() {
        let mut workflow = UploadWorkflow::with_seed(1);
        let accepted = workflow.accept_file(png(2048)).unwrap();

        assert_eq!(workflow.state(), SessionState::Processing);
        assert_eq!(accepted.preview_source, "data:image/png;base64,xxxx");
        assert!(workflow.uploaded_file().is_some());
        assert!(workflow.result().is_none());
    }

    #[test]
    fn test_invalid_media_type_goes_to_error() {
        let mut workflow = UploadWorkflow::with_seed(1);
        let file = FileDescriptor {
            media_type: "application/pdf".to_string(),
            byte_size: 100,
            preview_source: String::new(),
        };

        let err = workflow.accept_file(file).unwrap_err();
        assert!(matches!(err, Error::InvalidType { .. }));
        assert_eq!(workflow.state(), SessionState::Error);
    }

    #[test]
    fn test_size_boundary() {
        let mut workflow = UploadWorkflow::with_seed(1);

        // ちょうど10MiBは受け付ける
        assert!(workflow.accept_file(png(MAX_UPLOAD_BYTES)).is_ok());

        // 1バイト超過で拒否
        let err = workflow.accept_file(png(MAX_UPLOAD_BYTES + 1)).unwrap_err();
        assert!(matches!(err, Error::TooLarge { .. }));
        assert_eq!(workflow.state(), SessionState::Error);
    }

    #[test]
    fn test_validation_checks_type_before_size() {
        // 種別・サイズ両方が不正な場合は種別エラーが先
        let mut workflow = UploadWorkflow::with_seed(1);
        let file = FileDescriptor {
            media_type: "video/mp4".to_string(),
            byte_size: MAX_UPLOAD_BYTES + 1,
            preview_source: String::new(),
        };

        let err = workflow.accept_file(file).unwrap_err();
        assert!(matches!(err, Error::InvalidType { .. }));
    }

    #[test]
    fn test_processing_complete_with_current_token() {
        let mut workflow = UploadWorkflow::with_seed(1);
        let accepted = workflow.accept_file(png(2048)).unwrap();

        let result = workflow.processing_complete(accepted.timer);
        assert!(result.is_some());
        assert_eq!(workflow.state(), SessionState::ResultReady);
        assert_eq!(workflow.result(), result.as_ref());
    }

    #[test]
    fn test_processing_complete_is_one_shot() {
        let mut workflow = UploadWorkflow::with_seed(1);
        let accepted = workflow.accept_file(png(2048)).unwrap();

        assert!(workflow.processing_complete(accepted.timer).is_some());
        // 同じトークンの再発火は無視される
        assert!(workflow.processing_complete(accepted.timer).is_none());
        assert_eq!(workflow.state(), SessionState::ResultReady);
    }

    #[test]
    fn test_reupload_during_processing_invalidates_old_timer() {
        let mut workflow = UploadWorkflow::with_seed(1);
        let first = workflow.accept_file(png(100)).unwrap();
        let second = workflow.accept_file(png(200)).unwrap();

        // 古いタイマーの発火は何も起こさない
        assert!(workflow.processing_complete(first.timer).is_none());
        assert_eq!(workflow.state(), SessionState::Processing);

        // 新しいタイマーは通常どおり完了する
        assert!(workflow.processing_complete(second.timer).is_some());
        assert_eq!(workflow.state(), SessionState::ResultReady);
    }

    #[test]
    fn test_clear_cancels_pending_timer() {
        let mut workflow = UploadWorkflow::with_seed(1);
        let accepted = workflow.accept_file(png(100)).unwrap();

        workflow.clear();
        assert_eq!(workflow.state(), SessionState::Idle);

        // リセット後の遅延発火で結果が届くことはない
        assert!(workflow.processing_complete(accepted.timer).is_none());
        assert_eq!(workflow.state(), SessionState::Idle);
    }

    #[test]
    fn test_clear_from_any_state_resets_everything() {
        let mut workflow = UploadWorkflow::with_seed(1);

        // Idle から
        workflow.clear();
        assert_eq!(workflow.state(), SessionState::Idle);

        // Processing から
        workflow.accept_file(png(100)).unwrap();
        workflow.clear();
        assert_eq!(workflow.state(), SessionState::Idle);
        assert!(workflow.uploaded_file().is_none());

        // ResultReady から
        let accepted = workflow.accept_file(png(100)).unwrap();
        workflow.processing_complete(accepted.timer);
        workflow.clear();
        assert_eq!(workflow.state(), SessionState::Idle);
        assert!(workflow.result().is_none());

        // Error から
        workflow
            .accept_file(FileDescriptor {
                media_type: "text/plain".to_string(),
                byte_size: 1,
                preview_source: String::new(),
            })
            .unwrap_err();
        workflow.clear();
        assert_eq!(workflow.state(), SessionState::Idle);
    }

    #[test]
    fn test_retry_behaves_like_clear() {
        let mut workflow = UploadWorkflow::with_seed(1);
        let accepted = workflow.accept_file(png(100)).unwrap();
        workflow.processing_complete(accepted.timer);

        workflow.retry();
        assert_eq!(workflow.state(), SessionState::Idle);
        assert!(workflow.uploaded_file().is_none());
        assert!(workflow.result().is_none());
    }

    #[test]
    fn test_error_preserves_previous_upload() {
        // 決定事項: 検証失敗は直前のプレビュー・結果を消さない
        let mut workflow = UploadWorkflow::with_seed(1);
        let accepted = workflow.accept_file(png(100)).unwrap();
        workflow.processing_complete(accepted.timer);

        workflow
            .accept_file(FileDescriptor {
                media_type: "text/plain".to_string(),
                byte_size: 1,
                preview_source: String::new(),
            })
            .unwrap_err();

        assert_eq!(workflow.state(), SessionState::Error);
        assert!(workflow.uploaded_file().is_some());
        assert!(workflow.result().is_some());
    }

    #[test]
    fn test_recovery_from_error_with_valid_file() {
        let mut workflow = UploadWorkflow::with_seed(1);
        workflow
            .accept_file(FileDescriptor {
                media_type: "text/plain".to_string(),
                byte_size: 1,
                preview_source: String::new(),
            })
            .unwrap_err();
        assert_eq!(workflow.state(), SessionState::Error);

        let accepted = workflow.accept_file(png(100)).unwrap();
        assert_eq!(workflow.state(), SessionState::Processing);
        assert!(workflow.processing_complete(accepted.timer).is_some());
    }

    #[test]
    fn test_share_payload_requires_result() {
        let mut workflow = UploadWorkflow::with_seed(1);
        assert!(workflow.share_payload("https://example.com/").is_err());

        let accepted = workflow.accept_file(png(100)).unwrap();
        assert!(workflow.share_payload("https://example.com/").is_err());

        workflow.processing_complete(accepted.timer);
        let payload = workflow.share_payload("https://example.com/").unwrap();
        assert_eq!(payload.url, "https://example.com/");
        let name = &workflow.result().unwrap().name;
        assert!(payload.text.contains(name.as_str()));
    }
}
