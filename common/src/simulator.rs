//! マッチシミュレータ
//!
//! 実際の画像解析は行わない。候補テーブルから一様乱数でエントリを選び、
//! エントリごとの区間から一致度を抽選する。乱数源は呼び出し側から注入
//! されるため、テストではシード固定で決定的に検証できる。

use crate::candidates::CandidateTable;
use crate::types::MatchResult;
use rand::Rng;

/// 一致度の抽選区間の幅（`[low, low + SPAN)`）
pub const CONFIDENCE_SPAN: u8 = 20;

/// 一致度の上限
///
/// 区間上端が100を超える候補があるため、抽選値は必ずここでクランプする。
pub const CONFIDENCE_CAP: u8 = 100;

/// マッチシミュレータ
///
/// 不変の候補テーブルを読むだけで、呼び出し間に状態を持たない。
#[derive(Debug, Clone, Default)]
pub struct MatchSimulator {
    table: CandidateTable,
}

impl MatchSimulator {
    pub fn new(table: CandidateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CandidateTable {
        &self.table
    }

    /// 1回のマッチ抽選
    ///
    /// - インデックスはテーブル全体から一様に抽選
    /// - 一致度はエントリの `[low, low + 20)` から一様に抽選し、100でクランプ
    pub fn pick<R: Rng>(&self, rng: &mut R) -> MatchResult {
        let index = rng.gen_range(0..self.table.len());
        let entry = &self.table.entries()[index];

        let low = u32::from(entry.confidence_low);
        let drawn = rng.gen_range(low..low + u32::from(CONFIDENCE_SPAN));
        let confidence = drawn.min(u32::from(CONFIDENCE_CAP)) as u8;

        MatchResult {
            name: entry.name.to_string(),
            source_work: entry.source_work.to_string(),
            image_ref: entry.image_ref.to_string(),
            confidence,
        }
    }
}
