//! 候補テーブル
//!
//! マッチング先となる俳優のモックデータ。起動時に一度だけ構築され、
//! 以後は不変。画像URLは表示用の参照でありコアは取得も検証もしない。

/// 候補エントリ
///
/// `confidence_low` は一致度の抽選区間 `[low, low + 20)` の下限。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    pub name: &'static str,
    pub source_work: &'static str,
    pub confidence_low: u8,
    pub image_ref: &'static str,
}

/// 組み込みの候補データ
const BUILTIN_CANDIDATES: &[CandidateEntry] = &[
    CandidateEntry {
        name: "Leonardo DiCaprio",
        source_work: "Inception (2010)",
        confidence_low: 80,
        image_ref: "https://images.pexels.com/photos/1680172/pexels-photo-1680172.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Scarlett Johansson",
        source_work: "Black Widow (2021)",
        confidence_low: 75,
        image_ref: "https://images.pexels.com/photos/3584283/pexels-photo-3584283.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Ryan Gosling",
        source_work: "La La Land (2016)",
        confidence_low: 82,
        image_ref: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Emma Stone",
        source_work: "La La Land (2016)",
        confidence_low: 78,
        image_ref: "https://images.pexels.com/photos/3094215/pexels-photo-3094215.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Chris Evans",
        source_work: "Captain America (2011)",
        confidence_low: 85,
        image_ref: "https://images.pexels.com/photos/2379003/pexels-photo-2379003.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Margot Robbie",
        source_work: "Barbie (2023)",
        confidence_low: 79,
        image_ref: "https://images.pexels.com/photos/3618162/pexels-photo-3618162.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Tom Holland",
        source_work: "Spider-Man (2017)",
        confidence_low: 83,
        image_ref: "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Zendaya",
        source_work: "Dune (2021)",
        confidence_low: 81,
        image_ref: "https://images.pexels.com/photos/3094216/pexels-photo-3094216.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Michael B. Jordan",
        source_work: "Black Panther (2018)",
        confidence_low: 77,
        image_ref: "https://images.pexels.com/photos/1516680/pexels-photo-1516680.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    CandidateEntry {
        name: "Gal Gadot",
        source_work: "Wonder Woman (2017)",
        confidence_low: 86,
        image_ref: "https://images.pexels.com/photos/3584284/pexels-photo-3584284.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
];

/// 不変の候補テーブル
///
/// 常に1件以上のエントリを持つ。
#[derive(Debug, Clone)]
pub struct CandidateTable {
    entries: &'static [CandidateEntry],
}

impl CandidateTable {
    /// 組み込みデータでテーブルを構築
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_CANDIDATES,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CandidateEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CandidateEntry] {
        self.entries
    }
}

impl Default for CandidateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
