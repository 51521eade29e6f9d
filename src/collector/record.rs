//! 収集結果と、バックエンドから受け取るログエントリを表現するモジュール
//!
//! 日付はすべて日単位（`NaiveDate`）で保持し、出力時にのみ
//! `dd/mm/yyyy` 形式へ整形します。

use super::error::CollectorError;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

/// 日付の入出力フォーマット（日/月/年）
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// 変更ファイル数が算出できなかった場合の表示
pub const UNKNOWN_MARKER: &str = "[unknown]";

/// 日付を `dd/mm/yyyy` 形式の文字列に変換します
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// リポジトリが割り当てたコミット識別子
///
/// バックエンドごとに形式が異なるため、中身は不透明な文字列として扱います。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 直前のリビジョンとの差分で変更されたファイル数
///
/// 差分が取得できない場合は `Unknown` となり、負数などの特殊値は使いません。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangedFileCount {
    Known(usize),
    Unknown,
}

impl fmt::Display for ChangedFileCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangedFileCount::Known(count) => write!(f, "{count}"),
            ChangedFileCount::Unknown => f.write_str(UNKNOWN_MARKER),
        }
    }
}

/// 両端を含む日付範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// `dd/mm/yyyy` 形式の2つの文字列から日付範囲を作成します
    ///
    /// # エラー
    ///
    /// 以下の場合にエラーを返します：
    /// - いずれかの日付が解析できない
    /// - 開始日が終了日より後になっている
    pub fn parse(from: &str, to: &str) -> Result<Self, CollectorError> {
        let parse = |value: &str| {
            NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
                .map_err(|_| CollectorError::InvalidDate(value.to_string()))
        };
        let (from, to) = (parse(from)?, parse(to)?);

        if from > to {
            return Err(CollectorError::InvalidDateRange {
                from: format_date(from),
                to: format_date(to),
            });
        }

        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// バックエンドのログクエリが返す1件分のエントリ
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub revision: Revision,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// 指定した作成者に帰属する1件のコミット
///
/// # フィールド
///
/// - `revision`: リポジトリ上のリビジョン
/// - `date`: コミット日（日単位）
/// - `committer_name`: コミットの作成者
/// - `commit_message`: コミットメッセージ
/// - `changed_file_count`: 直前のリビジョンから変更されたファイル数
/// - `short_explanation`: 常に "1 commit"
/// - `evidence_url`: チェンジログビューアへのリンク
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    pub revision: Revision,
    pub date: NaiveDate,
    pub committer_name: String,
    pub commit_message: String,
    pub changed_file_count: ChangedFileCount,
    pub short_explanation: String,
    pub evidence_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_parse() {
        let range = DateRange::parse("01/02/2020", "03/02/2020").unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2020, 2, 3).unwrap());

        assert!(range.contains(NaiveDate::from_ymd_opt(2020, 2, 1).unwrap()));
        assert!(range.contains(NaiveDate::from_ymd_opt(2020, 2, 3).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2020, 2, 4).unwrap()));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()));
    }

    #[test]
    fn test_date_range_rejects_bad_input() {
        assert!(matches!(
            DateRange::parse("2020-02-01", "03/02/2020"),
            Err(CollectorError::InvalidDate(_))
        ));
        assert!(matches!(
            DateRange::parse("31/02/2020", "03/03/2020"),
            Err(CollectorError::InvalidDate(_))
        ));
        assert!(matches!(
            DateRange::parse("05/02/2020", "03/02/2020"),
            Err(CollectorError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_format_date_is_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2021, 12, 3).unwrap();
        assert_eq!(format_date(date), "03/12/2021");
    }

    #[test]
    fn test_changed_file_count_display() {
        assert_eq!(ChangedFileCount::Known(0).to_string(), "0");
        assert_eq!(ChangedFileCount::Known(7).to_string(), "7");
        assert_eq!(ChangedFileCount::Unknown.to_string(), "[unknown]");
    }
}
