//! コミット収集の中核となるモジュール
//!
//! 収集プロセスは以下の流れで行われます：
//!
//! 1. バックエンドへのログクエリ（日付範囲の指定は任意）
//! 2. 作成者の完全一致によるフィルタリング
//! 3. 直前のリビジョンとの差分から変更ファイル数を算出
//! 4. エビデンスURLを組み立てて`CommitRecord`を生成
//!
//! ログクエリ自体の失敗は呼び出し元に伝播しますが、
//! 個々のコミットの差分取得の失敗は`ChangedFileCount::Unknown`に置き換えて続行します。

mod error;
mod git;
mod record;

pub use error::CollectorError;
pub use git::GitRepository;
pub use record::{
    format_date, ChangedFileCount, CommitRecord, DateRange, LogEntry, Revision, DATE_FORMAT,
    UNKNOWN_MARKER,
};

use log::debug;

/// 全レコード共通の短い説明
pub const SHORT_EXPLANATION: &str = "1 commit";

/// バージョン管理システムへのアクセスを抽象化するトレイト
pub trait LogProvider {
    /// コミットログをバックエンド固有の順序で返します
    fn log(&self, range: Option<&DateRange>) -> Result<Vec<LogEntry>, CollectorError>;

    /// `revision`と直前のリビジョンとの間で変更されたパスの数を返します
    fn diff_summary(&self, revision: &Revision) -> Result<usize, CollectorError>;
}

/// 1回の収集で使う問い合わせ条件
///
/// # フィールド
///
/// - `author`: 対象とする作成者（大文字小文字を区別して完全一致）
/// - `display_repo_name`: エビデンスURLに埋め込むリポジトリ名。空の場合はリポジトリの場所を使用
/// - `range`: 両端を含む日付範囲。`None`の場合は全履歴
#[derive(Debug, Clone)]
pub struct CommitQuery {
    pub author: String,
    pub display_repo_name: String,
    pub range: Option<DateRange>,
}

/// コミットログから1人の作成者のコミットを収集する構造体
///
/// # フィールド
///
/// - `provider`: ログと差分を提供するバックエンド
/// - `repo`: リポジトリの場所（表示名が空の場合の代替）
/// - `changelog_url`: チェンジログビューアのベースURL
pub struct CommitCollector<P> {
    provider: P,
    repo: String,
    changelog_url: String,
}

impl CommitCollector<GitRepository> {
    /// ローカルのGitリポジトリを開いてコレクタを作成します
    ///
    /// # エラー
    ///
    /// 指定されたパスが有効なGitリポジトリでない場合にエラーを返します
    pub fn open(
        path: impl AsRef<std::path::Path>,
        changelog_url: impl Into<String>,
    ) -> Result<Self, CollectorError> {
        let path = path.as_ref();
        Ok(Self::new(
            GitRepository::open(path)?,
            path.to_string_lossy(),
            changelog_url,
        ))
    }
}

impl<P: LogProvider> CommitCollector<P> {
    pub fn new(provider: P, repo: impl Into<String>, changelog_url: impl Into<String>) -> Self {
        Self {
            provider,
            repo: repo.into(),
            changelog_url: changelog_url.into(),
        }
    }

    /// 条件に一致するコミットをログの順序のまま収集します
    ///
    /// # エラー
    ///
    /// ログクエリが失敗した場合にエラーを返します。
    /// 差分取得の失敗はエラーにならず、変更ファイル数が`Unknown`になります。
    pub fn collect(&self, query: &CommitQuery) -> Result<Vec<CommitRecord>, CollectorError> {
        let repo_name = if query.display_repo_name.is_empty() {
            self.repo.as_str()
        } else {
            query.display_repo_name.as_str()
        };

        let entries = self.provider.log(query.range.as_ref())?;
        let total = entries.len();

        let records: Vec<CommitRecord> = entries
            .into_iter()
            .filter(|entry| entry.author == query.author)
            .map(|entry| self.to_record(entry, repo_name))
            .collect();

        debug!(
            "kept {} of {} log entries for author {}",
            records.len(),
            total,
            query.author
        );

        Ok(records)
    }

    fn to_record(&self, entry: LogEntry, repo_name: &str) -> CommitRecord {
        let changed_file_count = match self.provider.diff_summary(&entry.revision) {
            Ok(count) => ChangedFileCount::Known(count),
            Err(e) => {
                debug!("no diff summary for {}: {}", entry.revision, e);
                ChangedFileCount::Unknown
            }
        };

        let evidence_url = format!("{}{}?cs={}", self.changelog_url, repo_name, entry.revision);

        CommitRecord {
            date: entry.timestamp.date_naive(),
            committer_name: entry.author,
            commit_message: entry.message,
            changed_file_count,
            short_explanation: SHORT_EXPLANATION.to_string(),
            evidence_url,
            revision: entry.revision,
        }
    }
}
