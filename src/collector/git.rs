//! Gitリポジトリとの対話を担当するモジュール
//!
//! このモジュールは、libgit2を使用してGitリポジトリからコミットログを取得し、
//! 各コミットで変更されたファイル数を数えるための機能を提供します。

use super::error::CollectorError;
use super::record::{DateRange, LogEntry, Revision};
use super::LogProvider;
use chrono::DateTime;
use git2::{Oid, Repository};
use std::path::Path;

/// Gitリポジトリへのアクセスを管理する構造体
///
/// # フィールド
///
/// - `repo`: libgit2のリポジトリハンドル
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// 指定されたパスのGitリポジトリをオープンします
    ///
    /// # エラー
    ///
    /// 指定されたパスが有効なGitリポジトリでない場合にエラーを返します
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CollectorError> {
        let repo = Repository::open(path)?;
        Ok(Self { repo })
    }

    fn find_commit(&self, revision: &Revision) -> Result<git2::Commit<'_>, CollectorError> {
        let oid = Oid::from_str(revision.as_str())?;
        Ok(self.repo.find_commit(oid)?)
    }
}

impl LogProvider for GitRepository {
    /// HEADから時系列の逆順にコミットログを取得します
    ///
    /// 日付範囲が指定された場合、UTCでのコミット日が範囲外のエントリはスキップします。
    fn log(&self, range: Option<&DateRange>) -> Result<Vec<LogEntry>, CollectorError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(git2::Sort::TIME)?;

        let mut entries = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            let timestamp = DateTime::from_timestamp(commit.time().seconds(), 0)
                .ok_or_else(|| CollectorError::InvalidTimestamp(oid.to_string()))?;

            if let Some(range) = range {
                if !range.contains(timestamp.date_naive()) {
                    continue;
                }
            }

            entries.push(LogEntry {
                revision: Revision::new(oid.to_string()),
                author: String::from_utf8_lossy(commit.author().name_bytes()).into_owned(),
                timestamp,
                message: String::from_utf8_lossy(commit.message_bytes())
                    .trim_end()
                    .to_string(),
            });
        }

        Ok(entries)
    }

    /// 最初の親コミットとの差分で変更されたパスの数を返します
    ///
    /// ルートコミットには比較対象がないため `NoPredecessor` を返します。
    fn diff_summary(&self, revision: &Revision) -> Result<usize, CollectorError> {
        let commit = self.find_commit(revision)?;
        if commit.parent_count() == 0 {
            return Err(CollectorError::NoPredecessor(revision.to_string()));
        }

        let tree = commit.tree()?;
        let parent_tree = commit.parent(0)?.tree()?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&parent_tree), Some(&tree), None)?;

        Ok(diff.deltas().len())
    }
}
