//! 収集したコミットからレポートファイルを生成するモジュール
//!
//! 出力ディレクトリに以下の2ファイルを作成（既存の場合は上書き）します：
//!
//! - `{author}_{repo}_evidence_of_work.txt`: 日付ごとにまとめたテキストレポート
//! - `{author}_{repo}_svn_commits.csv`: 1コミット1行のカレンダー

mod calendar;
mod error;
mod text;

pub use calendar::{write_calendar, CALENDAR_HEADER};
pub use error::ReportError;
pub use text::{group_by_date, write_text_report};

use crate::collector::CommitRecord;
use log::info;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// リポジトリの場所から最後のパス要素を取り出します
///
/// 末尾の`/`は無視します。例えば`/home/user/projects/myrepo`は`myrepo`になります。
pub fn short_repo_name(repo: &str) -> &str {
    let trimmed = repo.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// 書き出した2つのファイルのパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub evidence: PathBuf,
    pub calendar: PathBuf,
}

impl ReportPaths {
    pub fn new(output_dir: &Path, author: &str, repo: &str) -> Self {
        let name = short_repo_name(repo);
        Self {
            evidence: output_dir.join(format!("{author}_{name}_evidence_of_work.txt")),
            calendar: output_dir.join(format!("{author}_{name}_svn_commits.csv")),
        }
    }
}

/// レポートを出力ディレクトリに書き出す構造体
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// テキストレポートとCSVカレンダーを書き出します
    ///
    /// # 引数
    ///
    /// - `records`: 収集済みのコミット（収集順）
    /// - `author`: 作成者。ファイル名とヘッダーに使用
    /// - `repo`: リポジトリの場所。最後のパス要素をファイル名に使用
    ///
    /// # エラー
    ///
    /// 出力ディレクトリの作成やファイルの書き込みに失敗した場合にエラーを返します
    pub fn write(
        &self,
        records: &[CommitRecord],
        author: &str,
        repo: &str,
    ) -> Result<ReportPaths, ReportError> {
        fs::create_dir_all(&self.output_dir)?;
        let paths = ReportPaths::new(&self.output_dir, author, repo);

        let mut evidence = BufWriter::new(File::create(&paths.evidence)?);
        write_text_report(&mut evidence, records, author, repo)?;
        evidence.into_inner().map_err(|e| e.into_error())?;
        info!("wrote {}", paths.evidence.display());

        let evidence_file = paths.evidence.to_string_lossy();
        write_calendar(File::create(&paths.calendar)?, records, &evidence_file)?;
        info!("wrote {}", paths.calendar.display());

        Ok(paths)
    }
}
