//! 作業記録（evidence of work）レポート生成ツール
//!
//! このクレートは、ローカルリポジトリのコミットログから1人の作成者のコミットを収集し、
//! 日付ごとにまとめたテキストレポートとCSVカレンダーを書き出す機能を提供します。
//!
//! # 使用例
//!
//! ```no_run
//! use commit_evidence::{CommitCollector, CommitQuery, ReportWriter};
//!
//! let collector = CommitCollector::open(
//!     "path/to/repo",
//!     commit_evidence::config::DEFAULT_CHANGELOG_URL,
//! ).unwrap();
//!
//! let records = collector.collect(&CommitQuery {
//!     author: "alice".to_string(),
//!     display_repo_name: "repo".to_string(),
//!     range: None,
//! }).unwrap();
//!
//! ReportWriter::new("output")
//!     .write(&records, "alice", "path/to/repo")
//!     .unwrap();
//! ```

pub mod collector;
pub mod config;
pub mod report;

pub use collector::{CommitCollector, CommitQuery, CommitRecord};
pub use report::ReportWriter;
