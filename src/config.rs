//! 実行時設定の既定値

/// レポートの出力先ディレクトリ（カレントディレクトリからの相対パス）
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// チェンジログビューア（FishEye）のベースURL
pub const DEFAULT_CHANGELOG_URL: &str = "http://gromit.ebi.ac.uk:10002/changelog/";
