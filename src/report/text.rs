//! テキスト形式の作業記録レポート

use crate::collector::{format_date, CommitRecord};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::io::{self, Write};

const RULE: &str = "=========================";
const DATE_RULE: &str = "----------";

/// レコードを日付ごとにまとめます
///
/// キーは最初に出現した順に並び、各グループ内のレコードも元の順序を保ちます。
pub fn group_by_date(records: &[CommitRecord]) -> IndexMap<NaiveDate, Vec<&CommitRecord>> {
    let mut groups: IndexMap<NaiveDate, Vec<&CommitRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.date).or_default().push(record);
    }
    groups
}

fn commit_count_line(count: usize) -> String {
    if count == 1 {
        "1 commit".to_string()
    } else {
        format!("{count} commits")
    }
}

/// レポート本文を書き出します
///
/// 日付グループは最初に出現した順の逆順で出力されます。
/// ヘッダーの日付範囲は常にプレースホルダのままです。
pub fn write_text_report<W: Write>(
    out: &mut W,
    records: &[CommitRecord],
    author: &str,
    repo: &str,
) -> io::Result<()> {
    writeln!(out, "CODE COMMIT REPORT\n")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Author:\t\t{author}")?;
    writeln!(out, "Username:\t{author}")?;
    writeln!(out, "Repository:\t{repo}")?;
    writeln!(out, "Dates:\t\t<DATEFROM> to <DATETO>")?;
    writeln!(out, "{RULE}\n")?;

    for (date, group) in group_by_date(records).iter().rev() {
        writeln!(out, "{}", format_date(*date))?;
        writeln!(out, "{DATE_RULE}")?;
        writeln!(out, "{}", commit_count_line(group.len()))?;
        for record in group {
            writeln!(out, "\t * Changed {} files", record.changed_file_count)?;
            writeln!(out, "\t\t\"{}\"", record.commit_message)?;
        }
        writeln!(out, "\n")?;
    }

    Ok(())
}
