//! CSV形式のコミットカレンダー

use super::error::ReportError;
use crate::collector::{format_date, CommitRecord};
use serde::Serialize;
use std::io::Write;

/// CSVのヘッダー行（9列）
pub const CALENDAR_HEADER: [&str; 9] = [
    "Start Date",
    "End Date",
    "Work package",
    "Evidence",
    "Short Description",
    "Person",
    "Long description",
    "File",
    "Evidence URL",
];

/// カレンダーの1行。コミットは1日だけのイベントなので開始日と終了日は同じ
#[derive(Debug, Serialize)]
struct CalendarRow<'a> {
    start_date: String,
    end_date: String,
    work_package: &'a str,
    evidence: &'a str,
    short_description: &'a str,
    person: &'a str,
    long_description: &'a str,
    file: &'a str,
    evidence_url: &'a str,
}

impl<'a> CalendarRow<'a> {
    fn new(record: &'a CommitRecord, evidence_file: &'a str) -> Self {
        let date = format_date(record.date);
        Self {
            start_date: date.clone(),
            end_date: date,
            work_package: "",
            evidence: "Code commit",
            short_description: &record.short_explanation,
            person: &record.committer_name,
            long_description: &record.commit_message,
            file: evidence_file,
            evidence_url: &record.evidence_url,
        }
    }
}

/// ヘッダーと、収集順のまま1レコード1行を書き出します
///
/// `evidence_file`にはテキストレポートのパスを渡し、各行の`File`列に記録します。
pub fn write_calendar<W: Write>(
    out: W,
    records: &[CommitRecord],
    evidence_file: &str,
) -> Result<(), ReportError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    wtr.write_record(CALENDAR_HEADER)?;
    for record in records {
        wtr.serialize(CalendarRow::new(record, evidence_file))?;
    }
    wtr.flush()?;

    Ok(())
}
