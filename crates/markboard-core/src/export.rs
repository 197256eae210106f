//! Flattening a statistics snapshot into labelled rows for CSV export.
//!
//! The core builds the ordered `(label, value)` rows only; writing the
//! actual file is `markboard-report`'s job.

use crate::model::{GradeStats, Thresholds};

/// One exported row. An all-empty row acts as a section separator.
pub type Row = (String, String);

/// Flatten a snapshot and its thresholds into the CSV row layout:
/// header, summary metrics, threshold settings, a blank separator, then
/// the 11 distribution rows.
pub fn csv_rows(stats: &GradeStats, thresholds: &Thresholds) -> Vec<Row> {
    let mut rows: Vec<Row> = vec![
        ("项目".into(), "数值".into()),
        ("录入学生总数".into(), format!("{} 人", stats.count)),
        ("平均分".into(), format!("{:.2}", stats.mean)),
        ("方差 (波动率)".into(), format!("{:.2}", stats.variance)),
        ("及格率 (%)".into(), format!("{:.2}", stats.pass_rate)),
        ("优秀率 (%)".into(), format!("{:.2}", stats.excellence_rate)),
        ("不及格率 (%)".into(), format!("{:.2}", stats.failure_rate)),
        ("及格线设定".into(), format!("{} 分", thresholds.passing)),
        ("优秀线设定".into(), format!("{} 分", thresholds.excellent)),
        (String::new(), String::new()),
        ("分数段分布情况".into(), "人数 (位)".into()),
    ];

    for bucket in &stats.distribution {
        rows.push((bucket.range.clone(), bucket.count.to_string()));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::compute;

    #[test]
    fn rows_follow_the_fixed_layout() {
        let thresholds = Thresholds::default();
        let stats = compute(&[60.0, 70.0, 80.0], &thresholds);
        let rows = csv_rows(&stats, &thresholds);

        // header + 8 metric rows + separator + section header + 11 buckets
        assert_eq!(rows.len(), 11 + 11);
        assert_eq!(rows[0], ("项目".to_string(), "数值".to_string()));
        assert_eq!(rows[1].1, "3 人");
        assert_eq!(rows[2].1, "70.00");
        assert_eq!(rows[7].1, "60 分");
        assert_eq!(rows[9], (String::new(), String::new()));
        assert_eq!(rows[10].0, "分数段分布情况");
        assert_eq!(rows[11].0, "100分");
        assert_eq!(rows[21].0, "0~9分");
    }

    #[test]
    fn empty_snapshot_has_no_bucket_rows() {
        let thresholds = Thresholds::default();
        let stats = compute(&[], &thresholds);
        let rows = csv_rows(&stats, &thresholds);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[1].1, "0 人");
    }

    #[test]
    fn fractional_thresholds_keep_their_precision() {
        let thresholds = Thresholds {
            passing: 59.5,
            excellent: 85.0,
            max_score: 100.0,
        };
        let stats = compute(&[60.0], &thresholds);
        let rows = csv_rows(&stats, &thresholds);
        assert_eq!(rows[7].1, "59.5 分");
        assert_eq!(rows[8].1, "85 分");
    }
}
