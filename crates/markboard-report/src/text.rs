//! Plain-text rendering of a snapshot for the console.

use markboard_core::model::{GradeStats, Thresholds};

const BAR_WIDTH: usize = 30;

/// Render the snapshot as a text report: summary metrics followed by a
/// bar histogram of the 11 fixed buckets.
pub fn render_text_report(stats: &GradeStats, thresholds: &Thresholds) -> String {
    if stats.count == 0 {
        return "暂无成绩数据\n".to_string();
    }

    let mut out = String::new();

    out.push_str(&format!("录入样本: {} 人\n", stats.count));
    out.push_str(&format!("平均分: {:.2}\n", stats.mean));
    out.push_str(&format!("标准差: {:.2}\n", stats.std_dev));
    out.push_str(&format!("最高分: {} / 最低分: {}\n", stats.max, stats.min));
    out.push_str(&format!(
        "及格率: {:.1}% (及格线 {})\n",
        stats.pass_rate, thresholds.passing
    ));
    out.push_str(&format!(
        "优秀率: {:.1}% (优秀线 {})\n",
        stats.excellence_rate, thresholds.excellent
    ));
    out.push_str(&format!("不及格率: {:.1}%\n", stats.failure_rate));
    out.push('\n');
    out.push_str("分数段分布:\n");

    let peak = stats
        .distribution
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);

    for bucket in &stats.distribution {
        let bar_len = if peak == 0 {
            0
        } else {
            (bucket.count * BAR_WIDTH).div_ceil(peak)
        };
        out.push_str(&format!(
            "{:>8} | {:<width$} {}\n",
            bucket.range,
            "#".repeat(bar_len),
            bucket.count,
            width = BAR_WIDTH
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use markboard_core::statistics::compute;

    #[test]
    fn empty_snapshot_renders_placeholder() {
        let thresholds = Thresholds::default();
        let stats = compute(&[], &thresholds);
        assert_eq!(render_text_report(&stats, &thresholds), "暂无成绩数据\n");
    }

    #[test]
    fn report_contains_metrics_and_all_buckets() {
        let thresholds = Thresholds::default();
        let stats = compute(&[100.0, 92.0, 92.0, 61.0], &thresholds);
        let text = render_text_report(&stats, &thresholds);

        assert!(text.contains("录入样本: 4 人"));
        assert!(text.contains("及格率: 100.0%"));
        assert!(text.contains("100分"));
        assert!(text.contains("0~9分"));
        // the fullest bucket gets the longest bar
        let full_bar = format!("90~99分 | {}", "#".repeat(30));
        assert!(text.contains(&full_bar));
    }

    #[test]
    fn zero_count_buckets_have_no_bar() {
        let thresholds = Thresholds::default();
        let stats = compute(&[55.0], &thresholds);
        let text = render_text_report(&stats, &thresholds);
        let line = text
            .lines()
            .find(|l| l.contains("0~9分"))
            .expect("bucket line present");
        assert!(!line.contains('#'));
        assert!(line.trim_end().ends_with('0'));
    }
}
