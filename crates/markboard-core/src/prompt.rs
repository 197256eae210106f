//! Prompt construction for the AI teaching analysis.
//!
//! The template is fixed: it asks for an overall assessment, weak-area
//! identification, and three actionable recommendations, in Chinese,
//! markdown-flavored. The advisor's reply is opaque display text to the
//! rest of the system.

use crate::model::{GradeStats, Thresholds};

/// Interpolate a snapshot and its thresholds into the analysis prompt.
pub fn build_prompt(stats: &GradeStats, thresholds: &Thresholds) -> String {
    let distribution = serde_json::to_string(&stats.distribution).unwrap_or_default();

    format!(
        "作为一名资深教育专家，请分析以下班级考试成绩数据：\n\
         - 学生总数: {count}\n\
         - 平均分: {mean:.2}\n\
         - 标准差: {std_dev:.2}\n\
         - 及格率: {pass_rate:.2}%\n\
         - 优秀率: {excellence_rate:.2}%\n\
         - 不及格率: {failure_rate:.2}%\n\
         - 设定标准: 及格 >= {passing}, 优秀 >= {excellent}\n\
         \n\
         分数段分布: {distribution}\n\
         \n\
         请提供专业且简洁的分析报告。内容应包括：\n\
         1. 整体表现评估。\n\
         2. 基于分数分布识别出的潜在学习薄弱环节。\n\
         3. 三条可落地的教学改进建议。\n\
         语气应专业、鼓励，并使用 Markdown 格式。请务必使用中文回复。",
        count = stats.count,
        mean = stats.mean,
        std_dev = stats.std_dev,
        pass_rate = stats.pass_rate,
        excellence_rate = stats.excellence_rate,
        failure_rate = stats.failure_rate,
        passing = thresholds.passing,
        excellent = thresholds.excellent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::compute;

    #[test]
    fn prompt_interpolates_snapshot_fields() {
        let thresholds = Thresholds::default();
        let stats = compute(&[60.0, 70.0, 80.0], &thresholds);
        let prompt = build_prompt(&stats, &thresholds);

        assert!(prompt.contains("学生总数: 3"));
        assert!(prompt.contains("平均分: 70.00"));
        assert!(prompt.contains("及格率: 100.00%"));
        assert!(prompt.contains("及格 >= 60, 优秀 >= 85"));
        assert!(prompt.contains("三条可落地的教学改进建议"));
    }

    #[test]
    fn prompt_embeds_distribution_as_json() {
        let thresholds = Thresholds::default();
        let stats = compute(&[100.0], &thresholds);
        let prompt = build_prompt(&stats, &thresholds);
        assert!(prompt.contains(r#"{"range":"100分","count":1}"#));
    }

    #[test]
    fn prompt_is_deterministic() {
        let thresholds = Thresholds::default();
        let stats = compute(&[88.0, 42.0], &thresholds);
        assert_eq!(
            build_prompt(&stats, &thresholds),
            build_prompt(&stats, &thresholds)
        );
    }
}
