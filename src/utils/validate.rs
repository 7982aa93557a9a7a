use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::files::entities::FileRef;

/// 评审意见最少字符数（按字符计，不按字节）
pub const MIN_REVIEW_NOTES_CHARS: usize = 10;

/// 评分区间
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

// 专业代码：字母数字，如 "RPL"、"TKJ"
static MAJOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Invalid major regex"));

pub fn validate_task_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Task title must not be empty");
    }
    if title.len() > 255 {
        return Err("Task title must not exceed 255 characters");
    }
    Ok(())
}

/// 目标专业过滤校验：逗号分隔的专业代码 OR 集合，如 "RPL,TKJ"
pub fn validate_target_majors(filter: &str) -> Result<(), &'static str> {
    let f = filter.trim();
    if f.is_empty() || f.eq_ignore_ascii_case("general") {
        return Ok(());
    }
    for code in f.split(',') {
        if !MAJOR_RE.is_match(code.trim()) {
            return Err("Target majors must be a comma-separated list of alphanumeric codes");
        }
    }
    Ok(())
}

pub fn validate_review_notes(notes: &str) -> Result<(), String> {
    let count = notes.trim().chars().count();
    if count < MIN_REVIEW_NOTES_CHARS {
        return Err(format!(
            "Review notes must be at least {MIN_REVIEW_NOTES_CHARS} characters, got {count}"
        ));
    }
    Ok(())
}

pub fn validate_score(score: f64) -> Result<(), String> {
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(format!(
            "Score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        ));
    }
    Ok(())
}

/// 提交附件校验：至少一个文件，且每个文件引用有效
pub fn validate_submission_files(files: &[FileRef]) -> Result<(), String> {
    if files.is_empty() {
        return Err("A submission must contain at least one file".to_string());
    }
    for file in files {
        if !file.is_valid() {
            return Err(format!("Invalid file url: {}", file.url));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(url: &str) -> FileRef {
        FileRef {
            url: url.to_string(),
            filename: None,
            size_bytes: None,
            mime_type: None,
        }
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(validate_task_title("").is_err());
        assert!(validate_task_title("   ").is_err());
        assert!(validate_task_title("Buat wireframe").is_ok());
    }

    #[test]
    fn test_target_majors_format() {
        assert!(validate_target_majors("RPL").is_ok());
        assert!(validate_target_majors("RPL,TKJ").is_ok());
        assert!(validate_target_majors("RPL, TKJ").is_ok());
        assert!(validate_target_majors("").is_ok());
        assert!(validate_target_majors("general").is_ok());
        assert!(validate_target_majors("RPL;TKJ").is_err());
    }

    #[test]
    fn test_review_notes_min_length_in_chars() {
        assert!(validate_review_notes("short").is_err());
        assert!(validate_review_notes("Perlu revisi pada bagian pengujian").is_ok());
        // 10 个多字节字符应当通过
        assert!(validate_review_notes("需要补充单元测试再提交").is_ok());
    }

    #[test]
    fn test_score_range() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(85.0).is_ok());
        assert!(validate_score(100.0).is_ok());
        assert!(validate_score(-1.0).is_err());
        assert!(validate_score(100.5).is_err());
        assert!(validate_score(f64::NAN).is_err());
    }

    #[test]
    fn test_submission_needs_at_least_one_file() {
        assert!(validate_submission_files(&[]).is_err());
        assert!(validate_submission_files(&[file("https://s.example.com/a.pdf")]).is_ok());
        assert!(validate_submission_files(&[file("file:///etc/passwd")]).is_err());
    }
}
