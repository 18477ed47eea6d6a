//! 방문자 피드백을 평문 CSV(`feedback.csv`)에 누적 기록한다.
//! 호출 한 번 안에서 열고-쓰고-닫는다. 다중 프로세스 동시 기록은 보호하지 않는다
//! (예비 설계 도구의 수용된 한계).

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// 기본 피드백 파일명.
pub const FEEDBACK_FILE_NAME: &str = "feedback.csv";

const HEADER: &str = "Timestamp,Name,Feedback";

/// 피드백 한 건.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub timestamp: String,
    pub name: String,
    pub text: String,
}

/// 피드백 입출력 오류.
#[derive(Debug)]
pub enum FeedbackError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 이름 또는 내용이 비어 있음
    EmptyField,
}

impl std::fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackError::Io(e) => write!(f, "피드백 파일 입출력 오류: {e}"),
            FeedbackError::EmptyField => write!(f, "이름과 내용을 모두 입력하세요."),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl From<std::io::Error> for FeedbackError {
    fn from(value: std::io::Error) -> Self {
        FeedbackError::Io(value)
    }
}

/// 쉼표/따옴표/개행이 섞인 필드를 CSV 규칙대로 감싼다.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// CSV 한 줄을 필드 목록으로 푼다.
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// 이름/내용을 현재 시각과 함께 파일 끝에 덧붙인다. 파일이 없으면 헤더부터 만든다.
pub fn append_feedback(path: &Path, name: &str, text: &str) -> Result<(), FeedbackError> {
    if name.trim().is_empty() || text.trim().is_empty() {
        return Err(FeedbackError::EmptyField);
    }
    let needs_header = !path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_header {
        writeln!(file, "{HEADER}")?;
    }
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    writeln!(
        file,
        "{},{},{}",
        escape_field(&timestamp),
        escape_field(name.trim()),
        escape_field(text.trim())
    )?;
    Ok(())
}

/// 파일 내용을 레코드 단위로 나눈다. 따옴표 안의 개행은 레코드 구분자가 아니다.
fn split_records(content: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in content.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            '\n' if !in_quotes => {
                if current.ends_with('\r') {
                    current.pop();
                }
                records.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        records.push(current);
    }
    records
}

/// 피드백 파일 전체를 읽어 목록으로 반환한다. 파일이 없으면 빈 목록.
pub fn load_feedback(path: &Path) -> Result<Vec<FeedbackEntry>, FeedbackError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let mut entries = Vec::new();
    for (i, line) in split_records(&content).into_iter().enumerate() {
        if i == 0 || line.trim().is_empty() {
            continue;
        }
        let fields = parse_line(&line);
        if fields.len() < 3 {
            continue;
        }
        entries.push(FeedbackEntry {
            timestamp: fields[0].clone(),
            name: fields[1].clone(),
            text: fields[2..].join(","),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_plain_field_unchanged() {
        assert_eq!(escape_field("Hong Gildong"), "Hong Gildong");
    }

    #[test]
    fn escape_comma_and_quote() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn split_records_keeps_quoted_newlines() {
        let records =
            split_records("Timestamp,Name,Feedback\nt,Lee,\"line one\nline two\"\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], "t,Lee,\"line one\nline two\"");
    }

    #[test]
    fn parse_quoted_line() {
        let fields = parse_line("2026-08-27 10:00:00,\"Kim, Cheolsu\",\"good, thanks\"");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1], "Kim, Cheolsu");
        assert_eq!(fields[2], "good, thanks");
    }
}
