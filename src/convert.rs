use crate::{
    models::{truncate_on_char_boundary, LimitedLenString8192},
    problem::{Backtrace, BacktraceLine},
};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Display;

/// Number of backtrace lines rendered into a card.
pub(crate) const BACKTRACE_MAX_LINES: usize = 5;

const DB_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FENCE: &str = "```";

/// Longest body that still fits into a fact value together with both fences.
const BACKTRACE_MAX_BODY_LEN: usize = LimitedLenString8192::MAX_LEN - 2 * FENCE.len();

static STRONG_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?strong>").expect("strong tag regex is valid"));

pub(crate) fn time_to_db_string<Tz>(time: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(tz).format(DB_TIME_FORMAT).to_string()
}

pub(crate) fn strip_strong_tags(path: &str) -> String {
    STRONG_TAG.replace_all(path, "").into_owned()
}

fn write_backtrace_line(out: &mut String, line: &BacktraceLine) {
    out.push_str(&strip_strong_tags(&line.path));
    out.push_str(&line.file_name);
    out.push(':');
    if let Some(number) = line.number {
        out.push_str(&number.to_string());
    }
    out.push_str(" → ");
    out.push_str(&line.method);
    out.push('\n');
}

/// Renders the first lines of a backtrace as a fenced code block.
///
/// The body directly follows the opening fence and every line ends with a newline, so the
/// closing fence sits on its own line. An empty backtrace renders as an empty block.
///
/// Overlong bodies are cut so the whole block fits into a fact value; the closing fence is
/// always kept.
pub(crate) fn backtrace_to_fenced_block(backtrace: &Backtrace) -> String {
    let mut body = String::new();
    for line in backtrace.lines.iter().take(BACKTRACE_MAX_LINES) {
        write_backtrace_line(&mut body, line);
    }
    if body.len() > BACKTRACE_MAX_BODY_LEN {
        #[cfg(feature = "internal-logs")]
        tracing::debug!(
            len = body.len(),
            max_len = BACKTRACE_MAX_BODY_LEN,
            "truncating backtrace"
        );
        truncate_on_char_boundary(&mut body, BACKTRACE_MAX_BODY_LEN - 1);
        if !body.ends_with('\n') {
            body.push('\n');
        }
    }
    let mut out = String::with_capacity(body.len() + 2 * FENCE.len());
    out.push_str(FENCE);
    out.push_str(&body);
    out.push_str(FENCE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use test_case::test_case;

    fn line(path: &str, number: Option<u32>) -> BacktraceLine {
        BacktraceLine {
            path: path.into(),
            file_name: "user.rb".into(),
            number,
            method: "save".into(),
        }
    }

    #[test_case("<strong>app/models/</strong>", "app/models/" ; "wrapped")]
    #[test_case("[PROJECT_ROOT]/<strong>app/</strong>models/", "[PROJECT_ROOT]/app/models/" ; "partially wrapped")]
    #[test_case("/usr/lib/ruby/", "/usr/lib/ruby/" ; "plain")]
    #[test_case("<b>lib/</b>", "<b>lib/</b>" ; "other tags are kept")]
    fn strip_tags(path: &str, expected: &str) {
        assert_eq!(expected, strip_strong_tags(path));
    }

    #[test]
    fn time_in_zone() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 5).unwrap();
        assert_eq!("2024-03-01 23:30:05", time_to_db_string(&time, &Utc));
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!("2024-03-02 00:30:05", time_to_db_string(&time, &cet));
    }

    #[test]
    fn fenced_block() {
        let backtrace = Backtrace {
            lines: vec![line("<strong>app/models/</strong>", Some(12)), line("lib/", None)],
        };
        assert_eq!(
            "```app/models/user.rb:12 → save\nlib/user.rb: → save\n```",
            backtrace_to_fenced_block(&backtrace)
        );
    }

    #[test]
    fn fenced_block_empty() {
        assert_eq!("``````", backtrace_to_fenced_block(&Backtrace::default()));
    }

    #[test]
    fn fenced_block_keeps_first_five_lines() {
        let backtrace = Backtrace {
            lines: (1..=8).map(|n| line("app/", Some(n))).collect(),
        };
        let rendered = backtrace_to_fenced_block(&backtrace);
        let numbers: Vec<_> = rendered
            .trim_matches('`')
            .lines()
            .map(|l| l.split([':', ' ']).nth(1).unwrap().to_string())
            .collect();
        assert_eq!(vec!["1", "2", "3", "4", "5"], numbers);
    }

    #[test]
    fn fenced_block_keeps_closing_fence_when_truncated() {
        let backtrace = Backtrace {
            lines: (1..=5).map(|n| line(&"→".repeat(700), Some(n))).collect(),
        };
        let rendered = backtrace_to_fenced_block(&backtrace);
        assert!(rendered.len() <= LimitedLenString8192::MAX_LEN);
        assert!(rendered.starts_with("```"));
        assert!(rendered.ends_with("\n```"));
        assert!(!rendered[3..rendered.len() - 3].contains("```"));
    }
}
