use crate::{
    convert::{backtrace_to_fenced_block, time_to_db_string},
    models::{Fact, MessageCard, PotentialAction, Section, Target, THEME_COLOR},
    problem::Problem,
};
use chrono::{Local, TimeZone};
use std::fmt::Display;

const VIEW_ACTION_NAME: &str = "View in Errbit";
const DEFAULT_TARGET_OS: &str = "default";

/// Builds the message card for a problem, rendering times in the host's local time zone.
///
/// Building a card never fails. Absent optional values become `null` fact values, so the fact
/// table always has the same six rows in the same order:
///
/// | Fact              | Value                                                        |
/// | ----------------- | ------------------------------------------------------------ |
/// | `Application:`    | application name                                             |
/// | `Environment:`    | environment                                                  |
/// | `Where:`          | where                                                        |
/// | `Times Occurred:` | notices count                                                |
/// | `First Noticed:`  | first notice time as `%Y-%m-%d %H:%M:%S` in the local zone   |
/// | `Backtrace:`      | first 5 lines of the most recent notice's backtrace, fenced  |
pub fn build_payload(problem: &Problem) -> MessageCard {
    build_payload_in(problem, &Local)
}

/// Builds the message card for a problem, rendering times in the given time zone.
pub fn build_payload_in<Tz>(problem: &Problem, tz: &Tz) -> MessageCard
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let card: MessageCard = ProblemInZone(problem, tz).into();
    #[cfg(feature = "internal-logs")]
    tracing::debug!(
        app = %problem.app_name,
        title = %card.title,
        "built message card"
    );
    card
}

struct ProblemInZone<'a, Tz>(&'a Problem, &'a Tz);

impl<Tz> From<ProblemInZone<'_, Tz>> for MessageCard
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn from(ProblemInZone(problem, tz): ProblemInZone<'_, Tz>) -> MessageCard {
        let title = title(problem);
        MessageCard {
            summary: title.as_str().into(),
            theme_color: THEME_COLOR,
            title: title.into(),
            sections: vec![Section {
                activity_title: problem.message.clone(),
                facts: facts(problem, tz),
            }],
            potential_action: vec![PotentialAction::OpenUri {
                name: VIEW_ACTION_NAME,
                targets: vec![Target {
                    os: DEFAULT_TARGET_OS,
                    uri: problem.url.clone(),
                }],
            }],
        }
    }
}

fn title(problem: &Problem) -> String {
    format!("[{}] {}", problem.app_name, problem.error_title())
}

fn facts<Tz>(problem: &Problem, tz: &Tz) -> Vec<Fact>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    vec![
        Fact::new("Application:", Some(problem.app_name.clone())),
        Fact::new("Environment:", Some(problem.environment.clone())),
        Fact::new("Where:", Some(problem.r#where.clone())),
        Fact::new(
            "Times Occurred:",
            problem.notices_count.map(|count| count.to_string()),
        ),
        Fact::new(
            "First Noticed:",
            problem
                .first_notice_at
                .as_ref()
                .map(|time| time_to_db_string(time, tz)),
        ),
        Fact::new("Backtrace:", backtrace(problem)),
    ]
}

fn backtrace(problem: &Problem) -> Option<String> {
    let backtrace = problem.last_notice()?.backtrace.as_ref()?;
    Some(backtrace_to_fenced_block(backtrace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Backtrace, BacktraceLine, Notice};
    use chrono::Utc;
    use test_case::test_case;

    fn fact_names(card: &MessageCard) -> Vec<&'static str> {
        card.sections[0].facts.iter().map(|f| f.name).collect()
    }

    fn fact_value<'a>(card: &'a MessageCard, name: &str) -> Option<&'a str> {
        card.sections[0]
            .facts
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_ref())
            .map(|v| v.as_str())
    }

    fn notice(lines: usize) -> Notice {
        Notice {
            backtrace: Some(Backtrace {
                lines: (1..=lines as u32)
                    .map(|n| BacktraceLine {
                        path: "<strong>app/</strong>".into(),
                        file_name: format!("file{}.rb", n),
                        number: Some(n),
                        method: "call".into(),
                    })
                    .collect(),
            }),
        }
    }

    #[test_case(Some("RuntimeError"), "[Demo] RuntimeError" ; "error class")]
    #[test_case(Some(""), "[Demo] NPE" ; "empty error class")]
    #[test_case(None, "[Demo] NPE" ; "no error class")]
    fn title_and_summary(error_class: Option<&str>, expected: &str) {
        let problem = Problem {
            app_name: "Demo".into(),
            message: "NPE".into(),
            error_class: error_class.map(Into::into),
            ..Default::default()
        };
        let card = build_payload_in(&problem, &Utc);
        assert_eq!(expected, card.title.as_str());
        assert_eq!(expected, card.summary.as_str());
        assert_eq!("NPE", card.sections[0].activity_title);
        assert_eq!("0078D7", card.theme_color);
    }

    #[test]
    fn empty_problem_keeps_all_facts() {
        let card = build_payload(&Problem::default());
        assert_eq!(1, card.sections.len());
        assert_eq!(
            vec![
                "Application:",
                "Environment:",
                "Where:",
                "Times Occurred:",
                "First Noticed:",
                "Backtrace:"
            ],
            fact_names(&card)
        );
        assert_eq!(None, fact_value(&card, "Times Occurred:"));
        assert_eq!(None, fact_value(&card, "First Noticed:"));
        assert_eq!(None, fact_value(&card, "Backtrace:"));
    }

    #[test]
    fn notice_without_backtrace() {
        let problem = Problem {
            notices: vec![notice(2), Notice::default()],
            ..Default::default()
        };
        let card = build_payload_in(&problem, &Utc);
        assert_eq!(6, card.sections[0].facts.len());
        assert_eq!(None, fact_value(&card, "Backtrace:"));
    }

    #[test]
    fn notice_with_empty_backtrace() {
        let problem = Problem {
            notices: vec![notice(0)],
            ..Default::default()
        };
        let card = build_payload_in(&problem, &Utc);
        assert_eq!(Some("``````"), fact_value(&card, "Backtrace:"));
    }

    #[test]
    fn uses_most_recent_notice() {
        let problem = Problem {
            notices: vec![notice(3), notice(1)],
            ..Default::default()
        };
        let card = build_payload_in(&problem, &Utc);
        assert_eq!(
            Some("```app/file1.rb:1 → call\n```"),
            fact_value(&card, "Backtrace:")
        );
    }

    #[test]
    fn backtrace_is_capped() {
        let problem = Problem {
            notices: vec![notice(7)],
            ..Default::default()
        };
        let card = build_payload_in(&problem, &Utc);
        let backtrace = fact_value(&card, "Backtrace:").unwrap();
        assert_eq!(5, backtrace.matches(" → call\n").count());
        assert!(backtrace.contains("app/file5.rb:5"));
        assert!(!backtrace.contains("file6.rb"));
        assert!(!backtrace.contains("strong"));
    }

    #[test]
    fn oversized_problem_keeps_message_and_fence() {
        let message = "m".repeat(5000);
        let mut notice = notice(5);
        for line in &mut notice.backtrace.as_mut().unwrap().lines {
            line.path = "p".repeat(2000);
        }
        let problem = Problem {
            message: message.clone(),
            notices: vec![notice],
            ..Default::default()
        };
        let card = build_payload_in(&problem, &Utc);
        assert_eq!(message, card.sections[0].activity_title);
        let backtrace = fact_value(&card, "Backtrace:").unwrap();
        assert!(backtrace.len() <= 8192);
        assert!(backtrace.starts_with("```pppp"));
        assert!(backtrace.ends_with("\n```"));
    }

    #[test]
    fn action_targets_problem_url() {
        let problem = Problem {
            url: "https://errbit.example.com/apps/1/problems/2".into(),
            ..Default::default()
        };
        let card = build_payload_in(&problem, &Utc);
        assert_eq!(
            vec![PotentialAction::OpenUri {
                name: "View in Errbit",
                targets: vec![Target {
                    os: "default",
                    uri: "https://errbit.example.com/apps/1/problems/2".into(),
                }],
            }],
            card.potential_action
        );
    }
}
