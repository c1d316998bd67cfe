//! Post-processing for generated replies.
//!
//! The model is told never to emit a subject line but sometimes does anyway.

const SUBJECT_PREFIX: &str = "subject:";

fn is_subject_line(line: &str) -> bool {
    line.trim_start()
        .get(..SUBJECT_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(SUBJECT_PREFIX))
}

/// Drops every `Subject:` line (any case, leading whitespace allowed), keeps the
/// remaining lines in order and trims the result. Idempotent.
pub fn sanitize_reply(raw: &str) -> String {
    // Split on '\n' only so any '\r' stays attached to its line and a second
    // pass sees exactly the same lines.
    raw.split('\n')
        .filter(|line| !is_subject_line(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_subject_line() {
        let raw = "Subject: Re: Meeting\n\nHi Sam,\n\n3pm works for me.\n\nBest,\nAlex";
        assert_eq!(
            sanitize_reply(raw),
            "Hi Sam,\n\n3pm works for me.\n\nBest,\nAlex"
        );
    }

    #[test]
    fn test_strips_subject_in_any_case() {
        for prefix in ["SUBJECT:", "subject:", "SuBjEcT:", "Subject:"] {
            let raw = format!("{prefix} hello\nBody line");
            assert_eq!(sanitize_reply(&raw), "Body line");
        }
    }

    #[test]
    fn test_strips_bare_and_indented_subject_lines() {
        let raw = "Subject:\n   subject: indented\nKeep me";
        assert_eq!(sanitize_reply(raw), "Keep me");
    }

    #[test]
    fn test_strips_subject_lines_anywhere_preserving_order() {
        let raw = "First\nSubject: middle\nSecond\nsubject: again\nThird";
        assert_eq!(sanitize_reply(raw), "First\nSecond\nThird");
    }

    #[test]
    fn test_keeps_lines_that_only_mention_subject() {
        let raw = "On the subject: of budgets, we agree.\nThe subject line was odd.";
        assert_eq!(sanitize_reply(raw), raw);
    }

    #[test]
    fn test_keeps_subjects_prefix_without_colon() {
        assert_eq!(sanitize_reply("Subjects covered below."), "Subjects covered below.");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(sanitize_reply("\n\n  Thanks!  \n\n"), "Thanks!");
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            sanitize_reply("Subject: Hi\r\nLine one\r\nLine two\r\n"),
            "Line one\r\nLine two"
        );
    }

    #[test]
    fn test_stray_carriage_returns_are_stable() {
        let once = sanitize_reply("a\r\r\nb");
        assert_eq!(once, "a\r\r\nb");
        assert_eq!(sanitize_reply(&once), once);
    }

    #[test]
    fn test_idempotent_over_generated_inputs() {
        let pieces = ["a", "\r", "\n", "Subject: x", " ", "sUbJeCt:"];
        let mut inputs = vec![String::new()];
        for _ in 0..5 {
            inputs = inputs
                .iter()
                .flat_map(|prefix| pieces.iter().map(move |p| format!("{prefix}{p}")))
                .collect();
            for raw in &inputs {
                let once = sanitize_reply(raw);
                assert_eq!(sanitize_reply(&once), once, "not idempotent for {raw:?}");
                assert!(once.split('\n').all(|line| !is_subject_line(line)));
            }
        }
    }

    #[test]
    fn test_only_subject_yields_empty() {
        assert_eq!(sanitize_reply("Subject: Re: hello"), "");
    }

    #[test]
    fn test_non_ascii_text_is_safe() {
        assert_eq!(sanitize_reply("Ünïcödé\nSubjéct: x"), "Ünïcödé\nSubjéct: x");
        assert_eq!(sanitize_reply("件名"), "件名");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Subject: A\n\n  Body  \n",
            "   \n subject: x\n\nHello\n\n\nSubject: y\nBye\n  ",
            "plain",
            "",
            "\r\nSubject:\r\n\r\n  text\r\n",
        ];
        for raw in samples {
            let once = sanitize_reply(raw);
            assert_eq!(sanitize_reply(&once), once, "not idempotent for {raw:?}");
        }
    }
}
