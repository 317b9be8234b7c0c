//! The ordered rewrite-rule table for automatic title styling.
//!
//! Each rule is a `(pattern, rewrite)` pair applied as a single
//! leftmost-first, non-overlapping substitution pass over a text node's
//! value. Rules run in the exact order listed in [`STYLE_RULES`], each
//! operating on the previous rule's output. The ordering is load-bearing:
//! later rules deliberately match text that already contains markup
//! inserted by earlier rules (for example, a bolded run near a colon ends
//! up nested inside the lead-in wrap). Do not reorder.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// How a rule rewrites its matches.
enum Rewrite {
    /// A `$n`-style replacement template.
    Template(&'static str),
    /// A function over the captures, for rewrites a template can't express.
    Func(fn(&Captures<'_>) -> String),
}

/// A single styling rule: a compiled pattern plus its rewrite.
pub struct StyleRule {
    name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
}

impl StyleRule {
    fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid regex"),
            rewrite,
        }
    }

    /// The rule's name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run this rule's single substitution pass.
    pub fn apply(&self, text: &str) -> String {
        match self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(text, template).into_owned(),
            Rewrite::Func(func) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| func(caps))
                .into_owned(),
        }
    }
}

/// A bare question title splits into a bold question and an emphasized
/// remainder. When the remainder is empty the `<em>` is omitted entirely.
fn split_lone_question(caps: &Captures<'_>) -> String {
    let question = &caps[1];
    let remainder = &caps[2];
    if remainder.is_empty() {
        format!("<strong>{question}</strong>")
    } else {
        format!("<strong>{question}</strong><em>{remainder}</em>")
    }
}

/// The styling rules, in application order.
pub static STYLE_RULES: LazyLock<Vec<StyleRule>> = LazyLock::new(|| {
    vec![
        // Uppercase runs of two or more letters become bold, word by word.
        StyleRule::new(
            "uppercase-run",
            r"\b(\p{Lu}\p{Lu}+)\b",
            Rewrite::Template("<strong>${1}</strong>"),
        ),
        // A word immediately followed by ! becomes bold.
        StyleRule::new(
            "exclaimed-word",
            r"\b(\w+!)",
            Rewrite::Template("<strong>${1}</strong>"),
        ),
        // Double-quoted phrases become emphasized.
        StyleRule::new(
            "quoted-phrase",
            r#"("[^"]+")"#,
            Rewrite::Template("<em>${1}</em>"),
        ),
        // Curly-quoted phrases (U+201C/U+201D) become emphasized.
        StyleRule::new(
            "curly-quoted-phrase",
            "(\u{201C}[^\u{201C}\u{201D}]+\u{201D})",
            Rewrite::Template("<em>${1}</em>"),
        ),
        // Parentheticals without nested parentheses become emphasized.
        StyleRule::new(
            "parenthetical",
            r"(\([^()]+\))",
            Rewrite::Template("<em>${1}</em>"),
        ),
        // The clause after a colon, through the next ! or ? and any run of
        // trailing non-space characters, becomes emphasized. The colon is
        // matched and re-emitted since it stays outside the wrap.
        StyleRule::new(
            "clause-after-colon",
            r":([^:!?]+[!?]\S*)",
            Rewrite::Template(":<em>${1}</em>"),
        ),
        // Everything from the start of the text through the first colon
        // becomes bold.
        StyleRule::new(
            "lead-in-through-colon",
            r"\A([^:]+:)",
            Rewrite::Template("<strong>${1}</strong>"),
        ),
        // A title with exactly one ? and no : or ! splits at the ?: bold on
        // the left, emphasis on the remainder.
        StyleRule::new(
            "question-split",
            r"\A([^?:!]+\?)([^?:!]*)\z",
            Rewrite::Func(split_lone_question),
        ),
    ]
});

/// Apply the full rule sequence to one text value.
///
/// Each rule's output feeds the next rule's input; no rule is reapplied
/// after a later rule runs.
pub fn apply_sequence(text: &str) -> String {
    STYLE_RULES.iter().fold(text.to_string(), |current, rule| {
        let next = rule.apply(&current);
        if next != current {
            tracing::trace!(rule = rule.name, "rule rewrote text");
        }
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_runs_are_bolded_word_by_word() {
        assert_eq!(
            apply_sequence("THIS IS LOUD"),
            "<strong>THIS</strong> <strong>IS</strong> <strong>LOUD</strong>"
        );
    }

    #[test]
    fn single_uppercase_letter_is_not_bolded() {
        assert_eq!(apply_sequence("A word"), "A word");
    }

    #[test]
    fn uppercase_detection_is_unicode_aware() {
        assert_eq!(apply_sequence("schön ÜBER alles"), "schön <strong>ÜBER</strong> alles");
    }

    #[test]
    fn exclaimed_word_is_bolded() {
        assert_eq!(apply_sequence("Stop!"), "<strong>Stop!</strong>");
    }

    #[test]
    fn bolded_uppercase_run_does_not_retrigger_exclaim_rule() {
        // Rule 1 leaves "</strong>!" behind; '>' is not a word character,
        // so rule 2 finds nothing to wrap.
        assert_eq!(apply_sequence("LOUD!"), "<strong>LOUD</strong>!");
    }

    #[test]
    fn double_quoted_phrase_is_emphasized() {
        assert_eq!(
            apply_sequence(r#"She said "hello" twice"#),
            r#"She said <em>"hello"</em> twice"#
        );
    }

    #[test]
    fn curly_quoted_phrase_is_emphasized() {
        assert_eq!(
            apply_sequence("He wrote \u{201C}fin\u{201D} and left"),
            "He wrote <em>\u{201C}fin\u{201D}</em> and left"
        );
    }

    #[test]
    fn parenthetical_is_emphasized() {
        assert_eq!(
            apply_sequence("Results (mostly) fine"),
            "Results <em>(mostly)</em> fine"
        );
    }

    #[test]
    fn nested_parentheses_are_left_alone_outside() {
        // Only the innermost paren-free span matches.
        assert_eq!(
            apply_sequence("a (b (c) d) e"),
            "a (b <em>(c)</em> d) e"
        );
    }

    #[test]
    fn lead_in_through_colon_is_bolded() {
        assert_eq!(
            apply_sequence("Breaking: news happened"),
            "<strong>Breaking:</strong> news happened"
        );
    }

    #[test]
    fn colon_clause_cascades_with_lead_in() {
        // Rule 2 bolds "Stop!", rule 6 emphasizes the clause after the
        // colon (swallowing the inserted closing tag via \S*), rule 7 then
        // bolds the lead-in. The cascade is intentional and order-dependent.
        assert_eq!(
            apply_sequence("Note: Stop! now"),
            "<strong>Note:</strong><em> <strong>Stop!</strong></em> now"
        );
    }

    #[test]
    fn lone_question_is_bolded_without_empty_emphasis() {
        assert_eq!(apply_sequence("Really?"), "<strong>Really?</strong>");
    }

    #[test]
    fn question_with_remainder_splits_bold_and_emphasis() {
        assert_eq!(
            apply_sequence("Why so serious? asked the man"),
            "<strong>Why so serious?</strong><em> asked the man</em>"
        );
    }

    #[test]
    fn question_after_colon_takes_the_clause_path_instead() {
        // With a colon present, rules 6 and 7 fire and rule 8 stays out.
        assert_eq!(
            apply_sequence("Wait: really?"),
            "<strong>Wait:</strong><em> really?</em>"
        );
    }

    #[test]
    fn two_questions_do_not_split() {
        assert_eq!(apply_sequence("Who? What?"), "Who? What?");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(apply_sequence("just a quiet title"), "just a quiet title");
    }

    #[test]
    fn empty_text_passes_through() {
        assert_eq!(apply_sequence(""), "");
    }

    #[test]
    fn rule_order_is_stable() {
        let names: Vec<&str> = STYLE_RULES.iter().map(StyleRule::name).collect();
        assert_eq!(
            names,
            [
                "uppercase-run",
                "exclaimed-word",
                "quoted-phrase",
                "curly-quoted-phrase",
                "parenthetical",
                "clause-after-colon",
                "lead-in-through-colon",
                "question-split",
            ]
        );
    }
}
