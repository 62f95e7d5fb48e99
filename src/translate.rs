use crate::classify::should_not_translate;
use crate::lexicon::Lexicon;

/// Hard cap on compound-phrase recursion. Real template strings decompose a
/// handful of levels at most; past the cap the input is returned unchanged
/// instead of risking the call stack on adversarial nesting.
const MAX_DEPTH: usize = 32;

/// Compound-phrase decomposition rules, evaluated in priority order. A rule
/// whose guard fails yields `None` and evaluation falls through to the next
/// rule, so e.g. "A and B and C or D" skips the conjunction rule (three
/// parts) and is handled by the "or" rule instead.
#[derive(Clone, Copy, Debug)]
enum CompoundRule {
    Delimited { open: char, close: char },
    Conjunction { needle: &'static str, joiner: &'static str },
    Possessive,
}

const COMPOUND_RULES: [CompoundRule; 5] = [
    CompoundRule::Delimited { open: '(', close: ')' },
    CompoundRule::Delimited { open: '[', close: ']' },
    CompoundRule::Conjunction { needle: " and ", joiner: " و " },
    CompoundRule::Conjunction { needle: " or ", joiner: " أو " },
    CompoundRule::Possessive,
];

/// Translate a source cell to Arabic, or return it unchanged.
///
/// Order of attempts: skip-classifier, exact lookup, case-insensitive scan,
/// then compound-phrase decomposition (parentheses, brackets, "and"/"or"
/// conjunctions, possessive). Anything still unmatched falls back to the
/// original text; there is no error path.
#[must_use]
pub fn translate_text(lexicon: &Lexicon, text: &str) -> String {
    translate_at_depth(lexicon, text, MAX_DEPTH)
}

fn translate_at_depth(lexicon: &Lexicon, text: &str, depth: usize) -> String {
    if should_not_translate(text) {
        return text.to_string();
    }
    if let Some(ar) = lexicon.lookup_exact(text) {
        return ar.to_string();
    }
    if let Some(ar) = lexicon.lookup_caseless(text) {
        return ar.to_string();
    }
    if depth == 0 {
        return text.to_string();
    }
    for rule in COMPOUND_RULES {
        if let Some(out) = rule.apply(lexicon, text, depth - 1) {
            return out;
        }
    }
    text.to_string()
}

impl CompoundRule {
    fn apply(self, lexicon: &Lexicon, text: &str, depth: usize) -> Option<String> {
        match self {
            CompoundRule::Delimited { open, close } => {
                if !(text.contains(open) && text.contains(close)) {
                    return None;
                }
                Some(translate_delimited(lexicon, text, open, close, depth))
            }
            CompoundRule::Conjunction { needle, joiner } => {
                if !text.to_lowercase().contains(needle) {
                    return None;
                }
                // The split itself is case-sensitive; "X And Y" matches the
                // lowercased guard but not the split, and falls through.
                let parts: Vec<&str> = text.split(needle).collect();
                if parts.len() != 2 {
                    return None;
                }
                let left = translate_at_depth(lexicon, parts[0].trim(), depth);
                let right = translate_at_depth(lexicon, parts[1].trim(), depth);
                Some(format!("{left}{joiner}{right}"))
            }
            CompoundRule::Possessive => {
                let (owner, owned) = text.split_once("'s ")?;
                let owner = translate_at_depth(lexicon, owner.trim(), depth);
                let owned = translate_at_depth(lexicon, owned.trim(), depth);
                // Arabic puts the owned thing first.
                Some(format!("{owned} {owner}"))
            }
        }
    }
}

// Split on the delimiter characters, keep them literal, and translate each
// trimmed segment in place. Whitespace hugging a delimiter is consumed by the
// trim, e.g. "Password (Required)" comes back without the inner space.
fn translate_delimited(
    lexicon: &Lexicon,
    text: &str,
    open: char,
    close: char,
    depth: usize,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut segment = String::new();
    for ch in text.chars() {
        if ch == open || ch == close {
            out.push_str(&translate_at_depth(lexicon, segment.trim(), depth));
            out.push(ch);
            segment.clear();
        } else {
            segment.push(ch);
        }
    }
    out.push_str(&translate_at_depth(lexicon, segment.trim(), depth));
    out
}

#[cfg(test)]
mod tests {
    use super::translate_text;
    use crate::lexicon::Lexicon;

    #[test]
    fn exact_and_caseless_lookups() {
        let lex = Lexicon::builtin();
        assert_eq!(translate_text(&lex, "Hello"), "مرحبا");
        assert_eq!(translate_text(&lex, "good morning"), "صباح الخير");
    }

    #[test]
    fn classifier_blocks_lookup() {
        let lex = Lexicon::builtin();
        assert_eq!(translate_text(&lex, "http://x.com"), "http://x.com");
        assert_eq!(translate_text(&lex, "2024-01-01"), "2024-01-01");
        assert_eq!(translate_text(&lex, ""), "");
    }

    #[test]
    fn conjunction_splits_into_two_translated_halves() {
        let lex = Lexicon::builtin();
        assert_eq!(
            translate_text(&lex, "Good Morning and Welcome"),
            "صباح الخير و أهلا وسهلا"
        );
        assert_eq!(translate_text(&lex, "Yes or No"), "نعم أو لا");
    }

    #[test]
    fn three_part_conjunction_falls_through_to_or() {
        let lex = Lexicon::builtin();
        // "and" guard matches but splits into three parts, so the "or" rule
        // handles the string; its left side stays undecomposed.
        assert_eq!(
            translate_text(&lex, "Yes and No and Maybe or Hello"),
            "Yes and No and Maybe أو مرحبا"
        );
    }

    #[test]
    fn parenthetical_segments_are_translated_in_place() {
        let lex = Lexicon::builtin();
        assert_eq!(
            translate_text(&lex, "Password (Required)"),
            "كلمة المرور(مطلوب)"
        );
        assert_eq!(translate_text(&lex, "Total [Tax]"), "الإجمالي[الضريبة]");
    }

    #[test]
    fn possessive_reverses_word_order() {
        let lex = Lexicon::builtin();
        assert_eq!(translate_text(&lex, "Customer's Account"), "الحساب العميل");
    }

    #[test]
    fn unknown_text_falls_back_unchanged_and_is_idempotent() {
        let lex = Lexicon::builtin();
        let s = "Frobnicate the widgets";
        let once = translate_text(&lex, s);
        assert_eq!(once, s);
        assert_eq!(translate_text(&lex, &once), once);
    }

    #[test]
    fn deep_possessive_chain_stays_within_bounds() {
        let lex = Lexicon::builtin();
        let mut s = String::new();
        for _ in 0..64 {
            s.push_str("Customer's ");
        }
        s.push_str("Account");
        // Just must terminate without exhausting the stack.
        assert!(!translate_text(&lex, &s).is_empty());
    }
}
