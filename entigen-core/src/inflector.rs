//! English pluralization and singularization.
//!
//! Lookup order is uncountables, then irregular nouns, then the suffix rules
//! (first match wins). The letter case of the input is restored on the result.

use std::sync::LazyLock;

use regex::Regex;

const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "metadata",
    "data",
    "feedback",
    "software",
    "staff",
];

/// Singular, plural.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("move", "moves"),
    ("cookie", "cookies"),
];

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|&(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).expect("inflection rules are valid patterns"),
            replacement,
        })
        .collect()
}

static PLURAL_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"(quiz)$", "${1}zes"),
        (r"(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        (r"(x|ch|ss|sh|zz)$", "${1}es"),
        (r"([^aeiouy]|qu)y$", "${1}ies"),
        (r"([^f])fe$", "${1}ves"),
        (r"([lr])f$", "${1}ves"),
        (r"sis$", "ses"),
        (r"(alias|status|campus|bus|bonus|virus|census)$", "${1}es"),
        (r"(her|potat|tomat|ech)o$", "${1}oes"),
        (r"s$", "s"),
        (r"$", "s"),
    ])
});

static SINGULAR_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"(quiz)zes$", "${1}"),
        (r"(matr)ices$", "${1}ix"),
        (r"(vert|ind)ices$", "${1}ex"),
        (r"(alias|status|campus|bus|bonus|virus|census)es$", "${1}"),
        (r"(x|ch|ss|sh|zz)es$", "${1}"),
        (r"([^aeiouy]|qu)ies$", "${1}y"),
        // stems only count at a word start: "olives" is not "olife"
        (r"(^|[^a-z])(wi|kni|li)ves$", "${1}${2}fe"),
        (r"(ar|[ae]l|ol|[eo][ao])ves$", "${1}f"),
        (
            r"(^|[^a-z])(analy|cri|diagno|parenthe|progno|synop|the)ses$",
            "${1}${2}sis",
        ),
        (r"(her|potat|tomat|ech)oes$", "${1}o"),
        (r"ss$", "ss"),
        (r"(us|is)$", "${1}"),
        (r"s$", ""),
    ])
});

/// Pluralize an English noun (e.g., "user" -> "users", "Person" -> "People")
pub fn pluralize(word: &str) -> String {
    inflect(word, |(singular, plural)| (*singular, *plural), &PLURAL_RULES)
}

/// Singularize an English noun (e.g., "users" -> "user", "PEOPLE" -> "PERSON")
pub fn singularize(word: &str) -> String {
    inflect(word, |(singular, plural)| (*plural, *singular), &SINGULAR_RULES)
}

fn inflect(
    word: &str,
    direction: impl Fn(&(&'static str, &'static str)) -> (&'static str, &'static str),
    rules: &[Rule],
) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLES.iter().any(|u| lower.ends_with(u) && is_word_end(&lower, u)) {
        return word.to_string();
    }

    for entry in IRREGULARS {
        let (from, to) = direction(entry);
        if lower == to {
            return word.to_string();
        }
        if lower == from {
            return restore_case(word, to);
        }
    }

    for rule in rules {
        if rule.pattern.is_match(&lower) {
            let replaced = rule.pattern.replace(&lower, rule.replacement);
            return restore_case(word, &replaced);
        }
    }

    word.to_string()
}

/// Uncountables only match whole trailing words (`user_data`, not `adata`).
fn is_word_end(lower: &str, suffix: &str) -> bool {
    lower.len() == suffix.len()
        || !lower[..lower.len() - suffix.len()]
            .chars()
            .last()
            .is_some_and(char::is_alphabetic)
}

/// Apply the letter case of `original` to `word`.
///
/// All upper-case input gives an all upper-case result. Otherwise characters
/// that line up with the original keep its case and any extra characters are
/// lower-case.
fn restore_case(original: &str, word: &str) -> String {
    if original.chars().any(char::is_alphabetic)
        && original
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
        && original.chars().count() > 1
    {
        return word.to_uppercase();
    }

    let mut out = String::with_capacity(word.len());
    let mut source = original.chars();
    for c in word.chars() {
        match source.next() {
            Some(o) if o.is_uppercase() => out.extend(c.to_uppercase()),
            _ => out.push(c),
        }
    }
    out
}
