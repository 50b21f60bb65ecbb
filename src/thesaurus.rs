//! Static synonym thesaurus used to widen a question's vocabulary.
//!
//! Built once from [`SYNONYM_GROUPS`]; every word in a group maps to every
//! other word in the same group. A word that appears in several groups maps
//! to the union of their members.

use std::{
    borrow::Cow,
    collections::{BTreeSet, HashMap, HashSet},
};

use crate::text_util::words;

/// Groups of mutually interchangeable words.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    // commerce
    &["price", "cost", "fee", "charge", "rate"],
    &["buy", "purchase", "acquire", "order"],
    &["sell", "sale", "sales", "vend"],
    &[
        "company",
        "business",
        "firm",
        "corporation",
        "enterprise",
        "organization",
    ],
    &["customer", "client", "buyer", "consumer"],
    &["product", "item", "goods", "merchandise"],
    &["store", "shop", "retailer", "outlet"],
    &["money", "cash", "funds", "capital"],
    &["revenue", "income", "earnings", "turnover"],
    &["profit", "gain", "margin"],
    &["employee", "employees", "staff", "workers", "personnel", "workforce"],
    &["owner", "proprietor", "founder"],
    &["ceo", "chief", "head", "leader", "president"],
    // metrics
    &["number", "count", "total", "amount", "quantity"],
    &["size", "scale", "magnitude"],
    &["increase", "growth", "rise", "gain"],
    &["decrease", "decline", "drop", "fall", "reduction"],
    &["big", "large", "huge", "major"],
    &["small", "little", "minor", "tiny"],
    &["fast", "quick", "rapid", "speedy"],
    &["percent", "percentage", "share", "proportion"],
    // action verbs
    &[
        "found",
        "founded",
        "establish",
        "established",
        "start",
        "started",
        "create",
        "created",
    ],
    &[
        "make",
        "makes",
        "produce",
        "produces",
        "manufacture",
        "manufactures",
        "build",
        "builds",
    ],
    &["use", "utilize", "employ"],
    &["help", "assist", "support", "aid"],
    &["show", "display", "present", "exhibit"],
    &["get", "obtain", "receive"],
    &["begin", "commence", "launch"],
    &["end", "finish", "complete", "conclude"],
    &["change", "modify", "alter", "update"],
    &["lead", "run", "manage", "direct", "operate"],
    &["say", "state", "claim", "announce"],
    // places and time
    &["headquarters", "headquartered", "based", "located", "hq"],
    &["city", "town", "municipality"],
    &["country", "nation", "state"],
    &["year", "annual", "yearly"],
    &["date", "day", "time"],
    // misc
    &["reason", "cause", "purpose", "motive"],
    &["problem", "issue", "trouble", "difficulty"],
    &["goal", "aim", "objective", "target"],
    &["important", "significant", "key", "essential", "crucial"],
    &["new", "novel", "recent", "modern"],
    &["old", "ancient", "former", "previous"],
    &["phone", "phones", "smartphone", "smartphones", "mobile"],
    &["computer", "computers", "pc", "laptop", "laptops"],
];

/// Word → co-group words lookup.
#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    synonyms: HashMap<String, BTreeSet<String>>,
}

impl Thesaurus {
    /// Build from arbitrary groups. Groups with fewer than two distinct
    /// words contribute nothing.
    pub fn from_groups<G, W>(groups: G) -> Self
    where
        G: IntoIterator<Item = W>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        let mut synonyms: HashMap<String, BTreeSet<String>> = HashMap::new();
        for group in groups {
            let members: BTreeSet<String> = group
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
            if members.len() < 2 {
                continue;
            }
            for word in &members {
                let entry = synonyms.entry(word.clone()).or_default();
                entry.extend(members.iter().filter(|m| *m != word).cloned());
            }
        }
        Self { synonyms }
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::from_groups(SYNONYM_GROUPS.iter().map(|g| g.iter()))
    }

    /// Number of distinct words with at least one synonym.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Synonyms of a lowercase word, in sorted order. Empty for unknown words.
    pub fn lookup(&self, word: &str) -> impl Iterator<Item = &str> {
        self.synonyms
            .get(word)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Append every synonym of every token in `text` to the end of it.
    ///
    /// Synonyms already present in the text, or already appended, are not
    /// added twice. When nothing is found the input is returned borrowed and
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use docanswer::thesaurus::Thesaurus;
    ///
    /// let thesaurus = Thesaurus::builtin();
    /// let expanded = thesaurus.expand("What is the price?");
    /// assert!(expanded.starts_with("What is the price?"));
    /// assert!(expanded.contains("cost"));
    ///
    /// assert!(matches!(thesaurus.expand("zzz qqq"), Cow::Borrowed(_)));
    /// ```
    pub fn expand<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let tokens = words(text);
        let mut seen: HashSet<&str> =
            tokens.iter().map(String::as_str).collect();
        let mut extra: Vec<&str> = Vec::new();

        for token in &tokens {
            for synonym in self.lookup(token) {
                if seen.insert(synonym) {
                    extra.push(synonym);
                }
            }
        }

        if extra.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut expanded = String::with_capacity(
            text.len() + extra.iter().map(|s| s.len() + 1).sum::<usize>(),
        );
        expanded.push_str(text);
        for synonym in extra {
            expanded.push(' ');
            expanded.push_str(synonym);
        }
        Cow::Owned(expanded)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn lookup_is_bidirectional_and_excludes_self() {
        let t = Thesaurus::builtin();
        let cost: Vec<&str> = t.lookup("cost").collect();
        assert!(cost.contains(&"price"));
        assert!(!cost.contains(&"cost"));

        let price: Vec<&str> = t.lookup("price").collect();
        assert!(price.contains(&"cost"));
    }

    #[test]
    fn lookup_unknown_word_is_empty() {
        let t = Thesaurus::builtin();
        assert_eq!(t.lookup("xylophone").count(), 0);
    }

    #[test]
    fn word_in_two_groups_gets_union() {
        let t = Thesaurus::from_groups([
            vec!["gain", "profit"],
            vec!["gain", "rise"],
        ]);
        let gain: Vec<&str> = t.lookup("gain").collect();
        assert_eq!(gain, vec!["profit", "rise"]);
    }

    #[test]
    fn singleton_groups_are_ignored() {
        let t = Thesaurus::from_groups([vec!["alone"], vec!["dup", "dup"]]);
        assert!(t.is_empty());
    }

    #[test]
    fn expand_appends_after_original() {
        let t = Thesaurus::from_groups([vec!["big", "large"]]);
        assert_eq!(t.expand("A big deal"), "A big deal large");
    }

    #[test]
    fn expand_skips_words_already_present() {
        let t = Thesaurus::from_groups([vec!["big", "large", "huge"]]);
        assert_eq!(t.expand("big and large"), "big and large huge");
    }

    #[test]
    fn expand_without_synonyms_is_borrowed_noop() {
        let t = Thesaurus::builtin();
        let input = "Who wrote this?";
        let out = t.expand(input);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, input);
    }

    #[test]
    fn expand_is_case_insensitive_on_lookup() {
        let t = Thesaurus::builtin();
        let out = t.expand("When was Apple FOUNDED?");
        assert!(out.contains("established"));
    }

    proptest! {
        #[test]
        fn expansion_never_removes_tokens(text in "[A-Za-z ,.?]{0,80}") {
            let t = Thesaurus::builtin();
            let expanded = t.expand(&text);
            let after: HashSet<String> = words(&expanded).into_iter().collect();
            for token in words(&text) {
                prop_assert!(after.contains(&token));
            }
            prop_assert!(expanded.starts_with(text.as_str()));
        }
    }
}
