//! Word-frequency tabulation over visible page text

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Characters removed from every token: anything that is neither a word
/// character, a numeral nor whitespace. `\w` alone misses `No` numerals
/// such as `½`, `²` and `①`.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\p{N}\s]").unwrap());

/// Han numerals with a primary or accounting numeric value. `char::is_numeric`
/// only covers the `N*` categories; these are `Lo` letters.
const HAN_NUMERALS: &[char] = &[
    '〇', '零', '一', '二', '三', '四', '五', '六', '七', '八', '九', '十', '百', '千', '万', '萬',
    '亿', '億', '兆', '壹', '贰', '貳', '叁', '參', '肆', '伍', '陆', '陸', '柒', '捌', '玖', '拾',
    '佰', '仟',
];

/// Case-folded word counts, kept in first-seen order
///
/// Serializes as a JSON object whose keys appear in the order the words
/// were first counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word`
    pub fn increment(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
                self.order.push(word.to_string());
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Words and counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order
            .iter()
            .map(move |word| (word.as_str(), self.counts[word]))
    }

    /// The `n` most frequent words, highest count first
    ///
    /// Words with equal counts keep their first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut words: Vec<(&str, u64)> = self.iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1));
        words.truncate(n);
        words
    }

    /// The underlying unordered mapping
    pub fn as_map(&self) -> &HashMap<String, u64> {
        &self.counts
    }
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (word, count) in self.iter() {
            map.serialize_entry(word, &count)?;
        }
        map.end()
    }
}

/// How much of the fragment sequence a tabulation consumed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabulationStats {
    /// Fragments pulled from the sequence, including the terminator
    pub fragments_consumed: usize,

    /// Whether consumption stopped on the terminator
    pub terminator_reached: bool,
}

/// Lowercases a token and strips every non-word, non-whitespace character
///
/// Punctuation-only tokens normalize to the empty string.
pub fn normalize_word(token: &str) -> String {
    NON_WORD.replace_all(&token.to_lowercase(), "").into_owned()
}

fn is_numeral(c: char) -> bool {
    c.is_numeric() || HAN_NUMERALS.contains(&c)
}

/// True for non-empty words made only of numeric characters
fn is_number(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_numeral)
}

/// Counts normalized words across `fragments`, stopping after `terminator`
///
/// Fragments are pulled one at a time. Each is split on whitespace and every
/// token is normalized with [`normalize_word`]; purely numeric words are not
/// counted. Once a fragment equal to `terminator` (exact comparison against
/// the original, un-normalized fragment) has been counted, no further
/// fragment is read. Without a terminator match the whole sequence is
/// consumed.
///
/// # Example
///
/// ```
/// use policy_scout::scrape::tabulate;
///
/// let freq = tabulate(["Hello World!", "World says hi.", "END", "ignored"], "END");
/// assert_eq!(freq.get("world"), Some(2));
/// assert_eq!(freq.get("end"), Some(1));
/// assert_eq!(freq.get("ignored"), None);
/// ```
pub fn tabulate<I, S>(fragments: I, terminator: &str) -> WordFrequency
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tabulate_with_stats(fragments, terminator).0
}

/// Like [`tabulate`], also reporting how much of the sequence was read
pub fn tabulate_with_stats<I, S>(fragments: I, terminator: &str) -> (WordFrequency, TabulationStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut freq = WordFrequency::new();
    let mut stats = TabulationStats::default();

    for fragment in fragments {
        let fragment = fragment.as_ref();
        stats.fragments_consumed += 1;

        for token in fragment.split_whitespace() {
            let word = normalize_word(token);
            if is_number(&word) {
                continue;
            }
            freq.increment(&word);
        }

        if fragment == terminator {
            stats.terminator_reached = true;
            break;
        }
    }

    (freq, stats)
}
