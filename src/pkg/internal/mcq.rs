use std::collections::{BTreeSet, HashSet};

use lazy_static::lazy_static;
use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};
use serde::Serialize;

pub const DEFAULT_QUESTION_COUNT: usize = 5;
const BLANK: &str = "_____";
const DISTRACTORS: usize = 3;

lazy_static! {
    static ref STOP_WORDS: HashSet<&'static str> = [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
        "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
        "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
        "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
        "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now", "d",
        "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn",
        "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn",
        "weren", "won", "wouldn",
    ]
    .into_iter()
    .collect();
}

/// A fill-in-the-blank question built from a sentence of study notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub description: String,
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if at_boundary {
            let end = i + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn keywords(text: &str) -> Vec<String> {
    words(text)
        .map(str::to_lowercase)
        .filter(|w| !STOP_WORDS.contains(w.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Builds up to `num_questions` questions, one from each of the first
/// `num_questions` sentences that contain a usable keyword (longer than
/// three characters, not a stop word).
pub fn generate_mcqs<R: Rng + ?Sized>(text: &str, num_questions: usize, rng: &mut R) -> Vec<Mcq> {
    let pool = keywords(text);
    let mut mcqs = Vec::new();

    for sentence in split_sentences(text).into_iter().take(num_questions) {
        let Some(word) = words(sentence).find(|w| {
            w.chars().count() > 3 && pool.binary_search(&w.to_lowercase()).is_ok()
        }) else {
            continue;
        };
        let answer_key = word.to_lowercase();

        let mut options: Vec<String> = pool.choose_multiple(rng, DISTRACTORS).cloned().collect();
        if !options.contains(&answer_key) {
            options.push(answer_key);
        }
        options.shuffle(rng);

        mcqs.push(Mcq {
            question: sentence.replace(word, BLANK),
            options,
            answer: word.to_string(),
            description: format!(
                "The correct answer is '{word}'. This is because the statement from the notes says: \"{sentence}\""
            ),
        });
    }

    mcqs
}
