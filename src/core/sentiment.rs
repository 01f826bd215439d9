//! Lexicon-based sentiment scoring.
//!
//! Scoring goes through the [`SentimentScorer`] trait so a different model
//! can be plugged in. The built-in [`LexiconScorer`] follows the VADER
//! approach:
//!
//! - each known word carries a valence between -4 and +4
//! - boosters ("very") and dampeners ("slightly") in the three preceding
//!   words shift the valence by 0.293, decaying with distance
//! - a negation in the three preceding words multiplies it by -0.74
//! - an ALL-CAPS word in a mixed-case message gains 0.733
//! - words before "but" count half, words after count one and a half
//! - each `!` (up to four) adds 0.292 in the direction of the total
//! - the total is normalized with `s / sqrt(s² + 15)`
//!
//! Labels come from thresholding the compound score, see [`Sentiment`].
//!
//! ```
//! use chatstat::core::sentiment::{LexiconScorer, Sentiment, SentimentScorer};
//! use chatstat::config::SentimentThresholds;
//!
//! let scorer = LexiconScorer::new();
//! let thresholds = SentimentThresholds::default();
//!
//! assert_eq!(Sentiment::from_compound(scorer.compound("I love this"), &thresholds), Sentiment::Positive);
//! assert_eq!(Sentiment::from_compound(scorer.compound("this is awful"), &thresholds), Sentiment::Negative);
//! assert_eq!(Sentiment::from_compound(scorer.compound("see you at 5"), &thresholds), Sentiment::Neutral);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::Ranked;
use crate::MessageRecord;
use crate::config::{AnalysisConfig, SentimentThresholds};

const BOOST: f64 = 0.293;
const CAPS_BOOST: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

// Weight of a modifier 1, 2 and 3 words back
const DISTANCE_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

#[rustfmt::skip]
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("amazing", 2.8), ("awesome", 3.1), ("beautiful", 2.9),
    ("best", 3.2), ("better", 1.9), ("bless", 1.8), ("blessed", 2.9), ("brilliant", 2.8),
    ("calm", 1.3), ("care", 2.2), ("celebrate", 2.7), ("cheers", 2.1), ("congrats", 2.4),
    ("congratulations", 2.9), ("cool", 1.3), ("cute", 2.0), ("delicious", 2.7),
    ("enjoy", 2.2), ("enjoyed", 2.3), ("excellent", 2.7), ("excited", 1.4),
    ("fantastic", 2.6), ("fine", 0.8), ("free", 2.3), ("friend", 2.2), ("fun", 2.3),
    ("funny", 1.9), ("glad", 2.0), ("good", 1.9), ("great", 3.1), ("haha", 2.0),
    ("hahaha", 2.6), ("happy", 2.7), ("hehe", 1.6), ("hope", 1.9), ("hug", 2.1),
    ("hugs", 2.2), ("joy", 2.8), ("kind", 2.4), ("laugh", 2.6), ("like", 2.0),
    ("lmao", 2.0), ("lol", 1.8), ("love", 3.2), ("loved", 2.9), ("lovely", 2.8),
    ("lucky", 1.9), ("miss", -0.6), ("nice", 1.8), ("ok", 1.2), ("okay", 0.9),
    ("perfect", 2.7), ("please", 1.3), ("pretty", 2.2), ("proud", 2.1), ("rofl", 2.7),
    ("safe", 1.9), ("smile", 1.5), ("special", 1.7), ("super", 2.9), ("support", 1.7),
    ("sure", 1.3), ("sweet", 2.0), ("thank", 1.5), ("thanks", 1.9), ("top", 0.8),
    ("welcome", 2.0), ("win", 2.8), ("won", 2.7), ("wonderful", 2.7), ("wow", 2.8),
    ("yay", 2.4), ("yes", 1.7), ("yummy", 2.4),
    // negative
    ("afraid", -2.0), ("alone", -1.0), ("angry", -2.3), ("annoyed", -1.6),
    ("annoying", -1.7), ("awful", -2.0), ("bad", -2.5), ("boring", -1.3),
    ("broke", -1.8), ("broken", -2.1), ("crap", -1.6), ("cry", -2.1), ("crying", -2.1),
    ("damn", -1.7), ("dead", -3.3), ("die", -2.9), ("disappointed", -1.9),
    ("disgusting", -2.4), ("dumb", -2.3), ("fail", -2.5), ("failed", -2.3),
    ("fear", -2.2), ("fight", -1.6), ("hate", -2.7), ("hated", -3.2), ("horrible", -2.5),
    ("hurt", -2.4), ("kill", -3.7), ("lonely", -2.0), ("lose", -1.7),
    ("lost", -1.3), ("mad", -2.2), ("mess", -1.5), ("no", -1.2), ("pain", -2.3),
    ("poor", -2.1), ("problem", -1.7), ("sad", -2.1), ("scared", -1.9), ("sick", -2.3),
    ("sorry", -0.3), ("stupid", -2.4), ("sucks", -1.5), ("terrible", -2.1),
    ("tired", -1.9), ("ugly", -2.3), ("unfortunately", -1.6), ("upset", -1.6),
    ("worried", -1.2), ("worse", -2.1), ("worst", -3.1), ("wrong", -2.1),
    // emoticons
    (":)", 2.0), (":-)", 2.2), (":d", 2.3), (";)", 1.6), ("<3", 1.9), (":(", -1.9),
    (":-(", -1.5), (":'(", -2.2), ("😂", 2.0), ("🤣", 2.2), ("😊", 2.0), ("😍", 2.9),
    ("❤️", 2.5), ("❤", 2.5), ("👍", 1.6), ("😢", -1.9), ("😭", -2.2), ("😡", -2.6),
];

const NEGATIONS: &[&str] = &[
    "not", "never", "none", "nobody", "nothing", "nowhere", "neither", "nor", "nope",
    "without", "cannot", "cant", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent",
    "werent", "wont", "wouldnt", "shouldnt", "couldnt", "havent", "hasnt", "hadnt", "aint",
    "rarely", "seldom",
];

const BOOSTERS: &[&str] = &[
    "absolutely", "completely", "especially", "extremely", "hugely", "incredibly", "most",
    "quite", "really", "so", "super", "too", "totally", "very",
];

const DAMPENERS: &[&str] = &[
    "barely", "hardly", "kinda", "kindof", "less", "marginally", "partly", "slightly",
    "somewhat", "sorta",
];

/// Something that can turn text into a compound score in `[-1, 1]`.
pub trait SentimentScorer {
    fn compound(&self, text: &str) -> f64;
}

/// Sentiment label derived from a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Labels a compound score.
    ///
    /// `>= positive` is Positive, `<= negative` is Negative, everything in
    /// between is Neutral.
    pub fn from_compound(score: f64, thresholds: &SentimentThresholds) -> Self {
        if score >= thresholds.positive {
            Sentiment::Positive
        } else if score <= thresholds.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// The built-in word-valence scorer.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

struct Token {
    word: String,
    shouting: bool,
}

impl LexiconScorer {
    /// Creates a scorer with the built-in English lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON
                .iter()
                .map(|&(w, v)| (w.to_string(), v))
                .collect(),
        }
    }

    /// Adds or overrides a word's valence (-4.0 to 4.0).
    #[must_use]
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.lexicon.insert(word.to_lowercase(), valence);
        self
    }

    /// Returns the valence of a word, if it is in the lexicon.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(&word.to_lowercase()).copied()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let raw: Vec<&str> = text.split_whitespace().collect();
        let mixed_case = raw.iter().any(|w| is_shouting(w))
            && raw.iter().any(|w| has_letters(w) && !is_shouting(w));

        raw.into_iter()
            .filter_map(|w| {
                let lower = w.to_lowercase();
                // Emoticons are mostly punctuation, look them up before cleaning
                let word = if self.lexicon.contains_key(&lower) {
                    lower
                } else {
                    lower
                        .trim_matches(|c: char| c.is_ascii_punctuation())
                        .replace('\'', "")
                };
                (!word.is_empty()).then(|| Token {
                    word,
                    shouting: mixed_case && is_shouting(w),
                })
            })
            .collect()
    }

    /// Sums the valence modifiers found in the three words before `i`.
    fn modifiers(tokens: &[Token], i: usize, valence: f64) -> (f64, bool) {
        let mut scalar = 0.0;
        let mut negated = false;

        for (distance, decay) in DISTANCE_DECAY.iter().enumerate() {
            let Some(j) = i.checked_sub(distance + 1) else {
                break;
            };
            let word = tokens[j].word.as_str();

            if BOOSTERS.contains(&word) {
                scalar += BOOST * decay;
            } else if DAMPENERS.contains(&word) {
                scalar -= BOOST * decay;
            }
            if is_negation(word) {
                negated = true;
            }
        }

        (scalar * valence.signum(), negated)
    }
}

impl SentimentScorer for LexiconScorer {
    fn compound(&self, text: &str) -> f64 {
        let tokens = self.tokenize(text);
        let mut valences = vec![0.0; tokens.len()];

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.lexicon.get(&token.word).copied() else {
                continue;
            };

            if token.shouting {
                valence += CAPS_BOOST * valence.signum();
            }

            let (scalar, negated) = Self::modifiers(&tokens, i, valence);
            valence += scalar;
            if negated {
                valence *= NEGATION_SCALAR;
            }

            valences[i] = valence;
        }

        if let Some(pivot) = tokens.iter().position(|t| t.word == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS);
            sum += bangs as f64 * EXCLAMATION_BOOST * sum.signum();
        }

        normalize(sum)
    }
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

fn has_letters(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
}

fn is_shouting(word: &str) -> bool {
    has_letters(word) && !word.chars().any(char::is_lowercase)
}

/// Rounds a score to `digits` decimal places.
pub fn round_score(score: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (score * factor).round() / factor
}

/// Scorer backed by the full VADER lexicon from the `vader_sentiment` crate.
///
/// Needs the `vader` feature. [`LexiconScorer`] applies the same rules with
/// a much smaller built-in word list, so most chat slang and rarer words only
/// get a valence here.
#[cfg(feature = "vader")]
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

#[cfg(feature = "vader")]
impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

#[cfg(feature = "vader")]
impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "vader")]
impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

#[cfg(feature = "vader")]
impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

/// A text message with its sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMessage<'a> {
    pub record: &'a MessageRecord,
    pub compound: f64,
    pub sentiment: Sentiment,
}

/// Number of messages per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Scores and labels each record.
pub fn score_messages<'a, S>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    scorer: &S,
    config: &AnalysisConfig,
) -> Vec<ScoredMessage<'a>>
where
    S: SentimentScorer + ?Sized,
{
    records
        .into_iter()
        .map(|record| {
            let compound = round_score(scorer.compound(&record.body), config.score_precision);
            ScoredMessage {
                record,
                compound,
                sentiment: Sentiment::from_compound(compound, &config.thresholds),
            }
        })
        .collect()
}

/// Counts scored messages per label.
pub fn sentiment_counts(scored: &[ScoredMessage<'_>]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for message in scored {
        match message.sentiment {
            Sentiment::Positive => counts.positive += 1,
            Sentiment::Neutral => counts.neutral += 1,
            Sentiment::Negative => counts.negative += 1,
        }
    }
    counts
}

/// Mean compound score per author, highest first.
///
/// Messages without an author are skipped. Authors with equal averages keep
/// first-appearance order.
pub fn average_sentiment_by_author(scored: &[ScoredMessage<'_>]) -> Vec<Ranked<f64>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sums: Vec<(&str, f64, usize)> = Vec::new();

    for message in scored {
        let Some(author) = message.record.author() else {
            continue;
        };
        match index.get(author) {
            Some(&i) => {
                sums[i].1 += message.compound;
                sums[i].2 += 1;
            }
            None => {
                index.insert(author, sums.len());
                sums.push((author, message.compound, 1));
            }
        }
    }

    let mut averages: Vec<Ranked<f64>> = sums
        .into_iter()
        .map(|(author, sum, n)| Ranked::new(author, sum / n as f64))
        .collect();
    averages.sort_by(|a, b| b.value.total_cmp(&a.value));
    averages
}
