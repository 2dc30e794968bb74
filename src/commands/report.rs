//! Constraint composer
//!
//! Picks which filters apply from the non-empty constraint fields, runs them
//! in a fixed order and ranks the letters of whatever survives.

use crate::core::{RankedPair, Template, TemplateError, rank};
use crate::filters::{exclude_letters, include_letters, match_anti_pattern, match_pattern};
use crate::output::formatters::{format_ranking, format_word_list};
use std::fmt;
use thiserror::Error;

/// Constraints supplied by the user
///
/// An empty field means "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Letters that must all appear somewhere in the word
    pub include: String,
    /// Letters that must not appear anywhere in the word
    pub exclude: String,
    /// Letters known to be in the right position, `-` elsewhere
    pub pattern: String,
    /// Letters known to be in the word but in the wrong position, `-` elsewhere
    pub anti_pattern: String,
}

/// Error type for report generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("invalid pattern")]
    InvalidPattern(#[source] TemplateError),
    #[error("invalid antipattern")]
    InvalidAntiPattern(#[source] TemplateError),
}

/// Which constraint combination produced a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraints {
    Exclude {
        exclude: String,
    },
    Include {
        include: String,
    },
    ExcludeAndInclude {
        exclude: String,
        include: String,
    },
    ExcludeIncludeAndPattern {
        exclude: String,
        include: String,
        pattern: String,
    },
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclude { exclude } => write!(f, "exclude '{exclude}'"),
            Self::Include { include } => write!(f, "include '{include}'"),
            Self::ExcludeAndInclude { exclude, include } => {
                write!(f, "exclude '{exclude}' and include '{include}'")
            }
            Self::ExcludeIncludeAndPattern {
                exclude,
                include,
                pattern,
            } => write!(
                f,
                "exclude '{exclude}', include '{include}', and match the pattern '{pattern}'"
            ),
        }
    }
}

/// Outcome of applying a [`Config`] to a word set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// No include or exclude constraint: only the dictionary size is reported
    CountOnly { total: usize },
    /// Surviving words and their letter ranking
    Filtered {
        constraints: Constraints,
        words: Vec<String>,
        ranking: Vec<RankedPair>,
    },
}

impl Report {
    fn filtered(constraints: Constraints, words: Vec<String>) -> Self {
        let ranking = rank(&words);
        Self::Filtered {
            constraints,
            words,
            ranking,
        }
    }

    /// Number of words the report covers
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::CountOnly { total } => *total,
            Self::Filtered { words, .. } => words.len(),
        }
    }

    /// Surviving words, empty for a count-only report
    #[must_use]
    pub fn words(&self) -> &[String] {
        match self {
            Self::CountOnly { .. } => &[],
            Self::Filtered { words, .. } => words,
        }
    }

    /// Letter ranking, empty for a count-only report
    #[must_use]
    pub fn ranking(&self) -> &[RankedPair] {
        match self {
            Self::CountOnly { .. } => &[],
            Self::Filtered { ranking, .. } => ranking,
        }
    }

    /// The one-line sentence naming the constraints and match count
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::CountOnly { total } => format!("{total} words found"),
            Self::Filtered {
                constraints, words, ..
            } => format!("{} words found that {constraints}.", words.len()),
        }
    }

    /// Everything after the summary: word list then ranking
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::CountOnly { .. } => String::new(),
            Self::Filtered { words, ranking, .. } => format!(
                " The words are:\n{}\nThe most common letters are:\n{}",
                format_word_list(words),
                format_ranking(ranking)
            ),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.summary(), self.body())
    }
}

fn parse_template(text: &str) -> Result<Option<Template>, TemplateError> {
    if text.is_empty() {
        Ok(None)
    } else {
        Template::parse(text).map(Some)
    }
}

/// Apply the constraints in `config` to `words`
///
/// Path selection:
/// 1. Only `exclude` set: exclude filter alone
/// 2. Only `include` set: include filter alone
/// 3. Both set: include, then exclude, then the anti-pattern and pattern
///    filters when given
/// 4. Neither set: count only
///
/// Pattern and anti-pattern only take part in path 3.
///
/// # Errors
///
/// Returns `ReportError` if a non-empty pattern or anti-pattern is malformed.
/// Templates are validated before any filtering, whichever path is taken.
///
/// # Examples
/// ```
/// use wordle_guesser::commands::{Config, generate_report};
///
/// let words = ["zebra", "bar", "foot", "hotel", "fun", "free", "jazz"];
/// let config = Config {
///     include: "u".to_string(),
///     exclude: "a".to_string(),
///     ..Config::default()
/// };
///
/// let report = generate_report(&words, &config).unwrap();
/// assert_eq!(report.words(), ["fun"]);
/// ```
pub fn generate_report<S: AsRef<str>>(words: &[S], config: &Config) -> Result<Report, ReportError> {
    let pattern = parse_template(&config.pattern).map_err(ReportError::InvalidPattern)?;
    let anti_pattern =
        parse_template(&config.anti_pattern).map_err(ReportError::InvalidAntiPattern)?;

    let combined = !config.include.is_empty() && !config.exclude.is_empty();
    if !combined && (pattern.is_some() || anti_pattern.is_some()) {
        log::warn!("pattern and antipattern are only applied when both include and exclude are set");
    }

    let report = match (config.include.is_empty(), config.exclude.is_empty()) {
        (true, false) => {
            log::info!("filtering by excluded letters only");
            Report::filtered(
                Constraints::Exclude {
                    exclude: config.exclude.clone(),
                },
                exclude_letters(&config.exclude, words),
            )
        }
        (false, true) => {
            log::info!("filtering by included letters only");
            Report::filtered(
                Constraints::Include {
                    include: config.include.clone(),
                },
                include_letters(&config.include, words),
            )
        }
        (false, false) => combined_report(words, config, pattern.as_ref(), anti_pattern.as_ref()),
        (true, true) => {
            log::info!("no letter constraints, counting words only");
            Report::CountOnly { total: words.len() }
        }
    };

    Ok(report)
}

fn combined_report<S: AsRef<str>>(
    words: &[S],
    config: &Config,
    pattern: Option<&Template>,
    anti_pattern: Option<&Template>,
) -> Report {
    log::info!("filtering by included and excluded letters");

    let included = include_letters(&config.include, words);
    log::debug!("{} words include '{}'", included.len(), config.include);
    let mut survivors = exclude_letters(&config.exclude, &included);
    log::debug!("{} words also exclude '{}'", survivors.len(), config.exclude);

    if let Some(anti_pattern) = anti_pattern {
        survivors = match_anti_pattern(anti_pattern, &survivors);
        log::debug!("{} words avoid '{anti_pattern}'", survivors.len());
    }

    match pattern {
        None => Report::filtered(
            Constraints::ExcludeAndInclude {
                exclude: config.exclude.clone(),
                include: config.include.clone(),
            },
            survivors,
        ),
        Some(pattern) => Report::filtered(
            Constraints::ExcludeIncludeAndPattern {
                exclude: config.exclude.clone(),
                include: config.include.clone(),
                pattern: config.pattern.clone(),
            },
            match_pattern(pattern, &survivors),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 7] = ["zebra", "bar", "foot", "hotel", "fun", "free", "jazz"];

    fn config(include: &str, exclude: &str, pattern: &str, anti_pattern: &str) -> Config {
        Config {
            include: include.to_string(),
            exclude: exclude.to_string(),
            pattern: pattern.to_string(),
            anti_pattern: anti_pattern.to_string(),
        }
    }

    fn render(words: &[&str], config: &Config) -> String {
        generate_report(words, config).unwrap().to_string()
    }

    #[test]
    fn no_constraints_reports_count_only() {
        let report = generate_report(&SAMPLE, &Config::default()).unwrap();
        assert_eq!(report, Report::CountOnly { total: 7 });
        assert_eq!(report.to_string(), "7 words found");
        assert!(report.words().is_empty());
        assert!(report.ranking().is_empty());
    }

    #[test]
    fn include_only() {
        assert_eq!(
            render(&SAMPLE, &config("ab", "", "", "")),
            "2 words found that include 'ab'. The words are:\nzebra\nbar\n\n\
             The most common letters are:\n\na: 2 times\nb: 2 times\nr: 2 times\n\
             e: 1 times\nz: 1 times"
        );
    }

    #[test]
    fn exclude_only() {
        assert_eq!(
            render(&SAMPLE, &config("", "ab", "", "")),
            "4 words found that exclude 'ab'. The words are:\nfoot\nhotel\nfun\nfree\n\n\
             The most common letters are:\n\ne: 3 times\nf: 3 times\no: 3 times\n\
             t: 2 times\nh: 1 times\nl: 1 times\nn: 1 times\nr: 1 times\nu: 1 times"
        );
    }

    #[test]
    fn exclude_only_uppercase_letters() {
        let report = generate_report(&SAMPLE, &config("", "AB", "", "")).unwrap();
        assert_eq!(report.words(), ["foot", "hotel", "fun", "free"]);
        assert_eq!(report.summary(), "4 words found that exclude 'AB'.");
    }

    #[test]
    fn exclude_and_include() {
        let report = generate_report(&SAMPLE, &config("u", "a", "", "")).unwrap();
        assert_eq!(report.words(), ["fun"]);
        assert_eq!(
            report.to_string(),
            "1 words found that exclude 'a' and include 'u'. The words are:\nfun\n\n\
             The most common letters are:\n\nf: 1 times\nn: 1 times\nu: 1 times"
        );
    }

    #[test]
    fn exclude_include_and_anti_pattern() {
        let words = ["zebra", "jazzy", "hotel", "armor", "aroma", "carom"];
        assert_eq!(
            render(&words, &config("z", "h", "", "-e---")),
            "1 words found that exclude 'h' and include 'z'. The words are:\njazzy\n\n\
             The most common letters are:\n\nz: 2 times\na: 1 times\nj: 1 times\ny: 1 times"
        );
    }

    #[test]
    fn exclude_include_anti_pattern_and_pattern() {
        let words = ["zebra", "jazzy", "joker", "hotel", "armor", "aroma", "carom"];
        assert_eq!(
            render(&words, &config("z", "h", "j----", "-e-e-")),
            "1 words found that exclude 'h', include 'z', and match the pattern 'j----'. \
             The words are:\njazzy\n\n\
             The most common letters are:\n\nz: 2 times\na: 1 times\nj: 1 times\ny: 1 times"
        );
    }

    #[test]
    fn pattern_without_anti_pattern() {
        let words = ["jazzy", "zesty", "fuzzy", "jumpy"];
        let report = generate_report(&words, &config("z", "e", "j----", "")).unwrap();
        assert_eq!(report.words(), ["jazzy"]);
    }

    #[test]
    fn templates_ignored_without_both_letter_constraints() {
        let report = generate_report(&SAMPLE, &config("ab", "", "j----", "-e---")).unwrap();
        assert_eq!(report.words(), ["zebra", "bar"]);

        let report = generate_report(&SAMPLE, &config("", "", "j----", "")).unwrap();
        assert_eq!(report.count(), 7);
    }

    #[test]
    fn no_survivors_still_renders() {
        assert_eq!(
            render(&SAMPLE, &config("q", "", "", "")),
            "0 words found that include 'q'. The words are:\n\nThe most common letters are:\n"
        );
    }

    #[test]
    fn malformed_pattern_is_error() {
        let err = generate_report(&SAMPLE, &config("a", "b", "-n-i--", "")).unwrap_err();
        assert_eq!(err, ReportError::InvalidPattern(TemplateError::InvalidLength(6)));
    }

    #[test]
    fn error_message_leaves_cause_to_source() {
        use std::error::Error as _;

        let err = generate_report(&SAMPLE, &config("a", "b", "abc", "")).unwrap_err();
        assert_eq!(err.to_string(), "invalid pattern");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("template must be exactly 5 characters, got 3")
        );
    }

    #[test]
    fn malformed_anti_pattern_is_error_even_when_unused() {
        let err = generate_report(&SAMPLE, &config("", "", "", "a?---")).unwrap_err();
        assert!(matches!(
            err,
            ReportError::InvalidAntiPattern(TemplateError::InvalidCharacter {
                position: 1,
                found: '?'
            })
        ));
    }

    #[test]
    fn report_ranking_matches_words() {
        let report = generate_report(&SAMPLE, &config("", "ab", "", "")).unwrap();
        assert_eq!(report.ranking(), rank(report.words()).as_slice());
        assert_eq!(report.count(), 4);
    }
}
