//! Rule settings for move generation

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing [`KingRule`]
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("unknown king rule {0:?}")]
pub struct KingRuleParseError(pub String);

/// Error building [`Rules`] from command-line arguments
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum RulesArgsError {
    /// Argument is not recognized
    #[error("unknown argument {0:?}")]
    UnknownArg(String),
    /// Bad value for `--king=`
    #[error("bad king rule: {0}")]
    King(#[from] KingRuleParseError),
}

/// How kings move
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KingRule {
    /// Kings don't move at all
    ///
    /// Move generation returns an empty tree for a king. This is the default, so callers that only
    /// deal with men are not affected by picking a king variant.
    #[default]
    Immobile,
    /// Kings move one step along any of the four diagonals and capture an adjacent piece by
    /// jumping to the square right behind it
    Short,
    /// Kings slide any distance along any of the four diagonals, and capture the first piece met
    /// on a diagonal by landing on any empty square behind it
    Flying,
}

impl fmt::Display for KingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            KingRule::Immobile => write!(f, "immobile"),
            KingRule::Short => write!(f, "short"),
            KingRule::Flying => write!(f, "flying"),
        }
    }
}

impl FromStr for KingRule {
    type Err = KingRuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immobile" => Ok(KingRule::Immobile),
            "short" => Ok(KingRule::Short),
            "flying" => Ok(KingRule::Flying),
            _ => Err(KingRuleParseError(s.to_string())),
        }
    }
}

/// Settings which affect move generation
///
/// # Example
///
/// ```
/// # use checkers::rules::{KingRule, Rules};
/// #
/// let rules = Rules::new().with_king(KingRule::Flying);
/// assert_eq!(rules.king, KingRule::Flying);
/// assert_eq!(Rules::default().king, KingRule::Immobile);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rules {
    pub king: KingRule,
}

impl Rules {
    /// Returns the default rules
    ///
    /// Does the same as [`Rules::default()`], except that this function is `const`.
    pub const fn new() -> Rules {
        Rules {
            king: KingRule::Immobile,
        }
    }

    pub const fn with_king(self, king: KingRule) -> Rules {
        Rules { king }
    }

    /// Builds the rules from command-line arguments
    ///
    /// Accepts `--immobile`, `--short` and `--flying` as shorthands for the corresponding
    /// [`KingRule`], and `--king=<rule>` with the rule name. If several king options are given, the
    /// last one wins. Any other argument is an error.
    ///
    /// # Example
    ///
    /// ```
    /// # use checkers::rules::{KingRule, Rules};
    /// #
    /// assert_eq!(Rules::from_args(["--flying"]).unwrap().king, KingRule::Flying);
    /// assert_eq!(Rules::from_args(["--king=short"]).unwrap().king, KingRule::Short);
    /// assert_eq!(Rules::from_args(Vec::<String>::new()).unwrap(), Rules::new());
    /// assert!(Rules::from_args(["--fast"]).is_err());
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Rules, RulesArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Rules::new();
        for arg in args {
            let arg = arg.as_ref();
            let king = match arg {
                "--immobile" => KingRule::Immobile,
                "--short" => KingRule::Short,
                "--flying" => KingRule::Flying,
                _ => match arg.strip_prefix("--king=") {
                    Some(name) => KingRule::from_str(name)?,
                    None => return Err(RulesArgsError::UnknownArg(arg.to_string())),
                },
            };
            rules = rules.with_king(king);
        }
        Ok(rules)
    }
}
