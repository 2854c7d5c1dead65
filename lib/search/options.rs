use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{str::FromStr, time::Duration};

#[cfg(test)]
use proptest::prelude::*;

/// Configuration for [`Searcher`][`super::Searcher`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct Options {
    /// The maximum number of plies to search, counting the root move.
    #[cfg_attr(test, strategy(0u8..=3))]
    pub depth: u8,

    /// How much of the time budget is reserved to hand the move back.
    #[cfg_attr(test, strategy((0u64..=100).prop_map(Duration::from_millis)))]
    #[serde(with = "humantime_serde")]
    pub margin: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            depth: 4,
            margin: Duration::from_millis(50),
        }
    }
}

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse search options")]
pub struct ParseOptionsError(ron::de::SpannedError);

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn options_deserialize_missing_fields_to_default() {
        assert_eq!("options()".parse(), Ok(Options::default()));
    }

    #[proptest]
    fn parsing_printed_options_is_an_identity(o: Options) {
        assert_eq!(o.to_string().parse(), Ok(o));
    }

    #[proptest]
    fn margin_is_human_readable() {
        assert_eq!(
            "options(depth: 6, margin: \"1s 20ms\")".parse(),
            Ok(Options {
                depth: 6,
                margin: Duration::from_millis(1020),
            })
        );
    }

    #[proptest]
    fn parsing_options_fails_for_unknown_fields() {
        assert!("options(hash: 16)".parse::<Options>().is_err());
    }
}
