//! Item filtering.
//!
//! A filter maps the filter keys of an ordered collection and a query to the
//! ordered list of surviving positions. Filters are pure: the same keys and
//! query always produce the same result, so they can run on every keystroke.
//!
//! Two policies are provided:
//!
//! - [`substring_filter`]: case-insensitive containment, original order kept
//! - [`fuzzy_filter`]: subsequence matching ranked by match quality, ties kept
//!   in original order
//!
//! An empty query never filters anything out.
//!
//! ```rust
//! use orvyn::filter::{fuzzy_filter, substring_filter};
//!
//! let keys = ["Cut down some wood", "Fishing in the river"];
//! assert_eq!(substring_filter(&keys, "WOOD"), vec![0]);
//! assert_eq!(fuzzy_filter(&keys, "fish"), vec![1]);
//! assert_eq!(substring_filter(&keys, ""), vec![0, 1]);
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cmp::Reverse;
use std::fmt;
use std::sync::Arc;

/// Signature of a user supplied filter. It must be total for any query.
pub type FilterFn = dyn Fn(&[String], &str) -> Vec<usize> + Send + Sync;

/// Keeps every key that contains `query`, ignoring case.
pub fn substring_filter<S: AsRef<str>>(keys: &[S], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..keys.len()).collect();
    }

    let query = query.to_lowercase();

    keys.iter()
        .enumerate()
        .filter(|(_, key)| key.as_ref().to_lowercase().contains(&query))
        .map(|(index, _)| index)
        .collect()
}

/// Keeps every key containing the characters of `query` in order.
///
/// Results are ranked by descending skim score, which rewards contiguous and
/// early matches over scattered ones. Equal scores keep their original order.
pub fn fuzzy_filter<S: AsRef<str>>(keys: &[S], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..keys.len()).collect();
    }

    let matcher = SkimMatcherV2::default().ignore_case();

    let mut scored: Vec<(usize, i64)> = keys
        .iter()
        .enumerate()
        .filter_map(|(index, key)| {
            matcher
                .fuzzy_match(key.as_ref(), query)
                .map(|score| (index, score))
        })
        .collect();

    // sort_by_key is stable, so equal scores stay in index order.
    scored.sort_by_key(|&(_, score)| Reverse(score));

    scored.into_iter().map(|(index, _)| index).collect()
}

/// The filter used by a list.
#[derive(Clone, Default)]
pub enum FilterPolicy {
    /// Case-insensitive containment, see [`substring_filter`].
    Substring,
    /// Scored subsequence match, see [`fuzzy_filter`].
    #[default]
    Fuzzy,
    /// Any total function from filter keys and a query to surviving
    /// positions. It must return valid, distinct indices into `keys`.
    Custom(Arc<FilterFn>),
}

impl FilterPolicy {
    /// Wraps a closure as a custom policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::filter::FilterPolicy;
    ///
    /// let prefix = FilterPolicy::custom(|keys, query| {
    ///     (0..keys.len()).filter(|&i| keys[i].starts_with(query)).collect()
    /// });
    /// let keys = vec!["apple".to_string(), "banana".to_string()];
    /// assert_eq!(prefix.apply(&keys, "ba"), vec![1]);
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[String], &str) -> Vec<usize> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Runs the policy. An empty query keeps every position in order for the
    /// built-in policies.
    pub fn apply(&self, keys: &[String], query: &str) -> Vec<usize> {
        match self {
            Self::Substring => substring_filter(keys, query),
            Self::Fuzzy => fuzzy_filter(keys, query),
            Self::Custom(f) => f(keys, query),
        }
    }
}

impl fmt::Debug for FilterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => f.write_str("Substring"),
            Self::Fuzzy => f.write_str("Fuzzy"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
