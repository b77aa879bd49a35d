//! Splits command arguments on `prefix/` markers.
//!
//! `n/Amy Bee p/91234567 t/friend t/vip` yields `n -> "Amy Bee"`,
//! `p -> "91234567"` and two `t` values. Words before the first prefix form the
//! preamble. A value runs until the next recognised prefix, so values may hold
//! spaces; runs of whitespace collapse to one space.

use super::ParseError;

pub(crate) const NAME: &str = "n";
pub(crate) const PHONE: &str = "p";
pub(crate) const EMAIL: &str = "e";
pub(crate) const ADDRESS: &str = "a";
pub(crate) const TAG: &str = "t";
pub(crate) const LOYALTY_POINTS: &str = "lp";
pub(crate) const ALLERGY: &str = "al";
pub(crate) const SPECIAL_REQUEST: &str = "sr";
pub(crate) const LEAVES: &str = "l";
pub(crate) const SALARY: &str = "s";
pub(crate) const JOB_TITLE: &str = "jt";
pub(crate) const SHIFT: &str = "sh";
pub(crate) const SUPPLY_TYPE: &str = "st";
pub(crate) const DELIVERY_DETAILS: &str = "dd";
pub(crate) const NUMBER_OF_PEOPLE: &str = "np";
pub(crate) const DATE_TIME: &str = "dt";
pub(crate) const REMARK: &str = "r";
pub(crate) const SORT_BY: &str = "by";
pub(crate) const ORDER: &str = "o";

#[derive(Debug, Default)]
pub(crate) struct ArgMap {
    preamble: String,
    values: Vec<(&'static str, String)>,
}

impl ArgMap {
    pub(crate) fn tokenize(args: &str, prefixes: &[&'static str]) -> Self {
        let mut preamble: Vec<&str> = Vec::new();
        let mut values: Vec<(&'static str, Vec<&str>)> = Vec::new();

        for token in args.split_whitespace() {
            let marker = token
                .split_once('/')
                .and_then(|(head, rest)| prefixes.iter().find(|p| **p == head).map(|p| (*p, rest)));
            if let Some((prefix, rest)) = marker {
                values.push((prefix, vec![rest]));
            } else if let Some((_, words)) = values.last_mut() {
                words.push(token);
            } else {
                preamble.push(token);
            }
        }

        Self {
            preamble: preamble.join(" "),
            values: values
                .into_iter()
                .map(|(prefix, words)| {
                    let words: Vec<&str> = words.into_iter().filter(|w| !w.is_empty()).collect();
                    (prefix, words.join(" "))
                })
                .collect(),
        }
    }

    pub(crate) fn preamble(&self) -> &str {
        &self.preamble
    }

    pub(crate) fn has(&self, prefix: &str) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }

    /// Last value given for `prefix`.
    pub(crate) fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Every value given for `prefix`, in input order.
    pub(crate) fn all(&self, prefix: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub(crate) fn required(&self, prefix: &str, usage: &str) -> Result<&str, ParseError> {
        self.value(prefix)
            .ok_or_else(|| ParseError::invalid_format(usage))
    }
}
