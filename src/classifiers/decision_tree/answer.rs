//! The exported decision tree.
//!
//! An [`Answer`] is a single-entry mapping from an attribute number (split
//! column + 1) to the branches taken on that attribute's values. Each branch
//! ends in a class label or a nested answer:
//!
//! ```json
//! {"1": {"sunny": {"2": {"hot": "yes", "cool": "no"}}, "rainy": "no"}}
//! ```
//!
//! Branch order follows the order in which values first appeared in the data,
//! and is preserved through JSON.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    key: usize,
    branches: Vec<(String, Outcome)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Decision(String),
    Subtree(Answer),
}

impl Answer {
    /// An answer with no branches under `key`.
    pub fn new(key: usize) -> Self {
        Self {
            key,
            branches: Vec::new(),
        }
    }

    pub fn key(&self) -> usize {
        self.key
    }

    pub fn branches(&self) -> &[(String, Outcome)] {
        &self.branches
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn get(&self, value: &str) -> Option<&Outcome> {
        self.branches
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, o)| o)
    }

    /// Records the outcome for `value`, replacing an earlier one.
    pub fn insert(&mut self, value: impl Into<String>, outcome: Outcome) {
        let value = value.into();
        match self.branches.iter_mut().find(|(v, _)| *v == value) {
            Some((_, slot)) => *slot = outcome,
            None => self.branches.push((value, outcome)),
        }
    }

    /// Number of leaves reachable from this answer.
    pub fn leaf_count(&self) -> usize {
        self.branches
            .iter()
            .map(|(_, o)| match o {
                Outcome::Decision(_) => 1,
                Outcome::Subtree(sub) => sub.leaf_count(),
            })
            .sum()
    }

    /// Length of the longest attribute path, counting this answer.
    pub fn depth(&self) -> usize {
        1 + self
            .branches
            .iter()
            .filter_map(|(_, o)| match o {
                Outcome::Subtree(sub) => Some(sub.depth()),
                Outcome::Decision(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl Default for Answer {
    fn default() -> Self {
        Self::new(1)
    }
}

struct Branches<'a>(&'a [(String, Outcome)]);

impl Serialize for Branches<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (value, outcome) in self.0 {
            map.serialize_entry(value, outcome)?;
        }
        map.end()
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key.to_string(), &Branches(&self.branches))?;
        map.end()
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Decision(class) => serializer.serialize_str(class),
            Outcome::Subtree(answer) => answer.serialize(serializer),
        }
    }
}

struct BranchList(Vec<(String, Outcome)>);

impl<'de> Deserialize<'de> for BranchList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BranchListVisitor;

        impl<'de> Visitor<'de> for BranchListVisitor {
            type Value = BranchList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from attribute values to outcomes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<BranchList, A::Error> {
                let mut branches = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((value, outcome)) = map.next_entry::<String, Outcome>()? {
                    branches.push((value, outcome));
                }
                Ok(BranchList(branches))
            }
        }

        deserializer.deserialize_map(BranchListVisitor)
    }
}

struct AnswerVisitor;

impl<'de> Visitor<'de> for AnswerVisitor {
    type Value = Answer;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a single-entry map keyed by attribute number")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Answer, A::Error> {
        let Some((key, branches)) = map.next_entry::<String, BranchList>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        let key = match key.parse::<usize>() {
            Ok(k) => k,
            Err(_) => {
                return Err(de::Error::invalid_value(de::Unexpected::Str(&key), &self));
            }
        };
        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }
        Ok(Answer {
            key,
            branches: branches.0,
        })
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AnswerVisitor)
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OutcomeVisitor;

        impl<'de> Visitor<'de> for OutcomeVisitor {
            type Value = Outcome;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a class label or a nested answer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Outcome, E> {
                Ok(Outcome::Decision(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Outcome, E> {
                Ok(Outcome::Decision(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Outcome, A::Error> {
                AnswerVisitor.visit_map(map).map(Outcome::Subtree)
            }
        }

        deserializer.deserialize_any(OutcomeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Answer {
        let mut inner = Answer::new(2);
        inner.insert("hot", Outcome::Decision("yes".into()));
        inner.insert("cool", Outcome::Decision("no".into()));

        let mut root = Answer::new(1);
        root.insert("sunny", Outcome::Subtree(inner));
        root.insert("rainy", Outcome::Decision("no".into()));
        root
    }

    #[test]
    fn serializes_to_nested_maps() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            v,
            json!({"1": {"sunny": {"2": {"hot": "yes", "cool": "no"}}, "rainy": "no"}})
        );
    }

    #[test]
    fn json_text_keeps_branch_order() {
        let s = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            s,
            r#"{"1":{"sunny":{"2":{"hot":"yes","cool":"no"}},"rainy":"no"}}"#
        );
    }

    #[test]
    fn round_trips_through_json() {
        let a = sample();
        let text = serde_json::to_string_pretty(&a).unwrap();
        let back: Answer = serde_json::from_str(&text).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn empty_answer_round_trips() {
        let a = Answer::default();
        let text = serde_json::to_string(&a).unwrap();
        assert_eq!(text, r#"{"1":{}}"#);
        assert_eq!(serde_json::from_str::<Answer>(&text).unwrap(), a);
    }

    #[test]
    fn rejects_multiple_keys_and_bad_keys() {
        assert!(serde_json::from_str::<Answer>(r#"{"1":{},"2":{}}"#).is_err());
        assert!(serde_json::from_str::<Answer>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<Answer>(r#"{"x":{}}"#).is_err());
        assert!(serde_json::from_str::<Answer>(r#"{"1":{"a":3}}"#).is_err());
    }

    #[test]
    fn insert_replaces_existing_branch() {
        let mut a = Answer::new(3);
        a.insert("v", Outcome::Decision("a".into()));
        a.insert("v", Outcome::Decision("b".into()));
        assert_eq!(a.branches().len(), 1);
        assert_eq!(a.get("v"), Some(&Outcome::Decision("b".into())));
    }

    #[test]
    fn shape_metrics() {
        let a = sample();
        assert_eq!(a.leaf_count(), 3);
        assert_eq!(a.depth(), 2);
        assert_eq!(Answer::default().depth(), 1);
    }
}
