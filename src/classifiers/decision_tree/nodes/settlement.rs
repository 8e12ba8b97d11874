use crate::classifiers::decision_tree::attribute_selector::choose_attribute;
use crate::classifiers::decision_tree::config::ImpureLeafPolicy;
use crate::classifiers::decision_tree::error::InductionError;
use crate::classifiers::decision_tree::partition::partition_all;
use crate::core::Table;
use tracing::{debug, warn};

/// The outcome of processing a single node's table.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// No further split. `decision` is `None` only for an empty table.
    Leaf { decision: Option<String> },
    /// Split on `column`, one child table per observed value.
    Split {
        column: usize,
        children: Vec<(String, Table)>,
    },
}

impl Settlement {
    pub fn decide(table: &Table, policy: ImpureLeafPolicy) -> Result<Self, InductionError> {
        if table.is_empty() {
            debug!("empty table, undecidable leaf");
            return Ok(Settlement::Leaf { decision: None });
        }

        let classes = table.decision_classes();
        if let [only] = classes.as_slice() {
            return Ok(Settlement::Leaf {
                decision: Some(only.to_string()),
            });
        }

        match choose_attribute(table)? {
            Some(choice) => {
                debug!(
                    column = choice.column,
                    gain_ratio = choice.gain_ratio,
                    rows = table.len(),
                    "split"
                );
                let children = partition_all(table, choice.column, &choice.values)?;
                Ok(Settlement::Split {
                    column: choice.column,
                    children,
                })
            }
            None => match policy {
                ImpureLeafPolicy::Majority => {
                    let decision = table.decision_counts().most_common().map(str::to_string);
                    warn!(
                        rows = table.len(),
                        decision = decision.as_deref().unwrap_or_default(),
                        "impure table has no usable split, using majority class"
                    );
                    Ok(Settlement::Leaf { decision })
                }
                ImpureLeafPolicy::Fail => Err(InductionError::NoUsableSplit {
                    rows: table.len(),
                    classes: classes.into_iter().map(str::to_string).collect(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{table, weather_table};

    #[test]
    fn empty_table_is_undecided_leaf() {
        let s = Settlement::decide(&table(&[]), ImpureLeafPolicy::Fail).unwrap();
        assert_eq!(s, Settlement::Leaf { decision: None });
    }

    #[test]
    fn pure_table_is_leaf() {
        let t = table(&[&["a", "yes"], &["b", "yes"]]);
        let s = Settlement::decide(&t, ImpureLeafPolicy::Fail).unwrap();
        assert_eq!(
            s,
            Settlement::Leaf {
                decision: Some("yes".into())
            }
        );
    }

    #[test]
    fn impure_table_splits() {
        let s = Settlement::decide(&weather_table(), ImpureLeafPolicy::Majority).unwrap();
        let Settlement::Split { column, children } = s else {
            panic!("expected a split");
        };
        assert_eq!(column, 0);
        let labels: Vec<_> = children.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(labels, vec!["sunny", "rainy"]);
    }

    #[test]
    fn unsplittable_table_follows_policy() {
        let t = table(&[&["k", "no"], &["k", "yes"], &["k", "yes"]]);
        let s = Settlement::decide(&t, ImpureLeafPolicy::Majority).unwrap();
        assert_eq!(
            s,
            Settlement::Leaf {
                decision: Some("yes".into())
            }
        );

        let err = Settlement::decide(&t, ImpureLeafPolicy::Fail).unwrap_err();
        assert_eq!(
            err,
            InductionError::NoUsableSplit {
                rows: 3,
                classes: vec!["no".into(), "yes".into()]
            }
        );
    }
}
