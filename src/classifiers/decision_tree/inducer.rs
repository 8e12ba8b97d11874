use crate::classifiers::decision_tree::answer::{Answer, Outcome};
use crate::classifiers::decision_tree::config::{BuildStrategy, ImpureLeafPolicy, InductionConfig};
use crate::classifiers::decision_tree::error::InductionError;
use crate::classifiers::decision_tree::nodes::{NodeState, Settlement, TreeNode};
use crate::core::Table;
use std::mem;
use tracing::{debug, info, warn};

/// Builds a gain-ratio decision tree from a table.
///
/// The default [`BuildStrategy::Worklist`] runs in two phases: [`expand`]
/// settles every node in creation order, appending children to the same list,
/// and [`assemble`] folds the list back into a nested [`Answer`] in reverse
/// creation order. [`BuildStrategy::Recursive`] produces the same answer by
/// building each subtree inline.
///
/// [`expand`]: Inducer::expand
#[derive(Debug, Clone, Default)]
pub struct Inducer {
    strategy: BuildStrategy,
    impure_leaf: ImpureLeafPolicy,
}

impl Inducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &InductionConfig) -> Self {
        Self {
            strategy: config.strategy,
            impure_leaf: config.impure_leaf,
        }
    }

    pub fn with_strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_impure_leaf(mut self, policy: ImpureLeafPolicy) -> Self {
        self.impure_leaf = policy;
        self
    }

    pub fn strategy(&self) -> BuildStrategy {
        self.strategy
    }

    pub fn induce(&self, table: &Table) -> Result<Answer, InductionError> {
        info!(
            rows = table.len(),
            columns = table.width(),
            strategy = %self.strategy,
            "inducing decision tree"
        );
        let answer = match self.strategy {
            BuildStrategy::Worklist => assemble(self.expand(table.clone())?),
            BuildStrategy::Recursive => self.grow(table)?.answer,
        };
        info!(
            leaves = answer.leaf_count(),
            depth = answer.depth(),
            "induction finished"
        );
        Ok(answer)
    }

    /// Settles every node, breadth-first, without merging.
    ///
    /// The returned list starts with the root; every child appears after its
    /// parent.
    pub fn expand(&self, table: Table) -> Result<Vec<TreeNode>, InductionError> {
        let mut nodes = vec![TreeNode::root(table)];
        let mut cursor = 0;

        while cursor < nodes.len() {
            let settlement = Settlement::decide(&nodes[cursor].table, self.impure_leaf)?;
            match settlement {
                Settlement::Leaf { decision } => {
                    let node = &mut nodes[cursor];
                    node.decision = decision;
                    node.state = NodeState::Leaf;
                }
                Settlement::Split { column, children } => {
                    for (value, child_table) in children {
                        let id = nodes.len();
                        nodes.push(TreeNode::child(child_table, value));
                        nodes[cursor].children.push(id);
                    }
                    let node = &mut nodes[cursor];
                    node.column = Some(column);
                    node.state = NodeState::Split;
                }
            }
            cursor += 1;
        }

        debug!(nodes = nodes.len(), "expansion finished");
        Ok(nodes)
    }

    fn grow(&self, table: &Table) -> Result<Grown, InductionError> {
        match Settlement::decide(table, self.impure_leaf)? {
            Settlement::Leaf { decision } => Ok(Grown {
                decision,
                answer: Answer::default(),
            }),
            Settlement::Split { column, children } => {
                let mut answer = Answer::new(column + 1);
                for (value, child_table) in children {
                    let child = self.grow(&child_table)?;
                    let outcome = match child.decision {
                        Some(class) => Outcome::Decision(class),
                        None => {
                            if child.answer.is_empty() {
                                warn!(value = %value, "undecidable leaf");
                            }
                            Outcome::Subtree(child.answer)
                        }
                    };
                    answer.insert(value, outcome);
                }
                Ok(Grown {
                    decision: None,
                    answer,
                })
            }
        }
    }
}

struct Grown {
    decision: Option<String>,
    answer: Answer,
}

/// Folds expanded nodes into the root's answer.
pub fn assemble(mut nodes: Vec<TreeNode>) -> Answer {
    merge(&mut nodes);
    nodes
        .into_iter()
        .next()
        .map(|root| root.answer)
        .unwrap_or_default()
}

/// Merges every node's children into its answer, in place.
///
/// Nodes are visited in reverse creation order, so each child is merged
/// before its parent reads it. Non-leaf children hand their answer over to
/// the parent and keep an empty one.
pub fn merge(nodes: &mut [TreeNode]) {
    for id in (0..nodes.len()).rev() {
        let mut answer = Answer::new(nodes[id].answer_key());
        let children = mem::take(&mut nodes[id].children);

        for &child_id in &children {
            debug_assert!(child_id > id);
            let child = &mut nodes[child_id];
            let value = child.attribute.clone().unwrap_or_default();
            let outcome = match &child.decision {
                Some(class) => Outcome::Decision(class.clone()),
                None => {
                    if child.children.is_empty() {
                        warn!(value = %value, "undecidable leaf");
                    }
                    Outcome::Subtree(mem::take(&mut child.answer))
                }
            };
            answer.insert(value, outcome);
        }

        let node = &mut nodes[id];
        node.children = children;
        node.answer = answer;
        node.state = NodeState::Merged;
    }
}
