use crate::classifiers::decision_tree::answer::Answer;
use crate::core::Table;

/// Index of a node in the list built by [`Inducer::expand`](crate::classifiers::decision_tree::Inducer::expand).
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Unprocessed,
    Leaf,
    Split,
    Merged,
}

/// One point of the induction: the table it covers and what was decided for it.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) table: Table,
    pub(crate) column: Option<usize>,
    pub(crate) attribute: Option<String>,
    pub(crate) decision: Option<String>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) answer: Answer,
    pub(crate) state: NodeState,
}

impl TreeNode {
    pub fn root(table: Table) -> Self {
        Self::new(table, None)
    }

    pub fn child(table: Table, attribute: String) -> Self {
        Self::new(table, Some(attribute))
    }

    fn new(table: Table, attribute: Option<String>) -> Self {
        Self {
            table,
            column: None,
            attribute,
            decision: None,
            children: Vec::new(),
            answer: Answer::default(),
            state: NodeState::Unprocessed,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Column this node splits on, `None` for leaves.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Value of the parent's split column that leads here; `None` at the root.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    pub fn decision(&self) -> Option<&str> {
        self.decision.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Key of this node's answer: split column + 1, or 1 for a node that
    /// never split (its reserved column slot is 0).
    pub(crate) fn answer_key(&self) -> usize {
        self.column.unwrap_or(0) + 1
    }
}
