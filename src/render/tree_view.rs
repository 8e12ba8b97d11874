use crate::classifiers::decision_tree::{Answer, Outcome};
use std::fmt;

const INDENT: usize = 4;

/// Display-oriented form of an [`Answer`].
///
/// Internal nodes carry the attribute number they test, leaves carry the
/// decision class. `value` is the incoming edge label (`None` at the root).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeView {
    pub attribute: Option<usize>,
    pub value: Option<String>,
    pub decision_class: Option<String>,
    pub children: Vec<TreeView>,
}

impl TreeView {
    pub fn from_answer(answer: &Answer) -> Self {
        let children = answer
            .branches()
            .iter()
            .map(|(value, outcome)| match outcome {
                Outcome::Decision(class) => TreeView {
                    value: Some(value.clone()),
                    decision_class: Some(class.clone()),
                    ..TreeView::default()
                },
                Outcome::Subtree(sub) => TreeView {
                    value: Some(value.clone()),
                    ..TreeView::from_answer(sub)
                },
            })
            .collect();

        TreeView {
            attribute: Some(answer.key()),
            value: None,
            decision_class: None,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.attribute.is_none()
    }

    fn write_at(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:indent$}", "")?;
        let value = self.value.as_deref().filter(|v| !v.is_empty());
        match self.attribute {
            Some(attribute) => {
                if let Some(v) = value {
                    write!(f, "{v} -> ")?;
                }
                writeln!(f, "Atrybut {attribute}")?;
                for child in &self.children {
                    child.write_at(f, indent + INDENT)?;
                }
                Ok(())
            }
            None => writeln!(
                f,
                "{} -> {}",
                self.value.as_deref().unwrap_or_default(),
                self.decision_class.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl fmt::Display for TreeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_at(f, 0)
    }
}

impl From<&Answer> for TreeView {
    fn from(answer: &Answer) -> Self {
        TreeView::from_answer(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::Inducer;
    use crate::testing::{tennis_table, weather_table};

    #[test]
    fn renders_weather_tree() {
        let answer = Inducer::new().induce(&weather_table()).unwrap();
        let text = TreeView::from_answer(&answer).to_string();
        let expected = "\
Atrybut 1
    sunny -> Atrybut 2
        hot -> yes
        cool -> no
    rainy -> no
";
        assert_eq!(text, expected);
    }

    #[test]
    fn renders_tennis_tree() {
        let answer = Inducer::new().induce(&tennis_table()).unwrap();
        let text = TreeView::from(&answer).to_string();
        let expected = "\
Atrybut 1
    sunny -> Atrybut 3
        high -> no
        normal -> yes
    overcast -> yes
    rain -> Atrybut 4
        weak -> yes
        strong -> no
";
        assert_eq!(text, expected);
    }

    #[test]
    fn structure_mirrors_answer() {
        let answer = Inducer::new().induce(&weather_table()).unwrap();
        let view = TreeView::from_answer(&answer);
        assert_eq!(view.attribute, Some(1));
        assert_eq!(view.value, None);
        assert_eq!(view.children.len(), 2);

        let sunny = &view.children[0];
        assert_eq!(sunny.value.as_deref(), Some("sunny"));
        assert_eq!(sunny.attribute, Some(2));
        assert!(!sunny.is_leaf());

        let rainy = &view.children[1];
        assert!(rainy.is_leaf());
        assert_eq!(rainy.decision_class.as_deref(), Some("no"));
    }

    #[test]
    fn lone_leaf_answer_renders_header_only() {
        let text = TreeView::from_answer(&Answer::default()).to_string();
        assert_eq!(text, "Atrybut 1\n");
    }
}
