use std::collections::HashMap;

/// Value → count statistics for a single column of a [`Table`](crate::core::Table).
///
/// Iteration follows the order in which values were first observed, so every
/// consumer (entropy sums, partition order, exported branches) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCounts {
    order: Vec<String>,
    counts: HashMap<String, usize>,
    total: usize,
}

impl ValueCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.order.push(value.to_string());
                self.counts.insert(value.to_string(), 1);
            }
        }
        self.total += 1;
    }

    pub fn count_of(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of observations, i.e. the row count of the table they came from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|v| (v.as_str(), self.counts.get(v).copied().unwrap_or(0)))
    }

    /// The most frequent value; ties go to the value seen first.
    pub fn most_common(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (value, count) in self.iter() {
            match best {
                Some((_, c)) if c >= count => {}
                _ => best = Some((value, count)),
            }
        }
        best.map(|(v, _)| v)
    }
}

impl<'a> FromIterator<&'a str> for ValueCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = ValueCounts::new();
        for value in iter {
            counts.observe(value);
        }
        counts
    }
}
