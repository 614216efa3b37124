use serde_derive::Deserialize;

/// Rule used to refresh a node's duration after `add_child`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DurationPolicy {
    /// Re-sums every current child onto the existing duration on each call,
    /// rejected calls included.
    Cumulative,
    /// Replaces the duration with the sum over the current children.
    Recompute,
}

impl Default for DurationPolicy {
    fn default() -> Self {
        DurationPolicy::Cumulative
    }
}

/// A test result holding a start time and its sub results.
///
/// The duration is derived from the start times of the immediate children,
/// measured against the node's own start time. A node adopts the start time
/// of its first child.
#[derive(Debug, Clone, Default)]
pub struct TestResultNode {
    start: f64,
    duration: f64,
    policy: DurationPolicy,
    children: Vec<TestResultNode>,
}

impl TestResultNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(start: f64) -> Self {
        Self::with_policy(start, DurationPolicy::default())
    }

    pub fn with_policy(start: f64, policy: DurationPolicy) -> Self {
        Self {
            start,
            duration: 0.0,
            policy,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn set_start(&mut self, start: f64) {
        self.start = start;
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn policy(&self) -> DurationPolicy {
        self.policy
    }

    #[inline]
    pub fn children(&self) -> &[TestResultNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&TestResultNode> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut TestResultNode> {
        self.children.get_mut(index)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `child` and refreshes the duration.
    ///
    /// Returns `false` when no child was supplied. The duration is refreshed
    /// in either case.
    pub fn add_child(&mut self, child: Option<TestResultNode>) -> bool {
        let success = match child {
            Some(child) => {
                self.children.push(child);
                if self.children.len() == 1 {
                    self.start = self.children[0].start;
                }
                true
            }
            None => false,
        };

        let spread = self.children_spread();
        match self.policy {
            DurationPolicy::Cumulative => self.duration += spread,
            DurationPolicy::Recompute => self.duration = spread,
        }

        success
    }

    fn children_spread(&self) -> f64 {
        self.children
            .iter()
            .map(|child| (child.start - self.start).abs())
            .sum()
    }
}
