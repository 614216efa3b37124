use crate::configuration::manifest::{AddStep, ExpectStep};
use crate::result::TestResultNode;

pub trait Assertable<T> {
    /// `Err` carries a description of every mismatch.
    fn assert(&self, data: &T) -> Result<(), String>;
}

impl Assertable<TestResultNode> for ExpectStep {
    fn assert(&self, node: &TestResultNode) -> Result<(), String> {
        trace!("Assertation of node '{}': {:?} to {:?}", self.node, node, self);
        let mut mismatches = vec![];
        if let Some(expected) = self.duration {
            if node.duration() != expected {
                mismatches.push(format!(
                    "duration of '{}' is {}, expected {}",
                    self.node,
                    node.duration(),
                    expected
                ));
            }
        }
        if let Some(expected) = self.start {
            if node.start() != expected {
                mismatches.push(format!(
                    "start of '{}' is {}, expected {}",
                    self.node,
                    node.start(),
                    expected
                ));
            }
        }
        if let Some(expected) = self.children {
            if node.children().len() != expected {
                mismatches.push(format!(
                    "'{}' has {} children, expected {}",
                    self.node,
                    node.children().len(),
                    expected
                ));
            }
        }

        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(mismatches.join("; "))
        }
    }
}

impl Assertable<bool> for AddStep {
    fn assert(&self, success: &bool) -> Result<(), String> {
        match self.success {
            Some(expected) if expected != *success => Err(format!(
                "adding {} to '{}' returned {}, expected {}",
                self.child
                    .as_ref()
                    .map(|id| format!("'{}'", id))
                    .unwrap_or_else(|| "absent child".to_owned()),
                self.parent,
                success,
                expected
            )),
            _ => Ok(()),
        }
    }
}
