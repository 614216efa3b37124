use crate::app::error::Error;
use crate::result::{DurationPolicy, TestResultNode};
use std::collections::HashMap;

/// Position of a node: the id of the tree root holding it and the child
/// indices leading down to it.
#[derive(Debug, Clone)]
struct Location {
    root: String,
    path: Vec<usize>,
}

impl Location {
    fn root(id: &str) -> Self {
        Self {
            root: id.to_owned(),
            path: vec![],
        }
    }
}

/// Nodes of a single scenario addressed by id.
///
/// Attaching moves the child node into its parent; the id keeps resolving to
/// the node through its new location.
#[derive(Debug)]
pub(crate) struct Context {
    policy: DurationPolicy,
    roots: HashMap<String, TestResultNode>,
    locations: HashMap<String, Location>,
}

impl Context {
    pub fn new(policy: DurationPolicy) -> Self {
        Self {
            policy,
            roots: HashMap::new(),
            locations: HashMap::new(),
        }
    }

    pub fn create(&mut self, id: &str, start: f64) -> Result<(), Error> {
        if self.locations.contains_key(id) {
            return Err(Error::DuplicateNode(id.to_owned()));
        }
        self.roots
            .insert(id.to_owned(), TestResultNode::with_policy(start, self.policy));
        self.locations.insert(id.to_owned(), Location::root(id));
        Ok(())
    }

    pub fn node(&self, id: &str) -> Result<&TestResultNode, Error> {
        let location = self.location(id)?;
        let mut node = self
            .roots
            .get(&location.root)
            .ok_or_else(|| Error::UnknownNode(id.to_owned()))?;
        for index in &location.path {
            node = node
                .child(*index)
                .ok_or_else(|| Error::UnknownNode(id.to_owned()))?;
        }
        Ok(node)
    }

    pub fn node_mut(&mut self, id: &str) -> Result<&mut TestResultNode, Error> {
        let location = self
            .locations
            .get(id)
            .ok_or_else(|| Error::UnknownNode(id.to_owned()))?;
        let mut node = self
            .roots
            .get_mut(&location.root)
            .ok_or_else(|| Error::UnknownNode(id.to_owned()))?;
        for index in &location.path {
            node = node
                .child_mut(*index)
                .ok_or_else(|| Error::UnknownNode(id.to_owned()))?;
        }
        Ok(node)
    }

    /// Calls `add_child` on `parent` and returns its result. `None` passes the
    /// absent child through.
    pub fn attach(&mut self, parent: &str, child: Option<&str>) -> Result<bool, Error> {
        let base = self.location(parent)?.clone();
        let child = match child {
            Some(id) => Some((id, self.detach(&base, parent, id)?)),
            None => None,
        };

        let node = self.node_mut(parent)?;
        let index = node.children().len();
        match child {
            Some((id, child)) => {
                let success = node.add_child(Some(child));
                self.relocate(id, &base, index);
                Ok(success)
            }
            None => Ok(node.add_child(None)),
        }
    }

    fn location(&self, id: &str) -> Result<&Location, Error> {
        self.locations
            .get(id)
            .ok_or_else(|| Error::UnknownNode(id.to_owned()))
    }

    fn detach(&mut self, base: &Location, parent: &str, id: &str) -> Result<TestResultNode, Error> {
        if !self.location(id)?.path.is_empty() {
            return Err(Error::AttachedNode(id.to_owned()));
        }
        if base.root == id {
            return Err(Error::CyclicAttachment {
                parent: parent.to_owned(),
                child: id.to_owned(),
            });
        }
        self.roots
            .remove(id)
            .ok_or_else(|| Error::UnknownNode(id.to_owned()))
    }

    fn relocate(&mut self, root: &str, base: &Location, index: usize) {
        for location in self.locations.values_mut() {
            if location.root == root {
                let mut path = base.path.clone();
                path.push(index);
                path.extend_from_slice(&location.path);
                location.root = base.root.clone();
                location.path = path;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_attached_node_is_resolved_through_parent() {
        let mut context = Context::new(DurationPolicy::Cumulative);
        context.create("a", 2.0).unwrap();
        context.create("b", 3.0).unwrap();
        context.create("c", 6.0).unwrap();

        assert!(context.attach("a", Some("b")).unwrap());
        assert!(context.attach("a", Some("c")).unwrap());

        assert_eq!(context.node("a").unwrap().duration(), 3.0);
        assert_eq!(context.node("b").unwrap().start(), 3.0);
        assert_eq!(context.node("c").unwrap().start(), 6.0);
        assert_eq!(context.node("a").unwrap().children().len(), 2);
    }

    #[test]
    fn test_subtree_ids_follow_attachment() {
        let mut context = Context::new(DurationPolicy::Recompute);
        context.create("root", 0.0).unwrap();
        context.create("mid", 1.0).unwrap();
        context.create("leaf", 4.0).unwrap();

        assert!(context.attach("mid", Some("leaf")).unwrap());
        assert!(context.attach("root", Some("mid")).unwrap());
        context.node_mut("leaf").unwrap().set_start(8.0);

        assert_eq!(context.node("leaf").unwrap().start(), 8.0);
        assert_eq!(context.node("mid").unwrap().start(), 4.0);
        assert_eq!(context.node("root").unwrap().start(), 4.0);
    }

    #[test]
    fn test_absent_child_is_passed_through() {
        let mut context = Context::new(DurationPolicy::Cumulative);
        context.create("a", 2.0).unwrap();

        assert!(!context.attach("a", None).unwrap());
        assert_eq!(context.node("a").unwrap().duration(), 0.0);
        assert!(context.node("a").unwrap().is_leaf());
    }

    #[test]
    fn test_node_policy_follows_context() {
        let mut context = Context::new(DurationPolicy::Recompute);
        context.create("a", 0.0).unwrap();

        assert_eq!(context.node("a").unwrap().policy(), DurationPolicy::Recompute);
    }

    #[test]
    fn test_invalid_attachments_are_rejected() {
        let mut context = Context::new(DurationPolicy::Cumulative);
        context.create("a", 0.0).unwrap();
        context.create("b", 1.0).unwrap();
        context.create("c", 2.0).unwrap();
        assert!(context.attach("a", Some("b")).unwrap());

        assert!(matches!(
            context.create("a", 5.0),
            Err(Error::DuplicateNode(_))
        ));
        assert!(matches!(
            context.attach("c", Some("b")),
            Err(Error::AttachedNode(_))
        ));
        assert!(matches!(
            context.attach("b", Some("a")),
            Err(Error::CyclicAttachment { .. })
        ));
        assert!(matches!(
            context.attach("a", Some("a")),
            Err(Error::CyclicAttachment { .. })
        ));
        assert!(matches!(
            context.attach("missing", Some("c")),
            Err(Error::UnknownNode(_))
        ));
        assert!(matches!(context.node("missing"), Err(Error::UnknownNode(_))));

        // rejected attachments leave the tree untouched
        assert_eq!(context.node("a").unwrap().children().len(), 1);
        assert!(context.node("c").unwrap().is_leaf());
    }
}
