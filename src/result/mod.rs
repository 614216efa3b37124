pub mod node;

pub use self::node::{DurationPolicy, TestResultNode};
