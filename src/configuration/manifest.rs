use crate::result::DurationPolicy;
use config::{Config, ConfigError, File, FileFormat};
use serde_derive::Deserialize;
use std::path::PathBuf;

const REFERENCE_MANIFEST: &'static str = include_str!("../../scenarios/reference.yaml");

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub policy: DurationPolicy,
    pub scenarios: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub policy: Option<DurationPolicy>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Create(CreateStep),
    Add(AddStep),
    SetStart(SetStartStep),
    Expect(ExpectStep),
}

#[derive(Debug, Deserialize)]
pub struct CreateStep {
    pub id: String,
    #[serde(default)]
    pub start: f64,
}

/// An omitted `child` stands for the absent child.
#[derive(Debug, Deserialize)]
pub struct AddStep {
    pub name: Option<String>,
    pub parent: String,
    pub child: Option<String>,
    pub success: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SetStartStep {
    pub node: String,
    pub start: f64,
}

#[derive(Debug, Deserialize)]
pub struct ExpectStep {
    pub name: Option<String>,
    pub node: String,
    pub duration: Option<f64>,
    pub start: Option<f64>,
    pub children: Option<usize>,
}

impl Manifest {
    pub fn from(file: PathBuf) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.merge(File::from(file))?;

        config.try_into()
    }

    pub fn from_str(content: &str, format: FileFormat) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.merge(File::from_str(content, format))?;

        config.try_into()
    }

    /// Scenario reproducing the demonstration sequence A(2) <- B(3), C(6).
    pub fn reference() -> Result<Self, ConfigError> {
        Self::from_str(REFERENCE_MANIFEST, FileFormat::Yaml)
    }

    pub fn with_policy(mut self, policy: Option<DurationPolicy>) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
            for scenario in self.scenarios.iter_mut() {
                scenario.policy = None;
            }
        }
        self
    }
}

impl Scenario {
    pub fn policy_or(&self, fallback: DurationPolicy) -> DurationPolicy {
        self.policy.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &'static str = r#"
name: sample
policy: recompute
scenarios:
  - name: first
    policy: cumulative
    steps:
      - create: { id: a, start: 2.0 }
      - create: { id: b }
      - add: { parent: a, child: b, success: true }
      - add: { name: "absent child", parent: a, success: false }
      - set_start: { node: a, start: 4.5 }
      - expect: { node: a, duration: 0.0, children: 1 }
  - name: second
"#;

    #[test]
    fn test_loading_manifest_from_yaml() {
        let manifest = Manifest::from_str(MANIFEST, FileFormat::Yaml).unwrap();

        assert_eq!(manifest.name, "sample");
        assert_eq!(manifest.policy, DurationPolicy::Recompute);
        assert_eq!(manifest.scenarios.len(), 2);
        assert_eq!(manifest.scenarios[0].steps.len(), 6);
        assert!(manifest.scenarios[1].steps.is_empty());
        assert_eq!(
            manifest.scenarios[0].policy_or(manifest.policy),
            DurationPolicy::Cumulative
        );
        assert_eq!(
            manifest.scenarios[1].policy_or(manifest.policy),
            DurationPolicy::Recompute
        );
    }

    #[test]
    fn test_steps_are_decoded_with_defaults() {
        let manifest = Manifest::from_str(MANIFEST, FileFormat::Yaml).unwrap();
        let steps = &manifest.scenarios[0].steps;

        match &steps[1] {
            Step::Create(step) => {
                assert_eq!(step.id, "b");
                assert_eq!(step.start, 0.0);
            }
            other => panic!("Unexpected step {:?}", other),
        }
        match &steps[3] {
            Step::Add(step) => {
                assert_eq!(step.name.as_deref(), Some("absent child"));
                assert!(step.child.is_none());
                assert_eq!(step.success, Some(false));
            }
            other => panic!("Unexpected step {:?}", other),
        }
        match &steps[4] {
            Step::SetStart(step) => assert_eq!(step.start, 4.5),
            other => panic!("Unexpected step {:?}", other),
        }
        match &steps[5] {
            Step::Expect(step) => {
                assert_eq!(step.duration, Some(0.0));
                assert!(step.start.is_none());
                assert_eq!(step.children, Some(1));
            }
            other => panic!("Unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_command_line_policy_overrides_scenarios() {
        let manifest = Manifest::from_str(MANIFEST, FileFormat::Yaml)
            .unwrap()
            .with_policy(Some(DurationPolicy::Recompute));

        for scenario in &manifest.scenarios {
            assert_eq!(
                scenario.policy_or(manifest.policy),
                DurationPolicy::Recompute
            );
        }
    }

    #[test]
    fn test_reference_manifest_is_valid() {
        let manifest = Manifest::reference().unwrap();

        assert_eq!(manifest.name, "reference");
        assert_eq!(manifest.policy, DurationPolicy::Cumulative);
        assert_eq!(manifest.scenarios.len(), 1);
    }
}
