pub(crate) mod assert;
pub(crate) mod context;
pub(crate) mod error;

use crate::app::assert::Assertable;
use crate::app::context::Context;
use crate::app::error::Error;
use crate::configuration::manifest::{Manifest, Scenario, Step};
use crate::reporter::{CaseResult, Report};

pub struct App {
    manifest: Manifest,
    filter: Vec<String>,
}

impl App {
    /// An empty `filter` runs every scenario.
    pub fn new(manifest: Manifest, filter: Vec<String>) -> Self {
        App { manifest, filter }
    }

    pub fn run(&self) -> Result<Report, Error> {
        if let Some(name) = self
            .filter
            .iter()
            .find(|name| !self.manifest.scenarios.iter().any(|s| &s.name == *name))
        {
            return Err(Error::UnknownScenario(name.clone()));
        }

        info!("Starting manifest '{}'", self.manifest.name);
        let mut report = Report::new(&self.manifest.name);
        for scenario in self.scenarios() {
            self.run_scenario(scenario, &mut report)?;
        }
        info!(
            "Finished manifest '{}': {} passed, {} failed",
            self.manifest.name,
            report.passed(),
            report.failed()
        );
        Ok(report)
    }

    fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.manifest
            .scenarios
            .iter()
            .filter(move |s| self.filter.is_empty() || self.filter.contains(&s.name))
    }

    fn run_scenario(&self, scenario: &Scenario, report: &mut Report) -> Result<(), Error> {
        let policy = scenario.policy_or(self.manifest.policy);
        info!(
            "Running scenario '{}' with {:?} policy, {} steps",
            scenario.name,
            policy,
            scenario.steps.len()
        );
        let mut context = Context::new(policy);
        for (index, step) in scenario.steps.iter().enumerate() {
            debug!("Step #{} of '{}': {:?}", index + 1, scenario.name, step);
            let case_name = |name: &Option<String>| {
                name.clone()
                    .unwrap_or_else(|| format!("{} #{}", scenario.name, index + 1))
            };
            match step {
                Step::Create(step) => context.create(&step.id, step.start)?,
                Step::SetStart(step) => context.node_mut(&step.node)?.set_start(step.start),
                Step::Add(step) => {
                    let success = context.attach(&step.parent, step.child.as_deref())?;
                    trace!("Node '{}' after add: {:?}", step.parent, context.node(&step.parent)?);
                    if step.success.is_some() {
                        let verdict = step.assert(&success);
                        record(
                            report,
                            CaseResult::new(case_name(&step.name), &scenario.name, verdict),
                        );
                    }
                }
                Step::Expect(step) => {
                    let verdict = step.assert(context.node(&step.node)?);
                    record(
                        report,
                        CaseResult::new(case_name(&step.name), &scenario.name, verdict),
                    );
                }
            }
        }
        Ok(())
    }
}

fn record(report: &mut Report, case: CaseResult) {
    match case.message {
        None => info!("{} -> Success", case.name),
        Some(ref message) => warn!("{} -> Fail: {}", case.name, message),
    }
    report.push(case);
}
