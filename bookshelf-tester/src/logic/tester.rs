use bookshelf_core::Catalogue;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    pub fn from_outcome(
        scenario_name: impl Into<String>,
        outcome: anyhow::Result<()>,
        duration: Duration,
    ) -> Self {
        let failures = match outcome {
            Ok(()) => Vec::new(),
            Err(err) => vec![format!("{err:#}")],
        };
        Self {
            scenario_name: scenario_name.into(),
            passed: failures.is_empty(),
            failures,
            duration,
        }
    }
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario, catalogue: &Catalogue) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({} books)",
                scenario.name.bright_white(),
                catalogue.len()
            );
        }

        let start_time = Instant::now();
        let outcome = (scenario.check)(catalogue);
        let duration = start_time.elapsed();

        if self.verbose {
            match &outcome {
                Ok(()) => println!("  ✅ passed ({duration:?})"),
                Err(err) => println!("  ❌ failed: {}", format!("{err:#}").red()),
            }
        }

        ScenarioResult::from_outcome(scenario.name.clone(), outcome, duration)
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing(_: &Catalogue) -> anyhow::Result<()> {
        Ok(())
    }

    fn failing(_: &Catalogue) -> anyhow::Result<()> {
        anyhow::bail!("popup never closed")
    }

    #[test]
    fn run_scenario_records_success() {
        let tester = LogicTester::new(false);
        let result = tester.run_scenario(&TestScenario::new("Pass", passing), &Catalogue::empty());
        assert!(result.passed);
        assert!(result.failures.is_empty());
        assert_eq!(result.scenario_name, "Pass");
    }

    #[test]
    fn run_scenario_records_failure_message() {
        let tester = LogicTester::new(true);
        let result = tester.run_scenario(&TestScenario::new("Fail", failing), &Catalogue::empty());
        assert!(!result.passed);
        assert_eq!(result.failures, vec!["popup never closed".to_string()]);
    }

    #[test]
    fn duration_serializes_as_millis() {
        let result = ScenarioResult::from_outcome("Timed", Ok(()), Duration::from_millis(42));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["duration"], 42);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.duration, Duration::from_millis(42));
    }
}
