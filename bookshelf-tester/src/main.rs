mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use bookshelf_core::{Catalogue, load_catalogue};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, TestBridge, new_session};
use common::scenario::{SCENARIO_KEYS, ScenarioCtx, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{FileCatalogueSource, LogicTester, ScenarioResult};

const DEFAULT_CATALOGUE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../bookshelf-web/static/books.json"
);

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Replay interactions headlessly (fast, no browser)
    Logic,
    /// Browser automation testing (slow, captures screenshots)
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "bookshelf-tester", version)]
#[command(about = "Automated QA for the bookshelf page - headless interaction replay and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Catalogue document the scenarios are checked against
    #[arg(long, default_value = DEFAULT_CATALOGUE)]
    catalogue: PathBuf,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the page (should include ?test=1 to expose the bridge)
    #[arg(long, default_value = "http://localhost:8080/?test=1")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let catalogue = load_fixture(&args).await?;

    let mut all_results = run_logic_scenarios(&args, &scenarios, &catalogue);
    all_results.extend(run_browser_scenarios(&args, &scenarios, &catalogue).await?);

    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "📚 Bookshelf Automated Tester".bright_cyan().bold());
    println!("{}", "=============================".cyan());
}

async fn load_fixture(args: &Args) -> Result<Catalogue> {
    let source = FileCatalogueSource::new(&args.catalogue);
    let catalogue = load_catalogue(&source)
        .await
        .with_context(|| format!("loading catalogue from {}", source.path().display()))?;
    log::debug!(
        "Checking against {} books ({} sold)",
        catalogue.len(),
        catalogue.sold_count()
    );
    Ok(catalogue)
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in SCENARIO_KEYS {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push((*key).to_string());
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn scenario_artifacts_dir(args: &Args, kind: BrowserKind, scenario: &str) -> String {
    artifacts_dir(&args.artifacts_dir, &kind.label(), scenario)
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    catalogue: &Catalogue,
) -> Vec<ScenarioResult> {
    let mut results: Vec<ScenarioResult> = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);

    for scenario_name in scenarios {
        if let Some(combined_scenario) = get_scenario(scenario_name) {
            if let Some(logic_scenario) = combined_scenario.as_logic_scenario() {
                results.push(logic_tester.run_scenario(&logic_scenario, catalogue));
            } else {
                eprintln!(
                    "⚠️  Scenario {} has no logic test implementation",
                    scenario_name.yellow()
                );
            }
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }

    results
}

async fn run_browser_scenarios(
    args: &Args,
    scenarios: &[String],
    catalogue: &Catalogue,
) -> Result<Vec<ScenarioResult>> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return Ok(results);
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let browsers = split_csv(&args.browsers);

    for browser_name in browsers {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let cfg = build_browser_config(args);

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        results.extend(
            run_browser_scenarios_for_driver(args, scenarios, catalogue, kind, &driver).await,
        );
        let _ = driver.quit().await;
    }

    Ok(results)
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    catalogue: &Catalogue,
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    let label = kind.label();

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            continue;
        };
        let ctx = ScenarioCtx {
            base_url: args.base_url.clone(),
            catalogue,
            bridge: TestBridge::new(driver),
            verbose: args.verbose,
        };

        let scenario_start = Instant::now();
        let outcome = scenario.run_browser(driver, &ctx).await;
        let duration = scenario_start.elapsed();
        match &outcome {
            Ok(()) => {
                println!("✅ [{}] {} - {:?}", label.green(), scenario_name, duration);
            }
            Err(e) => {
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    duration,
                    e
                );
                let dir = scenario_artifacts_dir(args, kind, scenario_name);
                if let Err(capture_err) = capture_artifacts(driver, &dir, e).await {
                    log::warn!("Could not capture artifacts in {dir}: {capture_err:#}");
                }
            }
        }
        results.push(ScenarioResult::from_outcome(
            format!("{label}: {scenario_name}"),
            outcome,
            duration,
        ));
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                logic::reports::generate_json_report(&mut output_target, results)?;
            }
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Bookshelf Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            catalogue: PathBuf::from(DEFAULT_CATALOGUE),
            report: "json".to_string(),
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/?test=1".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "bookshelf-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn sample_result(passed: bool) -> ScenarioResult {
        let outcome = if passed {
            Ok(())
        } else {
            Err(anyhow::anyhow!("failure"))
        };
        ScenarioResult::from_outcome("Smoke Test", outcome, Duration::from_millis(10))
    }

    #[test]
    fn expands_all_scenarios_keyword() {
        let expanded = expand_scenarios("all,smoke");
        assert_eq!(expanded.len(), SCENARIO_KEYS.len());
        assert_eq!(expanded[0], "smoke");
        assert!(expanded.contains(&"backdrop-dismissal".to_string()));
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        let expanded = expand_scenarios("escape,smoke");
        assert_eq!(expanded, vec!["escape".to_string(), "smoke".to_string()]);
    }

    #[test]
    fn shipped_catalogue_passes_every_logic_scenario() {
        let args = base_args();
        let catalogue = tokio_test::block_on(load_fixture(&args)).expect("shipped catalogue");
        let scenarios = expand_scenarios("all");
        let results = run_logic_scenarios(&args, &scenarios, &catalogue);
        assert_eq!(results.len(), SCENARIO_KEYS.len());
        for result in &results {
            assert!(result.passed, "{}: {:?}", result.scenario_name, result.failures);
        }
    }

    #[test]
    fn load_fixture_reports_missing_file() {
        let args = Args {
            catalogue: PathBuf::from("/nowhere/books.json"),
            ..base_args()
        };
        let err = tokio_test::block_on(load_fixture(&args)).expect_err("missing catalogue");
        assert!(format!("{err:#}").contains("/nowhere/books.json"));
    }

    #[test]
    fn run_logic_scenarios_skips_when_not_enabled() {
        let args = Args {
            mode: TestMode::Browser,
            ..base_args()
        };
        let results = run_logic_scenarios(&args, &["smoke".to_string()], &Catalogue::empty());
        assert!(results.is_empty());
    }

    #[test]
    fn run_logic_scenarios_ignores_unknown_names() {
        let args = base_args();
        let results = run_logic_scenarios(&args, &["teleport".to_string()], &Catalogue::empty());
        assert!(results.is_empty());
    }

    #[test]
    fn write_reports_emits_json_output() {
        let temp = temp_path("empty.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("[]"));
    }

    #[test]
    fn write_reports_emits_json_for_results() {
        let temp = temp_path("full.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(true)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("scenario_name"));
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let temp = temp_path("empty.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("No scenarios executed"));
    }

    #[test]
    fn write_reports_emits_markdown_report() {
        let temp = temp_path("full.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(false)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("# Bookshelf Test Results"));
        assert!(content.contains("Smoke Test"));
        assert!(content.contains("failure"));
    }

    #[test]
    fn write_reports_emits_console_report() {
        let temp = temp_path("console.txt");
        let args = Args {
            report: "console".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(true)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Total scenarios: 1"));
        assert!(content.contains("Total time"));
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let temp = temp_path("scenarios.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("stale-timer"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        let args = base_args();
        assert!(!maybe_list_scenarios(&args).unwrap());
    }

    #[test]
    fn output_target_stdout_writes() {
        let mut target = OutputTarget::new(None).unwrap();
        target.write_all(b"ok").unwrap();
        target.flush().unwrap();
    }

    #[test]
    fn build_browser_config_respects_headless_and_hub() {
        let mut args = base_args();
        args.headless = HeadlessMode::Windowed;
        args.hub = Some("http://remote.example".to_string());
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.remote_hub.as_deref(), Some("http://remote.example"));
    }

    #[test]
    fn scenario_artifacts_dir_includes_browser_and_scenario() {
        let args = base_args();
        let dir = scenario_artifacts_dir(&args, BrowserKind::Firefox, "smoke");
        assert!(dir.starts_with("target/test-artifacts/firefox/smoke/"));
    }

    #[test]
    fn run_browser_scenarios_skips_when_not_enabled() {
        let args = base_args();
        let results = tokio_test::block_on(run_browser_scenarios(
            &args,
            &["smoke".to_string()],
            &Catalogue::empty(),
        ))
        .expect("browser scenarios should skip");
        assert!(results.is_empty());
    }

    #[test]
    fn run_browser_scenarios_ignores_unknown_browser() {
        let args = Args {
            mode: TestMode::Browser,
            browsers: "unknown".to_string(),
            ..base_args()
        };
        let results = tokio_test::block_on(run_browser_scenarios(
            &args,
            &["smoke".to_string()],
            &Catalogue::empty(),
        ))
        .expect("unknown browser should be skipped");
        assert!(results.is_empty());
    }
}
