//! Checks bundled into the binary so a build can verify its own parser and
//! menu without a test harness.

use std::fmt::Debug;

use crate::menu::render_menu;
use crate::model::{BranchesInfo, DETACHED_HEAD_BRANCH_NAME};
use crate::parse::parse_branches;

type Check = fn() -> Result<(), String>;

#[derive(Debug, Clone, Copy)]
pub struct SelfTestCase {
    pub name: &'static str,
    check: Check,
}

impl SelfTestCase {
    const fn new(name: &'static str, check: Check) -> Self {
        Self { name, check }
    }

    pub fn run(&self) -> SelfTestOutcome {
        SelfTestOutcome {
            name: self.name,
            failure: (self.check)().err(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfTestOutcome {
    pub name: &'static str,
    pub failure: Option<String>,
}

impl SelfTestOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub outcomes: Vec<SelfTestOutcome>,
}

impl SelfTestReport {
    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.passed())
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

static CASES: [SelfTestCase; 7] = [
    SelfTestCase::new("parse_normal_output", check_normal_output),
    SelfTestCase::new("parse_detached_head", check_detached_head),
    SelfTestCase::new("parse_empty_output", check_empty_output),
    SelfTestCase::new("parse_skips_blank_lines", check_blank_lines),
    SelfTestCase::new("menu_exact_layout", check_menu_layout),
    SelfTestCase::new("menu_is_deterministic", check_menu_deterministic),
    SelfTestCase::new("menu_numbers_are_positions", check_menu_positions),
];

pub fn self_test_cases() -> &'static [SelfTestCase] {
    &CASES
}

pub fn run_self_tests() -> SelfTestReport {
    SelfTestReport {
        outcomes: self_test_cases().iter().map(SelfTestCase::run).collect(),
    }
}

fn expect_eq<T>(what: &str, actual: T, expected: T) -> Result<(), String>
where
    T: PartialEq + Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{what}: expected {expected:?}, got {actual:?}"))
    }
}

fn check_normal_output() -> Result<(), String> {
    let info = parse_branches("master\n  test\n* new-features\n");
    expect_eq("current branch", info.current_branch.as_str(), "new-features")?;
    expect_eq("current index", info.current_index, Some(2))?;
    expect_eq(
        "branches",
        info.all_branches,
        strings(&["master", "test", "new-features"]),
    )
}

fn check_detached_head() -> Result<(), String> {
    let info = parse_branches("* (no branch)\n  master\n");
    expect_eq(
        "current branch",
        info.current_branch.as_str(),
        DETACHED_HEAD_BRANCH_NAME,
    )?;
    expect_eq("current index", info.current_index, Some(0))?;
    expect_eq(
        "branches",
        info.all_branches,
        strings(&[DETACHED_HEAD_BRANCH_NAME, "master"]),
    )
}

fn check_empty_output() -> Result<(), String> {
    expect_eq("empty parse", parse_branches(""), BranchesInfo::default())
}

fn check_blank_lines() -> Result<(), String> {
    let info = parse_branches("master\n\n* test\n");
    expect_eq("current index", info.current_index, Some(1))
}

fn check_menu_layout() -> Result<(), String> {
    let info = BranchesInfo::new(strings(&["master", "docs", "test"]), "docs", Some(1));
    expect_eq(
        "menu",
        render_menu(&info).as_str(),
        "\nCurrent branch: docs\n\n0  master\n1  docs\n2  test\n",
    )
}

fn check_menu_deterministic() -> Result<(), String> {
    let output = "  master\n* docs\n  test\n";
    expect_eq(
        "menu",
        render_menu(&parse_branches(output)),
        render_menu(&parse_branches(output)),
    )
}

fn check_menu_positions() -> Result<(), String> {
    let info = parse_branches("  a\n* b\n  c\n");
    let menu = render_menu(&info);
    for (index, branch) in info.all_branches.iter().enumerate() {
        let line = format!("{index}  {branch}");
        if !menu.lines().any(|candidate| candidate == line) {
            return Err(format!("menu is missing line {line:?}"));
        }
    }
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
