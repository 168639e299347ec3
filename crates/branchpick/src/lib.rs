pub mod error;
pub mod git;
pub mod menu;
pub mod model;
pub mod parse;
pub mod selection;
pub mod selftest;
pub mod session;

pub use error::{BranchpickError, Result};
pub use git::{checkout_branch, list_branches, GitCli};
pub use menu::render_menu;
pub use model::{BranchesInfo, DETACHED_HEAD_BRANCH_NAME};
pub use parse::parse_branches;
pub use selection::select_branch;
pub use selftest::{
    run_self_tests, self_test_cases, SelfTestCase, SelfTestOutcome, SelfTestReport,
};
pub use session::{run_session, BranchBackend, CHECKOUT_FAILED_MESSAGE, SELECT_PROMPT};
