use std::io::{BufRead, Write};

use crate::error::Result;
use crate::menu::render_menu;
use crate::parse::parse_branches;
use crate::selection::select_branch;

pub const SELECT_PROMPT: &str = "Select a branch by number: ";

/// Shown for every failure once the session has started.
pub const CHECKOUT_FAILED_MESSAGE: &str = "Invalid input. Checkout fail.";

/// Lists branches and checks one out.
pub trait BranchBackend {
    fn list_branches(&self) -> Result<String>;
    fn checkout(&self, branch: &str) -> Result<String>;
}

/// Shows the menu, reads one choice from `input`, and checks it out.
///
/// Returns the checkout output. Listing, selection and checkout failures all
/// come back as the error; callers report them with
/// [`CHECKOUT_FAILED_MESSAGE`].
pub fn run_session<B, R, W>(backend: &B, input: &mut R, output: &mut W) -> Result<String>
where
    B: BranchBackend + ?Sized,
    R: BufRead,
    W: Write,
{
    let listing = backend.list_branches()?;
    let info = parse_branches(&listing);
    tracing::debug!(
        branches = info.all_branches.len(),
        current = %info.current_branch,
        detached = info.is_detached(),
        "parsed branch listing"
    );

    writeln!(output, "{}", render_menu(&info))?;
    write!(output, "{SELECT_PROMPT}")?;
    output.flush()?;

    let mut choice = String::new();
    input.read_line(&mut choice)?;

    let branch = select_branch(&info, &choice)?;
    tracing::debug!(branch, "checking out");
    backend.checkout(branch)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;

    use super::{run_session, BranchBackend, SELECT_PROMPT};
    use crate::error::{BranchpickError, Result};

    struct FakeBackend {
        listing: Option<String>,
        fail_checkout: bool,
        checked_out: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn new(listing: &str) -> Self {
            Self {
                listing: Some(listing.to_string()),
                fail_checkout: false,
                checked_out: RefCell::new(Vec::new()),
            }
        }
    }

    impl BranchBackend for FakeBackend {
        fn list_branches(&self) -> Result<String> {
            self.listing.clone().ok_or_else(|| BranchpickError::GitCommand {
                command: "git branch --no-color".to_string(),
                stderr: "fatal: not a git repository".to_string(),
            })
        }

        fn checkout(&self, branch: &str) -> Result<String> {
            if self.fail_checkout {
                return Err(BranchpickError::GitCommand {
                    command: format!("git checkout {branch}"),
                    stderr: "error: pathspec did not match".to_string(),
                });
            }
            self.checked_out.borrow_mut().push(branch.to_string());
            Ok(format!("Switched to branch '{branch}'"))
        }
    }

    fn run(backend: &FakeBackend, input: &str) -> (Result<String>, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_session(backend, &mut input, &mut output);
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn checks_out_selected_branch() {
        let backend = FakeBackend::new("  master\n* docs\n  test\n");
        let (result, output) = run(&backend, "2\n");

        assert_eq!(result.expect("checkout"), "Switched to branch 'test'");
        assert_eq!(*backend.checked_out.borrow(), vec!["test".to_string()]);
        assert_eq!(
            output,
            format!("\nCurrent branch: docs\n\n0  master\n1  docs\n2  test\n\n{SELECT_PROMPT}")
        );
    }

    #[test]
    fn detached_head_is_listed_and_selectable() {
        let backend = FakeBackend::new("* (no branch)\n  master\n");
        let (result, output) = run(&backend, "1\n");

        assert_eq!(result.expect("checkout"), "Switched to branch 'master'");
        assert!(output.starts_with(
            "\nCurrent branch: (no branch) - detached HEAD\n\n0  (no branch) - detached HEAD\n1  master\n"
        ));
    }

    #[test]
    fn invalid_choice_skips_checkout() {
        let backend = FakeBackend::new("* master\n  docs\n");
        let (result, _) = run(&backend, "docs\n");

        assert!(matches!(result, Err(BranchpickError::InvalidChoice(_))));
        assert!(backend.checked_out.borrow().is_empty());
    }

    #[test]
    fn out_of_range_choice_skips_checkout() {
        let backend = FakeBackend::new("* master\n  docs\n");
        let (result, _) = run(&backend, "7\n");

        assert!(matches!(
            result,
            Err(BranchpickError::ChoiceOutOfRange { index: 7, count: 2 })
        ));
        assert!(backend.checked_out.borrow().is_empty());
    }

    #[test]
    fn end_of_input_is_an_invalid_choice() {
        let backend = FakeBackend::new("* master\n");
        let (result, _) = run(&backend, "");

        assert!(matches!(result, Err(BranchpickError::InvalidChoice(_))));
    }

    #[test]
    fn listing_failure_prints_nothing() {
        let backend = FakeBackend {
            listing: None,
            fail_checkout: false,
            checked_out: RefCell::new(Vec::new()),
        };
        let (result, output) = run(&backend, "0\n");

        assert!(matches!(result, Err(BranchpickError::GitCommand { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn checkout_failure_is_returned() {
        let backend = FakeBackend {
            fail_checkout: true,
            ..FakeBackend::new("* master\n  docs\n")
        };
        let (result, _) = run(&backend, "1\n");

        assert!(matches!(result, Err(BranchpickError::GitCommand { .. })));
    }
}
