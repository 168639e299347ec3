use crate::model::{BranchesInfo, DETACHED_HEAD_BRANCH_NAME};

const CURRENT_MARKER: &str = "*";
const DETACHED_HEAD_LINE: &str = "* (no branch)";

/// Parses `git branch --no-color` output.
///
/// Blank lines are skipped and do not take a menu slot. The branch name is
/// the last token on its line, so a line holding only `*` yields a branch
/// named `*`. When several lines carry the marker, the last one wins.
pub fn parse_branches(output: &str) -> BranchesInfo {
    let mut all_branches = Vec::new();
    let mut current_branch = String::new();
    let mut current_index = None;

    for line in output.lines() {
        let parts = line.split_whitespace().collect::<Vec<_>>();
        let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
            continue;
        };
        // Every non-blank line pushes exactly one entry.
        let index = all_branches.len();

        if line.trim() == DETACHED_HEAD_LINE {
            all_branches.push(DETACHED_HEAD_BRANCH_NAME.to_string());
            current_branch = DETACHED_HEAD_BRANCH_NAME.to_string();
            current_index = Some(index);
            continue;
        }

        all_branches.push(last.to_string());
        if *first == CURRENT_MARKER {
            current_branch = last.to_string();
            current_index = Some(index);
        }
    }

    BranchesInfo {
        all_branches,
        current_branch,
        current_index,
    }
}
