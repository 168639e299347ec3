/// Stands in for a branch name while HEAD is detached.
pub const DETACHED_HEAD_BRANCH_NAME: &str = "(no branch) - detached HEAD";

/// Local branches as listed by git, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchesInfo {
    pub all_branches: Vec<String>,
    pub current_branch: String,
    /// Position of `current_branch` in `all_branches`, if a current line was seen.
    pub current_index: Option<usize>,
}

impl BranchesInfo {
    pub fn new(
        all_branches: Vec<String>,
        current_branch: impl Into<String>,
        current_index: Option<usize>,
    ) -> Self {
        Self {
            all_branches,
            current_branch: current_branch.into(),
            current_index,
        }
    }

    pub fn is_detached(&self) -> bool {
        self.current_branch == DETACHED_HEAD_BRANCH_NAME
    }
}
