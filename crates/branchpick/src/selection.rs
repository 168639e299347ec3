use crate::error::{BranchpickError, Result};
use crate::model::BranchesInfo;

/// Maps a typed menu number back to its branch name.
pub fn select_branch<'a>(info: &'a BranchesInfo, choice: &str) -> Result<&'a str> {
    let choice = choice.trim();
    let index = choice
        .parse::<usize>()
        .map_err(|_| BranchpickError::InvalidChoice(choice.to_string()))?;

    info.all_branches
        .get(index)
        .map(String::as_str)
        .ok_or(BranchpickError::ChoiceOutOfRange {
            index,
            count: info.all_branches.len(),
        })
}
