use crate::model::BranchesInfo;

/// Renders the numbered menu. Numbers are list positions, starting at 0.
pub fn render_menu(info: &BranchesInfo) -> String {
    let mut menu = format!("\nCurrent branch: {}\n\n", info.current_branch);
    for (index, branch) in info.all_branches.iter().enumerate() {
        menu.push_str(&format!("{index}  {branch}\n"));
    }
    menu
}
