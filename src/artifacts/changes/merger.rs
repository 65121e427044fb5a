//! Tree merging
//!
//! Both operations walk two sorted children lists in parallel using
//! [`TreeNode::cmp_by_name`], the same ordering the builder sorts by. Nodes
//! taken from the source tree are always deep copies, so the source stays
//! intact and every node keeps a single owner.

use crate::artifacts::changes::tree_node::TreeNode;
use crate::artifacts::status::change_status::ChangeStatus;
use std::cmp::Ordering;

/// Fold a staged-shaped tree into an unstaged-shaped one.
pub fn combine(unstaged: &mut TreeNode, staged: &TreeNode) {
    let buffered = combine_children(unstaged, staged);
    unstaged.post_process();

    tracing::debug!(buffered, nodes = unstaged.node_count(), "combined staged tree");
}

/// Fold the paths of `src` missing from `dest` into `dest` as untracked files.
pub fn overlay(dest: &mut TreeNode, src: &TreeNode) {
    let added = overlay_children(dest, src);
    dest.post_process();

    tracing::debug!(added, nodes = dest.node_count(), "overlaid untracked tree");
}

fn combine_children(unstaged: &mut TreeNode, staged: &TreeNode) -> usize {
    let mut workspace_deleted = Vec::new();
    let mut buffered = 0;
    let (mut u, mut s) = (0, 0);

    while u < unstaged.children().len() && s < staged.children().len() {
        let staged_child = &staged.children()[s];
        let unstaged_child = &mut unstaged.children_mut()[u];

        match TreeNode::cmp_by_name(unstaged_child, staged_child) {
            Ordering::Equal => {
                if unstaged_child.is_leaf() && staged_child.is_leaf() {
                    apply_staged_status(unstaged_child, staged_child.staged);
                } else {
                    buffered += combine_children(unstaged_child, staged_child);
                }
                u += 1;
                s += 1;
            }
            Ordering::Less => {
                unstaged_child.retag(Some(ChangeStatus::Deleted), None);
                u += 1;
            }
            Ordering::Greater => {
                workspace_deleted
                    .push(staged_child.retagged_copy(None, Some(ChangeStatus::Deleted)));
                s += 1;
            }
        }
    }

    // An empty staged side leaves the unstaged tree as it is.
    if !staged.children().is_empty() {
        for unstaged_child in &mut unstaged.children_mut()[u..] {
            unstaged_child.retag(Some(ChangeStatus::Deleted), None);
        }
    }

    workspace_deleted.extend(
        staged.children()[s..]
            .iter()
            .map(|child| child.retagged_copy(None, Some(ChangeStatus::Deleted))),
    );

    buffered += workspace_deleted.len();
    if !workspace_deleted.is_empty() {
        unstaged.append_children(workspace_deleted);
        unstaged.sort_children();
    }

    buffered
}

// Only added and deleted collapse; other equal pairs are kept as reported.
fn apply_staged_status(node: &mut TreeNode, staged: ChangeStatus) {
    node.staged = staged;

    if node.staged == node.unstaged
        && matches!(node.unstaged, ChangeStatus::Added | ChangeStatus::Deleted)
    {
        node.unstaged = ChangeStatus::Unmodified;
    }
}

fn overlay_children(dest: &mut TreeNode, src: &TreeNode) -> usize {
    let mut untracked = Vec::new();
    let mut added = 0;
    let (mut d, mut s) = (0, 0);

    while d < dest.children().len() && s < src.children().len() {
        let src_child = &src.children()[s];
        let dest_child = &mut dest.children_mut()[d];

        match TreeNode::cmp_by_name(dest_child, src_child) {
            Ordering::Equal => {
                if !dest_child.is_leaf() && !src_child.is_leaf() {
                    added += overlay_children(dest_child, src_child);
                }
                d += 1;
                s += 1;
            }
            Ordering::Less => d += 1,
            Ordering::Greater => {
                untracked.push(untracked_copy(src_child));
                s += 1;
            }
        }
    }

    untracked.extend(src.children()[s..].iter().map(untracked_copy));

    added += untracked.len();
    if !untracked.is_empty() {
        dest.append_children(untracked);
        dest.sort_children();
    }

    added
}

fn untracked_copy(node: &TreeNode) -> TreeNode {
    node.retagged_copy(Some(ChangeStatus::Unmodified), Some(ChangeStatus::Untracked))
}
