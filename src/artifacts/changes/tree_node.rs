//! Display tree node
//!
//! A `TreeNode` carries a repository path, its staged and unstaged
//! classification, and exclusive ownership of its children. Folder nodes never
//! hold a status of their own: it is recomputed from their children by
//! [`TreeNode::post_process`].

use crate::artifacts::status::change_status::ChangeStatus;
use crate::artifacts::status::file_change::FileChange;
use std::cmp::Ordering;

/// Path of the root node of every tree
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    path: String,
    is_leaf: bool,
    pub staged: ChangeStatus,
    pub unstaged: ChangeStatus,
    children: Vec<TreeNode>,
}

impl Default for TreeNode {
    fn default() -> Self {
        Self::root()
    }
}

impl TreeNode {
    pub fn root() -> Self {
        Self::folder(ROOT_PATH)
    }

    pub fn folder(path: impl Into<String>) -> Self {
        TreeNode {
            path: path.into(),
            is_leaf: false,
            staged: ChangeStatus::Unmodified,
            unstaged: ChangeStatus::Unmodified,
            children: Vec::new(),
        }
    }

    pub fn leaf(path: impl Into<String>, staged: ChangeStatus, unstaged: ChangeStatus) -> Self {
        TreeNode {
            path: path.into(),
            is_leaf: true,
            staged,
            unstaged,
            children: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path component, or `/` for the root
    pub fn name(&self) -> &str {
        if self.is_root() {
            return ROOT_PATH;
        }

        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<TreeNode> {
        &mut self.children
    }

    pub fn to_file_change(&self) -> FileChange {
        FileChange::new(self.path.clone(), self.staged, self.unstaged)
    }

    /// Attach a child; a leaf receiving children turns into a folder.
    pub(crate) fn push_child(&mut self, child: TreeNode) {
        self.is_leaf = false;
        self.children.push(child);
    }

    pub(crate) fn append_children(&mut self, children: Vec<TreeNode>) {
        if children.is_empty() {
            return;
        }

        self.is_leaf = false;
        self.children.extend(children);
    }

    /// Sibling order: case-insensitive last path component, exact name on ties.
    pub fn cmp_by_name(a: &TreeNode, b: &TreeNode) -> Ordering {
        let (a, b) = (a.name(), b.name());

        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }

    pub fn sort_children(&mut self) {
        self.children.sort_by(Self::cmp_by_name);
    }

    /// Sort every folder's children, then recompute folder statuses bottom-up.
    pub fn post_process(&mut self) {
        self.sort_recursively();
        self.update_statuses();
    }

    fn sort_recursively(&mut self) {
        self.sort_children();
        self.children
            .iter_mut()
            .filter(|child| !child.is_leaf)
            .for_each(TreeNode::sort_recursively);
    }

    fn update_statuses(&mut self) {
        if self.is_leaf {
            return;
        }

        self.children.iter_mut().for_each(TreeNode::update_statuses);

        self.staged = ChangeStatus::aggregate(self.children.iter().map(|child| child.staged));
        self.unstaged = ChangeStatus::aggregate(self.children.iter().map(|child| child.unstaged));
    }

    /// Overwrite the statuses of this node and its whole subtree.
    pub(crate) fn retag(&mut self, staged: Option<ChangeStatus>, unstaged: Option<ChangeStatus>) {
        if let Some(staged) = staged {
            self.staged = staged;
        }
        if let Some(unstaged) = unstaged {
            self.unstaged = unstaged;
        }

        self.children
            .iter_mut()
            .for_each(|child| child.retag(staged, unstaged));
    }

    /// A freshly owned copy of this subtree with its statuses overwritten.
    pub(crate) fn retagged_copy(
        &self,
        staged: Option<ChangeStatus>,
        unstaged: Option<ChangeStatus>,
    ) -> TreeNode {
        let mut copy = self.clone();
        copy.retag(staged, unstaged);
        copy
    }

    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Some(self);
        }

        let mut node = self;
        for (position, _) in path
            .match_indices('/')
            .chain(std::iter::once((path.len(), "")))
        {
            let prefix = &path[..position];
            node = node.children.iter().find(|child| child.path == prefix)?;
        }

        Some(node)
    }

    /// Depth-first visit of every node below `self`, with its depth (children of
    /// `self` are at depth 0).
    pub fn visit<'a, F>(&'a self, func: &mut F)
    where
        F: FnMut(&'a TreeNode, usize),
    {
        self.visit_at(0, func);
    }

    fn visit_at<'a, F>(&'a self, depth: usize, func: &mut F)
    where
        F: FnMut(&'a TreeNode, usize),
    {
        for child in &self.children {
            func(child, depth);
            child.visit_at(depth + 1, func);
        }
    }

    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut leaves = Vec::new();
        self.visit(&mut |node, _| {
            if node.is_leaf {
                leaves.push(node);
            }
        });
        leaves
    }

    /// Leaves with a change in either slot, sorted by path.
    pub fn changed_leaves(&self) -> Vec<FileChange> {
        let mut changes = self
            .leaves()
            .into_iter()
            .map(TreeNode::to_file_change)
            .filter(FileChange::is_changed)
            .collect::<Vec<_>>();
        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_, _| count += 1);
        count
    }
}
