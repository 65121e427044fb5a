use crate::artifacts::changes::tree_node::TreeNode;
use crate::artifacts::status::change_status::ChangeStatus;
use crate::artifacts::status::file_change::FileChange;
use std::collections::HashMap;

/// Build a display tree from a flat change list.
///
/// With a `manifest` (the complete file list of a commit) every listed path
/// gets a node, unchanged ones as `Unmodified`, and deleted files missing from
/// the manifest are appended from `changes`. Without one, only the paths in
/// `changes` appear.
pub fn build(changes: &[FileChange], manifest: Option<&[String]>) -> TreeNode {
    let mut builder = TreeBuilder::new();

    match manifest {
        Some(manifest) => {
            let changes_by_path = changes
                .iter()
                .map(|change| (normalize_path(&change.path), change))
                .collect::<HashMap<_, _>>();

            for path in manifest {
                let change = changes_by_path.get(normalize_path(path)).copied();
                builder.insert(path, change);
            }

            let deleted = changes.iter().filter(|change| {
                change.staged == ChangeStatus::Deleted || change.unstaged == ChangeStatus::Deleted
            });

            for change in deleted {
                if !builder.contains(&change.path) {
                    builder.insert(&change.path, Some(change));
                }
            }
        }
        None => changes
            .iter()
            .for_each(|change| builder.insert(&change.path, Some(change))),
    }

    let files = builder.files;
    let root = builder.finish();
    tracing::debug!(files, nodes = root.node_count(), "built change tree");

    root
}

/// Incremental tree construction with intermediate folder memoization.
///
/// Every created node is remembered by its full path as the route of child
/// indexes leading to it from the root. Children are only appended until
/// [`TreeBuilder::finish`], so routes stay valid for the whole build.
#[derive(Debug)]
pub struct TreeBuilder {
    root: TreeNode,
    routes: HashMap<String, Vec<usize>>,
    files: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            root: TreeNode::root(),
            routes: HashMap::new(),
            files: 0,
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(normalize_path(path))
    }

    /// Insert a file node; `None` means the file is unchanged.
    pub fn insert(&mut self, path: &str, change: Option<&FileChange>) {
        let path = normalize_path(path);
        if path.is_empty() {
            return;
        }

        let (staged, unstaged) = change
            .map(|change| (leaf_status(change.staged), leaf_status(change.unstaged)))
            .unwrap_or_default();

        if let Some(route) = self.routes.get(path).cloned() {
            let node = node_at_mut(&mut self.root, &route);
            node.staged = staged;
            node.unstaged = unstaged;
            return;
        }

        let mut route = self.folder_route(parent_path(path));
        let parent = node_at_mut(&mut self.root, &route);
        parent.push_child(TreeNode::leaf(path, staged, unstaged));
        route.push(parent.children().len() - 1);

        self.routes.insert(path.to_string(), route);
        self.files += 1;
    }

    fn folder_route(&mut self, path: &str) -> Vec<usize> {
        if path.is_empty() {
            return Vec::new();
        }

        if let Some(route) = self.routes.get(path) {
            return route.clone();
        }

        let mut route = self.folder_route(parent_path(path));
        let parent = node_at_mut(&mut self.root, &route);
        parent.push_child(TreeNode::folder(path));
        route.push(parent.children().len() - 1);

        self.routes.insert(path.to_string(), route.clone());
        route
    }

    pub fn finish(self) -> TreeNode {
        let mut root = self.root;
        root.post_process();
        root
    }
}

fn node_at_mut<'t>(root: &'t mut TreeNode, route: &[usize]) -> &'t mut TreeNode {
    route
        .iter()
        .fold(root, |node, &index| &mut node.children_mut()[index])
}

fn leaf_status(status: ChangeStatus) -> ChangeStatus {
    if status == ChangeStatus::Mixed {
        tracing::warn!("source list reported a mixed status for a file, using modified");
        return ChangeStatus::Modified;
    }

    status
}

pub(crate) fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}
