use crate::Selection;
use crate::areas::repository::Repository;
use crate::artifacts::changes::tree_node::TreeNode;
use crate::artifacts::status::file_change::FileChange;
use derive_new::new;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Default, new)]
pub struct TreeOptions {
    /// Print changed files with their full paths instead of the tree
    pub flat: bool,
}

impl Repository {
    pub fn tree(&self, selection: &Selection, opts: &TreeOptions) -> anyhow::Result<()> {
        let model = self.change_model(selection)?;

        if opts.flat {
            for change in model.flat_changes(self) {
                self.write_change_line(&change, "", &change.path)?;
            }
            return Ok(());
        }

        let root = model.tree(self);
        let mut lines = Vec::with_capacity(root.node_count());
        root.visit(&mut |node, depth| lines.push(tree_line(node, depth)));

        for (change, indent, name) in lines {
            self.write_change_line(&change, &indent, &name)?;
        }

        Ok(())
    }

    fn write_change_line(
        &self,
        change: &FileChange,
        indent: &str,
        name: &str,
    ) -> anyhow::Result<()> {
        let (staged, unstaged) = change.colored_codes();
        writeln!(self.writer(), "{staged}{unstaged} {indent}{name}")?;
        Ok(())
    }
}

fn tree_line(node: &TreeNode, depth: usize) -> (FileChange, String, String) {
    let name = if node.is_leaf() {
        node.name().to_string()
    } else {
        format!("{}/", node.name())
    };

    (node.to_file_change(), INDENT.repeat(depth), name)
}
