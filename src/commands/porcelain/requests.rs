use crate::Selection;
use crate::areas::repository::Repository;

impl Repository {
    /// Describe the diff and blame a viewer would run for one side of a file.
    pub fn requests(&self, selection: &Selection, path: &str, staged: bool) -> anyhow::Result<()> {
        let model = self.change_model(selection)?;

        match model.diff_request(self, path, staged) {
            Some(diff) => writeln!(self.writer(), "diff: {diff}")?,
            None => writeln!(self.writer(), "diff: none")?,
        }

        match model.blame_request(self, path, staged) {
            Some(blame) => writeln!(self.writer(), "blame: {blame}")?,
            None => writeln!(self.writer(), "blame: none")?,
        }

        if !staged && let Some(working_copy) = model.working_copy_path(self, path) {
            writeln!(self.writer(), "working copy: {}", working_copy.display())?;
        }

        Ok(())
    }
}
