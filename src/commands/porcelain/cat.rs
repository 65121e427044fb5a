use crate::Selection;
use crate::areas::repository::Repository;

impl Repository {
    /// Write the raw bytes of one side of a file.
    pub fn cat(&self, selection: &Selection, path: &str, staged: bool) -> anyhow::Result<()> {
        let model = self.change_model(selection)?;
        let side = if staged { "staged" } else { "unstaged" };

        let Some(bytes) = model.file_bytes(self, path, staged) else {
            anyhow::bail!("{path} has no {side} contents in the {} selection", model.kind());
        };

        let mut writer = self.writer();
        writer.write_all(&bytes)?;
        writer.flush()?;

        Ok(())
    }
}
