use crate::areas::repository::Repository;
use crate::artifacts::change_set::ChangeSet;
use crate::artifacts::confirmation::{Confirmation, PROMPT};
use crate::artifacts::revision::Revision;
use crate::artifacts::snapshot::Snapshot;
use colored::Colorize;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Patched(usize),
    Aborted,
}

// Steps run strictly in order and each one must succeed before the next:
// validate -> diff -> snapshot -> confirm -> checkout + write.
// Nothing is mutated before the checkout, and the snapshot is complete
// before the checkout starts.
impl Repository {
    pub fn transplant(
        &mut self,
        source: &Revision,
        target: &Revision,
        base: &Revision,
        input: &mut dyn BufRead,
    ) -> anyhow::Result<Outcome> {
        self.validate_branches(source, target)?;

        let change_set = self.git().changed_paths(base, source)?;
        tracing::info!(files = change_set.len(), %base, %source, "resolved change set");

        let snapshot = Snapshot::capture(&change_set, |path| self.git().show_file(source, path))?;

        if !self.confirm(&change_set, input)?.is_accepted() {
            writeln!(self.writer(), "Aborted")?;
            return Ok(Outcome::Aborted);
        }

        let patched = self.materialize(target, &snapshot)?;
        writeln!(
            self.writer(),
            "{}",
            format!("Patched {} files", patched).bold()
        )?;

        Ok(Outcome::Patched(patched))
    }

    fn validate_branches(&self, source: &Revision, target: &Revision) -> anyhow::Result<()> {
        [source, target]
            .into_iter()
            .try_for_each(|branch| self.git().verify_revision(branch))
    }

    fn confirm(
        &self,
        change_set: &ChangeSet,
        input: &mut dyn BufRead,
    ) -> anyhow::Result<Confirmation> {
        let mut writer = self.writer();
        write!(writer, "{}{}", change_set, PROMPT)?;
        writer.flush()?;

        Confirmation::read_from(input)
    }

    fn materialize(&self, target: &Revision, snapshot: &Snapshot) -> anyhow::Result<usize> {
        self.git().checkout(target)?;

        self.workspace().apply_snapshot(snapshot)
    }
}
