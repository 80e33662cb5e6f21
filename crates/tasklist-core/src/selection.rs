use crate::task::{Task, TaskId};

/// Task ids marked for bulk action, kept in the order they were selected so
/// a bulk delete walks them deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<TaskId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[TaskId] {
        &self.ids
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: &TaskId) {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.clone());
        }
    }

    /// `true` selects every loaded task (not just the visible page);
    /// `false` empties the set.
    pub fn select_all(&mut self, select: bool, tasks: &[Task]) {
        self.ids.clear();
        if select {
            self.ids.extend(tasks.iter().map(|task| task.id.clone()));
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that are no longer in `tasks`.
    pub fn retain_existing(&mut self, tasks: &[Task]) -> usize {
        let before = self.ids.len();
        self.ids
            .retain(|id| tasks.iter().any(|task| &task.id == id));
        before - self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::NewTask;

    fn tasks(ids: &[u64]) -> Vec<Task> {
        ids.iter()
            .map(|id| NewTask::for_user(format!("User {id}")).with_id(TaskId::Int(*id)))
            .collect()
    }

    #[test]
    fn double_toggle_restores_membership() {
        let mut selection = SelectionSet::new();
        selection.toggle(&TaskId::Int(1));
        let before = selection.clone();

        selection.toggle(&TaskId::Int(2));
        selection.toggle(&TaskId::Int(2));
        assert_eq!(selection, before);

        selection.toggle(&TaskId::Int(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_covers_whole_collection_then_clears() {
        let loaded = tasks(&[3, 1, 2]);
        let mut selection = SelectionSet::new();
        selection.toggle(&TaskId::Int(1));

        selection.select_all(true, &loaded);
        assert_eq!(
            selection.ids(),
            &[TaskId::Int(3), TaskId::Int(1), TaskId::Int(2)]
        );

        selection.select_all(false, &loaded);
        assert!(selection.is_empty());
    }

    #[test]
    fn retain_existing_drops_vanished_ids() {
        let mut selection = SelectionSet::new();
        selection.toggle(&TaskId::Int(1));
        selection.toggle(&TaskId::Int(9));

        let dropped = selection.retain_existing(&tasks(&[1, 2]));
        assert_eq!(dropped, 1);
        assert_eq!(selection.ids(), &[TaskId::Int(1)]);
    }
}
