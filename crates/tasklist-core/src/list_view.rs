//! Filter, pagination, and row-menu state for the task table.
//!
//! The filtered list is never stored. It is derived from the current
//! collection and search text on every read, so a refetch can't leave it
//! stale.

use thiserror::Error;
use tracing::debug;

use crate::task::{Task, TaskId};

pub const DEFAULT_PAGE_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("page size must be a positive integer, got {0:?}")]
    InvalidPageSize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    search: String,
    page: usize,
    page_size: usize,
    open_menu: Option<TaskId>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<'a> {
    pub rows: Vec<&'a Task>,
    /// Size of the filtered list, shown as "<n> records".
    pub record_count: usize,
    pub page: usize,
    pub page_count: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

pub fn matches_search(task: &Task, search: &str) -> bool {
    let Some(assignee) = task.assigned_to.as_deref() else {
        return false;
    };
    assignee.to_lowercase().contains(&search.to_lowercase())
}

pub fn filter_tasks<'a>(tasks: &'a [Task], search: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| matches_search(task, search))
        .collect()
}

impl ListView {
    /// Zero is bumped to one; the page size is always positive.
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            open_menu: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn open_menu(&self) -> Option<&TaskId> {
        self.open_menu.as_ref()
    }

    /// Changing the search text leaves the page where it is, even if the
    /// new result set is shorter.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Parse raw page-size input. Anything but a positive integer leaves
    /// the view untouched; a valid size sends the user back to page 1.
    pub fn set_page_size_input(&mut self, raw: &str) -> Result<(), ViewError> {
        let size = raw
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|size| *size > 0)
            .and_then(|size| usize::try_from(size).ok())
            .ok_or_else(|| ViewError::InvalidPageSize(raw.to_string()))?;
        self.set_page_size(size)
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<(), ViewError> {
        if size == 0 {
            return Err(ViewError::InvalidPageSize(size.to_string()));
        }
        debug!(from = self.page_size, to = size, "page size changed");
        self.page_size = size;
        self.page = 1;
        Ok(())
    }

    pub fn filtered<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        filter_tasks(tasks, &self.search)
    }

    /// `ceil(filtered / page_size)`; zero for an empty result.
    pub fn page_count(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.page_size)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self, filtered_count: usize) -> bool {
        self.page.saturating_mul(self.page_size) < filtered_count
    }

    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self, filtered_count: usize) {
        if self.can_next(filtered_count) {
            self.page += 1;
        }
    }

    pub fn render<'a>(&self, tasks: &'a [Task]) -> ListPage<'a> {
        let filtered = self.filtered(tasks);
        let record_count = filtered.len();
        let start = (self.page - 1).saturating_mul(self.page_size);
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        ListPage {
            rows,
            record_count,
            page: self.page,
            page_count: self.page_count(record_count),
            can_prev: self.can_prev(),
            can_next: self.can_next(record_count),
        }
    }

    /// Open the menu for `id`, closing any other; a second toggle on the
    /// same row closes it.
    pub fn toggle_menu(&mut self, id: &TaskId) {
        if self.open_menu.as_ref() == Some(id) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(id.clone());
        }
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }
}
