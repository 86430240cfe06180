//! Host callback hooks

use std::fmt;

use crate::model::Record;

type AddHandler = Box<dyn Fn() + Send + Sync>;
type RowHandler = Box<dyn Fn(&Record) + Send + Sync>;

/// Callbacks the host installs for explicit user actions.
///
/// A missing handler degrades to a logged placeholder notification; the
/// engine itself never edits or deletes records.
///
/// # Example
///
/// ```
/// use treegrid_lib::engine::TableHooks;
///
/// let hooks = TableHooks::new()
///     .on_add(|| println!("add a product"))
///     .on_edit_row(|record| println!("edit {:?}", record.get("name")));
/// ```
#[derive(Default)]
pub struct TableHooks {
    on_add: Option<AddHandler>,
    on_edit_row: Option<RowHandler>,
    on_delete_row: Option<RowHandler>,
}

impl TableHooks {
    /// Creates hooks with no handlers installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the add handler (builder pattern).
    pub fn on_add(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_add = Some(Box::new(handler));
        self
    }

    /// Installs the edit-row handler (builder pattern).
    pub fn on_edit_row(mut self, handler: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.on_edit_row = Some(Box::new(handler));
        self
    }

    /// Installs the delete-row handler (builder pattern).
    pub fn on_delete_row(mut self, handler: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.on_delete_row = Some(Box::new(handler));
        self
    }

    /// Fires the add hook.
    pub fn notify_add(&self) {
        match &self.on_add {
            Some(handler) => handler(),
            None => log::info!("add requested but no handler is installed"),
        }
    }

    /// Fires the edit hook for a record.
    pub fn notify_edit(&self, record: &Record) {
        match &self.on_edit_row {
            Some(handler) => handler(record),
            None => log::info!("edit requested but no handler is installed"),
        }
    }

    /// Fires the delete hook for a record.
    pub fn notify_delete(&self, record: &Record) {
        match &self.on_delete_row {
            Some(handler) => handler(record),
            None => log::info!("delete requested but no handler is installed"),
        }
    }
}

impl fmt::Debug for TableHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableHooks")
            .field("on_add", &self.on_add.is_some())
            .field("on_edit_row", &self.on_edit_row.is_some())
            .field("on_delete_row", &self.on_delete_row.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_installed_handler_fires() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let hooks = TableHooks::new().on_add(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        hooks.notify_add();
        hooks.notify_add();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_missing_handler_is_noop() {
        let hooks = TableHooks::new();
        hooks.notify_add();
        hooks.notify_edit(&Record::new());
        hooks.notify_delete(&Record::new());
    }
}
