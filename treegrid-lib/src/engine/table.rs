//! Stateful table engine composing filters, sort, expansion, pagination and
//! selection into a visible row list

use crate::columns;
use crate::columns::ColumnDef;
use crate::columns::ColumnKind;
use crate::expand::ExpansionState;
use crate::filter::ActiveFilterSet;
use crate::filter::predicate_for_column;
use crate::filter::recursive_match;
use crate::model::Record;
use crate::model::RowId;
use crate::model::Value;
use crate::schema::Schema;

use super::BodyRow;
use super::Cell;
use super::CellContent;
use super::Direction;
use super::PaginationState;
use super::SelectionState;
use super::SortState;
use super::TableHooks;
use super::TableView;
use super::compare_values;

/// Feature flags, each independently togglable.
///
/// Enabling a flag adds the corresponding stage to the view pipeline.
/// `grouping` is accepted for interface parity but its aggregation
/// semantics are delegated entirely to the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableOptions {
    /// Row selection with select-all/indeterminate summaries.
    pub selection: bool,
    /// Top-level sorting by column.
    pub sorting: bool,
    /// Hierarchical row expansion.
    pub expansion: bool,
    /// Top-level pagination.
    pub pagination: bool,
    /// Accepted flag; aggregation is the renderer's concern.
    pub grouping: bool,
}

impl TableOptions {
    /// All features disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables selection (builder pattern).
    pub fn with_selection(mut self) -> Self {
        self.selection = true;
        self
    }

    /// Enables sorting (builder pattern).
    pub fn with_sorting(mut self) -> Self {
        self.sorting = true;
        self
    }

    /// Enables expansion (builder pattern).
    pub fn with_expansion(mut self) -> Self {
        self.expansion = true;
        self
    }

    /// Enables pagination (builder pattern).
    pub fn with_pagination(mut self) -> Self {
        self.pagination = true;
        self
    }

    /// Enables grouping (builder pattern).
    pub fn with_grouping(mut self) -> Self {
        self.grouping = true;
        self
    }
}

/// One table instance: the record forest plus all view state, and the pure
/// [`Table::view`] computation over them.
///
/// All operations are synchronous; the view is recomputed from current
/// inputs on every call. The instance owns its view state exclusively, so
/// concurrent mutation must be serialized by the caller.
///
/// # Example
///
/// ```
/// use treegrid_lib::engine::Table;
/// use treegrid_lib::engine::TableOptions;
/// use treegrid_lib::model::Record;
/// use treegrid_lib::model::Value;
/// use treegrid_lib::schema::ColumnSchema;
/// use treegrid_lib::schema::Schema;
///
/// let schema = Schema::new(vec![ColumnSchema::text("name", "Name")]).unwrap();
/// let mut table = Table::new(schema, TableOptions::new().with_expansion());
/// table.set_records(vec![
///     Record::new()
///         .set("name", "Drinks")
///         .child(Record::new().set("name", "Rum")),
/// ]);
///
/// table.apply_filter("name", Value::from("rum"));
/// let view = table.view();
/// // the parent stays visible because a descendant matches
/// assert_eq!(view.top_level_count, 1);
/// ```
#[derive(Debug)]
pub struct Table {
    schema: Schema,
    options: TableOptions,
    hooks: TableHooks,
    columns: Vec<ColumnDef>,
    records: Vec<Record>,
    filters: ActiveFilterSet,
    sort: Option<SortState>,
    expansion: ExpansionState,
    pagination: PaginationState,
    selection: SelectionState,
}

impl Table {
    /// Creates a table over a validated schema.
    pub fn new(schema: Schema, options: TableOptions) -> Self {
        let columns = columns::generate(&schema, options.expansion);
        Self {
            schema,
            options,
            hooks: TableHooks::new(),
            columns,
            records: Vec::new(),
            filters: ActiveFilterSet::new(),
            sort: None,
            expansion: ExpansionState::new(),
            pagination: PaginationState::default(),
            selection: SelectionState::new(),
        }
    }

    /// Installs host callbacks (builder pattern).
    pub fn with_hooks(mut self, hooks: TableHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replaces the record forest.
    ///
    /// View state is kept as-is; resetting it on data reload is the
    /// caller's responsibility (see [`Table::reset_view_state`]).
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Clears filters, sort, expansion, selection and returns to the first
    /// page.
    pub fn reset_view_state(&mut self) {
        self.filters.clear();
        self.sort = None;
        self.expansion.clear();
        self.selection.clear();
        self.pagination.first_page();
    }

    /// Returns the validated schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the feature flags.
    pub fn options(&self) -> TableOptions {
        self.options
    }

    /// Returns the generated column definitions.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the raw record forest.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the active filters.
    pub fn filters(&self) -> &ActiveFilterSet {
        &self.filters
    }

    /// Returns the active sort.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Returns the expansion state.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Returns the pagination state.
    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Returns the selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Installs or replaces a column filter.
    ///
    /// A blank value clears the column's filter. Filters on unknown columns
    /// are refused. Returns `true` if a filter is active for the column
    /// afterwards.
    pub fn apply_filter(&mut self, column_id: &str, value: Value) -> bool {
        if self.schema.get(column_id).is_none() {
            log::warn!("ignoring filter on unknown column '{column_id}'");
            return false;
        }
        self.filters.set(column_id, value)
    }

    /// Drops a column's filter.
    pub fn remove_filter(&mut self, column_id: &str) {
        self.filters.remove(column_id);
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Cycles a column's sort: none → ascending → descending → none.
    ///
    /// No-op when sorting is disabled or the column is unknown.
    pub fn toggle_sort(&mut self, column_id: &str) {
        if !self.options.sorting || self.schema.get(column_id).is_none() {
            return;
        }
        self.sort = match &self.sort {
            Some(sort) if sort.column_id == column_id => match sort.direction {
                Direction::Asc => Some(SortState::desc(column_id)),
                Direction::Desc => None,
            },
            _ => Some(SortState::asc(column_id)),
        };
    }

    /// Sets or clears the sort directly.
    pub fn set_sort(&mut self, sort: Option<SortState>) {
        if self.options.sorting {
            self.sort = sort;
        }
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Toggles a single row's expansion.
    ///
    /// Collapsing removes the row's entry together with its whole recorded
    /// subtree; expanding adds only the row's own entry.
    pub fn toggle_row(&mut self, id: &RowId) {
        if self.options.expansion {
            self.expansion.toggle(id);
        }
    }

    /// Toggles expansion for every row in the current top-level row list
    /// (the current page when paginated).
    pub fn toggle_expand_all(&mut self) {
        if !self.options.expansion {
            return;
        }
        let tops = self.filtered_sorted_indices();
        let range = self.page_positions(tops.len());
        let rows: Vec<(RowId, &Record)> = range
            .map(|pos| (RowId::root(pos), &self.records[tops[pos]]))
            .collect();
        self.expansion.toggle_all(&rows);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggles a row's selection.
    pub fn toggle_select(&mut self, id: &RowId) {
        if self.options.selection {
            self.selection.toggle(id);
        }
    }

    /// Selects every row in the post-filter view, or clears the selection
    /// when all of them are already selected.
    pub fn toggle_select_all(&mut self) {
        if !self.options.selection {
            return;
        }
        let ids = self.view_row_ids();
        let all = !ids.is_empty() && ids.iter().all(|id| self.selection.is_selected(id));
        if all {
            self.selection.clear();
        } else {
            for id in ids {
                self.selection.select(id);
            }
        }
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Moves to the next page.
    pub fn next_page(&mut self) {
        if self.options.pagination {
            let count = self.filtered_sorted_indices().len();
            self.pagination.next_page(count);
        }
    }

    /// Moves to the previous page.
    pub fn previous_page(&mut self) {
        if self.options.pagination {
            self.pagination.previous_page();
        }
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        if self.options.pagination {
            self.pagination.first_page();
        }
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        if self.options.pagination {
            let count = self.filtered_sorted_indices().len();
            self.pagination.last_page(count);
        }
    }

    /// Changes the rows-per-page and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        if self.options.pagination {
            self.pagination.set_page_size(page_size);
        }
    }

    // =========================================================================
    // Host callbacks
    // =========================================================================

    /// Fires the add hook.
    pub fn request_add(&self) {
        self.hooks.notify_add();
    }

    /// Fires the edit hook for the record behind a row id.
    pub fn request_edit(&self, id: &RowId) {
        if let Some(record) = self.record_at(id) {
            self.hooks.notify_edit(record);
        }
    }

    /// Fires the delete hook for the record behind a row id.
    pub fn request_delete(&self, id: &RowId) {
        if let Some(record) = self.record_at(id) {
            self.hooks.notify_delete(record);
        }
    }

    /// Resolves a row id to its record in the current view.
    pub fn record_at(&self, id: &RowId) -> Option<&Record> {
        let segments = id.segments()?;
        let (first, rest) = segments.split_first()?;

        let tops = self.filtered_sorted_indices();
        let mut record = &self.records[*tops.get(*first)?];
        for &index in rest {
            record = record.children().get(index)?;
        }
        Some(record)
    }

    // =========================================================================
    // View computation
    // =========================================================================

    /// Composes the visible row list and derived header/footer state.
    ///
    /// Stages run in order: filter, sort, expansion flattening, pagination
    /// slicing, selection summary. The result is a pure function of current
    /// state; callers may memoize but never need to.
    pub fn view(&self) -> TableView {
        let tops = self.filtered_sorted_indices();
        let top_level_count = tops.len();

        let page_count = if self.options.pagination {
            self.pagination.page_count(top_level_count)
        } else {
            1
        };

        // Selection summaries range over the whole post-filter view, not
        // just the current page.
        let all_ids = self.flatten_ids(&tops);
        let selected = all_ids
            .iter()
            .filter(|id| self.selection.is_selected(id))
            .count();
        let is_all_selected =
            self.options.selection && !all_ids.is_empty() && selected == all_ids.len();
        let is_some_selected = self.options.selection && selected > 0 && !is_all_selected;

        let mut body_rows = Vec::new();
        for pos in self.page_positions(top_level_count) {
            self.flatten_rows(&mut body_rows, RowId::root(pos), &self.records[tops[pos]], 0);
        }

        TableView {
            columns: self.columns.clone(),
            body_rows,
            top_level_count,
            page_count,
            sort: if self.options.sorting {
                self.sort.clone()
            } else {
                None
            },
            is_all_selected,
            is_some_selected,
        }
    }

    /// Indices of top-level records surviving the filter stage, in sorted
    /// order.
    fn filtered_sorted_indices(&self) -> Vec<usize> {
        let mut tops: Vec<usize> = (0..self.records.len())
            .filter(|&i| self.matches_filters(&self.records[i]))
            .collect();

        if self.options.sorting {
            if let Some(sort) = &self.sort {
                if let Some(col) = self.schema.get(&sort.column_id) {
                    let key = col.accessor_key();
                    let semantic = col.semantic_type;
                    let descending = sort.direction == Direction::Desc;
                    // Vec::sort_by is stable: equal records keep input order
                    tops.sort_by(|&a, &b| {
                        let ord = compare_values(
                            semantic,
                            self.records[a].accessor(key),
                            self.records[b].accessor(key),
                        );
                        if descending { ord.reverse() } else { ord }
                    });
                }
            }
        }

        tops
    }

    /// Conjunction of every active filter's recursive subtree match.
    fn matches_filters(&self, record: &Record) -> bool {
        self.filters.iter().all(|f| match self.schema.get(&f.column_id) {
            Some(col) => {
                let predicate = predicate_for_column(col, &f.value);
                recursive_match(record, col.accessor_key(), &predicate)
            }
            // stale filters for columns no longer in the schema are inert
            None => true,
        })
    }

    /// Range of top-level positions on the current page.
    fn page_positions(&self, top_level_count: usize) -> std::ops::Range<usize> {
        if !self.options.pagination {
            return 0..top_level_count;
        }
        let start = self.pagination.offset().min(top_level_count);
        let end = (start + self.pagination.page_size()).min(top_level_count);
        start..end
    }

    fn flatten_rows(&self, out: &mut Vec<BodyRow>, id: RowId, record: &Record, depth: usize) {
        let expandable = self.options.expansion && record.has_children();
        let expanded = expandable && self.expansion.is_expanded(&id);

        out.push(BodyRow {
            depth,
            expandable,
            expanded,
            selected: self.options.selection && self.selection.is_selected(&id),
            cells: self.render_cells(record),
            id: id.clone(),
        });

        if expanded {
            for (index, child) in record.children().iter().enumerate() {
                self.flatten_rows(out, id.child(index), child, depth + 1);
            }
        }
    }

    /// Row ids of the whole post-filter view, expansion-gated, across all
    /// pages.
    fn view_row_ids(&self) -> Vec<RowId> {
        self.flatten_ids(&self.filtered_sorted_indices())
    }

    fn flatten_ids(&self, tops: &[usize]) -> Vec<RowId> {
        fn walk(out: &mut Vec<RowId>, expansion: &ExpansionState, id: RowId, record: &Record) {
            let expanded = expansion.is_expanded(&id);
            out.push(id.clone());
            if expanded {
                for (index, child) in record.children().iter().enumerate() {
                    walk(out, expansion, id.child(index), child);
                }
            }
        }

        let mut ids = Vec::new();
        for (pos, &index) in tops.iter().enumerate() {
            if self.options.expansion {
                walk(&mut ids, &self.expansion, RowId::root(pos), &self.records[index]);
            } else {
                ids.push(RowId::root(pos));
            }
        }
        ids
    }

    fn render_cells(&self, record: &Record) -> Vec<Cell> {
        self.columns
            .iter()
            .map(|col| {
                let content = match &col.kind {
                    ColumnKind::Expander => CellContent::Empty,
                    ColumnKind::Data {
                        accessor_key,
                        render,
                        ..
                    } => {
                        let value = record.accessor(accessor_key);
                        match render {
                            columns::CellRender::Custom => CellContent::Image {
                                src: columns::resolve_image(value),
                            },
                            _ => CellContent::Text(value.normalize()),
                        }
                    }
                };
                Cell {
                    column_id: col.id.clone(),
                    content,
                }
            })
            .collect()
    }
}
