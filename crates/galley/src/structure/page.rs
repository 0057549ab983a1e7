//! The page document store.
//!
//! # Overview
//!
//! [`Page`] owns the four-level ordered tree of a page document together with
//! the single optional selection. All editing flows through its mutation
//! operations:
//!
//! ```text
//!   Page
//!    └── wrapper*            (ordered)
//!         └── section*       (ordered)
//!              └── column*   (ordered)
//!                   └── block* (ordered leaves)
//! ```
//!
//! # Mutation contract
//!
//! Every mutation is total: an edit that cannot apply logs the rejection and
//! leaves the tree untouched. Nothing panics, nothing is partially applied.
//! Moves validate both the moving id and the destination before detaching
//! anything, so a rejected move is indistinguishable from a no-op. Call
//! sites that want the rejection reason use the `try_*` variants, which
//! return a [`MutationError`] instead of logging.
//!
//! Removal cascades downward: removing a wrapper deletes its sections, their
//! columns, and the blocks those columns hold. There is no other reclamation;
//! an id registered without a reachable parent stays registered until its own
//! remove operation runs.

use indexmap::IndexMap;
use log::{debug, error, trace, warn};
use thiserror::Error;

use galley_core::{identifier::Id, level::Level};

/// Ordered parent-to-children mapping for one nesting level.
type ChildMap = IndexMap<Id, Vec<Id>>;

/// A rejected mutation, reported by the `try_*` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The mutation names an id that is not present at the given level.
    #[error("unknown {level} `{id}`")]
    ReferenceNotFound { level: Level, id: Id },

    /// The mutation would register an id that already exists at the given level.
    #[error("{level} `{id}` already exists")]
    DuplicateId { level: Level, id: Id },

    /// Removing the column would leave its section with no columns.
    #[error("column `{column}` is the last one in section `{section}`")]
    LastColumn { column: Id, section: Id },
}

/// The ordered four-level tree of a page document, plus the selection.
///
/// Child sequences preserve insertion order; wrapper order is the key order
/// of the wrapper map itself. Two pages compare equal only when every level
/// holds the same ids in the same order and the selection matches.
///
/// # Examples
///
/// ```
/// use galley::structure::Page;
/// use galley::identifier::Id;
///
/// let mut page = Page::new();
/// page.add_wrapper(Id::new("hero"), 0);
/// page.add_section(Id::new("intro"), Id::new("hero"), 0, &[Id::new("left")]);
/// page.add_block(Id::new("headline"), Id::new("left"), 0);
///
/// assert_eq!(page.block_count(), 1);
/// assert_eq!(page.blocks_of(Id::new("left")), Some(&[Id::new("headline")][..]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Page {
    selected: Option<Id>,
    wrappers: ChildMap,
    sections: ChildMap,
    columns: ChildMap,
}

// IndexMap equality ignores key order; sibling order is meaningful here, so
// compare iteration order explicitly.
impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.selected == other.selected
            && self.wrappers.iter().eq(other.wrappers.iter())
            && self.sections.iter().eq(other.sections.iter())
            && self.columns.iter().eq(other.columns.iter())
    }
}

impl Eq for Page {}

impl Page {
    /// Creates an empty page with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    // ====================================================================
    // State loading and selection
    // ====================================================================

    /// Replaces the whole tree with externally supplied state.
    ///
    /// The wrapper sequence arrives as an explicit order plus a children
    /// mapping; the two are reconciled here. An ordered wrapper without a
    /// children entry is registered empty, and a mapped wrapper missing from
    /// the order is appended after it; both cases are logged. The section
    /// and column mappings are taken as-is.
    ///
    /// The selection is left untouched, mirroring `select`'s indifference to
    /// whether the selected id exists.
    pub fn load_state(
        &mut self,
        wrapper_order: Vec<Id>,
        wrappers: IndexMap<Id, Vec<Id>>,
        sections: IndexMap<Id, Vec<Id>>,
        columns: IndexMap<Id, Vec<Id>>,
    ) {
        let mut remaining = wrappers;
        let mut ordered = IndexMap::with_capacity(remaining.len());
        for wrapper in wrapper_order {
            if ordered.contains_key(&wrapper) {
                warn!(wrapper:% = wrapper; "Duplicate wrapper in load order, ignoring repeat");
                continue;
            }
            match remaining.shift_remove(&wrapper) {
                Some(section_ids) => {
                    ordered.insert(wrapper, section_ids);
                }
                None => {
                    warn!(wrapper:% = wrapper; "Ordered wrapper has no children entry, registering it empty");
                    ordered.insert(wrapper, Vec::new());
                }
            }
        }
        for (wrapper, section_ids) in remaining {
            warn!(wrapper:% = wrapper; "Wrapper missing from load order, appending at the end");
            ordered.insert(wrapper, section_ids);
        }

        self.wrappers = ordered;
        self.sections = sections;
        self.columns = columns;
        debug!(
            wrappers = self.wrappers.len(),
            sections = self.sections.len(),
            columns = self.columns.len();
            "Loaded document state"
        );
    }

    /// Sets or clears the selection.
    ///
    /// No existence check is performed; selection is a plain id the caller
    /// interprets. Removing an entity does not clear a selection pointing
    /// at it.
    pub fn select(&mut self, id: Option<Id>) {
        match id {
            Some(id) => trace!(id:% = id; "Selecting"),
            None => trace!("Clearing selection"),
        }
        self.selected = id;
    }

    /// Selects `id`, or clears the selection if `id` is already selected.
    pub fn toggle_select(&mut self, id: Id) {
        if self.selected == Some(id) {
            self.select(None);
        } else {
            self.select(Some(id));
        }
    }

    /// Returns the currently selected id, if any.
    pub fn selected(&self) -> Option<Id> {
        self.selected
    }

    // ====================================================================
    // Read access
    // ====================================================================

    /// Iterates wrapper ids in document order.
    pub fn wrappers(&self) -> impl Iterator<Item = Id> + '_ {
        self.wrappers.keys().copied()
    }

    /// Iterates registered section ids in registration order.
    pub fn sections(&self) -> impl Iterator<Item = Id> + '_ {
        self.sections.keys().copied()
    }

    /// Iterates registered column ids in registration order.
    pub fn columns(&self) -> impl Iterator<Item = Id> + '_ {
        self.columns.keys().copied()
    }

    /// Returns the ordered section ids of a wrapper, or `None` if the
    /// wrapper is unknown.
    pub fn sections_of(&self, wrapper: Id) -> Option<&[Id]> {
        self.wrappers.get(&wrapper).map(Vec::as_slice)
    }

    /// Returns the ordered column ids of a section, or `None` if the
    /// section is unknown.
    pub fn columns_of(&self, section: Id) -> Option<&[Id]> {
        self.sections.get(&section).map(Vec::as_slice)
    }

    /// Returns the ordered block ids of a column, or `None` if the column
    /// is unknown.
    pub fn blocks_of(&self, column: Id) -> Option<&[Id]> {
        self.columns.get(&column).map(Vec::as_slice)
    }

    /// Number of wrappers in the document.
    pub fn wrapper_count(&self) -> usize {
        self.wrappers.len()
    }

    /// Number of registered sections, parented or not.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of registered columns, parented or not.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of blocks across all registered columns.
    pub fn block_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Returns true when the document holds no wrappers and no registered
    /// sections or columns.
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty() && self.sections.is_empty() && self.columns.is_empty()
    }

    // ====================================================================
    // Block operations
    // ====================================================================

    /// Inserts a block into a column at the given position.
    ///
    /// Indices past the end append. Rejected when the column is unknown or
    /// the block id already exists in some column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galley::structure::Page;
    /// # use galley::identifier::Id;
    /// let mut page = Page::new();
    /// page.add_wrapper(Id::new("w"), 0);
    /// page.add_section(Id::new("s"), Id::new("w"), 0, &[Id::new("c")]);
    ///
    /// page.add_block(Id::new("first"), Id::new("c"), 0);
    /// page.add_block(Id::new("second"), Id::new("c"), 99); // clamps to the end
    ///
    /// assert_eq!(
    ///     page.blocks_of(Id::new("c")),
    ///     Some(&[Id::new("first"), Id::new("second")][..])
    /// );
    /// ```
    pub fn add_block(&mut self, block: Id, to_column: Id, at: usize) {
        if let Err(err) = self.try_add_block(block, to_column, at) {
            warn!(block:% = block, to_column:% = to_column, err:err; "Block not added");
        }
    }

    /// Validating variant of [`add_block`](Self::add_block).
    pub fn try_add_block(&mut self, block: Id, to_column: Id, at: usize) -> Result<(), MutationError> {
        if find_owner(&self.columns, block).is_some() {
            return Err(MutationError::DuplicateId {
                level: Level::Block,
                id: block,
            });
        }
        let Some(blocks) = self.columns.get_mut(&to_column) else {
            return Err(MutationError::ReferenceNotFound {
                level: Level::Column,
                id: to_column,
            });
        };
        insert_clamped(blocks, block, at);
        trace!(block:% = block, to_column:% = to_column, at = at; "Added block");
        Ok(())
    }

    /// Moves a block into a column at the given position.
    ///
    /// The destination column and the block itself are both validated before
    /// anything is detached, so a rejected move leaves the tree byte-for-byte
    /// unchanged. The index addresses the destination sequence after the
    /// block has been detached; indices past the end append.
    pub fn move_block(&mut self, block: Id, to_column: Id, at: usize) {
        if let Err(err) = self.try_move_block(block, to_column, at) {
            error!(block:% = block, to_column:% = to_column, err:err; "Block move rejected");
        }
    }

    /// Validating variant of [`move_block`](Self::move_block).
    pub fn try_move_block(&mut self, block: Id, to_column: Id, at: usize) -> Result<(), MutationError> {
        move_child(
            &mut self.columns,
            Level::Block,
            Level::Column,
            block,
            to_column,
            at,
        )?;
        trace!(block:% = block, to_column:% = to_column, at = at; "Moved block");
        Ok(())
    }

    /// Removes a block from whichever column holds it. No-op when absent.
    pub fn remove_block(&mut self, block: Id) {
        if let Err(err) = self.try_remove_block(block) {
            debug!(block:% = block, err:err; "Block not removed");
        }
    }

    /// Validating variant of [`remove_block`](Self::remove_block).
    pub fn try_remove_block(&mut self, block: Id) -> Result<(), MutationError> {
        let Some((column, index)) = find_owner(&self.columns, block) else {
            return Err(MutationError::ReferenceNotFound {
                level: Level::Block,
                id: block,
            });
        };
        if let Some(blocks) = self.columns.get_mut(&column) {
            blocks.remove(index);
        }
        trace!(block:% = block, column:% = column; "Removed block");
        Ok(())
    }

    // ====================================================================
    // Column operations
    // ====================================================================

    /// Registers an empty column and appends it to a section's sequence.
    ///
    /// The column is registered even when the section is unknown; the column
    /// then exists unparented and is not reachable from any wrapper. Callers
    /// must not rely on such a column being rendered. Rejected only when the
    /// column id already exists.
    pub fn add_column(&mut self, column: Id, to_section: Id) {
        if let Err(err) = self.try_add_column(column, to_section) {
            warn!(column:% = column, to_section:% = to_section, err:err; "Column not added");
        }
    }

    /// Validating variant of [`add_column`](Self::add_column).
    pub fn try_add_column(&mut self, column: Id, to_section: Id) -> Result<(), MutationError> {
        if self.columns.contains_key(&column) {
            return Err(MutationError::DuplicateId {
                level: Level::Column,
                id: column,
            });
        }
        self.columns.insert(column, Vec::new());
        match self.sections.get_mut(&to_section) {
            Some(columns) => {
                columns.push(column);
                trace!(column:% = column, to_section:% = to_section; "Added column");
            }
            None => {
                warn!(column:% = column, to_section:% = to_section; "Section not found, column registered without a parent");
            }
        }
        Ok(())
    }

    /// Removes a column, discarding its blocks, unless it is the last column
    /// of its section.
    ///
    /// The minimum-one-column guard keeps every parented section renderable;
    /// a rejected removal leaves the column and its blocks in place. A
    /// registered column that no section lists behaves as unknown here and
    /// stays registered.
    pub fn remove_column(&mut self, column: Id) {
        match self.try_remove_column(column) {
            Err(err @ MutationError::LastColumn { .. }) => {
                warn!(column:% = column, err:err; "Column not removed");
            }
            Err(err) => {
                debug!(column:% = column, err:err; "Column not removed");
            }
            Ok(()) => {}
        }
    }

    /// Validating variant of [`remove_column`](Self::remove_column).
    pub fn try_remove_column(&mut self, column: Id) -> Result<(), MutationError> {
        let Some((section, index)) = find_owner(&self.sections, column) else {
            return Err(MutationError::ReferenceNotFound {
                level: Level::Column,
                id: column,
            });
        };
        let Some(columns) = self.sections.get_mut(&section) else {
            return Err(MutationError::ReferenceNotFound {
                level: Level::Section,
                id: section,
            });
        };
        if columns.len() <= 1 {
            return Err(MutationError::LastColumn { column, section });
        }
        columns.remove(index);
        self.columns.shift_remove(&column);
        trace!(column:% = column, section:% = section; "Removed column");
        Ok(())
    }

    // ====================================================================
    // Section operations
    // ====================================================================

    /// Registers a section with the given initial columns and inserts it
    /// into a wrapper's sequence at the given position.
    ///
    /// Every id in `initial_columns` is registered as an empty column.
    /// Like [`add_column`](Self::add_column), registration happens even when
    /// the wrapper is unknown; the insertion is then skipped and logged.
    /// Rejected when the section id or any initial column id already exists,
    /// or when `initial_columns` itself repeats an id; nothing is registered
    /// in that case.
    pub fn add_section(&mut self, section: Id, to_wrapper: Id, at: usize, initial_columns: &[Id]) {
        if let Err(err) = self.try_add_section(section, to_wrapper, at, initial_columns) {
            warn!(section:% = section, to_wrapper:% = to_wrapper, err:err; "Section not added");
        }
    }

    /// Validating variant of [`add_section`](Self::add_section).
    pub fn try_add_section(
        &mut self,
        section: Id,
        to_wrapper: Id,
        at: usize,
        initial_columns: &[Id],
    ) -> Result<(), MutationError> {
        if self.sections.contains_key(&section) {
            return Err(MutationError::DuplicateId {
                level: Level::Section,
                id: section,
            });
        }
        for (position, column) in initial_columns.iter().enumerate() {
            if initial_columns[..position].contains(column) || self.columns.contains_key(column) {
                return Err(MutationError::DuplicateId {
                    level: Level::Column,
                    id: *column,
                });
            }
        }

        for column in initial_columns {
            self.columns.insert(*column, Vec::new());
        }
        self.sections.insert(section, initial_columns.to_vec());
        match self.wrappers.get_mut(&to_wrapper) {
            Some(sections) => {
                insert_clamped(sections, section, at);
                trace!(section:% = section, to_wrapper:% = to_wrapper, at = at; "Added section");
            }
            None => {
                warn!(section:% = section, to_wrapper:% = to_wrapper; "Wrapper not found, section registered without a parent");
            }
        }
        Ok(())
    }

    /// Removes a section, cascading into its columns and their blocks, and
    /// detaches it from its wrapper. No-op when the section is unknown.
    ///
    /// There is no minimum-section guard: removing the last section of a
    /// wrapper leaves the wrapper empty.
    pub fn remove_section(&mut self, section: Id) {
        if let Err(err) = self.try_remove_section(section) {
            debug!(section:% = section, err:err; "Section not removed");
        }
    }

    /// Validating variant of [`remove_section`](Self::remove_section).
    pub fn try_remove_section(&mut self, section: Id) -> Result<(), MutationError> {
        let Some(column_ids) = self.sections.shift_remove(&section) else {
            return Err(MutationError::ReferenceNotFound {
                level: Level::Section,
                id: section,
            });
        };
        for column in &column_ids {
            self.columns.shift_remove(column);
        }
        if let Some((wrapper, index)) = find_owner(&self.wrappers, section) {
            if let Some(sections) = self.wrappers.get_mut(&wrapper) {
                sections.remove(index);
            }
        }
        trace!(section:% = section, columns = column_ids.len(); "Removed section");
        Ok(())
    }

    /// Moves a section into a wrapper at the given position.
    ///
    /// Destination and source are validated before anything is detached;
    /// the section's columns travel with it untouched.
    pub fn move_section(&mut self, section: Id, to_wrapper: Id, at: usize) {
        if let Err(err) = self.try_move_section(section, to_wrapper, at) {
            error!(section:% = section, to_wrapper:% = to_wrapper, err:err; "Section move rejected");
        }
    }

    /// Validating variant of [`move_section`](Self::move_section).
    pub fn try_move_section(
        &mut self,
        section: Id,
        to_wrapper: Id,
        at: usize,
    ) -> Result<(), MutationError> {
        move_child(
            &mut self.wrappers,
            Level::Section,
            Level::Wrapper,
            section,
            to_wrapper,
            at,
        )?;
        trace!(section:% = section, to_wrapper:% = to_wrapper, at = at; "Moved section");
        Ok(())
    }

    // ====================================================================
    // Wrapper operations
    // ====================================================================

    /// Registers an empty wrapper at the given position in document order.
    ///
    /// Indices past the end append. Rejected when the wrapper id already
    /// exists.
    pub fn add_wrapper(&mut self, wrapper: Id, at: usize) {
        if let Err(err) = self.try_add_wrapper(wrapper, at) {
            warn!(wrapper:% = wrapper, err:err; "Wrapper not added");
        }
    }

    /// Validating variant of [`add_wrapper`](Self::add_wrapper).
    pub fn try_add_wrapper(&mut self, wrapper: Id, at: usize) -> Result<(), MutationError> {
        if self.wrappers.contains_key(&wrapper) {
            return Err(MutationError::DuplicateId {
                level: Level::Wrapper,
                id: wrapper,
            });
        }
        let index = at.min(self.wrappers.len());
        self.wrappers.shift_insert(index, wrapper, Vec::new());
        trace!(wrapper:% = wrapper, at = index; "Added wrapper");
        Ok(())
    }

    /// Removes a wrapper, cascading into its sections, their columns, and
    /// those columns' blocks. No-op when the wrapper is unknown.
    pub fn remove_wrapper(&mut self, wrapper: Id) {
        if let Err(err) = self.try_remove_wrapper(wrapper) {
            debug!(wrapper:% = wrapper, err:err; "Wrapper not removed");
        }
    }

    /// Validating variant of [`remove_wrapper`](Self::remove_wrapper).
    pub fn try_remove_wrapper(&mut self, wrapper: Id) -> Result<(), MutationError> {
        let Some(section_ids) = self.wrappers.shift_remove(&wrapper) else {
            return Err(MutationError::ReferenceNotFound {
                level: Level::Wrapper,
                id: wrapper,
            });
        };
        for section in &section_ids {
            if let Some(column_ids) = self.sections.shift_remove(section) {
                for column in column_ids {
                    self.columns.shift_remove(&column);
                }
            }
        }
        trace!(wrapper:% = wrapper, sections = section_ids.len(); "Removed wrapper");
        Ok(())
    }

    /// Moves a wrapper to the given position in document order.
    ///
    /// The index addresses the order after the wrapper has been detached;
    /// indices past the end append. No-op when the wrapper is unknown.
    pub fn move_wrapper(&mut self, wrapper: Id, at: usize) {
        if let Err(err) = self.try_move_wrapper(wrapper, at) {
            error!(wrapper:% = wrapper, err:err; "Wrapper move rejected");
        }
    }

    /// Validating variant of [`move_wrapper`](Self::move_wrapper).
    pub fn try_move_wrapper(&mut self, wrapper: Id, at: usize) -> Result<(), MutationError> {
        let Some(section_ids) = self.wrappers.shift_remove(&wrapper) else {
            return Err(MutationError::ReferenceNotFound {
                level: Level::Wrapper,
                id: wrapper,
            });
        };
        let index = at.min(self.wrappers.len());
        self.wrappers.shift_insert(index, wrapper, section_ids);
        trace!(wrapper:% = wrapper, at = index; "Moved wrapper");
        Ok(())
    }
}

// ========================================================================
// Shared sequence plumbing
// ========================================================================

/// Finds the parent whose child sequence holds `child`, with its position.
fn find_owner(map: &ChildMap, child: Id) -> Option<(Id, usize)> {
    map.iter().find_map(|(parent, children)| {
        children
            .iter()
            .position(|candidate| *candidate == child)
            .map(|index| (*parent, index))
    })
}

/// Inserts into a sequence, clamping past-the-end indices to an append.
fn insert_clamped(children: &mut Vec<Id>, child: Id, at: usize) {
    let index = at.min(children.len());
    children.insert(index, child);
}

/// Moves `child` between the child sequences of one level's map.
///
/// Destination first, then source; only after both resolve does anything
/// mutate. Serves block-in-column and section-in-wrapper moves alike.
fn move_child(
    map: &mut ChildMap,
    child_level: Level,
    parent_level: Level,
    child: Id,
    to_parent: Id,
    at: usize,
) -> Result<(), MutationError> {
    if !map.contains_key(&to_parent) {
        return Err(MutationError::ReferenceNotFound {
            level: parent_level,
            id: to_parent,
        });
    }
    let Some((from_parent, from_index)) = find_owner(map, child) else {
        return Err(MutationError::ReferenceNotFound {
            level: child_level,
            id: child,
        });
    };
    if let Some(children) = map.get_mut(&from_parent) {
        children.remove(from_index);
    }
    if let Some(children) = map.get_mut(&to_parent) {
        insert_clamped(children, child, at);
    }
    Ok(())
}
