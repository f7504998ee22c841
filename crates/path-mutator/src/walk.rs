//! The path walk shared by `update` and `remove`.
//!
//! The walk copies the input, resolves every intermediate segment and hands
//! the terminal location to a caller-supplied action. Errors drop the copy,
//! so callers never observe a half-mutated tree.

use crate::error::MutateError;
use crate::options::MutateOptions;
use crate::path::{ParsedSegment, PropertyPath};
use crate::tree::{Mapping, Sequence, Tree};

/// Whether missing structure along the path is created or treated as the end
/// of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Vivify {
    Create,
    Skip,
}

/// Where the terminal segment points.
pub(crate) enum Terminal<'a> {
    /// `map[name]`, for a segment without an index.
    Key { map: &'a mut Mapping, name: &'a str },
    /// `seq[index]`. In bounds under [`Vivify::Create`]; under [`Vivify::Skip`]
    /// the index may be past the end.
    Element { seq: &'a mut Sequence, index: usize },
}

pub(crate) fn walk<F>(
    tree: &Tree,
    property_path: &str,
    vivify: Vivify,
    options: &MutateOptions,
    action: F,
) -> Result<Tree, MutateError>
where
    F: FnOnce(Terminal<'_>) -> Result<(), MutateError>,
{
    let mut copy = tree.deep_copy()?;
    let path = PropertyPath::parse(property_path);
    if let Some(max) = options.max_index {
        check_indices(&path, max)?;
    }
    match vivify {
        Vivify::Create => walk_creating(&mut copy, &path, action)?,
        Vivify::Skip => walk_existing(&mut copy, &path, action)?,
    }
    Ok(copy)
}

fn check_indices(path: &PropertyPath, max: usize) -> Result<(), MutateError> {
    for segment in path.segments() {
        if let Some(index) = segment.index {
            if index > max {
                return Err(MutateError::IndexTooLarge {
                    segment: segment.to_string(),
                    index,
                    max,
                });
            }
        }
    }
    Ok(())
}

// ── Auto-vivifying walk ───────────────────────────────────────────────────

fn walk_creating<F>(root: &mut Tree, path: &PropertyPath, action: F) -> Result<(), MutateError>
where
    F: FnOnce(Terminal<'_>) -> Result<(), MutateError>,
{
    let (terminal, intermediate) = path.split_last();
    let mut target = root;
    for segment in intermediate {
        target = vivify_child(target, segment)?;
    }
    let map = target
        .as_mapping_mut()
        .map_err(|e| MutateError::mismatch(terminal, e))?;
    match terminal.index {
        None => {
            // Superseded by the action.
            vivify_key(map, &terminal.name, Tree::empty_mapping);
            action(Terminal::Key {
                map,
                name: &terminal.name,
            })
        }
        Some(index) => {
            let seq = vivify_sequence(map, terminal)?;
            vivify_slot(seq, terminal, index)?;
            action(Terminal::Element { seq, index })
        }
    }
}

fn vivify_child<'t>(
    target: &'t mut Tree,
    segment: &ParsedSegment,
) -> Result<&'t mut Tree, MutateError> {
    let map = target
        .as_mapping_mut()
        .map_err(|e| MutateError::mismatch(segment, e))?;
    match segment.index {
        None => Ok(vivify_key(map, &segment.name, Tree::empty_mapping)),
        Some(index) => {
            let seq = vivify_sequence(map, segment)?;
            vivify_slot(seq, segment, index)
        }
    }
}

/// `map[name]`, replaced by `empty()` first if it is falsy or missing.
fn vivify_key<'t>(map: &'t mut Mapping, name: &str, empty: fn() -> Tree) -> &'t mut Tree {
    let slot = map.entry(name.to_string()).or_insert(Tree::Undefined);
    if slot.is_falsy() {
        *slot = empty();
    }
    slot
}

fn vivify_sequence<'t>(
    map: &'t mut Mapping,
    segment: &ParsedSegment,
) -> Result<&'t mut Sequence, MutateError> {
    vivify_key(map, &segment.name, Tree::empty_sequence)
        .as_sequence_mut()
        .map_err(|e| MutateError::mismatch(segment, e))
}

/// `seq[index]`, padding with holes up to `index` and replacing a falsy slot
/// with an empty mapping.
fn vivify_slot<'t>(
    seq: &'t mut Sequence,
    segment: &ParsedSegment,
    index: usize,
) -> Result<&'t mut Tree, MutateError> {
    if seq.len() <= index {
        pad_with_holes(seq, index).ok_or_else(|| MutateError::CapacityOverflow {
            segment: segment.to_string(),
            index,
        })?;
    }
    let slot = &mut seq[index];
    if slot.is_falsy() {
        *slot = Tree::empty_mapping();
    }
    Ok(slot)
}

/// Grow `seq` to `index + 1` elements. `None` if that many cannot be
/// allocated.
fn pad_with_holes(seq: &mut Sequence, index: usize) -> Option<()> {
    let len = index.checked_add(1)?;
    seq.try_reserve_exact(len - seq.len()).ok()?;
    seq.resize(len, Tree::Undefined);
    Some(())
}

// ── Lookup-only walk ──────────────────────────────────────────────────────

fn walk_existing<F>(root: &mut Tree, path: &PropertyPath, action: F) -> Result<(), MutateError>
where
    F: FnOnce(Terminal<'_>) -> Result<(), MutateError>,
{
    let (terminal, intermediate) = path.split_last();
    let mut target = root;
    for segment in intermediate {
        target = match existing_child(target, segment)? {
            Some(child) => child,
            None => return Ok(()),
        };
    }
    if target.is_falsy() {
        return Ok(());
    }
    let map = target
        .as_mapping_mut()
        .map_err(|e| MutateError::mismatch(terminal, e))?;
    match terminal.index {
        None => action(Terminal::Key {
            map,
            name: &terminal.name,
        }),
        Some(index) => {
            let Some(found) = map.get_mut(&terminal.name) else {
                return Ok(());
            };
            if found.is_falsy() {
                return Ok(());
            }
            let seq = found
                .as_sequence_mut()
                .map_err(|e| MutateError::mismatch(terminal, e))?;
            action(Terminal::Element { seq, index })
        }
    }
}

/// The child a segment names, or `None` if any part of it is missing or
/// falsy.
fn existing_child<'t>(
    target: &'t mut Tree,
    segment: &ParsedSegment,
) -> Result<Option<&'t mut Tree>, MutateError> {
    let map = target
        .as_mapping_mut()
        .map_err(|e| MutateError::mismatch(segment, e))?;
    let Some(child) = map.get_mut(&segment.name) else {
        return Ok(None);
    };
    if child.is_falsy() {
        return Ok(None);
    }
    let child = match segment.index {
        None => child,
        Some(index) => {
            let seq = child
                .as_sequence_mut()
                .map_err(|e| MutateError::mismatch(segment, e))?;
            match seq.get_mut(index) {
                Some(slot) => slot,
                None => return Ok(None),
            }
        }
    };
    if child.is_falsy() {
        Ok(None)
    } else {
        Ok(Some(child))
    }
}
