/// Options accepted by [`update_with`](crate::update_with) and
/// [`remove_with`](crate::remove_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutateOptions {
    /// If true, `remove` creates missing containers along the path before
    /// deleting, exactly as `update` does. If false, a missing path leaves
    /// the copy unchanged.
    pub vivify_on_remove: bool,
    /// Largest sequence index a path may address. `None` accepts any index
    /// the allocator can pad up to.
    pub max_index: Option<usize>,
}

impl Default for MutateOptions {
    fn default() -> Self {
        Self {
            vivify_on_remove: true,
            max_index: None,
        }
    }
}

impl MutateOptions {
    /// `remove` never creates anything.
    ///
    /// Missing keys, holes, indices past the end and falsy values (`null`,
    /// `false`, `0`, `""`) all end the walk without a change, the same values
    /// the default walk would replace with fresh containers.
    pub fn strict() -> Self {
        Self {
            vivify_on_remove: false,
            ..Self::default()
        }
    }
}
