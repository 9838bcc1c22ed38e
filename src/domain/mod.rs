/// How pruned rows are disposed of.
///
/// Selected per invocation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneMode {
    /// Physically remove the rows.
    Delete,
    /// Set `deleted = 1` and leave the rows in place for a later compaction.
    MarkDeleted,
}
