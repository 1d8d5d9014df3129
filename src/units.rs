#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct ColumnIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

/// Size of a layout along the x axis, in the consumer's units (pixels usually).
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Width(pub f32);
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Height(pub f32);
