use num_traits::{NumCast, PrimInt, ToPrimitive};
use std::hash::Hash;
use std::marker::PhantomData;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Default)]
/// A valid node index.
/// The raw integer type is generic, such that graphs can choose a smaller type than `usize` to store their adjacency lists.
pub struct NodeIndex<IndexType: Sized>(IndexType);

/// A valid graph index.
pub trait GraphIndex:
    std::fmt::Debug
    + std::fmt::Display
    + Eq
    + Ord
    + Hash
    + Copy
    + Sized
    + From<usize>
    + std::ops::Add<usize, Output = Self>
{
    // We don't wanna have GraphIndex: Into<usize>, to make this type strong, i.e. make it hard to accidentally convert it to a different type.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;

    /// The maximum amount of nodes a graph with this index type can hold.
    fn max_node_count() -> usize;
}

impl<IndexType: PrimInt + Hash> GraphIndex for NodeIndex<IndexType> {
    fn as_usize(self) -> usize {
        <usize as NumCast>::from(self.0).expect("node index does not fit into usize")
    }

    fn max_node_count() -> usize {
        // The maximum value of the index type is reserved.
        IndexType::max_value().to_usize().unwrap_or(usize::MAX)
    }
}

impl<IndexType: PrimInt> From<usize> for NodeIndex<IndexType> {
    fn from(source: usize) -> Self {
        let source = <IndexType as NumCast>::from(source)
            .expect("node index does not fit into the index type of the graph");
        debug_assert!(source != IndexType::max_value());
        Self(source)
    }
}

impl<IndexType: PrimInt + Hash> std::fmt::Debug for NodeIndex<IndexType> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

impl<IndexType: PrimInt + Hash> std::fmt::Display for NodeIndex<IndexType> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

impl<IndexType: PrimInt + Hash> std::ops::Add<usize> for NodeIndex<IndexType> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self::from(self.as_usize() + rhs)
    }
}

impl<T, IndexType: PrimInt + Hash> std::ops::Index<NodeIndex<IndexType>> for Vec<T> {
    type Output = T;

    fn index(&self, index: NodeIndex<IndexType>) -> &Self::Output {
        &self[index.as_usize()]
    }
}

impl<T, IndexType: PrimInt + Hash> std::ops::IndexMut<NodeIndex<IndexType>> for Vec<T> {
    fn index_mut(&mut self, index: NodeIndex<IndexType>) -> &mut Self::Output {
        &mut self[index.as_usize()]
    }
}

/// An iterator over a consecutive sequence of graph indices.
pub struct GraphIndices<IndexType> {
    start: usize,
    end: usize,
    index_type: PhantomData<IndexType>,
}

impl<RawType: ToPrimitive, IndexType: GraphIndex> From<(RawType, RawType)>
    for GraphIndices<IndexType>
{
    fn from(raw: (RawType, RawType)) -> Self {
        Self {
            start: raw.0.to_usize().expect("index range start does not fit into usize"),
            end: raw.1.to_usize().expect("index range end does not fit into usize"),
            index_type: Default::default(),
        }
    }
}

impl<IndexType: GraphIndex> Iterator for GraphIndices<IndexType> {
    type Item = IndexType;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let result = Some(IndexType::from(self.start));
            self.start += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.start);
        (remaining, Some(remaining))
    }
}

impl<IndexType: GraphIndex> DoubleEndedIterator for GraphIndices<IndexType> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            Some(IndexType::from(self.end))
        } else {
            None
        }
    }
}

impl<IndexType: GraphIndex> ExactSizeIterator for GraphIndices<IndexType> {}
