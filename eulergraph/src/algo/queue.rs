use std::collections::VecDeque;

/// A double-ended queue of nodes.
/// Traversals pop from either end to act as queue or stack, and the Eulerian path construction pushes to either end to emit nodes.
pub trait BidirectedQueue<T>: Default {
    /// Insert an element at the front.
    fn push_front(&mut self, t: T);
    /// Insert an element at the back.
    fn push_back(&mut self, t: T);
    /// Remove and return the front element, or `None` if the queue is empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Remove and return the back element, or `None` if the queue is empty.
    fn pop_back(&mut self) -> Option<T>;
    /// Remove all elements.
    fn clear(&mut self);
    /// Returns true if the queue contains no elements.
    fn is_empty(&self) -> bool;
}

impl<T> BidirectedQueue<T> for VecDeque<T> {
    fn push_front(&mut self, t: T) {
        VecDeque::push_front(self, t)
    }

    fn push_back(&mut self, t: T) {
        VecDeque::push_back(self, t)
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}
