use alloc::boxed::Box;
use alloc::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr;

/// A node in the recency list.
///
/// Contains a value and pointers to the previous and next nodes. Cache entries
/// hold a raw pointer to their node so they can be relinked without a scan.
pub struct Entry<T> {
    /// The value stored in this node. Uses MaybeUninit to allow for sigil nodes.
    val: mem::MaybeUninit<T>,
    /// Pointer to the previous node in the list.
    prev: *mut Entry<T>,
    /// Pointer to the next node in the list.
    next: *mut Entry<T>,
}

impl<T> Entry<T> {
    fn new(val: T) -> Self {
        Entry {
            val: mem::MaybeUninit::new(val),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Creates a new sigil (sentinel) node without initializing the value.
    ///
    /// Sigil nodes are used as head and tail markers in the list.
    fn new_sigil() -> Self {
        Entry {
            val: mem::MaybeUninit::uninit(),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Returns a reference to the value stored in this node.
    ///
    /// # Safety
    ///
    /// The value must be initialized, i.e. this must not be a sigil node.
    pub unsafe fn get_value(&self) -> &T {
        // SAFETY: caller guarantees this is not a sigil node.
        unsafe { self.val.assume_init_ref() }
    }
}

/// An unbounded doubly linked list ordered from most recently used (front)
/// to least recently used (back).
///
/// The list uses sentinel nodes (sigils) at the head and tail so that linking
/// and unlinking never has to special-case the ends. Capacity is enforced by
/// the owning cache, which may push one node past its bound before evicting.
pub struct List<T> {
    /// Current number of items in the list.
    len: usize,
    /// Pointer to the head sentinel node.
    head: *mut Entry<T>,
    /// Pointer to the tail sentinel node.
    tail: *mut Entry<T>,
}

impl<T> List<T> {
    /// Creates an empty list with linked sentinels.
    pub fn new() -> List<T> {
        let head = Box::into_raw(Box::new(Entry::new_sigil()));
        let tail = Box::into_raw(Box::new(Entry::new_sigil()));

        let list = List { len: 0, head, tail };

        // SAFETY: head and tail are newly allocated and valid pointers
        unsafe {
            (*list.head).next = list.tail;
            (*list.tail).prev = list.head;
        }

        list
    }

    /// Returns the current number of items in the list.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes a value to the front of the list and returns a handle to its node.
    ///
    /// The handle stays valid until the node is removed or the list is dropped.
    pub fn push_front(&mut self, v: T) -> *mut Entry<T> {
        let node = Box::into_raw(Box::new(Entry::new(v)));
        // SAFETY: node is a newly allocated entry that is not part of any list yet
        unsafe { self.attach(node) };
        self.len += 1;
        node
    }

    /// Removes the last (least recently used) item and returns its value.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: head and tail are valid sentinels and the list is not empty,
        // so tail.prev is a real node.
        let prev = unsafe { (*self.tail).prev };
        // SAFETY: prev is a real node of this list.
        unsafe { self.remove(prev) }
    }

    /// Unlinks `node`, frees it and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must be a non-sigil node currently linked into this list.
    pub unsafe fn remove(&mut self, node: *mut Entry<T>) -> Option<T> {
        if self.is_empty() || node.is_null() || node == self.head || node == self.tail {
            return None;
        }

        // SAFETY: caller guarantees node belongs to this list.
        unsafe { self.detach(node) };
        self.len -= 1;

        // SAFETY: node was allocated by push_front via Box and is now unlinked.
        // The value is initialized and is read out exactly once; the box then
        // frees the node without dropping the MaybeUninit payload again.
        let boxed = unsafe { Box::from_raw(node) };
        Some(unsafe { boxed.val.assume_init_read() })
    }

    /// Moves a node to the front of the list (after the head sentinel).
    ///
    /// # Safety
    ///
    /// `node` must point to a valid node in this list.
    pub unsafe fn move_to_front(&mut self, node: *mut Entry<T>) {
        if node.is_null() || node == self.head || node == self.tail {
            return;
        }

        // SAFETY: head is valid; caller guarantees node belongs to this list.
        unsafe {
            if (*self.head).next == node {
                return;
            }
            self.detach(node);
            self.attach(node);
        }
    }

    /// Returns the value at the front of the list.
    #[cfg(test)]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty so head.next is a real node.
        unsafe { Some((*(*self.head).next).get_value()) }
    }

    /// Returns the value at the back of the list.
    #[cfg(test)]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty so tail.prev is a real node.
        unsafe { Some((*(*self.tail).prev).get_value()) }
    }

    /// Iterates over values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            // SAFETY: head is a valid sentinel for the lifetime of the list.
            next: unsafe { (*self.head).next },
            tail: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Unlinks a node from its neighbours without deallocating it.
    ///
    /// # Safety
    ///
    /// `node` must be a valid, linked, non-sigil node of this list.
    unsafe fn detach(&mut self, node: *mut Entry<T>) {
        // SAFETY: node is linked, so its prev and next are valid nodes.
        unsafe {
            (*(*node).prev).next = (*node).next;
            (*(*node).next).prev = (*node).prev;
        }
    }

    /// Links a node right after the head sentinel.
    ///
    /// # Safety
    ///
    /// `node` must be valid and not currently linked into the list.
    unsafe fn attach(&mut self, node: *mut Entry<T>) {
        // SAFETY: head is a valid sentinel; caller guarantees node is valid.
        unsafe {
            (*node).next = (*self.head).next;
            (*node).prev = self.head;
            (*self.head).next = node;
            (*(*node).next).prev = node;
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        while self.remove_last().is_some() {}

        // SAFETY: head and tail were allocated in `new` and are freed only here.
        unsafe {
            drop(Box::from_raw(self.head));
            drop(Box::from_raw(self.tail));
        }
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List").field("length", &self.len).finish()
    }
}

/// Borrowing iterator over a [`List`], front to back.
pub struct Iter<'a, T> {
    next: *mut Entry<T>,
    tail: *mut Entry<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.next == self.tail || self.remaining == 0 {
            return None;
        }
        // SAFETY: next is a real node between the sentinels, and the list is
        // borrowed immutably for 'a so no node is freed or relinked meanwhile.
        unsafe {
            let node = &*self.next;
            self.next = node.next;
            self.remaining -= 1;
            Some(node.get_value())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
