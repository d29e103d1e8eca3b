//! A generation-checked slot arena.
//!
//! Node storage for [`DirectedGraph`](crate::DirectedGraph). Slots are reused
//! through an intrusive free list; every reuse bumps the slot's generation, so
//! any handle minted for the old occupant stops resolving in O(1). Handles are
//! therefore safe to hold across arbitrary mutation: they resolve to the node
//! they were created for, or to nothing.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | \(O(1)\) amortized | Pops the free list or appends a slot |
//! | `remove` | \(O(1)\) | Vacates the slot, bumps its generation |
//! | `get` / `get_mut` | \(O(1)\) | Single bounds + generation check |
//! | `clear` | \(O(n)\) | Vacates every slot, keeps capacity |

/// A stable, generation-checked reference to an arena slot.
///
/// Copyable and order-independent: a handle stays valid while its node is in
/// the graph, regardless of how many other nodes are inserted or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    slot: u32,
    generation: u32,
}

impl NodeHandle {
    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.slot as usize
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<u32> },
}

impl<T> Slot<T> {
    fn generation(&self) -> u32 {
        match self {
            Self::Occupied { generation, .. } | Self::Vacant { generation, .. } => *generation,
        }
    }
}

/// A slot arena with generation-checked handles.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `value` and returns a handle that resolves to it.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` slots would be required.
    pub(crate) fn insert(&mut self, value: T) -> NodeHandle {
        self.len += 1;
        if let Some(idx) = self.free_head {
            let slot = &mut self.slots[idx as usize];
            let generation = slot.generation();
            match *slot {
                Slot::Vacant { next_free, .. } => self.free_head = next_free,
                Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            }
            *slot = Slot::Occupied { generation, value };
            NodeHandle {
                slot: idx,
                generation,
            }
        } else {
            let idx = u32::try_from(self.slots.len()).expect("arena slot count exceeds u32");
            self.slots.push(Slot::Occupied {
                generation: 0,
                value,
            });
            NodeHandle {
                slot: idx,
                generation: 0,
            }
        }
    }

    /// Vacates the slot behind `handle` and returns its value.
    ///
    /// The slot's generation is bumped, so `handle` (and every copy of it)
    /// stops resolving. Returns `None` if `handle` is already stale.
    pub(crate) fn remove(&mut self, handle: NodeHandle) -> Option<T> {
        let slot = self.slots.get_mut(handle.slot())?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == handle.generation => {
                let vacant = Slot::Vacant {
                    generation: handle.generation.wrapping_add(1),
                    next_free: self.free_head,
                };
                let Slot::Occupied { value, .. } = std::mem::replace(slot, vacant) else {
                    unreachable!()
                };
                self.free_head = Some(handle.slot);
                self.len -= 1;
                Some(value)
            }
            _ => None,
        }
    }

    /// Resolves `handle`, or `None` if its node has been removed.
    #[inline]
    pub(crate) fn get(&self, handle: NodeHandle) -> Option<&T> {
        match self.slots.get(handle.slot()) {
            Some(Slot::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        match self.slots.get_mut(handle.slot()) {
            Some(Slot::Occupied { generation, value }) if *generation == handle.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, handle: NodeHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Vacates every occupied slot, bumping its generation.
    ///
    /// Capacity is retained and the free list rebuilt, so handles minted
    /// before the clear can never alias nodes inserted after it.
    pub(crate) fn clear(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if let Slot::Occupied { generation, .. } = slot {
                *slot = Slot::Vacant {
                    generation: generation.wrapping_add(1),
                    next_free: self.free_head,
                };
                self.free_head = Some(idx as u32);
            }
        }
        self.len = 0;
    }
}
