//! Two-slot double buffer for the U/V field pair.
//!
//! [`DoubleBuffer`] holds exactly two [`FieldSlot`]s that alternate between
//! "published" (readable) and "staging" (writable) roles. On
//! [`DoubleBuffer::publish`], the staging slot becomes published and the old
//! published slot becomes the next staging slot.
//!
//! The lifecycle per sub-step is:
//! 1. `split()`: borrow published (read) and staging (write) together
//! 2. the sweep overwrites every cell of the staging slot
//! 3. `publish()`: flip the current tag, advance the generation
//!
//! Skipping step 3 abandons the staging slot; the published slot is
//! untouched, which is how a failed sub-step leaves the last good state
//! readable.

use ripple_core::Grid;

/// One generation of the field pair.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSlot {
    u: Grid,
    v: Option<Grid>,
}

impl FieldSlot {
    /// U values.
    pub fn u(&self) -> &Grid {
        &self.u
    }

    /// V values, or `None` for single-field systems.
    pub fn v(&self) -> Option<&Grid> {
        self.v.as_ref()
    }

    /// Mutable U and V together, for writing a staging generation.
    pub fn fields_mut(&mut self) -> (&mut Grid, Option<&mut Grid>) {
        (&mut self.u, self.v.as_mut())
    }
}

/// Exactly two generations of the field pair, selected by a current tag.
#[derive(Debug)]
pub struct DoubleBuffer {
    slots: [FieldSlot; 2],
    current: usize,
    generation: u64,
}

impl DoubleBuffer {
    /// Seed both slots with the initial condition, at generation 0.
    pub fn new(u: Grid, v: Option<Grid>) -> Self {
        let initial = FieldSlot { u, v };
        Self {
            slots: [initial.clone(), initial],
            current: 0,
            generation: 0,
        }
    }

    /// The published generation.
    pub fn current(&self) -> &FieldSlot {
        &self.slots[self.current]
    }

    /// Borrow the published slot for reading and the staging slot for writing.
    pub fn split(&mut self) -> (&FieldSlot, &mut FieldSlot) {
        let (a, b) = self.slots.split_at_mut(1);
        if self.current == 0 {
            (&a[0], &mut b[0])
        } else {
            (&b[0], &mut a[0])
        }
    }

    /// Make the staging slot the published generation.
    pub fn publish(&mut self) {
        self.current ^= 1;
        self.generation += 1;
    }

    /// Number of generations published since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> DoubleBuffer {
        DoubleBuffer::new(
            Grid::filled(2, 2, 1.0).unwrap(),
            Some(Grid::filled(2, 2, 2.0).unwrap()),
        )
    }

    #[test]
    fn both_slots_start_with_initial_condition() {
        let mut buf = buffer();
        assert_eq!(buf.generation(), 0);
        let (published, staging) = buf.split();
        assert_eq!(published, &*staging);
        assert_eq!(published.u().get(0, 0), 1.0);
        assert_eq!(published.v().unwrap().get(0, 0), 2.0);
    }

    #[test]
    fn publish_swaps_roles() {
        let mut buf = buffer();
        {
            let (_, staging) = buf.split();
            let (u, v) = staging.fields_mut();
            u.fill(5.0);
            v.unwrap().fill(6.0);
        }
        assert_eq!(buf.current().u().get(0, 0), 1.0);
        buf.publish();
        assert_eq!(buf.generation(), 1);
        assert_eq!(buf.current().u().get(0, 0), 5.0);
        assert_eq!(buf.current().v().unwrap().get(1, 1), 6.0);

        // The old published slot is now staging.
        let (_, staging) = buf.split();
        assert_eq!(staging.u().get(0, 0), 1.0);
    }

    #[test]
    fn abandoned_staging_leaves_published_intact() {
        let mut buf = buffer();
        {
            let (_, staging) = buf.split();
            staging.fields_mut().0.fill(f64::NAN);
        }
        assert_eq!(buf.generation(), 0);
        assert!(buf.current().u().as_slice().iter().all(|v| *v == 1.0));
    }

    #[test]
    fn two_publishes_return_to_first_slot() {
        let mut buf = DoubleBuffer::new(Grid::new(1, 1).unwrap(), None);
        buf.split().1.fields_mut().0.fill(1.0);
        buf.publish();
        buf.split().1.fields_mut().0.fill(2.0);
        buf.publish();
        assert_eq!(buf.generation(), 2);
        assert_eq!(buf.current().u().get(0, 0), 2.0);
        assert!(buf.current().v().is_none());
    }
}
