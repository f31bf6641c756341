//! Positional argument slots of a partial application.
//!
//! A node keeps one [`Slot`] per declared position. New arguments are merged
//! into the open slots strictly left to right: the k-th new argument lands in
//! the k-th slot that is still open, whether that slot was never touched or
//! was skipped earlier with a placeholder. A placeholder keeps its slot open.
//! Arguments past the last open slot become overflow and are handed to the
//! body after the positional values.

use std::num::NonZeroUsize;

use smallvec::SmallVec;

use super::Argument;
use crate::value::Value;

/// One declared argument position.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Slot {
    /// Not supplied yet.
    Vacant,
    /// Explicitly skipped with a placeholder.
    Deferred,
    /// Holds a concrete argument.
    Filled(Value),
}

impl Slot {
    pub(crate) const fn is_open(&self) -> bool {
        !matches!(self, Self::Filled(_))
    }
}

pub(crate) type Slots = SmallVec<[Slot; 4]>;

pub(crate) fn vacant(arity: NonZeroUsize) -> Slots {
    SmallVec::from_elem(Slot::Vacant, arity.get())
}

pub(crate) fn open_count(slots: &[Slot]) -> usize {
    slots.iter().filter(|slot| slot.is_open()).count()
}

/// Slot state after merging one call's arguments.
#[derive(Debug)]
pub(crate) struct Merged {
    pub(crate) slots: Slots,
    pub(crate) overflow: Vec<Value>,
}

/// Whether a merge saturated every position.
#[derive(Debug)]
pub(crate) enum Application {
    /// Every slot is filled: positional values followed by overflow.
    Ready(Vec<Value>),
    /// At least one slot is still open.
    Pending(Merged),
}

pub(crate) fn merge<I>(slots: &[Slot], overflow: &[Value], arguments: I) -> Merged
where
    I: IntoIterator<Item = Argument>,
{
    let mut merged: Slots = slots.iter().cloned().collect();
    let mut overflow = overflow.to_vec();
    {
        let mut open = merged.iter_mut().filter(|slot| slot.is_open());
        for argument in arguments {
            match (open.next(), argument) {
                (Some(slot), Argument::Value(value)) => *slot = Slot::Filled(value),
                (Some(slot), Argument::Placeholder) => *slot = Slot::Deferred,
                (None, Argument::Value(value)) => overflow.push(value),
                (None, Argument::Placeholder) => {}
            }
        }
    }
    Merged {
        slots: merged,
        overflow,
    }
}

impl Merged {
    pub(crate) fn remaining(&self) -> usize {
        open_count(&self.slots)
    }

    pub(crate) fn saturate(self) -> Application {
        if self.slots.iter().any(Slot::is_open) {
            return Application::Pending(self);
        }
        let mut values: Vec<Value> = self
            .slots
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Filled(value) => Some(value),
                Slot::Vacant | Slot::Deferred => None,
            })
            .collect();
        values.extend(self.overflow);
        Application::Ready(values)
    }
}
