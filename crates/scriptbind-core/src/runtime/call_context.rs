//! Call context bridging the scripting runtime and native adapters.

use super::Dynamic;

/// Per-invocation view of the arguments a script supplied.
///
/// Positions are 1-indexed, following the scripting convention. A position
/// past the last supplied argument (or position 0) is a read failure, as is
/// a slot that is not coercible to the requested kind.
///
/// Any scripting runtime that wants to drive bridge adapters implements this
/// for its own call frame.
pub trait ArgumentSource {
    /// Number of arguments actually passed by the script.
    fn arg_count(&self) -> usize;

    /// Read the slot at `position` as a number.
    fn number(&self, position: usize) -> Option<f64>;

    /// Read the slot at `position` as text, borrowed for the call.
    fn text(&self, position: usize) -> Option<&str>;

    /// Runtime type name of the slot, for diagnostics.
    fn kind_name(&self, position: usize) -> &'static str;
}

/// Context for native function calls over a slice of [`Dynamic`] slots.
///
/// This is the call frame used by the in-process engine. It borrows the
/// caller's argument slots for the duration of one call.
#[derive(Debug, Clone, Copy)]
pub struct CallContext<'vm> {
    /// VM argument slots, 0-indexed internally
    slots: &'vm [Dynamic],
}

impl<'vm> CallContext<'vm> {
    /// Create a new call context over the argument slots.
    pub fn new(slots: &'vm [Dynamic]) -> Self {
        Self { slots }
    }

    /// Get a raw reference to the slot at a 1-indexed position.
    pub fn slot(&self, position: usize) -> Option<&'vm Dynamic> {
        self.slots.get(position.checked_sub(1)?)
    }
}

impl ArgumentSource for CallContext<'_> {
    fn arg_count(&self) -> usize {
        self.slots.len()
    }

    fn number(&self, position: usize) -> Option<f64> {
        self.slot(position)?.as_number()
    }

    fn text(&self, position: usize) -> Option<&str> {
        self.slot(position)?.as_text()
    }

    fn kind_name(&self, position: usize) -> &'static str {
        self.slot(position).map_or("none", Dynamic::type_name)
    }
}
