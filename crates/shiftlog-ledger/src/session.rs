use serde::{Deserialize, Serialize};
use shiftlog_types::{LifecycleState, SafetyCheckItem, Shift, ShiftId};

/// Safety checklist toggles. Every item starts unchecked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyChecklist {
    checked: [bool; SafetyCheckItem::ALL.len()],
}

impl SafetyChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one item and return its new value.
    pub fn toggle(&mut self, item: SafetyCheckItem) -> bool {
        let slot = &mut self.checked[item.index()];
        *slot = !*slot;
        *slot
    }

    pub fn set(&mut self, item: SafetyCheckItem, checked: bool) {
        self.checked[item.index()] = checked;
    }

    pub fn is_checked(&self, item: SafetyCheckItem) -> bool {
        self.checked[item.index()]
    }

    pub fn is_complete(&self) -> bool {
        self.checked.iter().all(|checked| *checked)
    }

    /// Unchecked items in declaration order.
    pub fn missing(&self) -> Vec<SafetyCheckItem> {
        SafetyCheckItem::ALL
            .into_iter()
            .filter(|item| !self.is_checked(*item))
            .collect()
    }
}

/// Caller-owned lifecycle context for one shift.
///
/// Holds the shift record as last written, the lifecycle state and the
/// checklist being filled in. Only the [`Controller`](crate::Controller)
/// advances the state, and only after the corresponding store write succeeded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftSession {
    shift: Shift,
    state: LifecycleState,
    pub checklist: SafetyChecklist,
}

impl ShiftSession {
    pub(crate) fn new(shift: Shift, state: LifecycleState) -> Self {
        Self {
            shift,
            state,
            checklist: SafetyChecklist::new(),
        }
    }

    pub fn shift(&self) -> &Shift {
        &self.shift
    }

    pub fn shift_id(&self) -> ShiftId {
        self.shift.id
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub(crate) fn shift_mut(&mut self) -> &mut Shift {
        &mut self.shift
    }

    pub(crate) fn set_state(&mut self, state: LifecycleState) {
        self.state = state;
    }
}
