use shiftlog_types::{ActivityBlock, ShiftId};

use crate::error::BlockViolation;

/// Every block belongs to `shift_id` and the block at index `i` has
/// `sequence_order == i + 1`.
pub(crate) fn check(shift_id: ShiftId, blocks: &[ActivityBlock]) -> Vec<BlockViolation> {
    let mut violations = Vec::new();
    for (position, block) in blocks.iter().enumerate() {
        if block.shift_id != shift_id {
            violations.push(BlockViolation::ForeignBlock {
                sequence_order: block.sequence_order,
                owner: block.shift_id,
            });
        }
        let expected = position as u32 + 1;
        if block.sequence_order != expected {
            violations.push(BlockViolation::SequenceGap {
                position,
                expected,
                actual: block.sequence_order,
            });
        }
    }
    violations
}
