//! # Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, and CLV all reduce to a single flag
//! assignment; the dispatcher names the flag and the target value.

use crate::cpu::{Status, CPU};
use crate::memory::MemoryBus;

/// Sets or clears one status flag.
pub(crate) fn set<M: MemoryBus>(cpu: &mut CPU<M>, flag: Status, value: bool) {
    cpu.set_flag(flag, value);
}
