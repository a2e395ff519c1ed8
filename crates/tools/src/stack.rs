// Deeply nested trees and deep recursion in evaluated programs would overflow
// the native stack. Recursive paths go through here so the stack grows on demand

// Below this much remaining stack, a new segment is allocated
const RED_ZONE: usize = 100 * 1024;

// Size of each new segment
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
