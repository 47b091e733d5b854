//! Bare metal start-up for rv32emu.  There is no runtime: `_start` points
//! the stack at a static block, runs `main` and exits.

#[cfg(target_os = "none")]
const STACK_SIZE: usize = 16 * 1024;

#[cfg(target_os = "none")]
#[repr(C, align(16))]
struct Stack([u8; STACK_SIZE]);

#[cfg(target_os = "none")]
static mut STACK: Stack = Stack([0; STACK_SIZE]);

#[cfg(target_os = "none")]
core::arch::global_asm!(
    ".section .text._start, \"ax\"",
    ".global _start",
    "_start:",
    "    la sp, {stack} + {size}",
    "    call {reset}",
    stack = sym STACK,
    size = const STACK_SIZE,
    reset = sym reset);

#[cfg(target_os = "none")]
extern "C" fn reset() -> ! {
    super::main();
    rsqrt::debug::exit(0)
}
