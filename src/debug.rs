//! Console output.  On bare metal this is the rv32emu Linux-style syscall
//! interface: `write` is 64 and `exit` is 93, number in a7, arguments in a0..a2.

use core::fmt::Write;

pub struct Console;

#[cfg(target_os = "none")]
const SYS_WRITE: usize = 64;
#[cfg(target_os = "none")]
const SYS_EXIT: usize = 93;
#[cfg(target_os = "none")]
const STDOUT: usize = 1;

#[cfg(target_os = "none")]
fn write_bytes(s: &[u8]) -> core::fmt::Result {
    let mut rest = s;
    while !rest.is_empty() {
        let mut a0 = STDOUT as isize;
        unsafe {
            core::arch::asm!(
                "ecall",
                inlateout("a0") a0,
                in("a1") rest.as_ptr(),
                in("a2") rest.len(),
                in("a7") SYS_WRITE,
                options(nostack, readonly));
        }
        // Short writes are possible; errors are not recoverable.
        if a0 <= 0 {
            return Err(core::fmt::Error);
        }
        rest = &rest[a0 as usize ..];
    }
    Ok(())
}

#[cfg(not(target_os = "none"))]
fn write_bytes(s: &[u8]) -> core::fmt::Result {
    use std::io::Write;
    std::io::stdout().write_all(s).map_err(|_| core::fmt::Error)
}

impl Write for Console {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        write_bytes(s.as_bytes())
    }
}

#[cfg(target_os = "none")]
pub fn exit(code: i32) -> ! {
    loop {
        unsafe {
            core::arch::asm!(
                "ecall",
                in("a0") code,
                in("a7") SYS_EXIT,
                options(nostack));
        }
    }
}

#[cfg(not(target_os = "none"))]
pub fn exit(code: i32) -> ! {
    let _ = std::io::Write::flush(&mut std::io::stdout());
    std::process::exit(code)
}

/// Console print without a newline.  Inside this crate it shadows the
/// prelude `dbg!`; from outside reach it as `rsqrt::dbg!`.
#[macro_export]
macro_rules! dbg {
    ($($tt:tt)*) => ({let _ = core::fmt::Write::write_fmt(
        &mut $crate::debug::Console, format_args!($($tt)*));});
}

#[macro_export]
macro_rules! dbgln {
    () => ({let _ = core::fmt::Write::write_str(
        &mut $crate::debug::Console, "\n");});
    ($($tt:tt)*) => ({let _ = core::fmt::Write::write_fmt(
        &mut $crate::debug::Console, core::format_args_nl!($($tt)*));});
}

#[cfg(target_os = "none")]
#[panic_handler]
fn ph(info: &core::panic::PanicInfo) -> ! {
    dbgln!("{info}");
    exit(101)
}

#[test]
fn console_writes() {
    assert!(write!(Console, "").is_ok());
    assert!(Console.write_str("console ok\n").is_ok());
    // The crate's macros, not std's: these evaluate to () rather than
    // returning their argument.
    let () = dbg!("dbg {} ", 1);
    let () = dbgln!("dbgln {}", 2);
    let () = dbgln!();
}
