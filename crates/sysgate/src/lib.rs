//! Raw Linux system call interface.
//!
//! Everything above this crate reaches the kernel through the seven
//! trampolines defined here, [`syscall0`] through [`syscall6`], one per
//! argument count. Each places the syscall number and its arguments in the
//! registers the kernel entry ABI fixes for the target architecture,
//! executes the trap instruction, and hands back the raw result-register
//! word. Nothing is validated, interpreted, or retried at this layer.
//!
//! [`decode`] sits one layer up: it splits the raw word into `Ok(value)` or
//! `Err(Errno)` using the reserved band `[-4095, -1]` the kernel returns
//! error codes in.
//!
//! # Register conventions
//!
//! | Architecture | Trap      | Number | Args 1..6               | Result | Clobbered  |
//! |--------------|-----------|--------|-------------------------|--------|------------|
//! | x86-64       | `syscall` | `rax`  | `rdi rsi rdx r10 r8 r9` | `rax`  | `rcx r11`  |
//! | AArch64      | `svc #0`  | `x8`   | `x0 x1 x2 x3 x4 x5`     | `x0`   | —          |
//! | RISC-V 64    | `ecall`   | `a7`   | `a0 a1 a2 a3 a4 a5`     | `a0`   | —          |
//!
//! The mapping from argument position to register is part of the kernel ABI;
//! getting it wrong is undefined behavior, not a recoverable error. Syscall
//! numbers are architecture-specific and are the caller's concern.
//!
//! # Example
//!
//! ```
//! # #[cfg(all(target_os = "linux", target_arch = "x86_64"))] {
//! // getpid(2) takes no arguments and cannot fail.
//! const SYS_GETPID: usize = 39;
//! let pid = sysgate::decode(unsafe { sysgate::syscall0(SYS_GETPID) }).unwrap();
//! assert!(pid > 0);
//! # }
//! ```

#![no_std]

mod arch;
mod errno;

pub use arch::{syscall0, syscall1, syscall2, syscall3, syscall4, syscall5, syscall6};
pub use errno::{Errno, Result, decode};

/// Invoke a syscall, selecting the trampoline that matches the argument
/// count.
///
/// Expands to a call to [`syscall0`]..[`syscall6`]; no casting, no
/// validation. The expansion is an unsafe call and must appear inside an
/// `unsafe` block, under the same contract as the trampolines themselves.
///
/// ```
/// # #[cfg(all(target_os = "linux", target_arch = "x86_64"))] {
/// const SYS_GETPID: usize = 39;
/// let raw = unsafe { sysgate::syscall!(SYS_GETPID) };
/// assert!(sysgate::decode(raw).is_ok());
/// # }
/// ```
#[macro_export]
macro_rules! syscall {
    ($nr:expr) => {
        $crate::syscall0($nr)
    };
    ($nr:expr, $a1:expr) => {
        $crate::syscall1($nr, $a1)
    };
    ($nr:expr, $a1:expr, $a2:expr) => {
        $crate::syscall2($nr, $a1, $a2)
    };
    ($nr:expr, $a1:expr, $a2:expr, $a3:expr) => {
        $crate::syscall3($nr, $a1, $a2, $a3)
    };
    ($nr:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr) => {
        $crate::syscall4($nr, $a1, $a2, $a3, $a4)
    };
    ($nr:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr) => {
        $crate::syscall5($nr, $a1, $a2, $a3, $a4, $a5)
    };
    ($nr:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr) => {
        $crate::syscall6($nr, $a1, $a2, $a3, $a4, $a5, $a6)
    };
}
