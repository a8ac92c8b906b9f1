//! Architecture-specific syscall trampolines.
//!
//! One implementation per supported target, selected at build time. Every
//! module exposes the same seven functions; only the register assignments
//! and the trap instruction differ, and both are dictated by the kernel
//! entry ABI for that architecture.

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use aarch64::*;

#[cfg(target_arch = "riscv64")]
mod riscv64;
#[cfg(target_arch = "riscv64")]
pub use riscv64::*;

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv64"
)))]
compile_error!("sysgate has no syscall trampoline for this target architecture");
