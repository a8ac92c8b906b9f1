//! Live-kernel tests for the syscall trampolines.
//!
//! These run against the host kernel, so they are gated to Linux targets.
//! The handful of syscall numbers they need is defined locally per
//! architecture; the full number-to-name table is not this crate's concern.

#![cfg(target_os = "linux")]

use sysgate::{Errno, decode, syscall0, syscall1, syscall2, syscall3, syscall4, syscall5, syscall6};

#[cfg(target_arch = "x86_64")]
mod nr {
    pub const READ: usize = 0;
    pub const WRITE: usize = 1;
    pub const CLOSE: usize = 3;
    pub const GETPID: usize = 39;
    pub const PIPE2: usize = 293;
}

#[cfg(any(target_arch = "aarch64", target_arch = "riscv64"))]
mod nr {
    pub const CLOSE: usize = 57;
    pub const PIPE2: usize = 59;
    pub const READ: usize = 63;
    pub const WRITE: usize = 64;
    pub const GETPID: usize = 172;
}

/// Far beyond any allocated syscall number on every supported architecture.
const BOGUS_NR: usize = 100_000_000;

fn getpid() -> usize {
    unsafe { syscall0(nr::GETPID) }
}

#[test]
fn getpid_is_strictly_positive() {
    let pid = decode(getpid()).expect("getpid cannot fail");
    assert!(pid > 0);
}

#[test]
fn pure_query_is_deterministic() {
    let first = getpid();
    for _ in 0..32 {
        assert_eq!(getpid(), first);
    }
}

#[test]
fn trailing_zero_arguments_do_not_change_the_result() {
    // getpid ignores every argument register, so each arity must agree.
    let n = nr::GETPID;
    let expected = unsafe { syscall0(n) };
    assert_eq!(unsafe { syscall1(n, 0) }, expected);
    assert_eq!(unsafe { syscall2(n, 0, 0) }, expected);
    assert_eq!(unsafe { syscall3(n, 0, 0, 0) }, expected);
    assert_eq!(unsafe { syscall4(n, 0, 0, 0, 0) }, expected);
    assert_eq!(unsafe { syscall5(n, 0, 0, 0, 0, 0) }, expected);
    assert_eq!(unsafe { syscall6(n, 0, 0, 0, 0, 0, 0) }, expected);
}

#[test]
fn unknown_syscall_reports_enosys() {
    let raw = unsafe { syscall0(BOGUS_NR) };
    assert_eq!(decode(raw), Err(Errno::NoSys));
    // A rejected number must not poison the next invocation.
    assert!(decode(getpid()).is_ok());
}

#[test]
fn max_arity_with_all_ones_does_not_leak_into_later_calls() {
    let pid = getpid();
    let loud = unsafe {
        syscall6(
            nr::GETPID,
            usize::MAX,
            usize::MAX,
            usize::MAX,
            usize::MAX,
            usize::MAX,
            usize::MAX,
        )
    };
    assert_eq!(loud, pid);
    assert_eq!(getpid(), pid);
}

#[test]
fn write_arguments_are_strictly_positional() {
    let mut fds = [0_i32; 2];
    decode(unsafe { syscall2(nr::PIPE2, fds.as_mut_ptr() as usize, 0) }).expect("pipe2");
    let rd = usize::try_from(fds[0]).unwrap();
    let wr = usize::try_from(fds[1]).unwrap();

    let msg = b"positional";
    let written = decode(unsafe { syscall3(nr::WRITE, wr, msg.as_ptr() as usize, msg.len()) })
        .expect("write");
    assert_eq!(written, msg.len());

    // Swapping descriptor and buffer turns the descriptor into a bogus
    // pointer and the pointer into a bogus descriptor; the kernel must
    // reject the request rather than write anything.
    let swapped = decode(unsafe { syscall3(nr::WRITE, msg.as_ptr() as usize, wr, msg.len()) });
    assert!(matches!(swapped, Err(Errno::BadFd | Errno::Fault)));

    let mut buf = [0_u8; 16];
    let read = decode(unsafe { syscall3(nr::READ, rd, buf.as_mut_ptr() as usize, buf.len()) })
        .expect("read");
    assert_eq!(&buf[..read], msg);

    let _ = unsafe { syscall1(nr::CLOSE, rd) };
    let _ = unsafe { syscall1(nr::CLOSE, wr) };
}

#[test]
fn macro_dispatches_on_arity() {
    let n = nr::GETPID;
    let expected = unsafe { syscall0(n) };
    assert_eq!(unsafe { sysgate::syscall!(n) }, expected);
    assert_eq!(unsafe { sysgate::syscall!(n, 0, 0, 0) }, expected);
    assert_eq!(unsafe { sysgate::syscall!(n, 0, 0, 0, 0, 0, 0) }, expected);
}

#[test]
fn errno_displays_its_strerror_text() {
    assert_eq!(Errno::NoSys.to_string(), "function not implemented");
    assert_eq!(Errno::Other(4095).to_string(), "errno 4095");
}
