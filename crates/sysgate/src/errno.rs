//! Decoding of raw trampoline results.
//!
//! The kernel reports failure by returning a word in the reserved band
//! `[-4095, -1]`; everything outside it is success, including large `mmap`
//! addresses that are negative as signed integers. [`decode`] splits the raw
//! word accordingly. The trampolines never do this themselves: they mirror
//! the kernel ABI bit-for-bit and leave interpretation to this layer.

use thiserror::Error;

/// Highest word that is still a success value.
///
/// `-4096` as an unsigned word; every result strictly above it is a kernel
/// error code.
const ERROR_BAND_FLOOR: usize = usize::MAX - 4095;

/// Error code returned by the kernel.
///
/// The named variants are the generic Linux codes 1 through 40, which the
/// x86-64, AArch64, and RISC-V ABIs share verbatim. Any other code in the
/// reserved band round-trips through [`Errno::Other`]. The mapping from a
/// failed operation to the code it produces belongs to the caller that chose
/// the syscall number.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    /// EPERM
    #[error("operation not permitted")]
    Perm,
    /// ENOENT
    #[error("no such file or directory")]
    NoEnt,
    /// ESRCH
    #[error("no such process")]
    Srch,
    /// EINTR
    #[error("interrupted system call")]
    Intr,
    /// EIO
    #[error("input/output error")]
    Io,
    /// ENXIO
    #[error("no such device or address")]
    NxIo,
    /// E2BIG
    #[error("argument list too long")]
    TooBig,
    /// ENOEXEC
    #[error("exec format error")]
    NoExec,
    /// EBADF
    #[error("bad file descriptor")]
    BadFd,
    /// ECHILD
    #[error("no child processes")]
    Child,
    /// EAGAIN
    #[error("resource temporarily unavailable")]
    Again,
    /// ENOMEM
    #[error("cannot allocate memory")]
    NoMem,
    /// EACCES
    #[error("permission denied")]
    Access,
    /// EFAULT
    #[error("bad address")]
    Fault,
    /// ENOTBLK
    #[error("block device required")]
    NotBlk,
    /// EBUSY
    #[error("device or resource busy")]
    Busy,
    /// EEXIST
    #[error("file exists")]
    Exist,
    /// EXDEV
    #[error("invalid cross-device link")]
    XDev,
    /// ENODEV
    #[error("no such device")]
    NoDev,
    /// ENOTDIR
    #[error("not a directory")]
    NotDir,
    /// EISDIR
    #[error("is a directory")]
    IsDir,
    /// EINVAL
    #[error("invalid argument")]
    Inval,
    /// ENFILE
    #[error("too many open files in system")]
    NFile,
    /// EMFILE
    #[error("too many open files")]
    MFile,
    /// ENOTTY
    #[error("inappropriate ioctl for device")]
    NotTty,
    /// ETXTBSY
    #[error("text file busy")]
    TxtBusy,
    /// EFBIG
    #[error("file too large")]
    FBig,
    /// ENOSPC
    #[error("no space left on device")]
    NoSpace,
    /// ESPIPE
    #[error("illegal seek")]
    SeekPipe,
    /// EROFS
    #[error("read-only file system")]
    RoFs,
    /// EMLINK
    #[error("too many links")]
    MLink,
    /// EPIPE
    #[error("broken pipe")]
    Pipe,
    /// EDOM
    #[error("numerical argument out of domain")]
    Dom,
    /// ERANGE
    #[error("numerical result out of range")]
    Range,
    /// EDEADLK
    #[error("resource deadlock avoided")]
    DeadLock,
    /// ENAMETOOLONG
    #[error("file name too long")]
    NameTooLong,
    /// ENOLCK
    #[error("no locks available")]
    NoLock,
    /// ENOSYS
    #[error("function not implemented")]
    NoSys,
    /// ENOTEMPTY
    #[error("directory not empty")]
    NotEmpty,
    /// ELOOP
    #[error("too many levels of symbolic links")]
    Loop,
    /// Any code outside the named set.
    #[error("errno {0}")]
    Other(i32),
}

impl Errno {
    /// Build an `Errno` from the positive kernel code.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        match code {
            1 => Self::Perm,
            2 => Self::NoEnt,
            3 => Self::Srch,
            4 => Self::Intr,
            5 => Self::Io,
            6 => Self::NxIo,
            7 => Self::TooBig,
            8 => Self::NoExec,
            9 => Self::BadFd,
            10 => Self::Child,
            11 => Self::Again,
            12 => Self::NoMem,
            13 => Self::Access,
            14 => Self::Fault,
            15 => Self::NotBlk,
            16 => Self::Busy,
            17 => Self::Exist,
            18 => Self::XDev,
            19 => Self::NoDev,
            20 => Self::NotDir,
            21 => Self::IsDir,
            22 => Self::Inval,
            23 => Self::NFile,
            24 => Self::MFile,
            25 => Self::NotTty,
            26 => Self::TxtBusy,
            27 => Self::FBig,
            28 => Self::NoSpace,
            29 => Self::SeekPipe,
            30 => Self::RoFs,
            31 => Self::MLink,
            32 => Self::Pipe,
            33 => Self::Dom,
            34 => Self::Range,
            35 => Self::DeadLock,
            36 => Self::NameTooLong,
            37 => Self::NoLock,
            38 => Self::NoSys,
            39 => Self::NotEmpty,
            40 => Self::Loop,
            other => Self::Other(other),
        }
    }

    /// The positive kernel code for this error.
    #[must_use]
    pub const fn into_raw(self) -> i32 {
        match self {
            Self::Perm => 1,
            Self::NoEnt => 2,
            Self::Srch => 3,
            Self::Intr => 4,
            Self::Io => 5,
            Self::NxIo => 6,
            Self::TooBig => 7,
            Self::NoExec => 8,
            Self::BadFd => 9,
            Self::Child => 10,
            Self::Again => 11,
            Self::NoMem => 12,
            Self::Access => 13,
            Self::Fault => 14,
            Self::NotBlk => 15,
            Self::Busy => 16,
            Self::Exist => 17,
            Self::XDev => 18,
            Self::NoDev => 19,
            Self::NotDir => 20,
            Self::IsDir => 21,
            Self::Inval => 22,
            Self::NFile => 23,
            Self::MFile => 24,
            Self::NotTty => 25,
            Self::TxtBusy => 26,
            Self::FBig => 27,
            Self::NoSpace => 28,
            Self::SeekPipe => 29,
            Self::RoFs => 30,
            Self::MLink => 31,
            Self::Pipe => 32,
            Self::Dom => 33,
            Self::Range => 34,
            Self::DeadLock => 35,
            Self::NameTooLong => 36,
            Self::NoLock => 37,
            Self::NoSys => 38,
            Self::NotEmpty => 39,
            Self::Loop => 40,
            Self::Other(code) => code,
        }
    }
}

pub type Result<T> = core::result::Result<T, Errno>;

/// Split a raw trampoline result into success or failure.
///
/// Every word outside the reserved band passes through unchanged as `Ok`.
///
/// # Errors
///
/// Words in the reserved band `[-4095, -1]` become `Err` carrying the
/// negated code.
#[allow(clippy::cast_possible_truncation)]
pub const fn decode(raw: usize) -> Result<usize> {
    if raw > ERROR_BAND_FLOOR {
        // The band bound guarantees the negated code is in 1..=4095.
        Err(Errno::from_raw(raw.wrapping_neg() as i32))
    } else {
        Ok(raw)
    }
}
