//! This module provides utilities to make bot types cross the `wasm`
//! boundary: plain integer codes out, diagnostic text through a host import.

use std::io::{self, Write};

use anyhow::{anyhow, Error};
use strum::IntoEnumIterator;

use crate::world::Move;

/// Returned by entry points that cannot fail.
pub const STATUS_OK: i32 = 0;

/// Reported by `examine` while no move has been decided yet.
pub const NO_MOVE: i32 = -1;

impl From<Move> for i32 {
    fn from(chosen: Move) -> Self {
        chosen as i32
    }
}

impl TryFrom<i32> for Move {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Error> {
        Move::iter()
            .find(|m| *m as i32 == raw)
            .ok_or_else(|| anyhow!("{} is not a valid move code", raw))
    }
}

pub fn encode_examined(current: Option<Move>) -> i32 {
    current.map(i32::from).unwrap_or(NO_MOVE)
}

/// Diagnostics sink for bots running inside the host. A plain browser target
/// has no stdout, so text goes through the `__print` import instead, as UTF-8
/// bytes in the module's memory. Native builds write to the standard output.
#[derive(Copy, Clone, Debug, Default)]
pub struct HostConsole;

#[cfg(target_family = "wasm")]
extern "C" {
    fn __print(address: *const u8, length: u32);
}

impl Write for HostConsole {
    #[cfg(target_family = "wasm")]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        unsafe { __print(buf.as_ptr(), buf.len() as u32) };
        Ok(buf.len())
    }

    #[cfg(not(target_family = "wasm"))]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write(buf)
    }

    #[cfg(target_family = "wasm")]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    #[cfg(not(target_family = "wasm"))]
    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
