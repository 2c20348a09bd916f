//! PATH probing as an injected capability, so resolution stays deterministic
//! under test.

pub trait Toolchain {
    fn available(&self, binary: &str) -> bool;
}

/// Production probe backed by `which`.
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn available(&self, binary: &str) -> bool {
        which::which(binary).is_ok()
    }
}
