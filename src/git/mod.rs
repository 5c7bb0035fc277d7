//! Git integration for change detection
//!
//! All history queries shell out to the `git` executable; nothing here reads
//! repository internals directly.

mod locator;
mod runner;

#[cfg(test)]
pub(crate) mod testing;

pub use locator::ChangeLocator;
pub use runner::Runner;
