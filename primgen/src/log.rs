//! Logging macros for the crate.
//!
//! Outside of tests these are the `log` facade macros. Under `cfg(test)` they
//! print directly so that messages show up in test output.

#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use std::{
    println as trace, println as debug, println as info, println as warn, println as error,
};

#[cfg(not(test))]
#[allow(unused_imports)]
pub(crate) use log::{debug, error, info, trace, warn};

/// Types that can summarize themselves to the log.
pub trait Log {
    fn log(&self);
}
