//! # Labl
//!
//! An interpreter for a flat, label-addressed instruction language.
//! A program is a stream of whitespace-delimited instructions; control
//! flow jumps between named labels rather than nested blocks.
//!
//! ```text
//! var count 3
//! loop:
//! print count
//! sub count 1
//! cmp count 0
//! gj "loop"
//! print "liftoff"
//! EOF
//! ```
//!
//! Run a program with `labl <sourcefile>`, or drive the machine directly:
//!
//! ```
//! use labl::mach::{Event, Runtime};
//! let mut runtime = Runtime::default();
//! runtime.load("print \"hello\" EOF");
//! assert_eq!(runtime.execute(1000), Event::Print("hello".to_string()));
//! assert_eq!(runtime.execute(1000), Event::Stopped);
//! ```

/// A position in the token stream. Token indices are the only address
/// space for control flow; jump targets are not source lines.
pub type Address = usize;

pub mod lang;
pub mod mach;
pub mod term;
