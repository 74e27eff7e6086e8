/*!
## Labl Machine Module

This Rust module is the virtual machine for Labl: the label table
and the fetch-dispatch execution engine.

*/

mod program;
mod runtime;
mod val;
mod var;

pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::Val;
pub use var::Var;
