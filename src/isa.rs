//! Opcode decoding for the avc2 stack machine.
//!
//! An opcode byte is laid out as
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//!  k r 2 f f f f f
//! ```
//!
//! where `f` selects one of 32 base families and `k`/`r`/`2` are the keep,
//! return-stack and wide mode flags.

pub mod family;
pub mod modes;
pub mod decode;
pub mod table;

pub use family::{Family, Group};
pub use modes::Modes;
pub use decode::{decode, resolve, Instruction, Resolution, Rule, OVERRIDES};
pub use table::OpTable;
