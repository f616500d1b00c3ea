pub mod isa;
pub mod bitflags;
pub mod clapx;
pub mod render;
pub mod codegen;
