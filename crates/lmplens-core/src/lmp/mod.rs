//! Link Manager Protocol dissection.
//!
//! `table` holds the static opcode → field-layout bindings (data); `decoder`
//! is the single generic extraction loop that walks a layout (logic). The
//! split keeps the decoder uniform and auditable while all per-opcode
//! knowledge lives in one declarative place.

pub mod decoder;
pub mod table;
