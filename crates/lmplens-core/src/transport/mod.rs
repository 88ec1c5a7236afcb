//! Transport framing.
//!
//! `h4` classifies one captured H4/BCM frame, parses the type-specific
//! header, and hands LMP-bearing payloads to the LMP decoder. Delegation is
//! gated on frame-type/channel markers only, never on payload content.

pub mod h4;
