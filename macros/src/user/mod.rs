//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Container)]` | on struct | Register the derived surface |
//! | `caps_check!` | function macro | Witness capability traits |
//! | `offers!` | function macro | Witness derived operations |

mod container;
mod witness;

pub use container::expand_derive_container;
pub use witness::{expand_caps_check, expand_offers};
