// Internal helpers not exposed as macros
//
// This module contains:
// - names: capability / derived-operation name tables

pub mod names;
