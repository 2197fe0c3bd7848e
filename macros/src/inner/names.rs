//! Name tables shared by the witness macros.
//!
//! Kept in sync by hand with `tola_container::caps::Capability` and
//! `tola_container::rules::DerivedOp`.

/// Capability trait name -> `Detect` witness constant.
const CAPABILITY_WITNESSES: &[(&str, &str)] = &[
    ("EmplaceFront", "EMPLACE_FRONT"),
    ("EmplaceBack", "EMPLACE_BACK"),
    ("Emplace", "EMPLACE"),
    ("EraseRange", "ERASE_RANGE"),
    ("InsertRange", "INSERT_RANGE"),
    ("Clear", "CLEAR"),
    ("LessThan", "LESS_THAN"),
    ("Resize", "RESIZE"),
];

/// Derived method name -> `Offers` witness constant.
///
/// Methods that share a gate (`rbegin`/`rend`, `as_slice`/`data`, the
/// ordering trio) map to the same constant.
const OPERATION_WITNESSES: &[(&str, &str)] = &[
    ("is_empty", "IS_EMPTY"),
    ("len", "LEN"),
    ("data", "DATA"),
    ("as_slice", "DATA"),
    ("data_mut", "DATA_MUT"),
    ("as_mut_slice", "DATA_MUT"),
    ("front", "FRONT"),
    ("front_mut", "FRONT_MUT"),
    ("back", "BACK"),
    ("back_mut", "BACK_MUT"),
    ("nth", "NTH"),
    ("nth_mut", "NTH_MUT"),
    ("at", "AT"),
    ("at_mut", "AT_MUT"),
    ("push_front", "PUSH_FRONT"),
    ("pop_front", "POP_FRONT"),
    ("push_back", "PUSH_BACK"),
    ("pop_back", "POP_BACK"),
    ("insert", "INSERT"),
    ("insert_n", "INSERT_N"),
    ("erase", "ERASE"),
    ("assign", "ASSIGN"),
    ("try_assign", "ASSIGN"),
    ("assign_n", "ASSIGN_N"),
    ("resize_default", "RESIZE_DEFAULT"),
    ("rbegin", "RBEGIN"),
    ("rend", "RBEGIN"),
    ("crbegin", "CRBEGIN"),
    ("crend", "CRBEGIN"),
    ("comparisons", "COMPARISONS"),
    ("greater_than", "COMPARISONS"),
    ("less_equal", "COMPARISONS"),
    ("greater_equal", "COMPARISONS"),
    ("erase_all", "ERASE_ALL"),
    ("teardown", "TEARDOWN"),
];

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

pub fn capability_witness(trait_name: &str) -> Option<&'static str> {
    lookup(CAPABILITY_WITNESSES, trait_name)
}

pub fn operation_witness(method: &str) -> Option<&'static str> {
    lookup(OPERATION_WITNESSES, method)
}

pub fn operation_names() -> impl Iterator<Item = &'static str> {
    OPERATION_WITNESSES.iter().map(|(n, _)| *n)
}
