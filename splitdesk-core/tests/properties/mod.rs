mod focus_tests;
mod layout_tests;
mod session_invariants;
