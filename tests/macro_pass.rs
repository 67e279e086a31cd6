//! Macro usages that must keep compiling.

#[test]
fn macro_pass_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/*.rs");
}
