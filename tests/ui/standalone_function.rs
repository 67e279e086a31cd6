use scriptbind::{DecodePolicy, bind_functions, function};

#[function]
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

#[function(name = "tag")]
fn set_tag(entity: u64, tag: &str) {
    let _ = (entity, tag);
}

fn main() {
    let module = bind_functions(
        "util",
        [__scriptbind_clamp_meta(), __scriptbind_set_tag_meta()],
        DecodePolicy::Lenient,
    )
    .unwrap();
    assert_eq!(module.names().collect::<Vec<_>>(), ["clamp", "tag"]);
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    set_tag(1, "x");
}
