//! Benchmarks for the script-to-native call path.
//!
//! Measures argument decoding, adapter dispatch and the one-shot binding
//! pipeline.
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin -- "dispatch"
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use scriptbind::{
    CallContext, Context, DecodePolicy, Dynamic, ExportedFunction, TypeTag, bind_functions, decode,
};
use std::hint::black_box;

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

fn sum_function(arity: usize) -> ExportedFunction {
    ExportedFunction::new("sum", vec![TypeTag::I64; arity], move |args| {
        let mut total = 0i64;
        for i in 0..arity {
            total = total.wrapping_add(args.get::<i64>(i)?);
        }
        black_box(total);
        Ok(())
    })
}

fn decode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let slots = [Dynamic::Int(300), Dynamic::Float(2.75), Dynamic::from("label"), Dynamic::from("42")];
    let ctx = CallContext::new(&slots);

    group.bench_function("int_to_u8", |b| {
        b.iter(|| decode(&TypeTag::U8, black_box(1), &ctx, DecodePolicy::Lenient))
    });
    group.bench_function("float_to_i32", |b| {
        b.iter(|| decode(&TypeTag::I32, black_box(2), &ctx, DecodePolicy::Lenient))
    });
    group.bench_function("text", |b| {
        b.iter(|| decode(&TypeTag::Text, black_box(3), &ctx, DecodePolicy::Lenient))
    });
    group.bench_function("numeric_string", |b| {
        b.iter(|| decode(&TypeTag::F64, black_box(4), &ctx, DecodePolicy::Lenient))
    });
    group.bench_function("missing_fallback", |b| {
        b.iter(|| decode(&TypeTag::U32, black_box(9), &ctx, DecodePolicy::Lenient))
    });

    group.finish();
}

fn dispatch_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let mut group = c.benchmark_group("dispatch");

    for arity in [0usize, 1, 4, 8] {
        let module = bind_functions("bench", [sum_function(arity)], DecodePolicy::Lenient)
            .expect("bind sum");
        let adapter = module.get("sum").expect("sum entry").adapter().clone();
        let slots: Vec<Dynamic> = (0..arity as i64).map(Dynamic::Int).collect();

        group.bench_with_input(BenchmarkId::new("adapter", arity), &slots, |b, slots| {
            b.iter(|| {
                let result = adapter.invoke(&CallContext::new(black_box(slots)));
                end_profiling_frame();
                result
            })
        });
    }

    let mut ctx = Context::new();
    ctx.install_functions("bench", [sum_function(4)]).expect("install sum");
    let engine = ctx.into_engine();
    let args: Vec<Dynamic> = (1..=4i64).map(Dynamic::Int).collect();

    group.bench_function("engine_path", |b| {
        b.iter(|| engine.call(black_box("bench.sum"), &args))
    });

    group.finish();
}

fn binding_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("binding");

    for count in [1usize, 16, 128] {
        group.bench_with_input(BenchmarkId::new("bind_functions", count), &count, |b, &count| {
            b.iter(|| {
                let functions = (0..count).map(|i| {
                    ExportedFunction::new(format!("f{i}"), vec![TypeTag::F32, TypeTag::Text], |_| Ok(()))
                });
                bind_functions("bench", functions, DecodePolicy::Lenient)
            })
        });
    }

    group.bench_function("default_modules", |b| {
        b.iter(|| Context::new().with_default_modules().map(Context::into_engine))
    });

    group.finish();
}

criterion_group!(benches, decode_benchmarks, dispatch_benchmarks, binding_benchmarks);
criterion_main!(benches);
