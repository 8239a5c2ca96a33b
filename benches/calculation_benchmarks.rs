//! Performance benchmarks for the Payroll Engine.
//!
//! Covers the pure calculation path, audit-trail generation, batch runs
//! across a payroll of employees, and the full HTTP preview round trip.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{compute_payroll, explain_payroll};
use payroll_engine::models::{CompensationInput, RulesSnapshot};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// A mid-band employee with one allowance and one voluntary deduction.
fn reference_input() -> CompensationInput {
    CompensationInput::new(Decimal::new(50_000, 0))
        .with_allowance("house", Decimal::new(10_000, 0))
        .with_voluntary_deduction("sacco", Decimal::new(1_000, 0))
}

/// A payroll of `count` employees spread across every PAYE bracket.
fn create_payroll(count: usize) -> Vec<CompensationInput> {
    (0..count)
        .map(|i| {
            let salary = Decimal::new(15_000 + (i as i64 % 100) * 9_500, 0);
            let overtime = Decimal::new((i as i64 % 7) * 250, 0);
            let input = CompensationInput::new(salary).with_overtime(overtime);
            if i % 4 == 0 {
                input.with_helb(Decimal::new(2_500, 0))
            } else {
                input
            }
        })
        .collect()
}

/// Benchmark: one breakdown, no audit trail.
fn bench_single_payroll(c: &mut Criterion) {
    let rules = RulesSnapshot::kenya_2025();
    let input = reference_input();

    c.bench_function("compute_payroll", |b| {
        b.iter(|| compute_payroll(black_box(&input), black_box(&rules)))
    });
}

/// Benchmark: audit trail for an already computed breakdown.
fn bench_explain(c: &mut Criterion) {
    let rules = RulesSnapshot::kenya_2025();
    let input = reference_input();
    let result = compute_payroll(&input, &rules).expect("reference input is valid");

    c.bench_function("explain_payroll", |b| {
        b.iter(|| explain_payroll(black_box(&input), black_box(&rules), black_box(&result)))
    });
}

/// Benchmark: whole-payroll batches.
fn bench_batch(c: &mut Criterion) {
    let rules = RulesSnapshot::kenya_2025();
    let mut group = c.benchmark_group("batch_processing");

    for size in [100usize, 1_000] {
        let payroll = create_payroll(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payroll, |b, payroll| {
            b.iter(|| {
                payroll
                    .iter()
                    .map(|input| compute_payroll(input, &rules))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark: POST /payroll/preview through the router.
fn bench_preview_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(RulesSnapshot::kenya_2025()));
    let body = serde_json::json!({
        "employee_id": "EMP001",
        "basic_salary": "50000",
        "allowances": { "house": "10000" },
        "voluntary_deductions": { "sacco": "1000" }
    })
    .to_string();

    c.bench_function("preview_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll/preview")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_payroll,
    bench_explain,
    bench_batch,
    bench_preview_endpoint
);
criterion_main!(benches);
