//! Performance benchmarks for the year-end bonus engine.
//!
//! This benchmark suite covers:
//! - The pure calculation for each installment
//! - A single `/calculate` request through the router
//! - A batch of 100 requests sharing one session
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use decimo_engine::api::{AppState, create_router};
use decimo_engine::calculation::calculate;
use decimo_engine::config::ConfigLoader;
use decimo_engine::models::{CalculationInput, Installment};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

fn create_input(installment: Installment) -> CalculationInput {
    CalculationInput {
        employee_name: "Bench".to_string(),
        monthly_gross_salary: Decimal::new(750_000, 2),
        admission_date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        calculation_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        installment,
        deduct_inss: true,
        deduct_irrf: true,
        manually_selected_months: None,
    }
}

fn create_body(salary: u32) -> String {
    serde_json::json!({
        "employee_name": "Bench",
        "monthly_gross_salary": salary.to_string(),
        "admission_date": "2025-02-10",
        "calculation_date": "2025-12-01",
        "installment": "full"
    })
    .to_string()
}

/// Benchmark: engine only, one per installment.
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    for installment in [Installment::First, Installment::Second, Installment::Full] {
        let input = create_input(installment);
        group.bench_with_input(
            BenchmarkId::new("calculate", format!("{:?}", installment)),
            &input,
            |b, input| b.iter(|| black_box(calculate(black_box(input)))),
        );
    }

    group.finish();
}

/// Benchmark: one request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_body(3000);

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
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

/// Benchmark: 100 requests with varying salaries.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let requests: Vec<String> = (0..100).map(|i| create_body(1500 + i * 100)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_engine, bench_single_request, bench_batch_100);
criterion_main!(benches);
