use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::EntryType;
use rust_decimal::Decimal;
use service::entries::{validation::validate, FinancialEntry};
use service::users::domain::RegisterInput;
use service::users::repository::mock::MockUserRepository;
use service::users::UserService;

fn bench_authenticate(c: &mut Criterion) {
    let svc = UserService::new(Arc::new(MockUserRepository::default()));

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.register_user(RegisterInput {
        name: "Bench".into(),
        email: "bench@email.com".into(),
        password: "Benchmark1".into(),
    }))
    .unwrap();

    c.bench_function("user_authenticate", |b| {
        b.iter(|| {
            rt.block_on(svc.authenticate("bench@email.com", "Benchmark1")).unwrap();
        });
    });
}

fn bench_validate(c: &mut Criterion) {
    let entry = FinancialEntry {
        description: Some("Salário".into()),
        month: Some(5),
        year: Some(2022),
        user_id: Some(uuid::Uuid::new_v4()),
        value: Some(Decimal::new(15000, 2)),
        entry_type: Some(EntryType::Income),
        ..Default::default()
    };

    c.bench_function("entry_validate", |b| {
        b.iter(|| validate(criterion::black_box(&entry)).unwrap());
    });
}

criterion_group!(benches, bench_authenticate, bench_validate);
criterion_main!(benches);
