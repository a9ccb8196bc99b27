// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the contact form checks.
//!
//! Measures the performance of:
//! - Email shape matching on valid and malformed input
//! - Full form validation
//! - A submit attempt through the form state machine

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::contact::validation::{is_valid_email, validate};
use iced_folio::contact::{ContactForm, FormField, FormFields};
use std::hint::black_box;

fn filled_fields() -> FormFields {
    FormFields {
        name: "Grace Hopper".to_string(),
        email: "grace@navy.mil".to_string(),
        subject: "Compilers".to_string(),
        message: "A ship in port is safe, but that is not what ships are built for.".repeat(20),
    }
}

fn email_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_shape");

    group.bench_function("valid", |b| {
        b.iter(|| is_valid_email(black_box("someone.with.a.long.name@sub.example.co.uk")));
    });

    group.bench_function("malformed", |b| {
        b.iter(|| is_valid_email(black_box("no-at-sign-anywhere-in-this-address.example.com")));
    });

    group.finish();
}

fn validation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_validation");
    let fields = filled_fields();
    let empty = FormFields::default();

    group.bench_function("complete_form", |b| {
        b.iter(|| validate(black_box(&fields)));
    });

    group.bench_function("empty_form", |b| {
        b.iter(|| validate(black_box(&empty)));
    });

    group.bench_function("submit_attempt", |b| {
        b.iter(|| {
            let mut form = ContactForm::new();
            for field in FormField::ALL {
                form.update_field(field, fields.get(field));
            }
            black_box(form.submit())
        });
    });

    group.finish();
}

criterion_group!(benches, email_benchmark, validation_benchmark);
criterion_main!(benches);
