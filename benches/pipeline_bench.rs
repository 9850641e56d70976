// ABOUTME: Criterion benchmarks for the recipe pipeline's CPU-bound stages
// ABOUTME: Measures prompt building, reply parsing and rendering for chat and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recipe pipeline.
//!
//! Covers everything between the completion call and the tool reply:
//! prompt assembly, strict reply validation and the three renderings.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_mcp_server::recipes::{build_prompt, parser, views};
use recipe_mcp_server::session::{Cuisine, Language};

const REPLY: &str = r#"[
  {"name": "Kimchi Fried Rice",
   "ingredients": [{"name": "Rice", "price": 3000}, {"name": "Kimchi", "price": 5000}, {"name": "Egg", "price": 300}],
   "time": "20 minutes", "difficulty": 2,
   "steps": ["Cook rice", "Chop kimchi", "Fry kimchi in oil", "Add rice and stir", "Top with a fried egg"],
   "total cost": 8300},
  {"name": "Kimchi Stew",
   "ingredients": ["Kimchi", "Tofu", "Pork", "Green onion"],
   "time": 30, "difficulty": 3,
   "steps": ["Boil water", "Add kimchi and pork", "Simmer for 15 minutes", "Add tofu and green onion"]},
  {"name": "Kimchi Pancake",
   "ingredients": ["Kimchi", "Flour", "Water"],
   "time": "15 minutes", "difficulty": "Easy",
   "steps": ["Mix batter", "Fold in kimchi", "Pan fry until crisp"]}
]"#;

/// Reply with `count` copies of the three recipes; parsing keeps the first three
fn reply_with(count: usize) -> String {
    let body = REPLY.trim().trim_start_matches('[').trim_end_matches(']');
    let items = vec![body; count].join(",");
    format!("[{items}]")
}

fn bench_prompt(c: &mut Criterion) {
    let ingredients: Vec<String> = ["kimchi", "rice", "egg", "green onion", "tofu"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    let allergies = vec!["peanut".to_owned(), "shrimp".to_owned()];

    c.bench_function("build_prompt", |b| {
        b.iter(|| {
            build_prompt(
                black_box(&ingredients),
                Language::En,
                black_box(&allergies),
                Cuisine::Japanese,
            )
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_reply");

    group.throughput(Throughput::Bytes(REPLY.len() as u64));
    group.bench_function("three", |b| {
        b.iter(|| parser::parse(black_box(REPLY)).unwrap());
    });

    for copies in [10_usize, 100] {
        let reply = reply_with(copies);
        group.throughput(Throughput::Bytes(reply.len() as u64));
        group.bench_with_input(BenchmarkId::new("oversized", copies * 3), &reply, |b, reply| {
            b.iter(|| parser::parse(black_box(reply)).unwrap());
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let recipes = parser::parse(REPLY).unwrap();
    let mut group = c.benchmark_group("render");

    for language in [Language::Ko, Language::En] {
        group.bench_with_input(
            BenchmarkId::new("summary_list", language),
            &language,
            |b, language| {
                b.iter(|| views::summary_list(black_box(&recipes), *language));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("expanded", language),
            &language,
            |b, language| {
                b.iter(|| views::expanded(black_box(&recipes[0]), *language));
            },
        );
    }

    group.bench_function("export_document", |b| {
        b.iter(|| views::export_document(black_box(&recipes[0])));
    });

    group.finish();
}

criterion_group!(benches, bench_prompt, bench_parse, bench_render);
criterion_main!(benches);
