// Criterion benchmarks for the Sangam engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sangam_engine::{
    calculate_match_score, HoroscopeComparator, Matcher, Nakshatra, PreferenceSet, Profile,
    ScoringWeights,
};

fn create_candidate(id: usize) -> Profile {
    Profile {
        user_id: id.to_string(),
        name: format!("User {}", id),
        age: 24 + (id % 12) as u8,
        height_cm: 150 + (id % 30) as u16,
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        marital_status: "never_married".to_string(),
        religion: Some(if id % 3 == 0 { "Hindu" } else { "Christian" }.to_string()),
        caste: Some("Nair".to_string()),
        education: Some("Masters".to_string()),
        occupation: None,
        monthly_income: Some(30_000 + (id as u32 % 10) * 10_000),
        diet: Some("vegetarian".to_string()),
        smoking: Some("never".to_string()),
        drinking: Some("never".to_string()),
        location: Some(if id % 2 == 0 { "Chennai" } else { "Mumbai" }.to_string()),
        star: None,
        raasi: None,
        is_active: true,
        created_at: None,
    }
}

fn create_preferences() -> PreferenceSet {
    PreferenceSet {
        user_id: "viewer".to_string(),
        min_age: 25,
        max_age: 30,
        min_height_cm: 155,
        max_height_cm: 175,
        religions: vec!["Hindu".to_string()],
        castes: vec!["Nair".to_string()],
        education: vec!["Masters".to_string()],
        locations: vec!["Chennai".to_string()],
        diets: vec!["vegetarian".to_string()],
        smoking: vec!["never".to_string()],
        drinking: vec![],
        stars: vec![],
        min_monthly_income: Some(40_000),
    }
}

fn bench_match_score(c: &mut Criterion) {
    let candidate = create_candidate(0);
    let prefs = create_preferences();
    let weights = ScoringWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&candidate), black_box(&prefs), &weights));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let prefs = create_preferences();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.find_matches(black_box(&prefs), candidates.clone(), 20));
            },
        );
    }

    group.finish();
}

fn bench_porutham(c: &mut Criterion) {
    let comparator = HoroscopeComparator::with_default_table();

    c.bench_function("porutham_compare", |b| {
        b.iter(|| {
            comparator.compare(
                black_box(Nakshatra::Rohini),
                black_box(Nakshatra::Bharani),
            )
        });
    });
}

criterion_group!(benches, bench_match_score, bench_matching, bench_porutham);
criterion_main!(benches);
