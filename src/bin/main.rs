use log::{debug, error, info, trace};
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::SystemTime;

use yabsearch::{search, util};

/// Single-index answers are reported as `i..=i`.
type Answer = Option<RangeInclusive<usize>>;

type Key<'a> = &'a mut dyn FnMut(&f64, usize) -> f64;

struct Variant {
    name: &'static str,
    search: fn(&[f64], f64, Key) -> Answer,
    /// Linear-scan verification of an answer.
    verify: fn(&[f64], f64, &Answer) -> bool,
}

fn one(idx: Option<usize>) -> Answer {
    idx.map(|i| i..=i)
}

fn at(answer: &Answer) -> Option<usize> {
    answer.as_ref().map(|span| *span.start())
}

const WIDTH: f64 = 3.0;

const VARIANTS: &[Variant] = &[
    Variant {
        name: "index",
        search: |xs, t, key| one(search::find_index(xs, t, key)),
        verify: |xs, t, a| match at(a) {
            Some(i) => xs[i] == t,
            None => !xs.contains(&t),
        },
    },
    Variant {
        name: "closest",
        search: |xs, t, key| one(search::find_closest_index(xs, t, key)),
        verify: |xs, t, a| {
            let best = xs.iter().map(|x| (x - t).abs()).fold(f64::INFINITY, f64::min);
            let lowest = xs.iter().find(|x| (*x - t).abs() == best);
            at(a).map(|i| &xs[i]) == lowest
        },
    },
    Variant {
        name: "gt",
        search: |xs, t, key| one(search::find_gt_index(xs, t, key)),
        verify: |xs, t, a| at(a) == xs.iter().position(|x| *x > t),
    },
    Variant {
        name: "gte",
        search: |xs, t, key| one(search::find_gte_index(xs, t, key)),
        verify: |xs, t, a| at(a) == xs.iter().position(|x| *x >= t),
    },
    Variant {
        name: "lt",
        search: |xs, t, key| one(search::find_lt_index(xs, t, key)),
        verify: |xs, t, a| at(a) == xs.iter().rposition(|x| *x < t),
    },
    Variant {
        name: "lte",
        search: |xs, t, key| one(search::find_lte_index(xs, t, key)),
        verify: |xs, t, a| {
            let expected = xs
                .iter()
                .position(|x| *x == t)
                .or_else(|| xs.iter().rposition(|x| *x < t));
            at(a) == expected
        },
    },
    Variant {
        name: "range",
        search: |xs, t, key| search::find_indices_between(xs, t, t + WIDTH, key),
        verify: |xs, t, a| {
            let lo = xs.iter().position(|x| *x >= t);
            let hi = xs.iter().rposition(|x| *x <= t + WIDTH);
            match (lo, hi) {
                (Some(lo), Some(hi)) if lo <= hi => a == &Some(lo..=hi),
                _ => a.is_none(),
            }
        },
    },
    Variant {
        name: "all",
        search: |xs, t, key| search::find_all_indices(xs, t, key),
        verify: |xs, t, a| {
            let lo = xs.iter().position(|x| *x == t);
            let hi = xs.iter().rposition(|x| *x == t);
            match (lo, hi) {
                (Some(lo), Some(hi)) => a == &Some(lo..=hi),
                _ => a.is_none(),
            }
        },
    },
];

fn benchmark(variant: &Variant, xs: &[f64], queries: usize, checked: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let lo = xs.first().copied().unwrap_or(0.0) - 10.0;
    let hi = xs.last().copied().unwrap_or(0.0) + 10.0;
    let targets = (0..queries)
        .map(|_| rng.gen_range(lo..hi).round())
        .collect::<Vec<_>>();

    let mut probes = 0usize;
    let mut worst = 0usize;
    let mut answers = Vec::with_capacity(queries);
    let now = SystemTime::now();
    for t in targets.iter() {
        let mut calls = 0usize;
        let answer = (variant.search)(xs, *t, &mut |x: &f64, _| {
            calls += 1;
            *x
        });
        trace!("{}: target={} answer={:?} calls={}", variant.name, t, answer, calls);
        probes += calls;
        worst = worst.max(calls);
        answers.push(answer);
    }
    let millis = now.elapsed().unwrap_or_default().as_millis();

    let mut errors = 0;
    for (t, answer) in targets.iter().zip(answers.iter()).take(checked) {
        if !(variant.verify)(xs, *t, answer) {
            debug!("{}: target={} unexpected answer {:?}", variant.name, t, answer);
            errors += 1;
        }
    }

    info!(
        "{}: {} ms (rate={} op/s) probes avg={:.2} max={} log2(n)={:.1}",
        variant.name,
        millis,
        queries as u128 * 1000 / millis.max(1),
        probes as f64 / queries.max(1) as f64,
        worst,
        (xs.len().max(1) as f64).log2()
    );
    if errors > 0 {
        error!("{}: {} of {} answers failed verification", variant.name, errors, checked);
    }
}

// RUST_LOG=info cargo run --release -- all-variants 1000000
fn main() {
    env_logger::init();
    let mut it = std::env::args().skip(1);
    let target = it.next().unwrap_or_else(|| "all-variants".to_string());
    let count = it
        .next()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(100_000);

    let selected = VARIANTS
        .iter()
        .filter(|v| target == "all-variants" || v.name == target)
        .collect::<Vec<_>>();
    if selected.is_empty() {
        error!("unknown variant: {}", target);
        return;
    }

    let xs = util::data(count, 42);
    if let Err(e) = util::check(&xs, |x, _| *x) {
        error!("generated data is invalid: {}", e);
        return;
    }
    info!(
        "target={} count={} min={:?} max={:?}",
        target,
        count,
        xs.first(),
        xs.last()
    );

    for variant in selected {
        benchmark(variant, &xs, 10_000, 100);
    }
}
