use criterion::*;
use cskl::SkipList;
use parking_lot::Mutex;
use rand::prelude::*;
use std::{
  collections::BTreeSet,
  sync::{atomic::*, *},
  thread,
};

fn skiplist_round(l: &SkipList<Vec<u8>>, case: &(Vec<u8>, bool)) {
  if case.1 {
    if let Some(v) = l.get(&case.0) {
      assert_eq!(v, &case.0);
    }
  } else {
    let _ = l.insert(case.0.clone());
  }
}

fn btree_round(l: &Mutex<BTreeSet<Vec<u8>>>, case: &(Vec<u8>, bool)) {
  let mut l = l.lock();
  if case.1 {
    if let Some(v) = l.get(&case.0) {
      assert_eq!(v, &case.0);
    }
  } else {
    l.insert(case.0.clone());
  }
}

fn random_key(rng: &mut ThreadRng) -> Vec<u8> {
  let mut key = vec![0; 16];
  rng.fill_bytes(&mut key);
  key
}

fn bench_read_write_skiplist_frac(b: &mut Bencher<'_>, frac: &usize) {
  let frac = *frac;
  let list = Arc::new(SkipList::new(16).unwrap());
  let l = list.clone();
  let stop = Arc::new(AtomicBool::new(false));
  let s = stop.clone();
  let j = thread::spawn(move || {
    let mut rng = rand::rng();
    while !s.load(Ordering::SeqCst) {
      let key = random_key(&mut rng);
      let case = (key, frac > rng.random_range(0..11));
      skiplist_round(&l, &case);
    }
  });
  let mut rng = rand::rng();
  b.iter_batched_ref(
    || (random_key(&mut rng), frac > rng.random_range(0..11)),
    |case| skiplist_round(&list, case),
    BatchSize::SmallInput,
  );
  stop.store(true, Ordering::SeqCst);
  j.join().unwrap();
}

fn bench_read_write_skiplist(c: &mut Criterion) {
  let mut group = c.benchmark_group("skiplist_read_write");
  for i in 0..=10 {
    group.bench_with_input(
      BenchmarkId::from_parameter(i),
      &i,
      bench_read_write_skiplist_frac,
    );
  }
  group.finish();
}

fn bench_read_write_btree_frac(b: &mut Bencher<'_>, frac: &usize) {
  let frac = *frac;
  let set = Arc::new(Mutex::new(BTreeSet::new()));
  let m = set.clone();
  let stop = Arc::new(AtomicBool::new(false));
  let s = stop.clone();
  let j = thread::spawn(move || {
    let mut rng = rand::rng();
    while !s.load(Ordering::SeqCst) {
      let key = random_key(&mut rng);
      let case = (key, frac > rng.random_range(0..11));
      btree_round(&m, &case);
    }
  });
  let mut rng = rand::rng();
  b.iter_batched_ref(
    || (random_key(&mut rng), frac > rng.random_range(0..11)),
    |case| btree_round(&set, case),
    BatchSize::SmallInput,
  );
  stop.store(true, Ordering::SeqCst);
  j.join().unwrap();
}

fn bench_read_write_btree(c: &mut Criterion) {
  let mut group = c.benchmark_group("btree_mutex_read_write");
  for i in 0..=10 {
    group.bench_with_input(
      BenchmarkId::from_parameter(i),
      &i,
      bench_read_write_btree_frac,
    );
  }
  group.finish();
}

fn bench_write_skiplist(c: &mut Criterion) {
  let list = Arc::new(SkipList::new(21).unwrap());
  let l = list.clone();
  let stop = Arc::new(AtomicBool::new(false));
  let s = stop.clone();
  let j = thread::spawn(move || {
    let mut rng = rand::rng();
    while !s.load(Ordering::SeqCst) {
      let case = (random_key(&mut rng), false);
      skiplist_round(&l, &case);
    }
  });
  let mut rng = rand::rng();
  c.bench_function("skiplist_write", |b| {
    b.iter_batched(
      || random_key(&mut rng),
      |key| {
        let _ = list.insert(key);
      },
      BatchSize::SmallInput,
    )
  });
  stop.store(true, Ordering::SeqCst);
  j.join().unwrap();
}

fn bench_contended_insert(c: &mut Criterion) {
  const WRITERS: u64 = 4;
  const PER_WRITER: u64 = 10_000;

  c.bench_function("skiplist_contended_insert", |b| {
    b.iter(|| {
      let list = Arc::new(SkipList::new(8).unwrap());
      let handles = (0..WRITERS)
        .map(|_| {
          let l = list.clone();
          thread::spawn(move || {
            let mut rng = rand::rng();
            for _ in 0..PER_WRITER {
              let _ = l.insert(rng.random_range(0..PER_WRITER));
            }
          })
        })
        .collect::<Vec<_>>();
      for h in handles {
        h.join().unwrap();
      }
      black_box(list.len())
    })
  });
}

criterion_group!(
  benches,
  bench_read_write_skiplist,
  bench_read_write_btree,
  bench_write_skiplist,
  bench_contended_insert,
);
criterion_main!(benches);
