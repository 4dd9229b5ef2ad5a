//! Cross-thread use of shared vectors and registers.

use std::sync::Arc;
use std::thread;

use maths_repr::floats::{values32, vector32, FloatRegister, Scalar32};
use maths_repr::ints::IntRegister;

const THREADS: usize = 8;
const ROUNDS: usize = 250;

#[test]
fn test_concurrent_adds_are_not_lost() {
    let total = Arc::new(vector32(&[0.0; 4]));
    let ones = Arc::new(vector32(&[1.0; 4]));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let total = Arc::clone(&total);
            let ones = Arc::clone(&ones);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    total.add(&[&*ones]).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(values32(&total), vec![(THREADS * ROUNDS) as f32; 4]);
    assert_eq!(values32(&ones), vec![1.0; 4]);
}

#[test]
fn test_cross_updates_do_not_deadlock() {
    let vectors: Arc<Vec<_>> = Arc::new((0..3).map(|_| vector32(&[1.0; 3])).collect());

    let handles: Vec<_> = (0..THREADS)
        .map(|n| {
            let vectors = Arc::clone(&vectors);
            thread::spawn(move || {
                let a = &vectors[n % 3];
                let b = &vectors[(n + 1) % 3];
                let c = &vectors[(n + 2) % 3];
                for _ in 0..ROUNDS {
                    a.add(&[b, c]).unwrap();
                    a.sub(&[c, b]).unwrap();
                    let _ = b.lerp(a, &Scalar32(0.5));
                    let _ = c.dot(a);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    for v in vectors.iter() {
        assert_eq!(v.len(), 3);
    }
}

#[test]
fn test_readers_see_whole_updates() {
    let v = Arc::new(vector32(&[0.0; 16]));
    let step = Arc::new(vector32(&[1.0; 16]));

    let writer = {
        let v = Arc::clone(&v);
        let step = Arc::clone(&step);
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                v.add(&[&*step]).unwrap();
            }
        })
    };
    let reader = {
        let v = Arc::clone(&v);
        thread::spawn(move || {
            for _ in 0..ROUNDS {
                let snapshot = values32(&v);
                assert!(snapshot.iter().all(|&x| x == snapshot[0]));
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();
}

#[test]
fn test_registers_shared_across_threads() {
    let ints = Arc::new(IntRegister::new());
    let floats = Arc::new(FloatRegister::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|n| {
            let ints = Arc::clone(&ints);
            let floats = Arc::clone(&floats);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    ints.accumulate([n as i64]);
                    floats.accumulate([n as f64]);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let expected_count = (THREADS * ROUNDS) as u64;
    assert_eq!(ints.count(), expected_count);
    assert_eq!(floats.count(), expected_count);
    // Mean of 0..THREADS.
    assert_eq!(ints.compute().unwrap(), 3);
    assert!((floats.compute().unwrap() - 3.5).abs() < 1e-9);
}
