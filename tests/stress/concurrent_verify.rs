//! Stress test: one shared hasher, many threads hashing and verifying at
//! once. No call may observe another's state.

use std::sync::Arc;
use std::thread;

use pago::{Hasher, Params};

#[test]
fn stress_concurrent_hash_and_verify() {
    let hasher = Arc::new(Hasher::new(Params::new(64, 1, 1).unwrap()));
    let mut handles = Vec::new();

    for t in 0..8 {
        let hasher = Arc::clone(&hasher);
        handles.push(thread::spawn(move || {
            for i in 0..10 {
                let password = format!("thread-{t}-password-{i}");
                let encoded = hasher.hash(password.as_bytes()).expect("hash should succeed");
                assert!(hasher.verify(password.as_bytes(), &encoded).unwrap());
                assert!(!hasher.verify(b"not-it", &encoded).unwrap());
            }
        }));
    }

    for handle in handles {
        handle.join().expect("thread should not panic");
    }
}

#[test]
fn stress_concurrent_verify_same_hash() {
    let hasher = Hasher::new(Params::new(128, 1, 2).unwrap());
    let encoded = Arc::new(hasher.hash(b"shared").unwrap());

    let handles: Vec<_> = (0..16)
        .map(|t| {
            let encoded = Arc::clone(&encoded);
            thread::spawn(move || {
                let password: &[u8] = if t % 2 == 0 { b"shared" } else { b"other" };
                (t, pago::verify(password, &encoded).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (t, ok) = handle.join().expect("thread should not panic");
        assert_eq!(ok, t % 2 == 0, "thread {t}");
    }
}
