//! Integration tests: hash then verify through the public API, and check
//! that every produced string follows the wire format.

use pago::{default_params, hash, verify, EncodedHash, Hasher, Params, KEY_LEN, SALT_LEN};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn cheap() -> Params {
    Params::new(256, 1, 1).expect("valid params")
}

#[test]
fn round_trip_various_passwords() {
    init_logging();
    let passwords: [&[u8]; 6] = [
        b"",
        b"a",
        b"mySecretPassword123!",
        "pässwörd – ünïcode ✓".as_bytes(),
        &[0u8, 255, 1, 254, 0],
        &[b'x'; 1024],
    ];

    for password in passwords {
        let encoded = hash(password, Some(cheap())).expect("hash should succeed");
        assert!(
            verify(password, &encoded).expect("verify should succeed"),
            "password {password:?} should verify"
        );
    }
}

#[test]
fn wrong_password_is_false_not_error() {
    init_logging();
    let encoded = hash("TestVerify", Some(cheap())).unwrap();

    for wrong in ["wrongPassword", "testverify", "TestVerify ", "", "TestVerif"] {
        let result = verify(wrong, &encoded);
        assert!(
            matches!(result, Ok(false)),
            "{wrong:?} should be rejected without error, got {result:?}"
        );
    }
}

#[test]
fn default_params_round_trip() {
    init_logging();
    let password = "mySecretPassword123!";
    let encoded = hash(password, None).expect("hash should succeed");

    assert!(encoded.starts_with("$argon2id$"));
    assert!(verify(password, &encoded).unwrap());
    assert_eq!(
        EncodedHash::parse(&encoded).unwrap().params(),
        default_params()
    );
}

#[test]
fn output_matches_wire_grammar() {
    let params = Params::new(1024, 3, 2).unwrap();
    let encoded = hash("grammar", Some(params)).unwrap();

    let fields: Vec<&str> = encoded.split('$').collect();
    assert_eq!(fields.len(), 6);
    assert_eq!(fields[0], "");
    assert_eq!(fields[1], "argon2id");
    assert_eq!(fields[2], "v=19");
    assert_eq!(fields[3], "m=1024,t=3,p=2");

    let b64 = |s: &str| {
        s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
    };
    assert!(b64(fields[4]) && b64(fields[5]), "{encoded}");
    // 16 and 32 bytes without padding
    assert_eq!(fields[4].len(), 22);
    assert_eq!(fields[5].len(), 43);
}

#[test]
fn params_are_preserved() {
    for (m, t, p) in [(64, 1, 1), (512, 2, 4), (2048, 5, 8), (8 * 255, 1, 255)] {
        let params = Params::new(m, t, p).unwrap();
        let encoded = hash("preserve", Some(params)).unwrap();
        let parsed = EncodedHash::parse(&encoded).unwrap();

        assert_eq!(parsed.params().memory_cost_kib(), m);
        assert_eq!(parsed.params().time_cost(), t);
        assert_eq!(parsed.params().parallelism(), p);
        assert_eq!(parsed.salt().len(), SALT_LEN);
        assert_eq!(parsed.hash().len(), KEY_LEN);
    }
}

#[test]
fn parse_then_display_is_identity() {
    let encoded = hash("canonical", Some(cheap())).unwrap();
    let reparsed: EncodedHash = encoded.parse().unwrap();
    assert_eq!(reparsed.to_string(), encoded);
}

#[test]
fn hasher_upgrade_flow() {
    init_logging();
    let legacy = Hasher::new(Params::new(64, 1, 1).unwrap());
    let current = Hasher::new(cheap());

    let stored = legacy.hash(b"hunter2").unwrap();

    // Login with the current hasher: still verifies, but asks for a rehash
    assert!(current.verify(b"hunter2", &stored).unwrap());
    assert!(current.needs_rehash(&stored).unwrap());

    let upgraded = current.hash(b"hunter2").unwrap();
    assert!(current.verify(b"hunter2", &upgraded).unwrap());
    assert!(!current.needs_rehash(&upgraded).unwrap());
}

#[test]
fn params_from_json_config() {
    let params: Params =
        serde_json::from_str(r#"{"memory_cost_kib": 256, "time_cost": 1}"#).unwrap();
    assert_eq!(params, Params::new(256, 1, 1).unwrap());

    let encoded = hash("configured", Some(params)).unwrap();
    assert!(encoded.contains("$m=256,t=1,p=1$"));
}
