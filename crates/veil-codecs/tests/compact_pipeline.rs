//! End-to-end behavior of the compact pipeline as the cookie boundary
//! would use it: encode on login, decode on every request, anonymous on
//! anything that is not a valid token.

use std::sync::Arc;
use std::thread;

use veil_codecs::{Codec, CompactCodec, Identity};

const SECRET: &[u8; 17] = b"deployment-secret";

#[test]
fn login_and_request_cycle() {
    let codec = CompactCodec::safe(*SECRET);
    let user = Identity::new("urn:github:346236")
        .with_property("name", "Jeff Lebowski")
        .with_property("avatar", "https://example.com/jeff.png");

    let cookie = codec.encode(&user).unwrap();
    assert_eq!(codec.decode(&cookie).unwrap(), user);
}

#[test]
fn garbage_cookies_become_anonymous() {
    let codec = CompactCodec::safe(*SECRET);
    let garbage: &[&[u8]] = &[
        b" % tjw",
        b"",
        b"\xFF\xFE\xFD",
        b"dGhpcyBpcyBub3QgYSB0b2tlbg==",
        &[0x00; 256],
    ];
    for bytes in garbage {
        assert!(codec.decode(bytes).unwrap().is_anonymous());
    }
}

#[test]
fn tokens_are_opaque_and_non_deterministic() {
    let codec = CompactCodec::new(*SECRET);
    let user = Identity::new("urn:test:3");
    let a = codec.encode(&user).unwrap();
    let b = codec.encode(&user).unwrap();
    assert_ne!(a, b, "salt must vary between encodes");
    assert_eq!(codec.decode(&a).unwrap(), codec.decode(&b).unwrap());
}

#[test]
fn anonymous_identity_roundtrips() {
    let codec = CompactCodec::new(*SECRET);
    let cookie = codec.encode(&Identity::anonymous()).unwrap();
    assert!(codec.decode(&cookie).unwrap().is_anonymous());
}

#[test]
fn one_shared_instance_serves_many_threads() {
    let codec = Arc::new(CompactCodec::safe(*SECRET));
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let codec = Arc::clone(&codec);
            thread::spawn(move || {
                for request in 0..50 {
                    let user = Identity::new(format!("urn:worker:{worker}-{request}"));
                    let cookie = codec.encode(&user).unwrap();
                    assert_eq!(codec.decode(&cookie).unwrap(), user);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
