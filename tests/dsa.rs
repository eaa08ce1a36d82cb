//! End-to-end sign/verify tests.

use gost3410::{
    dev::Lcg,
    dsa::{signature::Verifier, Signature256, SigningKey256, SigningKey512},
    oid::{self, Mode, OidData},
};
use proptest::prelude::*;
use rand_core::SeedableRng;

const MSG: &[u8] = b"1234567890";

/// Every curve the registry knows must support a full
/// generate/derive/sign/verify cycle.
#[test]
fn round_trip_over_every_registered_curve() {
    let mut rng = Lcg::seed_from_u64(3410);
    let mut seen = 0;
    for entry in oid::find_by_mode(Mode::WCurveParams) {
        match entry.data {
            OidData::Curve256(wc) => {
                let mut sk = SigningKey256::generate(wc, &mut rng).unwrap();
                let vk = sk.verifying_key(&mut rng).unwrap();
                let sig = sk.sign_msg(&mut rng, MSG).unwrap();
                assert!(
                    vk.verify_msg(MSG, &sig).unwrap(),
                    "verify failed for {}",
                    entry.names[0]
                );
                assert!(!vk.verify_msg(b"1234567891", &sig).unwrap());
            }
            OidData::Curve512(wc) => {
                let mut sk = SigningKey512::generate(wc, &mut rng).unwrap();
                let vk = sk.verifying_key(&mut rng).unwrap();
                let sig = sk.sign_msg(&mut rng, MSG).unwrap();
                assert!(
                    vk.verify_msg(MSG, &sig).unwrap(),
                    "verify failed for {}",
                    entry.names[0]
                );
                assert!(!vk.verify_msg(b"1234567891", &sig).unwrap());
            }
            OidData::None => panic!("curve entry without parameters"),
        }
        seen += 1;
    }
    assert_eq!(seen, 8);
}

#[test]
fn verifier_trait_round_trip() {
    let curve = oid::find_by_name("id-tc26-gost-3410-2012-256-paramSetTest")
        .unwrap()
        .curve256()
        .unwrap();
    let mut rng = Lcg::seed_from_u64(99);
    let mut sk = SigningKey256::generate(curve, &mut rng).unwrap();
    let vk = sk.verifying_key(&mut rng).unwrap();
    let sig = sk.sign_msg(&mut rng, MSG).unwrap();
    assert!(vk.verify(MSG, &sig).is_ok());
    assert!(vk.verify(b"other message", &sig).is_err());
}

#[test]
fn signatures_are_randomized() {
    let curve = oid::find_by_name("cspa").unwrap().curve256().unwrap();
    let mut rng = Lcg::seed_from_u64(5);
    let mut sk = SigningKey256::generate(curve, &mut rng).unwrap();
    let vk = sk.verifying_key(&mut rng).unwrap();
    let first = sk.sign_msg(&mut rng, MSG).unwrap();
    let second = sk.sign_msg(&mut rng, MSG).unwrap();
    assert_ne!(first.to_bytes(), second.to_bytes());
    assert!(vk.verify_msg(MSG, &first).unwrap());
    assert!(vk.verify_msg(MSG, &second).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_and_verify(seed in any::<u64>(), msg in any::<[u8; 24]>()) {
        let curve = oid::find_by_name("id-tc26-gost-3410-2012-256-paramSetTest")
            .unwrap()
            .curve256()
            .unwrap();
        let mut rng = Lcg::seed_from_u64(seed);
        let mut sk = SigningKey256::generate(curve, &mut rng).unwrap();
        let vk = sk.verifying_key(&mut rng).unwrap();
        let sig = sk.sign_msg(&mut rng, &msg).unwrap();
        prop_assert!(vk.verify_msg(&msg, &sig).unwrap());
    }

    #[test]
    fn reject_tampered_signature(byte in 0usize..64, bit in 0usize..8) {
        let curve = oid::find_by_name("id-tc26-gost-3410-2012-256-paramSetTest")
            .unwrap()
            .curve256()
            .unwrap();
        let mut rng = Lcg::seed_from_u64(7777);
        let mut sk = SigningKey256::generate(curve, &mut rng).unwrap();
        let vk = sk.verifying_key(&mut rng).unwrap();
        let mut bytes = sk.sign_msg(&mut rng, MSG).unwrap().to_bytes();

        // tweak signature to make it invalid
        bytes[byte] ^= 1 << bit;

        let tampered = Signature256::from_slice(&bytes).unwrap();
        prop_assert!(!vk.verify_msg(MSG, &tampered).unwrap());
    }
}
