//! Projective point arithmetic tests over every registered curve.

use gost3410::{
    dev::Lcg,
    oid::{self, Mode, OidData},
    Mpzn, WCurve, WPoint,
};
use rand_core::SeedableRng;

fn exercise_curve<const N: usize>(wc: &'static WCurve<N>, rng: &mut Lcg) {
    assert!(wc.is_ok());

    let g = WPoint::generator(wc);
    assert!(g.is_on_curve(wc));
    assert!(g.has_order_q(wc));

    // doubling agrees with addition and stays on the curve
    let doubled = g.double(wc);
    let added = g.add(&g, wc);
    assert!(doubled.is_on_curve(wc));
    assert_points_eq(&doubled, &added, wc);

    // [a]([b]P) == [a·b mod q]P for random scalars
    let a = Mpzn::random_mod(rng, &wc.q).unwrap();
    let b = Mpzn::random_mod(rng, &wc.q).unwrap();
    let a_m = a.to_montgomery(&wc.q, wc.nq, &wc.r2q);
    let ab = a_m.mul_montgomery(&b, &wc.q, wc.nq);
    let nested = g.mul(&b, wc).mul(&a, wc);
    let direct = g.mul(&ab, wc);
    assert!(nested.is_on_curve(wc));
    assert_points_eq(&nested, &direct, wc);

    // the subgroup order annihilates arbitrary multiples
    assert!(bool::from(direct.mul(&wc.q, wc).is_infinity()));

    // reduction is idempotent
    let reduced = nested.reduce(wc);
    assert_points_eq(&reduced, &reduced.reduce(wc), wc);
}

fn assert_points_eq<const N: usize>(a: &WPoint<N>, b: &WPoint<N>, wc: &WCurve<N>) {
    match (a.affine_coordinates(wc), b.affine_coordinates(wc)) {
        (Some((ax, ay)), Some((bx, by))) => {
            assert_eq!(ax, bx);
            assert_eq!(ay, by);
        }
        (None, None) => (),
        _ => panic!("one point is infinite, the other is not"),
    }
}

#[test]
fn group_laws_hold_on_every_registered_curve() {
    let mut rng = Lcg::seed_from_u64(2012);
    let mut seen = 0;
    for entry in oid::find_by_mode(Mode::WCurveParams) {
        match entry.data {
            OidData::Curve256(wc) => exercise_curve(wc, &mut rng),
            OidData::Curve512(wc) => exercise_curve(wc, &mut rng),
            OidData::None => panic!("curve entry without parameters"),
        }
        seen += 1;
    }
    assert_eq!(seen, 8);
}

#[test]
fn infinity_handling() {
    let wc = &gost3410::params::TC26_GOST_3410_2012_256_PARAM_SET_TEST;
    let inf = WPoint::infinity(wc);
    assert!(bool::from(inf.is_infinity()));
    assert!(inf.is_on_curve(wc));
    assert!(bool::from(inf.double(wc).is_infinity()));
    assert!(bool::from(inf.add(&inf, wc).is_infinity()));
    assert!(bool::from(inf.mul(&wc.q, wc).is_infinity()));

    let g = WPoint::generator(wc);
    assert_points_eq(&inf.add(&g, wc), &g, wc);
    assert_points_eq(&g.add(&inf, wc), &g, wc);
}
