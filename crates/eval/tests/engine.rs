//! Engine scenarios against generated tables and an f64 reference.

use qgauss_eval::{AREA_STEPS, Engine, VALUE_STEPS};
use fixp::mul_q60;
use std::sync::OnceLock;
use tables::defs::{X_AREA_LAST, X_CUTOFF_AREA, X_CUTOFF_VAL};
use tables::{AreaTable, TableSet};
use tablegen::gauss;

/// Q0.60 scale factor.
const Q60_SCALE: f64 = 1_152_921_504_606_846_976.0;

/// Q1.63 scale factor.
const Q63_SCALE: f64 = 9_223_372_036_854_775_808.0;

/// Acceptance bound for reference comparisons: 32 fractional bits.
const REF_TOLERANCE: i128 = 1 << 32;

/// Intervals drawn from production probes, Q0.60.
const SAMPLE_INTERVALS: &[(i64, i64)] = &[
    (99_579_402_609_526_988, 7_425_003_539_903_636_769),
    (391_998_265_134_951_259, 4_445_867_764_522_350_999),
    (4_679_892_017_098_720_169, 7_256_412_861_140_582_561),
    (3_484_757_794_108_300_175, 4_498_730_541_098_444_520),
    (2_911_093_460_947_251_010, 6_914_916_448_836_742_269),
    (2_047_386_320_583_395_361, 5_220_486_656_128_480_941),
    (1_356_139_482_228_167_151, 1_978_682_097_498_857_857),
    (3_700_365_327_485_564_274, 6_758_338_356_901_996_127),
    (6_524_930_503_752_959_270, 7_383_887_308_445_612_295),
    (568_217_745_962_552_118, 896_162_684_013_884_411),
    (1_513_663_312_995_625_190, 5_748_634_439_185_411_925),
    (4_235_312_100_249_258_904, 4_560_738_432_196_708_095),
    (1_237_478_082_298_972_808, 3_579_092_729_364_126_108),
    (2_650_486_900_090_698_427, 4_099_746_673_247_609_743),
    (654_978_673_396_279_716, 3_572_562_154_468_673_967),
    (2_433_476_531_800_154_037, 3_282_354_661_901_990_650),
    (1_707_645_576_724_566_288, 2_629_881_775_389_690_099),
    (412_075_787_708_532_694, 3_970_506_817_725_227_677),
    (4_647_358_997_191_779_009, 4_826_663_565_125_639_429),
    (1_041_480_481_857_140_437, 3_053_127_932_975_496_566),
];

fn tables() -> &'static TableSet {
    static TABLES: OnceLock<TableSet> = OnceLock::new();
    TABLES.get_or_init(tablegen::build_table_set)
}

fn engine() -> Engine<'static> {
    Engine::new(tables())
}

/// xorshift64, for deterministic test sampling.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    /// A Q0.60 point in `[0, bound]`.
    fn point(&mut self, bound: i64) -> i64 {
        (self.next() % (bound as u64 + 1)) as i64
    }
}

/// `round(g(x) * 2^60)` for a Q0.60 argument.
fn value_reference(x: i64) -> i64 {
    (gauss::density(x as f64 / Q60_SCALE) * Q60_SCALE).round() as i64
}

/// `round(area * 2^63)` for a Q0.60 interval, wide enough not to wrap.
fn area_reference(left: i64, right: i64) -> i128 {
    (gauss::integral(left as f64 / Q60_SCALE, right as f64 / Q60_SCALE) * Q63_SCALE).round() as i128
}

/// An engine area result in the unsigned Q1.63 view.
fn area_bits(left: i64, right: i64) -> i128 {
    i128::from(engine().area(left, right) as u64)
}

#[test]
fn value_at_zero_is_zero() {
    assert_eq!(engine().value(0), 0);
}

#[test]
fn value_just_past_the_cutoff_is_zero() {
    assert_eq!(engine().value(X_CUTOFF_VAL), engine().value_with_steps(X_CUTOFF_VAL).result());
    assert_ne!(engine().value(X_CUTOFF_VAL), 0);
    assert_eq!(engine().value(X_CUTOFF_VAL + 1), 0);
}

#[test]
fn value_at_one_matches_exp_minus_half() {
    // round(exp(-1/2) * 2^60)
    let want = 699_282_240_786_072_831;
    let got = engine().value(1 << 60);
    assert!((got - want).abs() <= 1 << 32, "got {got}");
}

#[test]
fn value_tracks_the_reference_across_the_domain() {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    for _ in 0..500 {
        let x = rng.point(X_CUTOFF_VAL - 1) + 1;
        let got = engine().value(x);
        let want = value_reference(x);
        assert!((got - want).abs() <= 1 << 32, "x={x} got={got} want={want}");
    }
}

#[test]
fn value_schedule_reproduces_its_own_steps() {
    let mut rng = Rng(0xDEAD_BEEF_CAFE_F00D);
    for _ in 0..64 {
        let x = rng.point(X_CUTOFF_VAL - 1) + 1;
        let sv = engine().value_with_steps(x);
        assert_eq!(sv.len(), VALUE_STEPS);

        let segment = tables().values.segment_for(x);
        let s1 = mul_q60(segment.a, x);
        let s2 = s1 + segment.b;
        let s3 = mul_q60(s2, x);
        let s4 = s3 + segment.c;
        let s5 = mul_q60(s4, x);
        let s6 = s5 + segment.d;
        assert_eq!(sv.as_slice(), &[s1, s2, s3, s4, s5, s6]);
        assert_eq!(engine().value(x), s6);
    }
}

#[test]
fn area_polynomial_schedule_reproduces_its_own_steps() {
    let mut rng = Rng(0x0123_4567_89AB_CDEF);
    for _ in 0..64 {
        let x = rng.point(X_AREA_LAST - 1) + 1;
        let sv = engine().area_poly_value(x, None);
        assert_eq!(sv.len(), AREA_STEPS);

        let coefs = tables().areas.get(AreaTable::index_of(x));
        let mut manual = Vec::with_capacity(AREA_STEPS);
        let mut s = mul_q60(coefs.c1, x);
        manual.push(s);
        for constant in [coefs.c2, coefs.c3, coefs.c4, coefs.c5, coefs.c6] {
            s += constant;
            manual.push(s);
            s = mul_q60(s, x);
            manual.push(s);
        }
        assert_eq!(sv.as_slice(), manual.as_slice());
    }
}

#[test]
fn evaluations_are_idempotent() {
    let x = 3_177_047_211_239_085_460;
    assert_eq!(engine().value(x), engine().value(x));
    let (l, r) = SAMPLE_INTERVALS[4];
    assert_eq!(engine().area(l, r), engine().area(l, r));
}

#[test]
fn zero_width_and_reversed_areas_are_zero() {
    let mut rng = Rng(0xFEED_FACE_0BAD_F00D);
    for _ in 0..32 {
        let x = rng.point(X_CUTOFF_AREA);
        assert_eq!(engine().area(x, x), 0);
        let y = rng.point(X_CUTOFF_AREA);
        let (lo, hi) = (x.min(y), x.max(y));
        if lo != hi {
            assert_eq!(engine().area(hi, lo), 0);
        }
    }
}

#[test]
fn areas_from_zero_are_positive_below_the_cutoff() {
    // A single-ulp sliver is the one interval the truncating schedule may
    // round to zero mass, so the sweep starts at two ulps.
    let mut rng = Rng(0xA5A5_A5A5_5A5A_5A5A);
    for _ in 0..64 {
        let x = rng.point(X_CUTOFF_AREA - 2) + 2;
        assert!(engine().area(0, x) as u64 > 0, "x={x}");
    }
    assert!(engine().area(0, 2) as u64 > 0);
    assert!(engine().area(0, X_CUTOFF_AREA) as u64 > 0);
}

#[test]
fn whole_support_area_is_the_tabled_entry() {
    let whole = tables().dyadic.whole_support();
    assert_eq!(engine().area(0, X_AREA_LAST) as u64, whole);
    assert_eq!(engine().area(0, X_AREA_LAST + 1) as u64, whole);
}

#[test]
fn single_segment_area_equals_the_subscale_integral() {
    // Both endpoints sit in finest-scale segment 451, so the cover accepts
    // nothing and the whole answer is one residual integral.
    let (l, r) = (4_066_528_627_030_704_547, 4_071_254_063_142_928_384);
    assert_eq!(engine().area(l, r), engine().subscale_integral(l, r));
}

#[test]
fn subscale_integrals_track_the_reference() {
    let mut rng = Rng(0x1357_9BDF_2468_ACE0);
    for _ in 0..200 {
        let segment = (rng.next() % 830) as i64;
        let base = segment << 53;
        let a = base + rng.point((1 << 53) - 1);
        let b = base + rng.point((1 << 53) - 1);
        let (l, r) = (a.min(b), a.max(b));
        let got = i128::from(engine().subscale_integral(l, r));
        let want = area_reference(l, r);
        assert!((got - want).abs() <= REF_TOLERANCE, "l={l} r={r} got={got} want={want}");
    }
}

#[test]
fn areas_track_the_reference_on_production_intervals() {
    for &(l, r) in SAMPLE_INTERVALS {
        let got = area_bits(l, r);
        let want = area_reference(l, r);
        assert!((got - want).abs() <= REF_TOLERANCE, "l={l} r={r} got={got} want={want}");
    }
}

#[test]
fn areas_track_the_reference_on_random_intervals() {
    let mut rng = Rng(0xB16B_00B5_DEFE_C8ED);
    for _ in 0..100 {
        let a = rng.point(X_CUTOFF_AREA);
        let b = rng.point(X_CUTOFF_AREA);
        let (l, r) = (a.min(b), a.max(b));
        let got = area_bits(l, r);
        let want = area_reference(l, r);
        assert!((got - want).abs() <= REF_TOLERANCE, "l={l} r={r} got={got} want={want}");
    }
}

#[test]
fn split_areas_add_up() {
    // Two extra residual integrals may shift the split sum by a bounded
    // rounding, far below the reference tolerance.
    const ADDITIVITY_TOLERANCE: i128 = 1 << 20;

    let mut rng = Rng(0xC0FF_EE00_C0FF_EE00);
    for _ in 0..100 {
        let mut points =
            [rng.point(X_CUTOFF_AREA), rng.point(X_CUTOFF_AREA), rng.point(X_CUTOFF_AREA)];
        points.sort_unstable();
        let [l, m, r] = points;
        let whole = area_bits(l, r);
        let split = i128::from(engine().area(l, m) as u64) + i128::from(engine().area(m, r) as u64);
        assert!((whole - split).abs() <= ADDITIVITY_TOLERANCE, "l={l} m={m} r={r}");
    }
}

#[test]
fn no_step_overflows_across_the_domain_sweep() {
    // Debug builds run with overflow checks on: any intermediate leaving
    // the signed 64-bit range panics the sweep.
    let stride = 1i64 << 40;
    let mut x = stride;
    let mut checksum = 0i64;
    while x as u64 <= X_CUTOFF_VAL as u64 {
        checksum ^= engine().value_with_steps(x).result();
        if x as u64 <= X_AREA_LAST as u64 {
            checksum ^= engine().area_poly_value(x, None).result();
        }
        x += stride;
    }
    assert_ne!(checksum, i64::MIN, "sweep must visit the whole domain");
}

#[test]
fn range_cover_never_overflows_on_random_intervals() {
    let mut rng = Rng(0x0DDB_A115_EEDF_00D1);
    let mut checksum = 0u64;
    for _ in 0..2000 {
        let a = rng.point(X_AREA_LAST);
        let b = rng.point(X_AREA_LAST);
        checksum ^= engine().area(a.min(b), a.max(b)) as u64;
    }
    assert_ne!(checksum, u64::MAX, "sweep must visit every interval");
}
