//! Laws of the subset relation, at the type level and on runtime descriptors.

use proptest::prelude::*;
use tola_range::prelude::*;
use tola_range::{
    AllOps, Capabilities, CapabilityError, ForwardOps, OpFlags, SubsetOf, UniqueOps,
};

/// Compile-time probe: is `$n` a subset of `$m`?
macro_rules! subset_of {
    ($n:ty, $m:ty) => {{
        struct __Probe<T>(core::marker::PhantomData<T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T> __Fallback for __Probe<T> {}

        impl<T: SubsetOf<$m>> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$n>::VAL
    }};
}

type Unique = UniqueCapabilities;
type Forward = ForwardCapabilities;
type Bidirectional = BidirectionalCapabilities;
type RandomAccess = RandomAccessCapabilities;
type BackOnly = Caps<Back, Unsupported, AllOps, Present>;
type ForwardNoCopy = Caps<Front, ForwardOps>;

// =============================================================================
// Type-level Subset
// =============================================================================

#[test]
fn test_type_level_reflexive() {
    assert!(subset_of!(Unique, Unique));
    assert!(subset_of!(Forward, Forward));
    assert!(subset_of!(Bidirectional, Bidirectional));
    assert!(subset_of!(RandomAccess, RandomAccess));
    assert!(subset_of!(BackOnly, BackOnly));
}

#[test]
fn test_type_level_chain() {
    assert!(subset_of!(Unique, Forward));
    assert!(subset_of!(Forward, Bidirectional));
    assert!(subset_of!(Bidirectional, RandomAccess));
    // Transitive closure of the above.
    assert!(subset_of!(Unique, RandomAccess));
    assert!(subset_of!(Forward, RandomAccess));
}

#[test]
fn test_type_level_rejections() {
    assert!(!subset_of!(Forward, Unique));
    assert!(!subset_of!(RandomAccess, Bidirectional));
    // Copy is never gained.
    assert!(!subset_of!(Forward, ForwardNoCopy));
    assert!(subset_of!(ForwardNoCopy, Forward));
    // Default directions must agree.
    assert!(!subset_of!(BackOnly, RandomAccess));
    // A direction is never gained.
    assert!(!subset_of!(Bidirectional, Forward));
}

#[test]
fn test_type_level_matches_descriptor() {
    fn check<N: CapabilityMap, M: CapabilityMap>(expected: bool) {
        assert_eq!(N::DESCRIPTOR.is_subset_of(&M::DESCRIPTOR), expected);
    }
    check::<Forward, Bidirectional>(subset_of!(Forward, Bidirectional));
    check::<Bidirectional, Forward>(subset_of!(Bidirectional, Forward));
    check::<ForwardNoCopy, Forward>(subset_of!(ForwardNoCopy, Forward));
    check::<Forward, ForwardNoCopy>(subset_of!(Forward, ForwardNoCopy));
    check::<BackOnly, RandomAccess>(subset_of!(BackOnly, RandomAccess));
    check::<Unique, RandomAccess>(subset_of!(Unique, RandomAccess));
}

// =============================================================================
// Runtime Descriptors
// =============================================================================

fn all_descriptors() -> Vec<Capabilities> {
    // Three flag patterns per direction keep the exhaustive space small.
    let sets = [
        None,
        Some(OpFlags::NONE),
        Some(OpFlags::EMPTY.union(OpFlags::FIRST)),
        Some(OpFlags::ALL),
    ];
    let mut all = Vec::new();
    for default in Slot::ALL {
        for copyable in [false, true] {
            for front in sets {
                for back in sets {
                    all.push(Capabilities::from_parts(default, copyable, [front, back]));
                }
            }
        }
    }
    all
}

#[test]
fn test_exhaustive_reflexive_and_transitive() {
    let all = all_descriptors();
    for a in &all {
        assert!(a.is_subset_of(a), "{a} is not a subset of itself");
        for b in &all {
            assert_eq!(a.is_subset_of(b), a.check_subset_of(b).is_ok());
            if !a.is_subset_of(b) {
                continue;
            }
            for c in &all {
                if b.is_subset_of(c) {
                    assert!(a.is_subset_of(c), "{a} <= {b} <= {c} but not {a} <= {c}");
                }
            }
        }
    }
}

#[test]
fn test_validity() {
    let invalid = Capabilities::new(Slot::Front).with_direction(Slot::Back, OpFlags::ALL);
    assert!(!invalid.is_valid());
    assert_eq!(
        invalid.validate(),
        Err(CapabilityError::MissingDefaultDirection(Slot::Front))
    );
    for caps in [
        Unique::DESCRIPTOR,
        Forward::DESCRIPTOR,
        Bidirectional::DESCRIPTOR,
        RandomAccess::DESCRIPTOR,
        BackOnly::DESCRIPTOR,
    ] {
        assert!(caps.validate().is_ok(), "{caps} should be valid");
    }
}

#[test]
fn test_descriptor_display() {
    assert_eq!(
        Bidirectional::DESCRIPTOR.to_string(),
        "{default: front, copy, front: [empty, first, drop_one, chop_destructive], \
         back: [empty, first, drop_one, chop_destructive]}"
    );
    assert_eq!(
        Caps::<Front, UniqueOps>::DESCRIPTOR.to_string(),
        "{default: front, front: [empty, chop_destructive]}"
    );
}

fn arb_flags() -> impl Strategy<Value = Option<OpFlags>> {
    prop_oneof![
        Just(None),
        (0u8..64).prop_map(|bits| Some(OpFlags::from_bits(bits))),
    ]
}

fn arb_caps() -> impl Strategy<Value = Capabilities> {
    (any::<bool>(), any::<bool>(), arb_flags(), arb_flags()).prop_map(
        |(back_default, copyable, front, back)| {
            let default = if back_default { Slot::Back } else { Slot::Front };
            Capabilities::from_parts(default, copyable, [front, back])
        },
    )
}

proptest! {
    /// Reflexivity: every descriptor is a subset of itself.
    #[test]
    fn test_subset_reflexive(a in arb_caps()) {
        prop_assert!(a.is_subset_of(&a));
        prop_assert!(a.check_subset_of(&a).is_ok());
    }

    /// Transitivity, with `b` widened from `a` and `c` widened from `b`.
    #[test]
    fn test_subset_transitive(a in arb_caps(), extra_b in arb_caps(), extra_c in arb_caps()) {
        let widen = |from: Capabilities, extra: Capabilities| {
            let mut wider = from.with_copy(from.copyable() || extra.copyable());
            for slot in Slot::ALL {
                if let Some(ops) = from.direction(slot) {
                    let more = extra.direction(slot).unwrap_or(OpFlags::NONE);
                    wider = wider.with_direction(slot, ops.union(more));
                } else if let Some(more) = extra.direction(slot) {
                    wider = wider.with_direction(slot, more);
                }
            }
            wider
        };
        let b = widen(a, extra_b);
        let c = widen(b, extra_c);
        prop_assert!(a.is_subset_of(&b));
        prop_assert!(b.is_subset_of(&c));
        prop_assert!(a.is_subset_of(&c));
    }

    /// Dropping directions or operations always yields a subset.
    #[test]
    fn test_removal_yields_subset(a in arb_caps(), mask in 0u8..64, drop_back in any::<bool>()) {
        let mut narrow = a;
        for slot in Slot::ALL {
            if let Some(ops) = a.direction(slot) {
                narrow = narrow.with_direction(slot, ops.difference(OpFlags::from_bits(mask)));
            }
        }
        if drop_back {
            narrow = narrow.without_direction(Slot::Back);
        }
        prop_assert!(narrow.is_subset_of(&a));
        let lost = usize::from(drop_back && a.has_direction(Slot::Back));
        prop_assert_eq!(a.surplus_directions(&narrow).count(), lost);
    }
}
