//! Runtime mirror of capability maps.
//!
//! `Capabilities` is a plain `Copy` value computed in const context from a
//! map type. The type-level map remains the source of truth; this mirror is
//! what gets logged, printed and compared when the set of surplus directions
//! has to be found at run time.

use core::fmt;

use crate::direction::Slot;
use crate::error::CapabilityError;

/// Bitset of operations for one direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OpFlags(u8);

impl OpFlags {
    pub const NONE: OpFlags = OpFlags(0);
    pub const ALL: OpFlags = OpFlags(0b0011_1111);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        OpFlags(bits & Self::ALL.0)
    }

    /// One flag per operation, in bit order.
    pub const fn collect(flags: [bool; 6]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < flags.len() {
            if flags[i] {
                bits |= 1 << i;
            }
            i += 1;
        }
        OpFlags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: OpFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_subset_of(self, other: OpFlags) -> bool {
        other.contains(self)
    }

    #[inline]
    pub const fn union(self, other: OpFlags) -> Self {
        OpFlags(self.0 | other.0)
    }

    #[inline]
    pub const fn difference(self, other: OpFlags) -> Self {
        OpFlags(self.0 & !other.0)
    }

    /// Names of the set operations, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> + use<> {
        Self::NAMED
            .into_iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| name)
    }
}

impl fmt::Debug for OpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl fmt::Display for OpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}

/// Runtime description of a capability map.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    default_direction: Slot,
    copyable: bool,
    directions: [Option<OpFlags>; 2],
}

impl Capabilities {
    /// A description with no directions and no copy.
    ///
    /// Not valid until the default direction is added.
    pub const fn new(default_direction: Slot) -> Self {
        Capabilities {
            default_direction,
            copyable: false,
            directions: [None, None],
        }
    }

    pub const fn from_parts(
        default_direction: Slot,
        copyable: bool,
        directions: [Option<OpFlags>; 2],
    ) -> Self {
        Capabilities {
            default_direction,
            copyable,
            directions,
        }
    }

    pub const fn with_copy(mut self, copyable: bool) -> Self {
        self.copyable = copyable;
        self
    }

    pub const fn with_direction(mut self, slot: Slot, ops: OpFlags) -> Self {
        self.directions[slot.index()] = Some(ops);
        self
    }

    pub const fn without_direction(mut self, slot: Slot) -> Self {
        self.directions[slot.index()] = None;
        self
    }

    #[inline]
    pub const fn default_direction(&self) -> Slot {
        self.default_direction
    }

    #[inline]
    pub const fn copyable(&self) -> bool {
        self.copyable
    }

    #[inline]
    pub const fn direction(&self, slot: Slot) -> Option<OpFlags> {
        self.directions[slot.index()]
    }

    #[inline]
    pub const fn has_direction(&self, slot: Slot) -> bool {
        self.directions[slot.index()].is_some()
    }

    /// Does direction `slot` declare every operation in `ops`?
    pub const fn supports(&self, slot: Slot, ops: OpFlags) -> bool {
        match self.directions[slot.index()] {
            Some(flags) => flags.contains(ops),
            None => false,
        }
    }

    /// The default direction is a key.
    pub const fn is_valid(&self) -> bool {
        self.has_direction(self.default_direction)
    }

    pub fn validate(&self) -> Result<(), CapabilityError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CapabilityError::MissingDefaultDirection(self.default_direction))
        }
    }

    /// Structural subset: same default direction, copy implies copy, every
    /// present direction of `self` is present in `other` with a superset of
    /// operations.
    pub const fn is_subset_of(&self, other: &Capabilities) -> bool {
        if self.default_direction as u8 != other.default_direction as u8 {
            return false;
        }
        if self.copyable && !other.copyable {
            return false;
        }
        let mut i = 0;
        while i < self.directions.len() {
            if let Some(mine) = self.directions[i] {
                match other.directions[i] {
                    Some(theirs) if mine.is_subset_of(theirs) => {}
                    _ => return false,
                }
            }
            i += 1;
        }
        true
    }

    /// Like [`is_subset_of`](Self::is_subset_of), reporting the first
    /// violation.
    pub fn check_subset_of(&self, other: &Capabilities) -> Result<(), CapabilityError> {
        if self.default_direction != other.default_direction {
            return Err(CapabilityError::DefaultDirectionMismatch {
                expected: other.default_direction,
                found: self.default_direction,
            });
        }
        if self.copyable && !other.copyable {
            return Err(CapabilityError::CopyUnavailable);
        }
        for slot in Slot::ALL {
            let Some(mine) = self.direction(slot) else {
                continue;
            };
            let Some(theirs) = other.direction(slot) else {
                return Err(CapabilityError::MissingDirection(slot));
            };
            let missing = mine.difference(theirs);
            if !missing.is_empty() {
                return Err(CapabilityError::MissingOperations { slot, missing });
            }
        }
        Ok(())
    }

    /// Directions present in `self` but absent from `narrower`, in slot order.
    pub fn surplus_directions(
        &self,
        narrower: &Capabilities,
    ) -> impl Iterator<Item = Slot> + use<> {
        let (wide, narrow) = (*self, *narrower);
        Slot::ALL
            .into_iter()
            .filter(move |&slot| wide.has_direction(slot) && !narrow.has_direction(slot))
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{default: {}", self.default_direction)?;
        if self.copyable {
            f.write_str(", copy")?;
        }
        for slot in Slot::ALL {
            if let Some(ops) = self.direction(slot) {
                write!(f, ", {slot}: {ops}")?;
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const FORWARD: OpFlags = OpFlags::EMPTY
        .union(OpFlags::FIRST)
        .union(OpFlags::DROP_ONE)
        .union(OpFlags::CHOP_DESTRUCTIVE);

    #[test]
    fn test_flags() {
        assert!(OpFlags::ALL.contains(FORWARD));
        assert!(FORWARD.is_subset_of(OpFlags::ALL));
        assert!(!OpFlags::ALL.is_subset_of(FORWARD));
        assert_eq!(
            OpFlags::ALL.difference(FORWARD),
            OpFlags::SIZE.union(OpFlags::DROP_N)
        );
        assert_eq!(OpFlags::from_bits(0xff), OpFlags::ALL);
        assert_eq!(FORWARD.to_string(), "[empty, first, drop_one, chop_destructive]");
    }

    #[test]
    fn test_validate() {
        let caps = Capabilities::new(Slot::Back).with_direction(Slot::Front, OpFlags::ALL);
        assert_eq!(
            caps.validate(),
            Err(CapabilityError::MissingDefaultDirection(Slot::Back))
        );
        assert!(caps.with_direction(Slot::Back, OpFlags::NONE).validate().is_ok());
    }

    #[test]
    fn test_subset_reports() {
        let wide = Capabilities::new(Slot::Front)
            .with_copy(true)
            .with_direction(Slot::Front, OpFlags::ALL)
            .with_direction(Slot::Back, FORWARD);
        let narrow = Capabilities::new(Slot::Front)
            .with_copy(true)
            .with_direction(Slot::Front, FORWARD);

        assert!(narrow.is_subset_of(&wide));
        assert!(narrow.check_subset_of(&wide).is_ok());
        assert!(!wide.is_subset_of(&narrow));
        assert_eq!(
            wide.check_subset_of(&narrow),
            Err(CapabilityError::MissingOperations {
                slot: Slot::Front,
                missing: OpFlags::SIZE.union(OpFlags::DROP_N),
            })
        );

        let back_only = narrow
            .without_direction(Slot::Front)
            .with_direction(Slot::Back, OpFlags::ALL);
        assert_eq!(
            back_only.check_subset_of(&wide),
            Err(CapabilityError::MissingOperations {
                slot: Slot::Back,
                missing: OpFlags::SIZE.union(OpFlags::DROP_N),
            })
        );
        let plain = wide.with_copy(false);
        assert_eq!(
            plain.check_subset_of(&plain.without_direction(Slot::Back)),
            Err(CapabilityError::MissingDirection(Slot::Back))
        );
        assert_eq!(
            wide.check_subset_of(&wide.with_copy(false)),
            Err(CapabilityError::CopyUnavailable)
        );
    }

    #[test]
    fn test_surplus_directions() {
        let both = Capabilities::new(Slot::Front)
            .with_direction(Slot::Front, FORWARD)
            .with_direction(Slot::Back, FORWARD);
        let front = both.without_direction(Slot::Back);
        assert!(both.surplus_directions(&front).eq([Slot::Back]));
        assert!(front.surplus_directions(&front).next().is_none());
    }

    #[test]
    fn test_display() {
        let caps = Capabilities::new(Slot::Front)
            .with_copy(true)
            .with_direction(Slot::Front, OpFlags::EMPTY.union(OpFlags::SIZE));
        assert_eq!(caps.to_string(), "{default: front, copy, front: [empty, size]}");
    }
}
