//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//! Every flag of a capability map is one of these two types.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

/// Implemented only for `Present`.
///
/// Used as the final step of every capability check: a query evaluates to a
/// `Bool`, and the bound `Query: IsPresent` only holds when it is `Present`.
#[diagnostic::on_unimplemented(
    message = "capability requirement evaluated to `{Self}`",
    label = "this capability is not part of the map",
    note = "add the operation to the capability map, or use a map that declares it"
)]
pub trait IsPresent: Bool {}

impl IsPresent for Present {}

/// Logical implication: `Self -> Other`.
///
/// `Absent` implies anything; `Present` implies only `Present`.
/// Subset checks are built from one implication per flag.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not imply `{Other}`",
    label = "a flag set here is missing from the wider capability map"
)]
pub trait Implies<Other: Bool>: Bool {}

impl<Other: Bool> Implies<Other> for Absent {}

impl Implies<Present> for Present {}
