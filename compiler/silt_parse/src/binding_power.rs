//! Binding powers.

use std::fmt;

/// Precedence of an infix or postfix parselet; higher binds tighter.
///
/// The named levels are spaced by ten so a grammar can slot its own
/// operators between them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct BindingPower(u32);

impl BindingPower {
    /// Threshold that accepts every registered operator. Tokens without an
    /// infix parselet have this power, so they end any expression.
    pub const NONE: BindingPower = BindingPower(0);
    pub const ASSIGNMENT: BindingPower = BindingPower(10);
    pub const CONDITIONAL: BindingPower = BindingPower(20);
    pub const SUM: BindingPower = BindingPower(30);
    pub const PRODUCT: BindingPower = BindingPower(40);
    pub const EXPONENT: BindingPower = BindingPower(50);
    pub const PREFIX: BindingPower = BindingPower(60);
    pub const POSTFIX: BindingPower = BindingPower(70);
    pub const CALL: BindingPower = BindingPower(80);

    #[inline]
    pub const fn new(value: u32) -> Self {
        BindingPower(value)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Threshold for the right operand of a right-associative operator.
    #[inline]
    #[must_use]
    pub const fn minus_one(self) -> Self {
        BindingPower(self.0.saturating_sub(1))
    }
}

impl fmt::Debug for BindingPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bp({})", self.0)
    }
}

impl From<u32> for BindingPower {
    fn from(value: u32) -> Self {
        BindingPower(value)
    }
}
