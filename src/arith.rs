use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use std::fmt;

/// Type for all intermediate values.
///
/// Values are arbitrary precision rationals, so every operation is exact and
/// no combination of input numbers can overflow. Comparing a result with the
/// target is therefore an exact comparison: `72/3` equals `24`, and nothing
/// that merely comes close ever does.
pub type Rat = BigRational;

/// Create a rational from an integer operand.
pub fn rat(n: i64) -> Rat
{
    Rat::from_integer(BigInt::from(n))
}

pub fn add(a: &Rat, b: &Rat) -> Rat
{
    a + b
}

pub fn subtract(a: &Rat, b: &Rat) -> Rat
{
    a - b
}

pub fn multiply(a: &Rat, b: &Rat) -> Rat
{
    a * b
}

/// Divide `a` by `b`.
///
/// Returns `None` when `b` is zero. This is the only way a computation can
/// become undefined.
pub fn divide(a: &Rat, b: &Rat) -> Option<Rat>
{
    if b.is_zero()
    {
        None
    }
    else
    {
        Some(a / b)
    }
}

/// A binary arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator
{
    Add,
    Sub,
    Mul,
    Div
}

impl Operator
{
    /// The four operators, in the order they are tried.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// The symbol used to display this operator.
    pub fn symbol(self) -> char
    {
        match self
        {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/'
        }
    }

    /// Whether the operands of this operator may be swapped.
    pub fn is_commutative(self) -> bool
    {
        matches!(self, Operator::Add | Operator::Mul)
    }

    /// Apply this operator to `a` and `b`.
    ///
    /// Returns `None` if the result is undefined.
    pub fn apply(self, a: &Rat, b: &Rat) -> Option<Rat>
    {
        match self
        {
            Operator::Add => Some(add(a, b)),
            Operator::Sub => Some(subtract(a, b)),
            Operator::Mul => Some(multiply(a, b)),
            Operator::Div => divide(a, b)
        }
    }
}

impl fmt::Display for Operator
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.symbol())
    }
}
