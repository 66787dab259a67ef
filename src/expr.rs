use arrayvec::ArrayVec;
use std::fmt;

use crate::arith::{rat, Operator, Rat};

/// Number of operands in an expression.
pub const OPERANDS: usize = 4;
/// Number of tokens in an expression: every operand, and one operator
/// joining each pair of neighbouring operands.
pub const TOKENS: usize = 2 * OPERANDS - 1;

/// A single element of an expression in reverse polish notation.
///
/// The derived ordering sorts operands before operators, and operands by
/// their numeric value. It is used to put the operands of commutative
/// operators in a fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token
{
    Num(i64),
    Op(Operator)
}

/// A fixed-capacity sequence of tokens.
pub type Tokens = ArrayVec<Token, TOKENS>;

/// Structure describing an expression
///
/// Struct `Expr` stores an expression over four operands in reverse polish
/// notation. Thus, an expression like
/// ```text
/// [Num(2), Num(3), Op(Add), Num(4), Op(Mul)]
/// ```
/// stands for `(2 + 3) * 4`. Expressions are only built from one of the
/// parenthesization shapes, so the token sequence is always well formed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Expr
{
    tokens: Tokens
}

impl Expr
{
    pub(crate) fn new(tokens: [Token; TOKENS]) -> Self
    {
        Expr { tokens: Tokens::from(tokens) }
    }

    /// The tokens of this expression, in reverse polish order.
    pub fn tokens(&self) -> &[Token]
    {
        &self.tokens
    }

    /// The operands of this expression, from left to right.
    pub fn operands(&self) -> ArrayVec<i64, OPERANDS>
    {
        self.tokens.iter()
            .filter_map(|token| match *token
                {
                    Token::Num(n) => Some(n),
                    Token::Op(_) => None
                })
            .collect()
    }

    /// Evaluate the expression exactly.
    ///
    /// Returns `None` if any division in the expression divides by zero.
    pub fn value(&self) -> Option<Rat>
    {
        self.fold(rat, |op, lhs, rhs| op.apply(&lhs, &rhs))
    }

    /// Return the canonical form of this expression.
    ///
    /// Bottom-up, the two operands of every addition and multiplication are
    /// put in ascending order, so that `(3 + 2) * (1 * 4)` and
    /// `(4 * 1) * (2 + 3)` both become `(1 * 4) * (2 + 3)`.
    pub fn canonical(&self) -> Option<Expr>
    {
        let tokens = self.fold(single, |op, lhs, rhs| {
            let (mut first, second) = if op.is_commutative() && rhs.as_slice() < lhs.as_slice()
                {
                    (rhs, lhs)
                }
                else
                {
                    (lhs, rhs)
                };
            first.try_extend_from_slice(&second).ok()?;
            first.try_push(Token::Op(op)).ok()?;
            Some(first)
        })?;

        Some(Expr { tokens })
    }

    /// Walk the expression with an explicit stack.
    ///
    /// Every operand is turned into a stack value by `leaf`, and every
    /// operator combines the top two stack values using `node`. Returns
    /// `None` if `node` does, or if the expression is malformed.
    pub(crate) fn fold<T, L, N>(&self, mut leaf: L, mut node: N) -> Option<T>
    where L: FnMut(i64) -> T, N: FnMut(Operator, T, T) -> Option<T>
    {
        let mut stack = ArrayVec::<T, OPERANDS>::new();
        for &token in self.tokens.iter()
        {
            match token
            {
                Token::Num(n) => {
                    stack.try_push(leaf(n)).ok()?;
                },
                Token::Op(op) => {
                    let rhs = stack.pop()?;
                    let lhs = stack.pop()?;
                    let res = node(op, lhs, rhs)?;
                    stack.push(res);
                }
            }
        }

        let res = stack.pop()?;
        if stack.is_empty() { Some(res) } else { None }
    }
}

fn single(n: i64) -> Tokens
{
    let mut res = Tokens::new();
    res.push(Token::Num(n));
    res
}

/// Wrap a compound subexpression in parentheses.
fn parenthesize((s, compound): (String, bool)) -> String
{
    if compound
    {
        format!("({})", s)
    }
    else
    {
        s
    }
}

impl fmt::Display for Expr
{
    /// Write the expression in fully parenthesized infix notation, e.g.
    /// `8 / (3 - (8 / 3))`. Negative operands are parenthesized as well.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let (s, _) = self.fold(
                |n| (n.to_string(), n < 0),
                |op, lhs, rhs| Some((format!("{} {} {}", parenthesize(lhs), op, parenthesize(rhs)), true))
            )
            .ok_or(fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::arith::Operator::*;

    fn n(v: i64) -> Token
    {
        Token::Num(v)
    }

    fn o(op: Operator) -> Token
    {
        Token::Op(op)
    }

    #[test]
    fn evaluates_in_reverse_polish_order()
    {
        // (2 + 3) * (4 * 1)
        let expr = Expr::new([n(2), n(3), o(Add), n(4), n(1), o(Mul), o(Mul)]);
        assert_eq!(expr.value(), Some(rat(20)));
        assert_eq!(expr.to_string(), "(2 + 3) * (4 * 1)");
        assert_eq!(expr.operands().as_slice(), &[2, 3, 4, 1]);
    }

    #[test]
    fn undefined_propagates()
    {
        // 4 + (6 / (1 - 1))
        let expr = Expr::new([n(4), n(6), n(1), n(1), o(Sub), o(Div), o(Add)]);
        assert_eq!(expr.value(), None);
    }

    #[test]
    fn negative_operands_are_parenthesized()
    {
        let expr = Expr::new([n(-3), n(2), n(10), o(Sub), o(Mul), n(0), o(Add)]);
        assert_eq!(expr.to_string(), "((-3) * (2 - 10)) + 0");
        assert_eq!(expr.value(), Some(rat(24)));
    }

    #[test]
    fn canonical_sorts_commutative_operands()
    {
        let a = Expr::new([n(2), n(3), o(Add), n(4), n(1), o(Mul), o(Mul)]);
        let b = Expr::new([n(3), n(2), o(Add), n(1), n(4), o(Mul), o(Mul)]);
        let ca = a.canonical().unwrap();
        assert_eq!(ca, b.canonical().unwrap());
        assert_eq!(ca.to_string(), "(1 * 4) * (2 + 3)");
        assert_eq!(ca.value(), a.value());
    }

    #[test]
    fn canonical_keeps_non_commutative_order()
    {
        let expr = Expr::new([n(8), n(3), n(8), n(3), o(Div), o(Sub), o(Div)]);
        let canon = expr.canonical().unwrap();
        assert_eq!(canon, expr);
        assert_eq!(canon.to_string(), "8 / (3 - (8 / 3))");
    }

    #[test]
    fn display_nested_grouping()
    {
        let expr = Expr::new([n(1), n(2), n(3), o(Mul), o(Sub), n(4), o(Div)]);
        assert_eq!(expr.to_string(), "(1 - (2 * 3)) / 4");
        assert_eq!(expr.value(), Some(Rat::new((-5).into(), 4.into())));
    }
}
