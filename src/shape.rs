use crate::arith::{Operator, Rat};
use crate::expr::{Expr, Token, OPERANDS};

/// Operands of an expression, in the order they appear in it.
pub type Operands = [i64; OPERANDS];
/// Operators of an expression, one for each internal node of a shape.
pub type OperatorTriple = [Operator; OPERANDS - 1];

/// A way to parenthesize four operands with three binary operators.
///
/// With operands `a`, `b`, `c`, `d` and operators `o1`, `o2`, `o3`, these
/// are the five possible full parenthesizations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape
{
    /// `(a o1 b) o2 (c o3 d)`
    Pairs,
    /// `((a o1 b) o2 c) o3 d`
    LeftChain,
    /// `a o1 (b o2 (c o3 d))`
    RightChain,
    /// `(a o1 (b o2 c)) o3 d`
    LeftNested,
    /// `a o1 ((b o2 c) o3 d)`
    RightNested
}

impl Shape
{
    pub const ALL: [Shape; 5] = [
        Shape::Pairs,
        Shape::LeftChain,
        Shape::RightChain,
        Shape::LeftNested,
        Shape::RightNested
    ];

    /// Build the expression of this shape over `nums` and `ops`.
    pub fn expression(self, nums: &Operands, ops: &OperatorTriple) -> Expr
    {
        let [a, b, c, d] = nums.map(Token::Num);
        let [o1, o2, o3] = ops.map(Token::Op);
        let tokens = match self
        {
            Shape::Pairs       => [a, b, o1, c, d, o3, o2],
            Shape::LeftChain   => [a, b, o1, c, o2, d, o3],
            Shape::RightChain  => [a, b, c, d, o3, o2, o1],
            Shape::LeftNested  => [a, b, c, o2, o1, d, o3],
            Shape::RightNested => [a, b, c, o2, d, o3, o1]
        };

        Expr::new(tokens)
    }

    /// Evaluate this shape over `nums` and `ops`.
    ///
    /// Returns the exact value, or `None` if it is undefined, together with
    /// the parenthesized string form of the expression.
    pub fn evaluate(self, nums: &Operands, ops: &OperatorTriple) -> (Option<Rat>, String)
    {
        let expr = self.expression(nums, ops);
        (expr.value(), expr.to_string())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::arith::rat;
    use crate::arith::Operator::*;

    #[test]
    fn layouts()
    {
        let nums = [1, 2, 3, 4];
        let ops = [Add, Mul, Sub];
        let strings: Vec<_> = Shape::ALL.iter()
            .map(|shape| shape.evaluate(&nums, &ops).1)
            .collect();
        assert_eq!(strings, vec![
            "(1 + 2) * (3 - 4)",
            "((1 + 2) * 3) - 4",
            "1 + (2 * (3 - 4))",
            "(1 + (2 * 3)) - 4",
            "1 + ((2 * 3) - 4)"
        ]);
    }

    #[test]
    fn values()
    {
        let nums = [1, 2, 3, 4];
        let ops = [Add, Mul, Sub];
        let values: Vec<_> = Shape::ALL.iter()
            .map(|shape| shape.evaluate(&nums, &ops).0)
            .collect();
        assert_eq!(values, vec![
            Some(rat(-3)),
            Some(rat(5)),
            Some(rat(-1)),
            Some(rat(3)),
            Some(rat(3))
        ]);
    }

    #[test]
    fn shapes_are_distinct()
    {
        let nums = [100, 10, 5, 1];
        let ops = [Sub, Div, Sub];
        let mut values: Vec<_> = Shape::ALL.iter()
            .map(|shape| shape.expression(&nums, &ops).value())
            .collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), Shape::ALL.len());
    }

    #[test]
    fn undefined_anywhere_is_undefined()
    {
        // Zero is a dividend somewhere, and then a divisor further up
        let nums = [3, 0, 2, 1];
        for &shape in Shape::ALL.iter()
        {
            assert_eq!(shape.evaluate(&nums, &[Div, Div, Div]).0, None);
        }
        assert_eq!(Shape::LeftChain.evaluate(&[0, 3, 2, 1], &[Div, Div, Div]).0, Some(rat(0)));
    }

    #[test]
    fn exact_fraction_path()
    {
        let (value, string) = Shape::RightChain.evaluate(&[8, 3, 8, 3], &[Div, Sub, Div]);
        assert_eq!(value, Some(rat(24)));
        assert_eq!(string, "8 / (3 - (8 / 3))");
    }
}
