use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::arith::{Operator, Rat};
use crate::expr::{Expr, OPERANDS};
use crate::shape::{Operands, OperatorTriple, Shape};

/// Number of orderings of the four operands.
pub const ORDERINGS: usize = 24;
/// Number of ways to fill the three operator slots.
pub const TRIPLES: usize = 64;

/// A single point in the search space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate
{
    pub operands: Operands,
    pub operators: OperatorTriple,
    pub shape: Shape
}

impl Candidate
{
    pub fn expression(&self) -> Expr
    {
        self.shape.expression(&self.operands, &self.operators)
    }
}

/// Return all orderings of the numbers in `nrs`.
///
/// Orderings are by position, so equal numbers are still permuted as if they
/// were distinct, and there are always 24 orderings. They are generated in
/// lexicographic order of the positions.
pub fn orderings(nrs: &Operands) -> ArrayVec<Operands, ORDERINGS>
{
    let mut res = ArrayVec::new();
    for i in 0..OPERANDS
    {
        for j in (0..OPERANDS).filter(|&j| j != i)
        {
            for k in (0..OPERANDS).filter(|&k| k != i && k != j)
            {
                // Positions add up to 0 + 1 + 2 + 3
                let l = 6 - i - j - k;
                res.push([nrs[i], nrs[j], nrs[k], nrs[l]]);
            }
        }
    }

    res
}

/// Return all assignments of operators to the three operator slots.
pub fn operator_triples() -> ArrayVec<OperatorTriple, TRIPLES>
{
    let mut res = ArrayVec::new();
    for &op1 in Operator::ALL.iter()
    {
        for &op2 in Operator::ALL.iter()
        {
            for &op3 in Operator::ALL.iter()
            {
                res.push([op1, op2, op3]);
            }
        }
    }

    res
}

/// Generate the full search space for `nrs`.
///
/// The operand ordering is the outer loop, the operator triple the middle
/// loop, and the shape the inner loop.
pub fn candidates(nrs: &Operands) -> impl Iterator<Item = Candidate>
{
    let triples = operator_triples();
    orderings(nrs).into_iter().flat_map(move |operands| {
        triples.clone().into_iter().flat_map(move |operators| {
            Shape::ALL.into_iter().map(move |shape| Candidate { operands, operators, shape })
        })
    })
}

/// Find all candidates for `nrs` that evaluate exactly to `target`.
///
/// Candidates with an undefined value are skipped. The hits are returned in
/// the order of [`candidates`].
pub fn collect_hits(nrs: &Operands, target: &Rat) -> Vec<Expr>
{
    let mut count = 0;
    let mut hits = vec![];
    for candidate in candidates(nrs)
    {
        count += 1;
        let expr = candidate.expression();
        if expr.value().as_ref() == Some(target)
        {
            trace!("hit {}", expr);
            hits.push(expr);
        }
    }

    debug!("{:?}: {} candidates, {} hits", nrs, count, hits.len());
    hits
}
