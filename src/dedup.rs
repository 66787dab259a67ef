use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::arith::Operator;
use crate::expr::{Expr, OPERANDS};

/// Key under which equivalent solutions are grouped.
///
/// A chain of additions, or of multiplications, is collected in a single
/// node with its operands sorted, so that regrouping or reordering the
/// operands of `+` and `*` does not change the key. Subtraction and division
/// nodes keep their two operands in order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key
{
    Num(i64),
    Node(Operator, Vec<Key>)
}

/// Compute the key of `expr`.
///
/// `(2 + 3) * (4 * 1)`, `(3 + 2) * (1 * 4)` and `((3 + 2) * 4) * 1` all
/// share the key `*[1, 4, +[2, 3]]`, while `((1 + 2) * 7) + 3` and
/// `(1 + (3 * 7)) + 2` do not.
pub fn canonical_key(expr: &Expr) -> Option<Key>
{
    expr.fold(Key::Num, |op, lhs, rhs| {
        let mut operands = Vec::with_capacity(OPERANDS);
        if op.is_commutative()
        {
            for operand in [lhs, rhs]
            {
                match operand
                {
                    Key::Node(inner, nested) if inner == op => operands.extend(nested),
                    operand => operands.push(operand)
                }
            }
            operands.sort();
        }
        else
        {
            operands.push(lhs);
            operands.push(rhs);
        }

        Some(Key::Node(op, operands))
    })
}

/// Remove equivalent solutions from `hits`.
///
/// Hits sharing a canonical key are considered the same solution. Only the
/// first hit of each group is kept, in its canonical form, so the result is
/// in the order in which the groups were first encountered.
pub fn dedup<I>(hits: I) -> Vec<Expr>
where I: IntoIterator<Item = Expr>
{
    let mut seen = FxHashSet::default();
    let mut res = vec![];
    let mut count = 0;
    for hit in hits
    {
        count += 1;
        let key = match canonical_key(&hit)
            {
                Some(key) => key,
                None      => continue
            };
        if !seen.insert(key)
        {
            trace!("dropping duplicate {}", hit);
            continue;
        }
        match hit.canonical()
        {
            Some(canon) => res.push(canon),
            None        => res.push(hit)
        }
    }

    debug!("{} hits, {} distinct", count, res.len());
    res
}
