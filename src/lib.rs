//! Solver for the 24 game.
//!
//! Given four integers, find the distinct ways to combine them, each exactly
//! once, with `+`, `-`, `*` and `/` into an expression that evaluates to 24.
//! The search is exhaustive: every ordering of the numbers is combined with
//! every choice of operators and every way to parenthesize, and evaluated
//! with exact rational arithmetic. Solutions that differ only in the order of
//! the operands of a commutative operator are reported once.
//!
//! ```
//! let solutions = make24::solve([3, 3, 8, 8], None);
//! assert_eq!(solutions, vec!["8 / (3 - (8 / 3))"]);
//! ```

pub mod arith;
pub mod dedup;
pub mod error;
pub mod expr;
pub mod search;
pub mod session;
pub mod shape;

use tracing::debug;

pub use arith::{Operator, Rat};
pub use error::InputError;
pub use expr::Expr;
pub use shape::{Operands, OperatorTriple, Shape};

/// The value the expressions should evaluate to.
pub const TARGET: i64 = 24;
/// The number of solutions reported when no limit is configured.
pub const DEFAULT_MAX_SOLUTIONS: usize = 10;

/// Keep at most `max` elements of `solutions`, or all of them if `max` is
/// `None`.
pub fn limit<T>(mut solutions: Vec<T>, max: Option<usize>) -> Vec<T>
{
    if let Some(max) = max
    {
        solutions.truncate(max);
    }
    solutions
}

/// Settings for solving games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game
{
    target: Rat,
    max_solutions: Option<usize>
}

impl Game
{
    /// Create a new game reporting at most `max_solutions` solutions, or all
    /// solutions if `max_solutions` is `None`.
    pub fn new(max_solutions: Option<usize>) -> Self
    {
        Game { target: arith::rat(TARGET), max_solutions }
    }

    /// Change the value the expressions should evaluate to.
    pub fn with_target(mut self, target: i64) -> Self
    {
        self.target = arith::rat(target);
        self
    }

    pub fn target(&self) -> &Rat
    {
        &self.target
    }

    pub fn max_solutions(&self) -> Option<usize>
    {
        self.max_solutions
    }

    pub fn set_max_solutions(&mut self, max_solutions: Option<usize>)
    {
        self.max_solutions = max_solutions;
    }

    /// Find the distinct solutions for `nrs`, up to the configured maximum.
    pub fn solutions(&self, nrs: &Operands) -> Vec<Expr>
    {
        let hits = search::collect_hits(nrs, &self.target);
        let solutions = dedup::dedup(hits);
        debug!("{:?}: {} solutions, limit {:?}", nrs, solutions.len(), self.max_solutions);
        limit(solutions, self.max_solutions)
    }

    /// Find the distinct solutions for `nrs` as strings.
    pub fn solve(&self, nrs: &Operands) -> Vec<String>
    {
        self.solutions(nrs).iter().map(Expr::to_string).collect()
    }
}

impl Default for Game
{
    fn default() -> Self
    {
        Game::new(Some(DEFAULT_MAX_SOLUTIONS))
    }
}

/// Find the distinct ways to make 24 from `numbers`.
///
/// At most `limit` solutions are returned, or all of them if `limit` is
/// `None`. The result is empty if 24 cannot be made.
pub fn solve(numbers: Operands, limit: Option<usize>) -> Vec<String>
{
    Game::new(limit).solve(&numbers)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn limit_truncates()
    {
        assert_eq!(limit(vec![1, 2, 3], Some(2)), vec![1, 2]);
        assert_eq!(limit(vec![1, 2, 3], Some(5)), vec![1, 2, 3]);
        assert_eq!(limit(vec![1, 2, 3], Some(0)), Vec::<i32>::new());
        assert_eq!(limit(vec![1, 2, 3], None), vec![1, 2, 3]);
    }

    #[test]
    fn game_settings()
    {
        let mut game = Game::default();
        assert_eq!(game.max_solutions(), Some(DEFAULT_MAX_SOLUTIONS));
        assert_eq!(game.target(), &arith::rat(24));

        game.set_max_solutions(None);
        assert_eq!(game.max_solutions(), None);

        let game = game.with_target(10);
        assert_eq!(game.target(), &arith::rat(10));
        assert_eq!(game.max_solutions(), None);
    }

    #[test]
    fn other_targets()
    {
        let game = Game::new(None).with_target(10);
        let solutions = game.solutions(&[1, 2, 3, 4]);
        assert!(!solutions.is_empty());
        assert!(solutions.iter().all(|expr| expr.value() == Some(arith::rat(10))));
    }
}
