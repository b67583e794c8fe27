//! Move tree returned by the move generator

use crate::types::Square;

use std::fmt;
use std::ops::Deref;
use std::slice;

use arrayvec::ArrayVec;

/// Maximum number of branches in one node
///
/// No more than 13 squares share a diagonal with any given square, and each branch leads to a
/// distinct square.
pub const MAX_BRANCHES: usize = 16;

/// One destination in a [`MoveNode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    dst: Square,
    next: Option<Box<MoveNode>>,
}

impl Branch {
    /// Returns the square the piece lands on
    #[inline]
    pub fn dst(&self) -> Square {
        self.dst
    }

    /// Returns the captures which must follow this step
    ///
    /// This is `None` for quiet moves, and for captures after which no further capture exists.
    #[inline]
    pub fn next(&self) -> Option<&MoveNode> {
        self.next.as_deref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.next.is_none()
    }
}

/// Tree of moves from one square
///
/// Each branch is a destination reachable in one step. If the step was a capture that can be
/// continued, the branch owns the subtree of continuations generated from the landing square.
/// A complete move is a path from the root to a leaf.
///
/// # Example
///
/// ```
/// # use checkers::{Board, Color, Kind, Piece, Square};
/// #
/// let mut b = Board::initial();
/// b.remove(Square::new(6, 2));
/// b.set(Square::new(3, 3), Piece::new(Color::Dark, Kind::Man));
///
/// let moves = b.get_moves(Square::new(2, 2), false);
/// assert_eq!(moves.len(), 2);
/// assert_eq!(moves.to_string(), "(3,1)\n(4,4) -> (6,2)\n");
/// assert_eq!(
///     moves.sequences(),
///     vec![
///         vec![Square::new(3, 1)],
///         vec![Square::new(4, 4), Square::new(6, 2)],
///     ],
/// );
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MoveNode(ArrayVec<Branch, MAX_BRANCHES>);

impl Deref for MoveNode {
    type Target = [Branch];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a MoveNode {
    type Item = &'a Branch;
    type IntoIter = slice::Iter<'a, Branch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveNode {
    pub fn new() -> MoveNode {
        MoveNode(ArrayVec::new())
    }

    /// Appends a destination
    ///
    /// An empty continuation is stored as no continuation at all.
    pub fn push(&mut self, dst: Square, next: Option<MoveNode>) {
        let next = next.filter(|n| !n.is_empty()).map(Box::new);
        self.0.push(Branch { dst, next });
    }

    /// Returns the branch leading to `dst`, if any
    pub fn find(&self, dst: Square) -> Option<&Branch> {
        self.0.iter().find(|br| br.dst == dst)
    }

    /// Returns all the complete moves, in tree order
    ///
    /// Each move is the list of squares the piece visits, not including the origin.
    pub fn sequences(&self) -> Vec<Vec<Square>> {
        let mut res = Vec::new();
        let mut prefix = Vec::new();
        self.do_sequences(&mut prefix, &mut res);
        res
    }

    fn do_sequences(&self, prefix: &mut Vec<Square>, res: &mut Vec<Vec<Square>>) {
        for br in &self.0 {
            prefix.push(br.dst);
            match &br.next {
                Some(next) => next.do_sequences(prefix, res),
                None => res.push(prefix.clone()),
            }
            prefix.pop();
        }
    }

    /// Returns `true` if `path` goes from the root to a leaf of the tree
    ///
    /// Partial capture chains are not complete moves, so they are rejected.
    pub fn contains(&self, path: &[Square]) -> bool {
        let (last, init) = match path.split_last() {
            Some(split) => split,
            None => return false,
        };
        let mut node = self;
        for &sq in init {
            node = match node.find(sq).and_then(Branch::next) {
                Some(next) => next,
                None => return false,
            };
        }
        matches!(node.find(*last), Some(br) if br.is_leaf())
    }

    /// Renders the tree as text
    ///
    /// Does the same as `MoveNode::to_string()`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MoveNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for br in &self.0 {
            write!(f, "{}", br.dst)?;
            match &br.next {
                Some(next) => write!(f, " -> {}", next)?,
                None => writeln!(f)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MoveNode {
        let mut inner = MoveNode::new();
        inner.push(Square::new(6, 2), None);
        inner.push(Square::new(6, 6), None);
        let mut root = MoveNode::new();
        root.push(Square::new(3, 1), None);
        root.push(Square::new(4, 4), Some(inner));
        root
    }

    #[test]
    fn test_display() {
        assert_eq!(MoveNode::new().to_display_string(), "");
        assert_eq!(sample().to_string(), "(3,1)\n(4,4) -> (6,2)\n(6,6)\n");
    }

    #[test]
    fn test_empty_continuation() {
        let mut node = MoveNode::new();
        node.push(Square::new(1, 1), Some(MoveNode::new()));
        assert!(node[0].is_leaf());
        assert_eq!(node[0].next(), None);
    }

    #[test]
    fn test_sequences() {
        assert_eq!(
            sample().sequences(),
            vec![
                vec![Square::new(3, 1)],
                vec![Square::new(4, 4), Square::new(6, 2)],
                vec![Square::new(4, 4), Square::new(6, 6)],
            ],
        );
        assert!(MoveNode::new().sequences().is_empty());
    }

    #[test]
    fn test_contains() {
        let tree = sample();
        assert!(tree.contains(&[Square::new(3, 1)]));
        assert!(tree.contains(&[Square::new(4, 4), Square::new(6, 6)]));
        assert!(!tree.contains(&[]));
        assert!(!tree.contains(&[Square::new(4, 4)]));
        assert!(!tree.contains(&[Square::new(3, 1), Square::new(4, 2)]));
        assert!(!tree.contains(&[Square::new(4, 4), Square::new(6, 4)]));
        assert!(!tree.contains(&[Square::new(5, 5)]));
    }
}
