use crate::board::Board;
use crate::geometry::{self, Direction};
use crate::rules::{KingRule, Rules};
use crate::tree::MoveNode;
use crate::types::{Kind, Piece, Square};

use log::trace;

struct MoveGenImpl<'a> {
    board: &'a Board,
    rules: &'a Rules,
    origin: Square,
    piece: Piece,
    must_jump: bool,
    dst: MoveNode,
}

impl<'a> MoveGenImpl<'a> {
    fn new(
        board: &'a Board,
        rules: &'a Rules,
        origin: Square,
        piece: Piece,
        must_jump: bool,
    ) -> Self {
        MoveGenImpl {
            board,
            rules,
            origin,
            piece,
            must_jump,
            dst: MoveNode::new(),
        }
    }

    fn is_opponent(&self, sq: Square) -> bool {
        matches!(self.board.get(sq), Some(p) if p.color != self.piece.color)
    }

    fn add_quiet(&mut self, dst: Square) {
        if !self.must_jump {
            self.dst.push(dst, None);
        }
    }

    fn add_capture(&mut self, jumped: Square, landing: Square) {
        trace!(
            "capture {} from {} over {} to {}",
            self.piece,
            self.origin,
            jumped,
            landing
        );
        let mut next = *self.board;
        next.remove(jumped);
        next.remove(self.origin);
        next.set(landing, self.piece);
        let cont = gen_moves(&next, self.rules, landing, true);
        self.dst.push(landing, Some(cont));
    }

    fn gen_step(&mut self, (d_row, d_col): Direction) {
        let near = match self.origin.try_shift(d_row, d_col) {
            Some(sq) => sq,
            None => return,
        };
        if self.board.is_empty(near) {
            self.add_quiet(near);
            return;
        }
        if !self.is_opponent(near) {
            return;
        }
        if let Some(landing) = near.try_shift(d_row, d_col) {
            if self.board.is_empty(landing) {
                self.add_capture(near, landing);
            }
        }
    }

    fn gen_slide(&mut self, (d_row, d_col): Direction) {
        let mut cur = self.origin;
        while let Some(near) = cur.try_shift(d_row, d_col) {
            if self.board.is_empty(near) {
                self.add_quiet(near);
                cur = near;
                continue;
            }
            if !self.is_opponent(near) {
                return;
            }
            let mut landing = near;
            while let Some(sq) = landing.try_shift(d_row, d_col) {
                if !self.board.is_empty(sq) {
                    break;
                }
                self.add_capture(near, sq);
                landing = sq;
            }
            return;
        }
    }

    fn gen_all(mut self) -> MoveNode {
        let color = self.piece.color;
        match (self.piece.kind, self.rules.king) {
            (Kind::Man, _) => {
                for dir in geometry::man_directions(color) {
                    self.gen_step(dir);
                }
            }
            (Kind::King, KingRule::Immobile) => {}
            (Kind::King, KingRule::Short) => {
                for dir in geometry::king_directions(color) {
                    self.gen_step(dir);
                }
            }
            (Kind::King, KingRule::Flying) => {
                for dir in geometry::king_directions(color) {
                    self.gen_slide(dir);
                }
            }
        }
        self.dst
    }
}

/// Generates the move tree for the piece on `origin`
///
/// For a man, the two forward diagonals are examined, the left one (towards column 0) first. A
/// step to an empty square is a quiet move, and it is generated only if `must_jump` is `false`. A
/// step over an opposing piece to the empty square right behind it is a capture. For each capture,
/// the continuation is generated on a copy of the board with the piece moved and the captured
/// piece removed, with `must_jump` set to `true`. If no continuation exists, the capture is a leaf.
///
/// Kings move according to `rules.king`, see [`KingRule`].
///
/// The board itself is never modified. If `origin` is empty, an empty tree is returned.
pub fn gen_moves(b: &Board, rules: &Rules, origin: Square, must_jump: bool) -> MoveNode {
    match b.get(origin) {
        Some(piece) => MoveGenImpl::new(b, rules, origin, piece, must_jump).gen_all(),
        None => MoveNode::new(),
    }
}
