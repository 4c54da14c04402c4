use serde::{Deserialize, Serialize};

use crate::rules::movegen::Move;

/// Consecutive single-cell moves of one vehicle in one direction, shown as one slide.
///
/// Display-only: engines and replay work on [`Move`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slide {
    pub vehicle: usize,
    pub delta: i8,
    pub distance: u32,
}

impl Slide {
    /// Expand back into unit moves.
    pub fn moves(self) -> impl Iterator<Item = Move> {
        (0..self.distance).map(move |_| Move::new(self.vehicle, self.delta))
    }
}

/// Group runs of identical consecutive moves. Preserves order; the total distance equals
/// `moves.len()`.
pub fn compress_slides(moves: &[Move]) -> Vec<Slide> {
    let mut out: Vec<Slide> = Vec::new();
    for mv in moves {
        match out.last_mut() {
            Some(last) if last.vehicle == mv.vehicle && last.delta == mv.delta => {
                last.distance += 1;
            }
            _ => out.push(Slide {
                vehicle: mv.vehicle,
                delta: mv.delta,
                distance: 1,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_runs_but_not_direction_changes() {
        let moves = [
            Move::forward(1),
            Move::forward(1),
            Move::backward(1),
            Move::forward(0),
            Move::forward(0),
            Move::forward(0),
        ];
        let slides = compress_slides(&moves);
        assert_eq!(
            slides,
            vec![
                Slide {
                    vehicle: 1,
                    delta: 1,
                    distance: 2,
                },
                Slide {
                    vehicle: 1,
                    delta: -1,
                    distance: 1,
                },
                Slide {
                    vehicle: 0,
                    delta: 1,
                    distance: 3,
                },
            ]
        );

        let expanded: Vec<Move> = slides.into_iter().flat_map(Slide::moves).collect();
        assert_eq!(expanded, moves);
    }

    #[test]
    fn empty_input_gives_no_slides() {
        assert!(compress_slides(&[]).is_empty());
    }
}
