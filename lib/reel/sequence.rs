use crate::chess::{Direction, Grid, Piece, RelocateError, Square};
use crate::render::Render;
use derive_more::{Display, Error, From};
use std::{io, iter::repeat};
use tracing::{debug, instrument, trace};

/// The reason why playing a [`Sequence`] stopped early.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    #[display(fmt = "sequence stopped, {}", _0)]
    Relocate(RelocateError),
    #[display(fmt = "failed to render the grid")]
    Render(io::Error),
}

/// A run of directions repeated a number of times.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
struct Stretch {
    pattern: Vec<Direction>,
    times: usize,
}

impl Stretch {
    fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        repeat(&self.pattern).take(self.times).flatten().copied()
    }
}

/// A piece placed on an empty grid followed by scripted one-step relocations.
///
/// Repeated patterns are expanded lazily while playing.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{} from {}", piece, start)]
pub struct Sequence {
    piece: Piece,
    start: Square,
    steps: Vec<Stretch>,
}

impl Sequence {
    /// A sequence that only places `piece` on `start`.
    pub fn new(piece: Piece, start: Square) -> Self {
        Sequence {
            piece,
            start,
            steps: Vec::new(),
        }
    }

    /// Appends a single step.
    pub fn step(self, d: Direction) -> Self {
        self.pattern(&[d], 1)
    }

    /// Appends every step in order.
    pub fn steps<I: IntoIterator<Item = Direction>>(mut self, steps: I) -> Self {
        self.steps.push(Stretch {
            pattern: steps.into_iter().collect(),
            times: 1,
        });

        self
    }

    /// Appends `pattern` repeated `times`.
    pub fn pattern(mut self, pattern: &[Direction], times: usize) -> Self {
        self.steps.push(Stretch {
            pattern: pattern.to_vec(),
            times,
        });

        self
    }

    /// The piece being animated.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Where the piece is placed.
    pub fn start(&self) -> Square {
        self.start
    }

    /// The scripted relocations, in order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().flat_map(|s| s.directions())
    }

    /// How many relocations are scripted, saturating at [`usize::MAX`].
    pub fn len(&self) -> usize {
        self.steps.iter().fold(0, |n, s| {
            n.saturating_add(s.pattern.len().saturating_mul(s.times))
        })
    }

    /// Whether the sequence only places the piece.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets `grid`, places the piece and relocates it step by step.
    ///
    /// The grid is rendered once after the placement and once after every relocation.
    /// Returns the square the piece ends on, or stops at the first failure.
    #[instrument(level = "debug", skip(self, grid, renderer), fields(sequence = %self))]
    pub fn play<R: Render + ?Sized>(
        &self,
        grid: &mut Grid,
        renderer: &mut R,
    ) -> Result<Square, PlayError> {
        grid.clear();

        let mut handle = grid
            .place(self.start.row(), self.start.col(), self.piece)
            .map_err(RelocateError::from)?;

        renderer.render(grid)?;
        trace!(%grid);

        for d in self.directions() {
            let to = handle.relocate(grid, d)?;
            debug!(direction = %d, square = %to, "relocated {}", self.piece);
            renderer.render(grid)?;
            trace!(%grid);
        }

        Ok(handle.square())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Cell, Color, OutOfBounds, Role};
    use crate::render::MockRender;
    use std::io::{self, ErrorKind, Write};
    use std::sync::{Arc, Mutex};
    use test_strategy::proptest;
    use tracing::Level;

    #[derive(Debug, Default, Clone)]
    struct Logs(Arc<Mutex<Vec<u8>>>);

    impl Write for Logs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Logs {
        fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
            let writer = self.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(Level::TRACE)
                .with_ansi(false)
                .without_time()
                .with_writer(move || writer.clone())
                .finish();

            tracing::subscriber::with_default(subscriber, f)
        }

        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[proptest]
    fn pattern_repeats_directions_in_order(
        p: Piece,
        sq: Square,
        a: Direction,
        b: Direction,
        #[strategy(..8usize)] n: usize,
    ) {
        let s = Sequence::new(p, sq).pattern(&[a, b], n);
        let directions: Vec<_> = s.directions().collect();
        assert_eq!(directions.len(), 2 * n);
        assert_eq!(s.len(), 2 * n);

        for pair in directions.chunks(2) {
            assert_eq!(pair, [a, b]);
        }
    }

    #[proptest]
    fn builder_appends_steps(p: Piece, sq: Square, a: Direction, b: Direction) {
        let s = Sequence::new(p, sq).step(a).steps([b, a]);
        assert_eq!(s.directions().collect::<Vec<_>>(), [a, b, a]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.piece(), p);
        assert_eq!(s.start(), sq);
    }

    #[proptest]
    fn play_renders_after_placement_and_every_relocation(
        mut grid: Grid,
        p: Piece,
        sq: Square,
        d: Direction,
    ) {
        let s = Sequence::new(p, sq).pattern(&[d, !d], 3);
        let renders = match sq.step(d) {
            Ok(_) => s.len() + 1,
            Err(_) => 1,
        };

        let mut renderer = MockRender::new();
        renderer
            .expect_render()
            .times(renders)
            .returning(|g| {
                assert_eq!(g.occupied(), 1);
                Ok(())
            });

        let result = s.play(&mut grid, &mut renderer);
        assert_eq!(result.ok(), sq.step(d).ok().map(|_| sq));
    }

    #[proptest]
    fn play_resets_the_grid_first(mut grid: Grid, p: Piece, sq: Square) {
        let mut renderer = MockRender::new();
        renderer.expect_render().times(1).returning(|_| Ok(()));

        assert_eq!(Sequence::new(p, sq).play(&mut grid, &mut renderer)?, sq);
        assert_eq!(grid.occupied(), 1);
        assert_eq!(grid[sq], Cell::from(p));
    }

    #[test]
    fn play_stops_at_the_first_failed_relocation() {
        let rook = Piece::new(Role::Rook, Color::Black);
        let start = Square::new(0, 6).unwrap();
        let s = Sequence::new(rook, start).pattern(&[Direction::Right], 3);

        let mut renderer = MockRender::new();
        renderer.expect_render().times(2).returning(|_| Ok(()));

        let mut grid = Grid::new();
        assert!(matches!(
            s.play(&mut grid, &mut renderer),
            Err(PlayError::Relocate(RelocateError::OutOfBounds(OutOfBounds {
                row: 0,
                col: 8
            })))
        ));

        assert_eq!(grid.get(0, 7), Ok(&Cell::from(rook)));
    }

    #[test]
    fn play_expands_repeated_patterns_lazily() {
        let queen = Piece::new(Role::Queen, Color::White);
        let s = Sequence::new(queen, Square::new(0, 0).unwrap())
            .pattern(&[Direction::Up], usize::MAX);

        assert_eq!(s.len(), usize::MAX);
        assert_eq!(s.directions().take(3).count(), 3);

        let mut renderer = MockRender::new();
        renderer.expect_render().times(1).returning(|_| Ok(()));

        let mut grid = Grid::new();
        assert!(matches!(
            s.play(&mut grid, &mut renderer),
            Err(PlayError::Relocate(RelocateError::OutOfBounds(OutOfBounds {
                row: -1,
                col: 0
            })))
        ));
    }

    #[test]
    fn len_saturates_instead_of_overflowing() {
        let pawn = Piece::new(Role::Pawn, Color::Black);
        let s = Sequence::new(pawn, Square::new(3, 3).unwrap())
            .pattern(&[Direction::Up, Direction::Down], usize::MAX)
            .step(Direction::Left);

        assert_eq!(s.len(), usize::MAX);
        assert!(!s.is_empty());
        assert!(Sequence::new(pawn, Square::new(3, 3).unwrap()).is_empty());
    }

    #[test]
    fn play_logs_every_frame_as_text() {
        let rook = Piece::new(Role::Rook, Color::Black);
        let s = Sequence::new(rook, Square::new(0, 0).unwrap()).step(Direction::Right);

        let mut renderer = MockRender::new();
        renderer.expect_render().times(2).returning(|_| Ok(()));

        let logs = Logs::default();
        let mut grid = Grid::new();
        logs.capture(|| s.play(&mut grid, &mut renderer)).unwrap();

        let mut first = Grid::new();
        first.place(0, 0, rook).unwrap();

        let text = logs.text();
        assert!(text.contains(&first.to_string()));
        assert!(text.contains(&grid.to_string()));
    }

    #[test]
    fn failed_relocation_is_left_for_the_caller_to_report() {
        let rook = Piece::new(Role::Rook, Color::Black);
        let s = Sequence::new(rook, Square::new(0, 7).unwrap()).step(Direction::Right);

        let mut renderer = MockRender::new();
        renderer.expect_render().times(1).returning(|_| Ok(()));

        let logs = Logs::default();
        let mut grid = Grid::new();
        assert!(logs.capture(|| s.play(&mut grid, &mut renderer)).is_err());
        assert!(!logs.text().contains("ERROR"));
    }

    #[test]
    fn play_stops_if_rendering_fails() {
        let queen = Piece::new(Role::Queen, Color::White);
        let s = Sequence::new(queen, Square::new(4, 4).unwrap()).step(Direction::Up);

        let mut renderer = MockRender::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_| Err(ErrorKind::BrokenPipe.into()));

        let mut grid = Grid::new();
        assert!(matches!(
            s.play(&mut grid, &mut renderer),
            Err(PlayError::Render(e)) if e.kind() == ErrorKind::BrokenPipe
        ));

        assert_eq!(grid.get(4, 4), Ok(&Cell::from(queen)));
    }
}
