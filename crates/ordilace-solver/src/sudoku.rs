//! Solve driver: recursive search and true-candidate enumeration.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    time::{Duration, Instant},
};

use ordilace_constraint::{BoxedConstraint, Constraint as _, ConstraintSpec};
use ordilace_core::{CandidateGrid, Digit, DigitGrid, Position, TriStateGrid};

use crate::{
    error::{SetupError, SolveError},
    solving_board::SolvingBoard,
};

/// Minimum interval between progress snapshots and cancellation checks.
const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Events published on the optional progress channel.
///
/// Every snapshot is an owned copy; the receiver may keep it as long as it
/// likes without blocking the solver.
#[derive(Debug, Clone)]
pub enum Progress {
    /// The current tri-state classification board.
    Snapshot(TriStateGrid),
    /// Terminal sentinel: the run completed.
    Finished,
}

/// The driver for one sudoku game: a clue puzzle plus its extra constraints.
///
/// The driver owns the search. [`solve`](Self::solve) finds a single
/// completion; [`true_candidates`](Self::true_candidates) classifies, for
/// every cell, exactly which digits appear in at least one completion. Both
/// run on the calling thread; a host can observe a long run through an
/// optional progress channel and stop it through an optional cancellation
/// flag, each checked at ~100 ms intervals.
///
/// # Examples
///
/// ```
/// use ordilace_solver::Sudoku;
///
/// let mut sudoku = Sudoku::from_input(&[[0; 9]; 9], vec![]).unwrap();
/// let solution = sudoku.solve().unwrap().expect("an empty board is solvable");
/// assert!(solution.is_complete() && solution.satisfies_rules());
/// ```
#[derive(Debug)]
pub struct Sudoku {
    puzzle: DigitGrid,
    constraints: Arc<[BoxedConstraint]>,
    tuf: TriStateGrid,
    progress: Option<Sender<Progress>>,
    cancel: Option<Arc<AtomicBool>>,
    search_steps: u64,
    started: Instant,
    last_tick: Instant,
}

impl Sudoku {
    /// Creates a driver for a puzzle with the given extra constraints.
    ///
    /// Constraint order is preserved; it affects cost but never results.
    #[must_use]
    pub fn new(puzzle: DigitGrid, constraints: Vec<BoxedConstraint>) -> Self {
        let now = Instant::now();
        Self {
            puzzle,
            constraints: Arc::from(constraints),
            tuf: TriStateGrid::new(),
            progress: None,
            cancel: None,
            search_steps: 0,
            started: now,
            last_tick: now,
        }
    }

    /// Creates a driver from the external input format: a 9×9 array of raw
    /// values (`0` = empty) and a list of constraint descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the puzzle contains values outside 0-9 or a
    /// descriptor cannot be built.
    pub fn from_input(
        puzzle: &[[u8; 9]; 9],
        constraints: Vec<ConstraintSpec>,
    ) -> Result<Self, SetupError> {
        let puzzle = DigitGrid::from_rows(puzzle)?;
        let constraints = constraints
            .into_iter()
            .map(ConstraintSpec::into_constraint)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(puzzle, constraints))
    }

    /// Attaches a progress channel.
    ///
    /// Snapshots of the tri-state board are published at intervals of at
    /// least 100 ms during a run, and [`Progress::Finished`] once a
    /// true-candidate run completes. Sends are best-effort; a dropped
    /// receiver never aborts the solve.
    #[must_use]
    pub fn with_progress(mut self, sender: Sender<Progress>) -> Self {
        self.progress = Some(sender);
        self
    }

    /// Attaches a cancellation flag.
    ///
    /// The solver observes the flag at each progress tick and fails the run
    /// with [`SolveError::Cancelled`]; the worst-case latency is one tick
    /// plus the return path out of the current search frame.
    #[must_use]
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Resets the search-step and elapsed-time counters.
    pub fn reset_counters(&mut self) {
        self.search_steps = 0;
        self.started = Instant::now();
    }

    /// Returns the search steps taken and time elapsed since the last reset.
    #[must_use]
    pub fn read_counters(&self) -> (u64, Duration) {
        (self.search_steps, self.started.elapsed())
    }

    /// Returns the current tri-state classification board.
    #[must_use]
    pub fn tri_state(&self) -> &TriStateGrid {
        &self.tuf
    }

    /// Finds one completion of the puzzle satisfying all rules and extra
    /// constraints, or `None` if no completion exists.
    ///
    /// Identical inputs explore candidates in a fixed order (ascending digit
    /// at the fewest-candidates cell, ties in reading order), so the
    /// returned solution is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::IncompatiblePuzzle`] if a clue conflicts
    /// immediately, or [`SolveError::Cancelled`] if the cancellation flag
    /// was observed.
    pub fn solve(&mut self) -> Result<Option<DigitGrid>, SolveError> {
        self.reset_counters();
        self.last_tick = Instant::now();
        let board = SolvingBoard::new(
            &self.puzzle,
            self.tuf.to_mask(),
            Arc::clone(&self.constraints),
        )?;
        let solution = self.solve_step(board)?;
        let (steps, elapsed) = self.read_counters();
        log::debug!(
            "search {} after {steps} steps in {elapsed:?}",
            if solution.is_some() { "succeeded" } else { "was exhausted" }
        );
        Ok(solution.map(SolvingBoard::into_assigned))
    }

    /// One recursion step: pick the most constrained cell and try each of
    /// its candidates on a cloned board.
    fn solve_step(&mut self, board: SolvingBoard) -> Result<Option<SolvingBoard>, SolveError> {
        if self.last_tick.elapsed() >= PROGRESS_INTERVAL {
            self.last_tick = Instant::now();
            if let Some(sender) = &self.progress {
                let _ = sender.send(Progress::Snapshot(self.tuf.clone()));
            }
            if self
                .cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                return Err(SolveError::Cancelled);
            }
        }
        self.search_steps += 1;

        let Some((pos, _)) = board.least_candidate_pick() else {
            // Fully assigned: the board is a solution iff every extra
            // constraint accepts it.
            let satisfied = self
                .constraints
                .iter()
                .all(|constraint| constraint.is_valid(board.assigned()));
            return Ok(satisfied.then_some(board));
        };

        for digit in board.candidates_at(pos) {
            let mut next = board.clone();
            if !next.settle(pos, digit) {
                continue;
            }
            if !next.quickdrops() {
                continue;
            }
            if let Some(solution) = self.solve_step(next)? {
                return Ok(Some(solution));
            }
        }
        Ok(None)
    }

    /// Determines, for every cell, the exact set of digits that appear at
    /// that cell in at least one completion.
    ///
    /// The sweep repeatedly probes the still-unclassified (cell, digit)
    /// pairs: a probe that completes proves every digit of that completion
    /// reachable; a probe with no completion proves the digit impossible at
    /// that cell. Probing order favours the cell with the fewest unknowns.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsatisfiable`] if the initial inference pass
    /// already proves no completion exists, [`SolveError::IncompatiblePuzzle`]
    /// for an immediately conflicting clue, or [`SolveError::Cancelled`].
    pub fn true_candidates(&mut self) -> Result<CandidateGrid, SolveError> {
        self.reset_counters();
        self.last_tick = Instant::now();
        self.tuf = TriStateGrid::new();
        self.seed_from_clues();

        let mut base = SolvingBoard::new(
            &self.puzzle,
            self.tuf.to_mask(),
            Arc::clone(&self.constraints),
        )?;
        if !base.quickdrops() {
            return Err(SolveError::Unsatisfiable);
        }

        while let Some(pos) = self.least_unknown_pick() {
            for digit in self.tuf.unknown_at(pos) {
                let mut probe = base.clone();
                probe.mask_candidates(&self.tuf.to_mask());
                // The initial inference pass may already have decided the
                // probed cell: agreement still needs a full completion,
                // disagreement is a proof of impossibility.
                let reached = match probe.assigned().get(pos) {
                    Some(assigned) => assigned == digit,
                    None => probe.settle(pos, digit) && probe.quickdrops(),
                };
                let solution = if reached { self.solve_step(probe)? } else { None };
                match solution {
                    Some(solution) => {
                        // Every digit of the completion is a true candidate
                        for p in Position::ALL {
                            if let Some(d) = solution.assigned().get(p) {
                                self.tuf.mark_proven(p, d);
                            }
                        }
                    }
                    None => self.tuf.mark_refuted(pos, digit),
                }
            }
        }

        if let Some(sender) = &self.progress {
            let _ = sender.send(Progress::Snapshot(self.tuf.clone()));
            let _ = sender.send(Progress::Finished);
        }
        let (steps, elapsed) = self.read_counters();
        log::debug!("true-candidate sweep finished after {steps} steps in {elapsed:?}");

        let mut result = CandidateGrid::EMPTY;
        for pos in Position::ALL {
            result.set_candidates(pos, self.tuf.proven_at(pos));
        }
        Ok(result)
    }

    /// Seeds the tri-state board from the clues: each clue cell proves its
    /// own digit and refutes the other eight, and refutes its digit at every
    /// peer.
    fn seed_from_clues(&mut self) {
        for pos in Position::ALL {
            let Some(digit) = self.puzzle.get(pos) else {
                continue;
            };
            for i in 0..9 {
                self.tuf.mark_refuted(Position::new(pos.row(), i), digit);
                self.tuf.mark_refuted(Position::new(i, pos.col()), digit);
                self.tuf
                    .mark_refuted(Position::from_block(pos.block_index(), i), digit);
            }
            for d in Digit::ALL {
                if d != digit {
                    self.tuf.mark_refuted(pos, d);
                }
            }
            self.tuf.mark_proven(pos, digit);
        }
    }

    /// Picks the cell with the fewest unclassified digits, ignoring clue
    /// cells and cells that are fully classified. `None` when the sweep is
    /// done.
    fn least_unknown_pick(&self) -> Option<Position> {
        let mut best: Option<(Position, usize)> = None;
        for pos in Position::ALL {
            if self.puzzle.get(pos).is_some() {
                continue;
            }
            let count = self.tuf.unknown_count(pos);
            if count == 0 {
                continue;
            }
            if best.is_none_or(|(_, least)| count < least) {
                best = Some((pos, count));
            }
        }
        best.map(|(pos, _)| pos)
    }
}
