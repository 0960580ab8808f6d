//! Wire tracing on the unbounded grid.
//!
//! Wire one is walked first to build a record of the step at which each
//! cell was first entered. Wire two is then walked against that record,
//! and every shared cell updates two independent minima: distance from
//! the origin and combined step count.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::grid::{Position, WirePath};

/// First-arrival step for every cell a wire entered
#[derive(Debug, Clone, Default)]
pub struct VisitedCells {
    first_arrival: HashMap<Position, u32>,
}

impl VisitedCells {
    /// Walk `wire` from the origin and record each cell's first step.
    ///
    /// A cell entered again later keeps its original step count.
    pub fn record(wire: &WirePath) -> Self {
        let mut first_arrival = HashMap::with_capacity(wire.total_steps() as usize);
        for (step, position) in wire.cells() {
            first_arrival.entry(position).or_insert(step);
        }
        debug!(
            cells = first_arrival.len(),
            steps = wire.total_steps(),
            "recorded first wire"
        );
        Self { first_arrival }
    }

    /// Step at which the recorded wire first entered `position`
    pub fn first_arrival(&self, position: Position) -> Option<u32> {
        self.first_arrival.get(&position).copied()
    }

    /// Number of distinct cells recorded
    pub fn len(&self) -> usize {
        self.first_arrival.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_arrival.is_empty()
    }
}

/// Best crossing found by each metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossingReport {
    /// Smallest Manhattan distance from the origin to a crossing
    pub closest_distance: u32,
    pub closest_position: Position,
    /// Smallest sum of both wires' steps to a crossing
    pub fewest_steps: u32,
    pub fewest_steps_position: Position,
    /// Number of times wire two entered a cell wire one had visited
    pub crossings: usize,
}

impl CrossingReport {
    fn first(position: Position, combined_steps: u32) -> Self {
        Self {
            closest_distance: position.manhattan_length(),
            closest_position: position,
            fewest_steps: combined_steps,
            fewest_steps_position: position,
            crossings: 1,
        }
    }

    fn update(&mut self, position: Position, combined_steps: u32) {
        self.crossings += 1;

        let distance = position.manhattan_length();
        if distance < self.closest_distance {
            self.closest_distance = distance;
            self.closest_position = position;
        }
        if combined_steps < self.fewest_steps {
            self.fewest_steps = combined_steps;
            self.fewest_steps_position = position;
        }
    }
}

/// Walk `second` against the cells recorded for `first`.
///
/// Returns `None` if the wires share no cell other than the origin.
pub fn find_crossings(first: &WirePath, second: &WirePath) -> Option<CrossingReport> {
    let visited = VisitedCells::record(first);
    find_crossings_in(&visited, second)
}

/// Same as [`find_crossings`] but against an already recorded wire
pub fn find_crossings_in(visited: &VisitedCells, wire: &WirePath) -> Option<CrossingReport> {
    let mut report: Option<CrossingReport> = None;

    for (step, position) in wire.cells() {
        if position == Position::ORIGIN {
            continue;
        }
        let Some(first_step) = visited.first_arrival(position) else {
            continue;
        };

        let combined = first_step + step;
        match report.as_mut() {
            Some(report) => report.update(position, combined),
            None => report = Some(CrossingReport::first(position, combined)),
        }
    }

    debug!(
        crossings = report.map_or(0, |r| r.crossings),
        steps = wire.total_steps(),
        "walked second wire"
    );
    report
}
