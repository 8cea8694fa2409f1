//! Full outcome table used by the help screen

use super::moves::{Move, MoveSet};
use super::outcome::{Outcome, OutcomeResolver};

/// Header cell for the corner of the rendered table
pub const CORNER_LABEL: &str = "User \\ PC";

/// Every (human, computer) pairing of a move set and its outcome
///
/// Rows are the human's move, columns the computer's, both in move-set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<Outcome>>,
}

impl OutcomeMatrix {
    pub fn build(moves: &MoveSet) -> Self {
        let cells = moves
            .moves()
            .map(|human| {
                moves
                    .moves()
                    .map(|computer| OutcomeResolver::resolve(moves, human, computer))
                    .collect()
            })
            .collect();

        Self {
            labels: moves.names().to_vec(),
            cells,
        }
    }

    /// Outcome for a pairing, `None` when a move belongs to a larger set
    pub fn get(&self, human: Move, computer: Move) -> Option<Outcome> {
        self.cells
            .get(human.index())
            .and_then(|row| row.get(computer.index()))
            .copied()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Rows paired with their move name
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    /// Table as text cells including the header row and label column
    pub fn to_cells(&self) -> Vec<Vec<String>> {
        let mut table = Vec::with_capacity(self.labels.len() + 1);

        let mut header = vec![CORNER_LABEL.to_string()];
        header.extend(self.labels.iter().cloned());
        table.push(header);

        for (label, row) in self.rows() {
            let mut line = vec![label.to_string()];
            line.extend(row.iter().map(|outcome| outcome.to_string()));
            table.push(line);
        }

        table
    }
}
