//! Side-by-side CSV export of labelled trajectories.
//!
//! See [`Table`] for usage.

use std::{io, path::Path};

use stepwise_core::{Trajectory, TrajectorySink};
use thiserror::Error;

/// Errors that can occur while collecting or writing a [`Table`].
#[derive(Debug, Error)]
pub enum TableError {
    #[error("trajectory label must not be empty")]
    EmptyLabel,

    #[error("a trajectory labelled `{0}` was already added")]
    DuplicateLabel(String),

    #[error("{names} component names given for a trajectory with {dim} components")]
    ComponentNames { names: usize, dim: usize },

    #[error("failed to write CSV")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output")]
    Io(#[from] io::Error),
}

/// A [`TrajectorySink`] that lays trajectories out side by side as CSV.
///
/// Every consumed trajectory contributes one column for `s` and one column
/// per state component, each suffixed with the trajectory's label:
///
/// ```text
/// s_euler,r0_euler,s_rk4,r0_rk4
/// ```
///
/// Row `i` holds sample `i` of every trajectory. Trajectories of different
/// lengths are allowed; a shorter trajectory leaves its cells blank once it
/// runs out of samples.
///
/// Components are named `r0`, `r1`, … unless names are set with
/// [`Table::with_component_names`].
///
/// # Example
///
/// ```
/// use stepwise_core::TrajectorySink;
/// use stepwise_observers::table::Table;
/// use stepwise_solvers::transient::euler;
///
/// let decay = |_s: f64, r: &[f64]| vec![-r[0]];
/// let solution = euler::solve_unobserved(&decay, &[1.0], 0.0, 3, 0.5)?;
///
/// let mut table = Table::new().with_component_names(["y"])?;
/// table.consume("euler", &solution.trajectory)?;
///
/// let mut csv = Vec::new();
/// table.write_csv(&mut csv)?;
/// assert_eq!(
///     String::from_utf8(csv)?,
///     "s_euler,y_euler\n0,1\n0.5,0.5\n1,0.25\n",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    component_names: Option<Vec<String>>,
    columns: Vec<(String, Trajectory)>,
}

impl Table {
    /// Creates an empty table with default component names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the state components used in column headers.
    ///
    /// Every trajectory, whether already collected or consumed afterwards,
    /// must have exactly as many components as there are names.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ComponentNames`] if a collected trajectory has a
    /// different number of components.
    pub fn with_component_names<I, S>(mut self, names: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        for (_, trajectory) in &self.columns {
            check_names(&names, trajectory)?;
        }
        self.component_names = Some(names);
        Ok(self)
    }

    /// Returns the number of trajectories collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no trajectory has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the number of data rows, the length of the longest trajectory.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns
            .iter()
            .map(|(_, trajectory)| trajectory.len())
            .max()
            .unwrap_or(0)
    }

    /// Returns the header row.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::new();
        for (label, trajectory) in &self.columns {
            header.push(format!("s_{label}"));
            for j in 0..trajectory.dim() {
                match &self.component_names {
                    Some(names) => header.push(format!("{}_{label}", names[j])),
                    None => header.push(format!("r{j}_{label}")),
                }
            }
        }
        header
    }

    /// Writes the header and every row as CSV to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), TableError> {
        let mut csv = csv::Writer::from_writer(writer);
        self.write_records(&mut csv)?;
        csv.flush()?;
        Ok(())
    }

    /// Writes the table as CSV to the file at `path`, replacing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
        let mut csv = csv::Writer::from_path(path)?;
        self.write_records(&mut csv)?;
        csv.flush()?;
        Ok(())
    }

    fn write_records<W: io::Write>(&self, csv: &mut csv::Writer<W>) -> Result<(), TableError> {
        if self.columns.is_empty() {
            return Ok(());
        }
        csv.write_record(self.header())?;

        let mut row = Vec::new();
        for i in 0..self.rows() {
            row.clear();
            for (_, trajectory) in &self.columns {
                match trajectory.get(i) {
                    Some(sample) => {
                        row.push(sample.s.to_string());
                        row.extend(sample.r.iter().map(f64::to_string));
                    }
                    None => row.extend((0..=trajectory.dim()).map(|_| String::new())),
                }
            }
            csv.write_record(&row)?;
        }

        Ok(())
    }
}

impl TrajectorySink for Table {
    type Error = TableError;

    fn consume(&mut self, label: &str, trajectory: &Trajectory) -> Result<(), Self::Error> {
        if label.is_empty() {
            return Err(TableError::EmptyLabel);
        }
        if self.columns.iter().any(|(existing, _)| existing == label) {
            return Err(TableError::DuplicateLabel(label.to_owned()));
        }
        if let Some(names) = &self.component_names {
            check_names(names, trajectory)?;
        }

        self.columns.push((label.to_owned(), trajectory.clone()));
        Ok(())
    }
}

fn check_names(names: &[String], trajectory: &Trajectory) -> Result<(), TableError> {
    if names.len() == trajectory.dim() {
        Ok(())
    } else {
        Err(TableError::ComponentNames {
            names: names.len(),
            dim: trajectory.dim(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a trajectory from rows of `[s, r0, r1, …]`.
    fn trajectory(dim: usize, rows: &[f64]) -> Trajectory {
        let mut rows = rows.chunks_exact(dim + 1);
        let first = rows.next().unwrap();
        let mut trajectory = Trajectory::new(first[0], &first[1..], rows.len() + 1);
        for row in rows {
            trajectory.push(row[0], &row[1..]);
        }
        trajectory
    }

    fn to_csv(table: &Table) -> String {
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_table_writes_nothing() {
        let table = Table::new();

        assert!(table.is_empty());
        assert_eq!(table.rows(), 0);
        assert_eq!(to_csv(&table), "");
    }

    #[test]
    fn default_component_names() {
        let mut table = Table::new();
        table
            .consume("a", &trajectory(2, &[0.0, 1.0, 2.0]))
            .unwrap();

        assert_eq!(table.header(), ["s_a", "r0_a", "r1_a"]);
    }

    #[test]
    fn trajectories_are_laid_out_side_by_side() {
        let mut table = Table::new().with_component_names(["phi", "z"]).unwrap();
        table
            .consume("fine", &trajectory(2, &[0.0, 0.0, 1.0, 0.5, 0.25, 1.5]))
            .unwrap();
        table
            .consume("coarse", &trajectory(2, &[0.0, 0.0, 1.0, 1.0, 0.5, -2.0]))
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            to_csv(&table),
            "s_fine,phi_fine,z_fine,s_coarse,phi_coarse,z_coarse\n\
             0,0,1,0,0,1\n\
             0.5,0.25,1.5,1,0.5,-2\n"
        );
    }

    #[test]
    fn shorter_trajectories_leave_blank_cells() {
        let mut table = Table::new();
        table
            .consume("short", &trajectory(1, &[0.0, 1.0]))
            .unwrap();
        table
            .consume("long", &trajectory(1, &[0.0, 1.0, 0.1, 2.0, 0.2, 3.0]))
            .unwrap();

        assert_eq!(table.rows(), 3);
        assert_eq!(
            to_csv(&table),
            "s_short,r0_short,s_long,r0_long\n\
             0,1,0,1\n\
             ,,0.1,2\n\
             ,,0.2,3\n"
        );
    }

    #[test]
    fn labels_with_separators_are_quoted() {
        let mut table = Table::new();
        table
            .consume("h=0.1,rk4", &trajectory(1, &[0.0, 1.0]))
            .unwrap();

        let csv = to_csv(&table);
        assert!(csv.starts_with("\"s_h=0.1,rk4\",\"r0_h=0.1,rk4\"\n"), "{csv}");
    }

    #[test]
    fn rejects_bad_labels() {
        let mut table = Table::new();
        let t = trajectory(1, &[0.0, 1.0]);

        table.consume("rk4", &t).unwrap();

        assert!(matches!(table.consume("", &t), Err(TableError::EmptyLabel)));
        assert!(matches!(
            table.consume("rk4", &t),
            Err(TableError::DuplicateLabel(label)) if label == "rk4"
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn component_names_must_match_dimension() {
        let mut table = Table::new().with_component_names(["phi", "r", "z"]).unwrap();

        let result = table.consume("euler", &trajectory(2, &[0.0, 1.0, 2.0]));

        assert!(matches!(
            result,
            Err(TableError::ComponentNames { names: 3, dim: 2 })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn late_component_names_are_checked_against_collected_trajectories() {
        let mut table = Table::new();
        table
            .consume("a", &trajectory(2, &[0.0, 1.0, 2.0]))
            .unwrap();

        let result = table.clone().with_component_names(["x"]);
        assert!(matches!(
            result,
            Err(TableError::ComponentNames { names: 1, dim: 2 })
        ));

        let named = table.with_component_names(["x", "y"]).unwrap();
        assert_eq!(to_csv(&named), "s_a,x_a,y_a\n0,1,2\n");
    }

    #[test]
    fn consumes_through_a_mutable_reference() {
        fn export<S: TrajectorySink>(mut sink: S, t: &Trajectory) -> Result<(), S::Error> {
            sink.consume("first", t)?;
            sink.consume("second", t)
        }

        let mut table = Table::new();
        export(&mut table, &trajectory(1, &[0.0, 1.0])).unwrap();

        assert_eq!(table.len(), 2);
    }
}
