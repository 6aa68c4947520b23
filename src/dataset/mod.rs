//! In-memory tables, their CSV form, and the join that fuses them.

pub mod join;
pub mod records;
pub mod storage;
pub mod table;
pub mod values;

pub use join::join_tables;
pub use records::{GameRow, JoinedRow, MetricsRow, Record, StatsRow, TeamRow};
pub use storage::{read_table, table_path, write_table};
pub use table::Table;
pub use values::{LineScores, MadeAttempted, PenaltySummary, PossessionTime, ValueParseError};
