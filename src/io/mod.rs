/*!
# IO utilities

Saving of the final sentence table.
!*/
mod csvwriter;

pub use csvwriter::CsvWriter;
