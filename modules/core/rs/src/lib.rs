pub use quality::QualityTable;
pub use read::AlignedRead;

pub mod cigar;
pub mod quality;
mod read;
