//! Heuristic company intel and interview round mapping

pub mod company;
pub mod rounds;
