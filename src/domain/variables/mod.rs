//! Variables - keyword-map extraction of the decision's structure.

pub mod keyword_maps;
mod extractor;

pub use extractor::{Dimension, VariableExtractor, VariablesAndConstraints};
