pub mod ats;
pub mod domain;
pub mod extraction;
pub mod fit;
pub mod pipeline;
pub mod weights;
