pub mod aggregator;
pub mod membership;
pub mod organizers;
pub mod qualification;
