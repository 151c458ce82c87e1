/// Windowed sine/cosine evaluator driving registered divisions.
pub mod peak_valley;
/// Linear fragment ramp with alternating mirroring.
pub mod ramp;
