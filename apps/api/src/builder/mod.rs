// Resume builder: form payload, section composition, PDF download.
// Composition is pure; rendering is CPU-bound and runs inside spawn_blocking.

pub mod composer;
pub mod handlers;
