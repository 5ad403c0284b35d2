use rand::Rng;

/// Picks the next track index when shuffling.
pub trait IndexSource {
    /// A uniformly distributed index in `0..len`. Never called with `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

