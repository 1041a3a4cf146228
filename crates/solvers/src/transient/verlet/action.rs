/// Control actions supported by the Verlet step loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the loop early and return the solution so far.
    StopEarly,
}
