use crate::game::Observation;

/// Anything that can pick an action id from an observation.
pub trait Agent {
    /// Select an action id given the current observation.
    fn select_action(&mut self, observation: &Observation) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
