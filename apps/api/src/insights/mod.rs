// Profile insights for the candidate dashboard: a short bullet summary and
// tailored improvement suggestions, both generated upstream as strict JSON.

pub mod generator;
pub mod handlers;
pub mod prompts;
