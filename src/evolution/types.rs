//! Core trait definitions for the evolutionary engine.
//!
//! [`Individual`] and [`EvolutionProblem`] form the contract between
//! the generic loop in [`EvolutionRunner`](super::EvolutionRunner) and a
//! concrete search space.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization). Maximization
/// problems negate their score.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Value assigned to individuals that have not been evaluated.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for history and logging.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution carrying its own fitness.
pub trait Individual: Clone + Send + Sync {
    type Fitness: Fitness;

    fn fitness(&self) -> Self::Fitness;

    /// Called by the runner after [`EvolutionProblem::evaluate`].
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// A search space the evolutionary loop can operate on.
///
/// `Send + Sync` because evaluation may run on the rayon pool when the
/// `parallel` feature is enabled.
pub trait EvolutionProblem: Send + Sync {
    type Individual: Individual;

    /// Creates a random valid individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes fitness. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into one or more children.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Vec<Self::Individual>;

    /// Mutates an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);

    /// Called at the end of each generation with the generation's best
    /// fitness.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
