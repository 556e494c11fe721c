//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] drives the generational process:
//! initialization → evaluation → tournament selection → crossover →
//! mutation → replacement, for a fixed number of generations.

use super::config::EvolutionConfig;
use super::selection::tournament;
use super::types::{EvolutionProblem, Fitness, Individual};
use crate::error::StylistError;
use rand::Rng;

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<I: Individual> {
    /// The fittest individual of the final population.
    pub best: I,

    /// Same as `best.fitness()`.
    pub best_fitness: I::Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population followed by the best
    /// fitness of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// The random source is always supplied by the caller so runs can be
/// reproduced from a seed.
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the evolutionary search.
    ///
    /// Returns [`StylistError::InvalidConfig`] if `config` does not
    /// validate.
    pub fn run<P: EvolutionProblem, R: Rng>(
        problem: &P,
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Result<EvolutionResult<P::Individual>, StylistError> {
        config.validate().map_err(StylistError::InvalidConfig)?;

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        evaluate_all(problem, &mut population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best_of(&population).fitness().to_f64());

        let elite_count = config.elite_count();

        for gen in 0..config.generations {
            if elite_count > 0 {
                population.sort_by(|a, b| {
                    a.fitness()
                        .partial_cmp(&b.fitness())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, rng);
                let p2 = tournament(&population, config.tournament_size, rng);

                let children = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    problem.crossover(&population[p1], &population[p2], rng)
                } else {
                    vec![population[p1].clone()]
                };

                for mut child in children {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    if rng.random_range(0.0..1.0) < config.mutation_rate {
                        problem.mutate(&mut child, rng);
                    }
                    next_gen.push(child);
                }
            }

            evaluate_all(problem, &mut next_gen[elite_count..], config.parallel);
            population = next_gen;

            let gen_best = best_of(&population).fitness();
            fitness_history.push(gen_best.to_f64());
            problem.on_generation(gen + 1, gen_best);
        }

        let best = best_of(&population).clone();
        Ok(EvolutionResult {
            best_fitness: best.fitness(),
            best,
            generations: config.generations,
            fitness_history,
        })
    }
}

#[cfg(feature = "parallel")]
fn evaluate_all<P: EvolutionProblem>(problem: &P, individuals: &mut [P::Individual], parallel: bool) {
    use rayon::prelude::*;

    if parallel {
        individuals.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        for ind in individuals.iter_mut() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<P: EvolutionProblem>(problem: &P, individuals: &mut [P::Individual], _parallel: bool) {
    for ind in individuals.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// The individual with the lowest fitness; the first one on ties.
///
/// The population is never empty: `population_size >= 2` is validated.
fn best_of<I: Individual>(population: &[I]) -> &I {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness() < best.fitness() {
            best = ind;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ---- OneMax: maximize set bits (minimize negative count) ----

    #[derive(Clone, Debug)]
    struct BitString {
        bits: Vec<bool>,
        fitness: f64,
    }

    impl Individual for BitString {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = f;
        }
    }

    struct OneMax {
        n: usize,
    }

    impl EvolutionProblem for OneMax {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            BitString {
                bits: (0..self.n).map(|_| rng.random_bool(0.5)).collect(),
                fitness: f64::worst(),
            }
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            -(ind.bits.iter().filter(|&&b| b).count() as f64)
        }

        fn crossover<R: Rng>(&self, p1: &BitString, p2: &BitString, rng: &mut R) -> Vec<BitString> {
            let bits = p1
                .bits
                .iter()
                .zip(&p2.bits)
                .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
                .collect();
            vec![BitString {
                bits,
                fitness: f64::worst(),
            }]
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            ind.bits[idx] = !ind.bits[idx];
        }
    }

    #[test]
    fn test_onemax_convergence() {
        let problem = OneMax { n: 20 };
        let config = EvolutionConfig::default()
            .with_population_size(50)
            .with_generations(100)
            .with_mutation_rate(0.3);
        let mut rng = StdRng::seed_from_u64(42);

        let result = EvolutionRunner::run(&problem, &config, &mut rng).unwrap();
        assert!(
            result.best_fitness <= -15.0,
            "expected fitness <= -15.0 for 20-bit OneMax, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_history_length() {
        let problem = OneMax { n: 10 };
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_generations(30);
        let mut rng = StdRng::seed_from_u64(1);

        let result = EvolutionRunner::run(&problem, &config, &mut rng).unwrap();
        assert_eq!(result.generations, 30);
        assert_eq!(result.fitness_history.len(), 31);
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_elitism_is_monotone() {
        let problem = OneMax { n: 10 };
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_generations(50)
            .with_elite_ratio(0.2);
        let mut rng = StdRng::seed_from_u64(42);

        let result = EvolutionRunner::run(&problem, &config, &mut rng).unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "fitness should be non-increasing with elitism: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = OneMax { n: 16 };
        let config = EvolutionConfig::default();

        let a = EvolutionRunner::run(&problem, &config, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = EvolutionRunner::run(&problem, &config, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.best.bits, b.best.bits);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let problem = OneMax { n: 4 };
        let config = EvolutionConfig::default().with_population_size(1);
        let err = EvolutionRunner::run(&problem, &config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, StylistError::InvalidConfig(_)));
    }

    #[test]
    fn test_no_crossover_clones_parent() {
        let problem = OneMax { n: 8 };
        let config = EvolutionConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0)
            .with_generations(5);
        let mut rng = StdRng::seed_from_u64(3);

        let result = EvolutionRunner::run(&problem, &config, &mut rng).unwrap();
        // Pure selection never produces anything better than the initial best.
        assert!(result.best_fitness >= result.fitness_history[0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_evaluation_matches_sequential() {
        let problem = OneMax { n: 24 };
        let sequential = EvolutionConfig::default().with_generations(15);
        let parallel = sequential.clone().with_parallel(true);

        let a = EvolutionRunner::run(&problem, &sequential, &mut StdRng::seed_from_u64(21)).unwrap();
        let b = EvolutionRunner::run(&problem, &parallel, &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(a.best.bits, b.best.bits);
        assert_eq!(a.fitness_history, b.fitness_history);
    }
}
