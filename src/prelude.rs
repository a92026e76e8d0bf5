//! This module reimports commonly used types.

pub use crate::evolution::CandidateFactory;
pub use crate::evolution::CandidateGenerator;
pub use crate::evolution::EvaluationStrategy;
pub use crate::evolution::EvolutionEngine;
pub use crate::evolution::EvolutionEngineBuilder;
pub use crate::evolution::EvolutionError;
pub use crate::evolution::EvolutionLogger;
pub use crate::evolution::EvolutionObserver;
pub use crate::evolution::EvolutionOperator;
pub use crate::evolution::EvolutionResult;
pub use crate::evolution::FitnessEvaluator;
pub use crate::evolution::GenerationalReplacement;
pub use crate::evolution::PerCandidateEvaluation;
pub use crate::evolution::SelectionStrategy;
pub use crate::evolution::VariationOperator;

pub use crate::population::EvaluatedCandidate;
pub use crate::population::PopulationSnapshot;
pub use crate::population::RankedPopulation;

pub use crate::termination::ElapsedTime;
pub use crate::termination::GenerationCount;
pub use crate::termination::Stagnation;
pub use crate::termination::TargetFitness;
pub use crate::termination::TerminationCondition;
pub use crate::termination::UserAbort;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::SignalQuota;
pub use crate::utils::Timer;
pub use crate::utils::{Random, RandomGen};
