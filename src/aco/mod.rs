//! Ant Colony Optimization (ACO) for the Traveling Salesman Problem.
//!
//! A population of ants builds one tour each per generation by weighted
//! roulette selection over pheromone trails and inverse distance. After
//! every generation the trails evaporate and are reinforced proportionally
//! to tour quality, concentrating the search on short edges.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod construction;
mod pheromone;
mod runner;
mod types;

pub use config::{AcoConfig, ALPHA, BETA, Q};
pub use pheromone::PheromoneField;
pub use runner::{AcoResult, AcoRunner};
pub use types::Ant;
