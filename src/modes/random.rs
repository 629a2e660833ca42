//! Random-policy baseline mode
//!
//! Rolls episodes with uniformly sampled actions and reports episode
//! statistics. Useful as a sanity baseline for learned policies and as a
//! smoke test of the environment loop.

use anyhow::Result;
use log::debug;

use crate::env::{IdAllocator, SnakeEnv};
use crate::game::EnvConfig;
use crate::metrics::RolloutStats;

/// Configuration for the random baseline
#[derive(Debug, Clone)]
pub struct RandomConfig {
    /// Number of episodes to roll
    pub num_episodes: usize,

    /// Step cap per episode, in case the policy survives too long
    pub max_steps_per_episode: usize,

    /// Print a stats summary every N episodes
    pub log_frequency: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            num_episodes: 100,
            max_steps_per_episode: 1000,
            log_frequency: 10,
        }
    }
}

/// Random baseline runner
pub struct RandomMode {
    env: SnakeEnv,
    config: RandomConfig,
    stats: RolloutStats,
}

impl RandomMode {
    pub fn new(env_config: EnvConfig, config: RandomConfig, ids: &IdAllocator) -> Result<Self> {
        let window = config.log_frequency.max(1);
        Ok(Self {
            env: SnakeEnv::new(env_config, ids)?,
            config,
            stats: RolloutStats::new(window),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_header();

        for episode in 1..=self.config.num_episodes {
            let (reward, steps, apples) = self.run_episode();
            self.stats.record_episode(reward, steps, apples);

            if self.config.log_frequency > 0 && episode % self.config.log_frequency == 0 {
                println!("{}", self.stats.format_summary());
            }
        }

        println!("\nRandom baseline complete.");
        println!("{}", self.stats.format_summary());
        Ok(())
    }

    /// Roll one episode to termination (or the step cap) and return its
    /// total reward, length and apples eaten.
    fn run_episode(&mut self) -> (i64, usize, u32) {
        self.env.reset();
        let mut steps = 0;
        let mut apples = 0;

        loop {
            let action = self.env.sample();
            let length_before = self.env.state().snake_length;
            let outcome = self.env.step(action);
            steps += 1;

            if self.env.state().snake_length > length_before {
                apples += 1;
            }

            debug!(
                "episode step {}: action={} reward={} done={}",
                steps, action, outcome.reward, outcome.done
            );

            if outcome.done || steps >= self.config.max_steps_per_episode {
                break;
            }
        }

        (self.env.state().score, steps, apples)
    }

    fn print_header(&self) {
        let info = self.env.info();
        println!("Snake environment, random policy");
        println!("name: {}", info.name);
        println!("id: {}", info.id);
        println!("observation: {}", info.observation_mode);
        println!("storage path: {}", info.storage_path.display());
        println!("action space shape: {}", self.env.action_space().shape());
        println!("episodes: {}\n", self.config.num_episodes);
    }
}
