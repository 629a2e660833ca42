//! Episode statistics for policy rollouts
//!
//! Tracks episode rewards, lengths and apples eaten over a rolling window,
//! for progress reporting while a policy (random or otherwise) plays the
//! environment.

use std::collections::VecDeque;

/// Rollout statistics tracker with rolling averages.
#[derive(Debug, Clone)]
pub struct RolloutStats {
    /// Episode rewards (rolling window)
    episode_rewards: VecDeque<i64>,

    /// Episode lengths in steps (rolling window)
    episode_lengths: VecDeque<usize>,

    /// Apples eaten per episode (rolling window)
    episode_apples: VecDeque<u32>,

    /// Best episode reward seen so far
    best_reward: Option<i64>,

    /// Total number of episodes completed
    total_episodes: usize,

    /// Total number of environment steps taken
    total_steps: usize,

    /// Window size for rolling averages
    window_size: usize,
}

impl RolloutStats {
    /// Create a tracker keeping the last `window_size` episodes for the
    /// rolling averages.
    pub fn new(window_size: usize) -> Self {
        Self {
            episode_rewards: VecDeque::with_capacity(window_size),
            episode_lengths: VecDeque::with_capacity(window_size),
            episode_apples: VecDeque::with_capacity(window_size),
            best_reward: None,
            total_episodes: 0,
            total_steps: 0,
            window_size,
        }
    }

    /// Record the completion of an episode.
    pub fn record_episode(&mut self, reward: i64, length: usize, apples: u32) {
        Self::push_window(&mut self.episode_rewards, reward, self.window_size);
        Self::push_window(&mut self.episode_lengths, length, self.window_size);
        Self::push_window(&mut self.episode_apples, apples, self.window_size);
        self.best_reward = Some(self.best_reward.map_or(reward, |best| best.max(reward)));
        self.total_episodes += 1;
        self.total_steps += length;
    }

    /// Mean episode reward over the rolling window, 0.0 when empty.
    pub fn mean_episode_reward(&self) -> f64 {
        if self.episode_rewards.is_empty() {
            0.0
        } else {
            self.episode_rewards.iter().sum::<i64>() as f64 / self.episode_rewards.len() as f64
        }
    }

    /// Mean episode length over the rolling window.
    pub fn mean_episode_length(&self) -> f64 {
        if self.episode_lengths.is_empty() {
            0.0
        } else {
            self.episode_lengths.iter().sum::<usize>() as f64 / self.episode_lengths.len() as f64
        }
    }

    /// Mean apples eaten over the rolling window.
    pub fn mean_episode_apples(&self) -> f64 {
        if self.episode_apples.is_empty() {
            0.0
        } else {
            self.episode_apples.iter().sum::<u32>() as f64 / self.episode_apples.len() as f64
        }
    }

    /// Best single-episode reward, if any episode finished.
    pub fn best_reward(&self) -> Option<i64> {
        self.best_reward
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// One-line summary of the current statistics.
    pub fn format_summary(&self) -> String {
        format!(
            "Episodes: {} | Steps: {} | Reward: {:.2} | Apples: {:.2} | Len: {:.1} | Best: {}",
            self.total_episodes,
            self.total_steps,
            self.mean_episode_reward(),
            self.mean_episode_apples(),
            self.mean_episode_length(),
            self.best_reward.map_or("-".to_string(), |b| b.to_string()),
        )
    }

    fn push_window<T>(window: &mut VecDeque<T>, value: T, window_size: usize) {
        if window.len() >= window_size {
            window.pop_front();
        }
        window.push_back(value);
    }
}
