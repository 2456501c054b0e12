//! Flap Gate demo runner
//!
//! Plays episodes headlessly with a built-in policy, optionally pacing a
//! renderer at the target frame rate, and records the best runs.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use flap_gate::policy::{Autopilot, IdlePolicy, Policy, RandomPolicy};
use flap_gate::renderer::{FramePacer, SceneRenderer};
use flap_gate::scoreboard::{EpisodeRecord, Scoreboard};
use flap_gate::{Settings, Simulation};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyKind {
    Idle,
    Random,
    Autopilot,
}

#[derive(Debug, Parser)]
#[command(name = "flap-gate", about = "Run Flap Gate episodes with a built-in policy")]
struct Args {
    /// Seed of the first episode; episode N uses seed + N
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of episodes to play
    #[arg(long, default_value_t = 1)]
    episodes: u32,

    /// Controller driving the avatar
    #[arg(long, value_enum, default_value_t = PolicyKind::Autopilot)]
    policy: PolicyKind,

    /// Stop an episode after this many ticks even if it has not ended
    #[arg(long, default_value_t = 1000)]
    max_ticks: u64,

    /// Flap probability for the random policy
    #[arg(long, default_value_t = 0.1)]
    flap_probability: f64,

    /// JSON settings file (defaults are used when omitted)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// JSON scoreboard to update with the results
    #[arg(long)]
    scoreboard: Option<PathBuf>,

    /// Render every tick, paced at the configured frame rate
    #[arg(long)]
    render: bool,
}

fn make_policy(args: &Args, settings: &Settings) -> Box<dyn Policy> {
    match args.policy {
        PolicyKind::Idle => Box::new(IdlePolicy),
        PolicyKind::Random => Box::new(RandomPolicy::new(args.seed, args.flap_probability)),
        PolicyKind::Autopilot => Box::new(Autopilot::new(settings)),
    }
}

/// Seed for the given episode; wraps instead of overflowing
fn episode_seed(base: u64, episode: u32) -> u64 {
    base.wrapping_add(u64::from(episode))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut board = match &args.scoreboard {
        Some(path) => Scoreboard::load_from(path)?,
        None => Scoreboard::new(),
    };

    let mut sim = Simulation::new(settings.clone(), args.seed)?;
    let mut policy = make_policy(&args, &settings);
    let renderer = args.render.then(|| SceneRenderer::new(&settings));
    let mut pacer = FramePacer::new(settings.target_fps);

    for episode in 0..args.episodes {
        let seed = episode_seed(args.seed, episode);
        let mut observation = sim.reset_with_seed(seed);
        let mut total_reward = 0.0;

        while sim.ticks() < args.max_ticks {
            let outcome = sim.step(policy.act(&observation))?;
            observation = outcome.observation;
            total_reward += outcome.reward;

            if let Some(renderer) = &renderer {
                let frame = renderer.render(&sim.snapshot());
                pacer.wait();
                log::trace!("Frame: {} vertices, score {}", frame.vertices.len(), frame.score);
            }

            if outcome.done {
                break;
            }
        }

        log::info!(
            "Episode {} (seed {}): score {}, ticks {}, reward {:.1}",
            episode,
            seed,
            sim.score(),
            sim.ticks(),
            total_reward
        );

        let record = EpisodeRecord {
            score: sim.score(),
            ticks: sim.ticks(),
            total_reward,
            seed,
            policy: policy.name().to_string(),
        };
        if let Some(rank) = board.add(record) {
            log::info!("Episode {} ranked #{} on the scoreboard", episode, rank);
        }
    }

    if let Some(best) = board.best() {
        println!(
            "Best: score {} over {} ticks (seed {}, {})",
            best.score, best.ticks, best.seed, best.policy
        );
    }

    if let Some(path) = &args.scoreboard {
        board.save_to(path)?;
    }

    Ok(())
}
