//! Emoji Burst headless demo driver
//!
//! Runs the fixed-timestep loop without a renderer: periodic launch bursts,
//! one mid-run blast, per-second stat logging, and an optional JSON snapshot
//! at the end. A real presentation layer would drive the same calls from
//! input events and draw the entities each step.

use std::error::Error;

use glam::Vec2;

use emoji_burst::consts::*;
use emoji_burst::sim::{SimState, step};
use emoji_burst::{BurstTuning, LauncherPreset};

struct Options {
    preset: LauncherPreset,
    seed: u64,
    seconds: u32,
    snapshot: Option<String>,
}

fn parse_args() -> Result<Options, Box<dyn Error>> {
    let mut opts = Options {
        preset: LauncherPreset::Classic,
        seed: 0xE40,
        seconds: 30,
        snapshot: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                opts.seed = args.next().ok_or("--seed needs a value")?.parse()?;
            }
            "--seconds" => {
                opts.seconds = args.next().ok_or("--seconds needs a value")?.parse()?;
            }
            "--snapshot" => {
                opts.snapshot = Some(args.next().ok_or("--snapshot needs a path")?);
            }
            name => {
                opts.preset = LauncherPreset::from_str(name)
                    .ok_or_else(|| format!("unknown preset: {name}"))?;
            }
        }
    }
    Ok(opts)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opts = parse_args()?;

    log::info!(
        "Emoji Burst demo: preset={} seed={} seconds={}",
        opts.preset.as_str(),
        opts.seed,
        opts.seconds
    );

    let mut state = SimState::new(opts.seed);
    opts.preset.apply(&mut state);
    let tuning = BurstTuning::for_preset(opts.preset);

    let launch_origin = Vec2::new(state.params.bounds.x / 2.0, state.params.bounds.y - 40.0);
    let ticks_per_second = (1.0 / SIM_DT).round() as u64;
    let total_ticks = opts.seconds as u64 * ticks_per_second;
    let blast_tick = total_ticks / 2;

    for tick in 0..total_ticks {
        // A burst every half second, the way mashing the launch button plays
        if tick % (ticks_per_second / 2) == 0 {
            state.spawn_burst(launch_origin, 12, &tuning);
        }
        if tick == blast_tick {
            log::info!("blast at tick {tick}");
            state.blast(state.params.bounds / 2.0, 40.0, 300.0);
        }

        step(&mut state, SIM_DT);

        if (tick + 1) % ticks_per_second == 0 {
            let speed_sum: f32 = state.entities.iter().map(|e| e.vel.length()).sum();
            let mean_speed = speed_sum / state.entities.len().max(1) as f32;
            log::info!(
                "t={}s entities={} mean_speed={:.2}",
                (tick + 1) / ticks_per_second,
                state.entities.len(),
                mean_speed
            );
        }
    }

    if let Some(path) = opts.snapshot {
        let json = serde_json::to_string_pretty(&state)?;
        std::fs::write(&path, json)?;
        log::info!("snapshot written to {path}");
    }

    Ok(())
}
