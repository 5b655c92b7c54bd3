//! Headless runner: drives the camera coordinator at a fixed frame rate and
//! logs the pose once per simulated second.

use std::path::Path;

use camrig::{CameraCoordinator, CameraRig, CamrigError, OrbitController, Options};

const FPS: u32 = 60;

struct RunConfig {
    options: Options,
    preset: Option<String>,
    seconds: u32,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<RunConfig, CamrigError> {
    let mut next = args.next();
    let options = match next.as_deref() {
        Some(path) if path.ends_with(".toml") => {
            let options = Options::load(Path::new(path))?;
            next = args.next();
            options
        }
        _ => Options::default(),
    };
    let preset = next;
    let seconds = match args.next() {
        Some(raw) => raw.parse().map_err(|_| {
            CamrigError::InvalidOptions(format!("not a number of seconds: {raw}"))
        })?,
        None => 10,
    };
    Ok(RunConfig {
        options,
        preset,
        seconds,
    })
}

fn run(config: &RunConfig) -> Result<(), CamrigError> {
    let mut coordinator = CameraCoordinator::new(&config.options)?;
    let mut rig = OrbitController::new(&config.options.camera, 16.0 / 9.0);
    if let Some(preset) = &config.preset {
        coordinator.select_animation(preset, &mut rig)?;
    }

    let dt = 1.0 / f64::from(FPS);
    for second in 1..=config.seconds {
        for _ in 0..FPS {
            let _ = coordinator.frame(dt, &mut rig);
        }
        let pose = rig.pose();
        log::info!(
            "t={second:>3}s [{}] clock={:.3} eye=({:.3}, {:.3}, {:.3}) look_at=({:.3}, {:.3}, {:.3})",
            coordinator.animation_id(),
            coordinator.animation_time(),
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.look_at.x,
            pose.look_at.y,
            pose.look_at.z,
        );
        for event in coordinator.drain_events() {
            log::info!("event: {event:?}");
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            log::error!("Usage: camrig [options.toml] [preset] [seconds]");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
