//! Urchin Arcade demo runner
//!
//! Drives a scene headlessly: the hero drifts toward the nearest urchin that
//! hasn't sprung yet, and every event is logged.

use urchin_arcade::Settings;
use urchin_arcade::render::CommandList;
use urchin_arcade::sim::{GameObject, Scene, SceneEvent, tick};

/// Urchins in a generated demo scene
const DEMO_URCHINS: usize = 6;
/// Hero drift per tick when its spec leaves speed at 0
const DEMO_HERO_SPEED: f32 = 1.5;

fn run_demo(mut scene: Scene, settings: &Settings) {
    let speed = if scene.hero.entity.speed > 0.0 {
        scene.hero.entity.speed
    } else {
        DEMO_HERO_SPEED
    };

    let mut activations = 0;
    let mut strikes = 0;

    for _ in 0..settings.demo_ticks {
        // Head for the closest urchin that can still spring
        let hero_pos = scene.hero.vector();
        let target = scene
            .urchins
            .iter()
            .filter(|u| !u.is_exploded())
            .map(|u| u.entity.pos)
            .min_by(|a, b| {
                a.distance(hero_pos)
                    .partial_cmp(&b.distance(hero_pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        if let Some(target) = target {
            let step = (target - hero_pos).clamp_length_max(speed);
            scene.hero.shift(step.x, step.y);
        }

        for event in tick(&mut scene, settings) {
            match event {
                SceneEvent::Activated { urchin, explosion } => {
                    activations += 1;
                    log::info!("tick {}: urchin {} sprang ({:?})", scene.time_ticks, urchin, explosion);
                }
                SceneEvent::HeroStruck { urchin, contact } => {
                    strikes += 1;
                    log::debug!("tick {}: hero struck by urchin {} ({:?})", scene.time_ticks, urchin, contact);
                }
                SceneEvent::ItemClaimed { item } => {
                    log::info!("tick {}: item {} claimed", scene.time_ticks, item);
                }
            }
        }
    }

    let mut canvas = CommandList::new();
    scene.draw(&mut canvas);

    log::info!(
        "Finished {} ticks: {} activations, {} strike ticks, {} draw commands ({} arm lines)",
        scene.time_ticks,
        activations,
        strikes,
        canvas.commands.len(),
        canvas.line_count()
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Urchin Arcade (native) starting...");

    let settings = Settings::from_env();

    let scene = match std::env::args().nth(1) {
        Some(path) => match Scene::load(&path) {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("Failed to load scene {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            let seed = settings.seed.unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0)
            });
            Scene::scatter(seed, DEMO_URCHINS)
        }
    };

    run_demo(scene, &settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Urchin Arcade starting...");

    let settings = Settings::default();
    let scene = Scene::scatter(settings.seed.unwrap_or(1), DEMO_URCHINS);
    run_demo(scene, &settings);
}
