#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;
use macroquad::prelude::*;
use skyflight_core::glam::{DQuat, DVec3};
use skyflight_core::{
    FlightError, FlightSession, FrameOutput, HudReadout, KeyHub, Propeller, Scenery,
    controls_legend,
};

pub mod cli;
pub mod keys;
pub mod overlay;
pub mod rig;
pub mod scene;

use crate::cli::LaunchOptions;
use crate::rig::AircraftRig;

const FIELD_OF_VIEW_DEG: f32 = 75.0;

pub fn to_vec3(v: DVec3) -> Vec3 {
    vec3(v.x as f32, v.y as f32, v.z as f32)
}

pub fn to_quat(q: DQuat) -> Quat {
    Quat::from_xyzw(q.x as f32, q.y as f32, q.z as f32, q.w as f32)
}

struct GameState {
    hub: KeyHub,
    session: FlightSession,
    scenery: Scenery,
    rig: AircraftRig,
    propeller: Propeller,
    legend: Vec<String>,
    frame: FrameOutput,
}

impl GameState {
    fn new(options: LaunchOptions) -> Result<Self, FlightError> {
        let hub = KeyHub::new();
        let session = FlightSession::start(&hub, options.flight)?;
        let scenery = Scenery::generate(&options.scenery);
        log::info!(
            "scenery seed {}: {} clouds, {} stars",
            options.scenery.seed,
            scenery.clouds.len(),
            scenery.stars.len()
        );
        let legend = controls_legend(session.bindings());
        let frame = session.output();

        Ok(Self {
            hub,
            session,
            scenery,
            rig: AircraftRig::default(),
            propeller: Propeller::new(),
            legend,
            frame,
        })
    }

    fn update(&mut self, delta: f64) {
        keys::pump_keyboard(&self.hub);

        if is_key_pressed(KeyCode::R) {
            log::info!("flight reset");
            self.session.reset();
            self.frame = self.session.output();
        }

        self.propeller.advance(delta);
        match self.session.tick(delta) {
            Ok(frame) => self.frame = frame,
            Err(err) => log::warn!("skipping frame: {}", err),
        }
    }

    fn render(&self) {
        clear_background(scene::SKY);

        let camera_position = to_vec3(self.frame.camera.position);
        set_camera(&Camera3D {
            position: camera_position,
            target: to_vec3(self.frame.camera.look_at),
            up: to_vec3(self.frame.camera.up()),
            fovy: FIELD_OF_VIEW_DEG.to_radians(),
            ..Default::default()
        });

        scene::draw_stars(&self.scenery, camera_position);
        scene::draw_sun(camera_position);
        scene::draw_terrain(&self.scenery);
        rig::draw_aircraft(&self.frame.pose, self.propeller.angle() as f32, &self.rig);
        scene::draw_clouds(&self.scenery, camera_position);

        set_default_camera();
        overlay::draw_controls(&self.legend);
        overlay::draw_hud(&HudReadout::from_stats(&self.frame.stats));
    }

    fn shutdown(self) {
        self.session.stop();
        log::debug!("{} keyboard subscribers left", self.hub.subscriber_count());
    }
}

pub async fn run(options: LaunchOptions) {
    install_panic_hook();
    let mut game = match GameState::new(options) {
        Ok(game) => game,
        Err(err) => {
            log::error!("could not start flight: {}", err);
            return;
        }
    };

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        game.update(get_frame_time() as f64);
        game.render();

        next_frame().await;
    }

    game.shutdown();
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}
