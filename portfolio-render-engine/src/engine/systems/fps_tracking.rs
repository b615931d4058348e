use std::time::Duration;

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FPS_NOTIFICATION_INTERVAL;

use crate::engine::core::route::Route;
use crate::rpc::web_rpc::WebRpcInterface;

/// Native-only frame rate readout.
#[derive(Component)]
pub struct FpsText;

/// Paces `fps_update` notifications. A report that falls due before the
/// diagnostic has a reading waits for the first frame that has one.
#[derive(Resource)]
pub struct FpsReporter {
    timer: Timer,
    due: bool,
}

impl Default for FpsReporter {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(FPS_NOTIFICATION_INTERVAL, TimerMode::Repeating),
            due: false,
        }
    }
}

impl FpsReporter {
    /// Returns the reading to publish this frame, if any.
    pub fn poll(&mut self, delta: Duration, reading: Option<f32>) -> Option<f32> {
        self.timer.tick(delta);
        self.due |= self.timer.just_finished();

        let fps = reading.filter(|_| self.due)?;
        self.due = false;
        Some(fps)
    }
}

/// Smoothed frames per second, once the diagnostic has samples.
pub fn smoothed_fps(diagnostics: &DiagnosticsStore) -> Option<f32> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .map(|value| value as f32)
}

pub fn fps_notification_system(
    mut reporter: ResMut<FpsReporter>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    route: Res<State<Route>>,
    time: Res<Time>,
) {
    if let Some(fps) = reporter.poll(time.delta(), smoothed_fps(&diagnostics)) {
        rpc_interface.send_notification(
            "fps_update",
            serde_json::json!({
                "fps": fps,
                "route": route.get().path(),
            }),
        );
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    route: Res<State<Route>>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = smoothed_fps(&diagnostics) else {
        return;
    };
    for mut text in &mut query {
        text.0 = format!("FPS: {fps:.1}  {}", route.get().path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: f32) -> Duration {
        Duration::from_secs_f32(value)
    }

    #[test]
    fn reports_once_per_interval() {
        let mut reporter = FpsReporter::default();

        assert_eq!(reporter.poll(secs(0.2), Some(60.0)), None);
        assert_eq!(reporter.poll(secs(0.3), Some(58.0)), Some(58.0));
        assert_eq!(reporter.poll(secs(0.1), Some(59.0)), None);
    }

    #[test]
    fn due_report_waits_for_a_reading() {
        let mut reporter = FpsReporter::default();

        assert_eq!(reporter.poll(secs(FPS_NOTIFICATION_INTERVAL), None), None);
        assert_eq!(reporter.poll(secs(0.01), None), None);
        assert_eq!(reporter.poll(secs(0.01), Some(30.0)), Some(30.0));
        assert_eq!(reporter.poll(secs(0.01), Some(30.0)), None);
    }

    #[test]
    fn empty_diagnostics_have_no_reading() {
        assert_eq!(smoothed_fps(&DiagnosticsStore::default()), None);
    }
}
