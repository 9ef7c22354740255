use std::f64::consts::TAU;

use blochtrail::{
    AnalyticForm, AnimationConfig, Animator, RecordingSurface, SurfaceOp, TrajectoryConfig,
};

fn run_default(config: AnimationConfig) -> Animator<RecordingSurface> {
    let mut anim = Animator::new(RecordingSurface::new(), config).unwrap();
    anim.run().unwrap();
    anim
}

#[test]
fn analytic_path_walks_all_200_frames() {
    let anim = run_default(AnimationConfig::default());

    let history = anim.history(0).unwrap();
    assert_eq!(history.len(), 200);

    let expected = AnalyticForm::wobble_default()
        .angle_at(TAU * 199.0 / 200.0)
        .to_cartesian();
    let last = history[199];
    assert!(last.distance(expected) < 1e-9);
}

#[test]
fn fast_loop_path_saturates_at_the_seam() {
    let anim = run_default(AnimationConfig::default());

    let history = anim.history(1).unwrap();
    assert_eq!(history.len(), 200);

    // speed = 1.5 over 200 frames: from frame ceil(200 / 1.5) = 134 on,
    // the sweep is pinned to 2*pi and the point no longer moves.
    let resting = history[199];
    for (k, point) in history.iter().enumerate().skip(134) {
        assert_eq!(*point, resting, "frame {k} left the seam");
    }
    assert_ne!(history[130], resting);
}

#[test]
fn stop_fractions_freeze_histories_mid_run() {
    let anim = run_default(AnimationConfig::equatorial_pair());

    // Stop frames 140 and 80; histories hold frames 0..=stop.
    assert_eq!(anim.history(0).unwrap().len(), 141);
    assert_eq!(anim.history(1).unwrap().len(), 81);

    // The frozen dot keeps being repositioned to the freeze-instant point.
    let frozen = *anim.history(1).unwrap().last().unwrap();
    let last_dot_move = anim
        .surface()
        .ops()
        .iter()
        .rev()
        .find_map(|op| match op {
            SurfaceOp::Marker3 { point, .. } => Some(*point),
            _ => None,
        })
        .unwrap();
    assert!(last_dot_move.distance(frozen) < 1e-12);
}

#[test]
fn each_frame_draws_base_plus_shrinking_overlays() {
    let mut config = AnimationConfig::default();
    config.frames = 40;
    config.paths.truncate(1);
    let mut anim = Animator::new(RecordingSurface::new(), config).unwrap();

    // Advance to a frame where the full overlay budget is in play.
    for _ in 0..30 {
        anim.step().unwrap();
    }
    let before = anim.surface().ops().len();
    anim.step().unwrap();
    let ops = &anim.surface().ops()[before..];

    let polylines: Vec<&[blochtrail::Point3]> = ops
        .iter()
        .filter_map(|op| match op {
            SurfaceOp::Polyline3 { points, .. } => Some(points.as_slice()),
            _ => None,
        })
        .collect();

    // Base trail (31 points) followed by 20 strictly shrinking overlays.
    assert_eq!(polylines.len(), 21);
    assert_eq!(polylines[0].len(), 31);
    for pair in polylines[1..].windows(2) {
        assert!(pair[1].len() < pair[0].len());
    }
    assert_eq!(polylines[1].len(), 30);
    assert_eq!(polylines[20].len(), 11);
}

#[test]
fn pacing_is_one_pause_per_frame_plus_settling() {
    let mut config = AnimationConfig::default();
    config.frames = 12;
    let anim = run_default(config);

    let pauses: Vec<f64> = anim
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            SurfaceOp::Pause(s) => Some(*s),
            _ => None,
        })
        .collect();
    assert_eq!(pauses.len(), 13);
    assert_eq!(pauses[0], 0.5);
    assert!(pauses[1..].iter().all(|&s| s == 0.05));
}

#[test]
fn identical_configs_replay_identical_op_logs() {
    let a = run_default(AnimationConfig::default()).into_surface().into_ops();
    let b = run_default(AnimationConfig::default()).into_surface().into_ops();
    assert_eq!(a.len(), b.len());
    assert_eq!(a, b);
}

#[test]
fn config_can_be_driven_from_json() {
    let config = AnimationConfig::from_json(
        r#"{
            "frames": 24,
            "fade": {"steps": 5, "young": [1.0, 0.5, 0.0], "old": [0.6, 0.0, 0.8]},
            "paths": [{
                "trajectory": {"Analytic": "Equator"},
                "stop_fraction": 0.5,
                "color": [1.0, 0.0, 0.0],
                "line_width": 3.0,
                "dot_size": 60.0,
                "phase_scale": 6.283185307179586,
                "marker_x": 105.0
            }]
        }"#,
    )
    .unwrap();
    assert_eq!(config.frames, 24);
    assert!(matches!(
        config.paths[0].trajectory,
        TrajectoryConfig::Analytic(AnalyticForm::Equator)
    ));

    let anim = run_default(config);
    assert_eq!(anim.history(0).unwrap().len(), 13);
}
