use blochtrail::{AnimationConfig, Animator, RecordingSurface, SurfaceOp};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AnimationConfig::default();
    let mut surface = RecordingSurface::new();
    let left_marker = surface.register_external_marker();
    let right_marker = surface.register_external_marker();

    let mut anim = Animator::new(surface, config)?;
    anim.attach_bar_marker(0, left_marker)?;
    anim.attach_bar_marker(1, right_marker)?;
    anim.run()?;

    for index in [0, 1] {
        let history = anim.history(index).expect("path exists");
        let last = history.last().expect("at least one frame ran");
        println!(
            "path {index}: {} trail points, resting at ({:.3}, {:.3}, {:.3})",
            history.len(),
            last.x,
            last.y,
            last.z
        );
    }

    let ops = anim.surface().ops();
    let polylines = ops
        .iter()
        .filter(|op| matches!(op, SurfaceOp::Polyline3 { .. }))
        .count();
    println!("recorded {} surface ops ({polylines} polylines)", ops.len());

    Ok(())
}
