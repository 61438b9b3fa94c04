// Example: drive the engine from a simulated 60 fps frame loop with a drag in the middle.
use carousel::{CarouselOptions, Dispatch, Engine, InputEvent, TrackExtent, build_loop};

fn main() {
    let banners = ["spring-sale", "new-stores", "app-download"];
    let looped = build_loop(&banners);
    println!("rendering {} cards for {} banners", looped.len(), banners.len());

    let options = CarouselOptions::banner();
    let mut engine = Engine::new(options);
    engine.reset(banners.len());

    // The host measures the rendered track; here every card has a fixed span.
    let extent = TrackExtent::estimate(banners.len(), options.card_width_px, options.gap_px);
    engine.observe_track_width(extent.half_width * 2.0);

    let mut now_ms = 0u64;
    for frame in 0..240u64 {
        now_ms += 16;

        // A user grabs the strip at ~1 s and flings it to the right.
        let verdict = match frame {
            60 => engine.dispatch(InputEvent::PointerDown { x: 400.0 }, now_ms),
            61..=70 => {
                let x = 400.0 + (frame - 60) as f64 * 25.0;
                engine.dispatch(InputEvent::PointerMove { x }, now_ms)
            }
            71 => engine.dispatch(InputEvent::PointerUp { x: 675.0 }, now_ms),
            72 => engine.dispatch(InputEvent::PointerLeave, now_ms),
            _ => Dispatch::Ignored,
        };
        if let Dispatch::Gesture(v) = verdict {
            println!("t={now_ms}ms release: {v:?} velocity={:.1}", engine.velocity());
        }

        if let Some(position) = engine.tick(now_ms) {
            if frame % 30 == 0 {
                println!(
                    "t={now_ms}ms position={position:.2} owner={:?}",
                    engine.motion_owner()
                );
            }
        }
    }

    println!("final state: {:?}", engine.state());
}
