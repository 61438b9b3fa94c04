use carousel::InputEvent;
use carousel_adapter::{
    EventSurface, FrameHandle, FrameScheduler, Key, ListenerKind, ManualScheduler, OverlayEvent,
    VideoClick, VideoEvent, VideoStrip,
};

// Example: a headless host for the video strip. A real adapter would forward
// `requestAnimationFrame` and DOM listeners instead of printing.
#[derive(Debug, Default)]
struct ConsoleHost {
    scheduler: ManualScheduler,
}

impl FrameScheduler for ConsoleHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.scheduler.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.scheduler.cancel_frame(handle);
    }
}

impl EventSurface for ConsoleHost {
    fn attach(&mut self, kind: ListenerKind) {
        println!("  + listener {kind:?}");
    }

    fn detach(&mut self, kind: ListenerKind) {
        println!("  - listener {kind:?}");
    }
}

#[derive(Clone, Debug)]
struct Video {
    title: &'static str,
    url: &'static str,
}

fn embed_id(video: &Video) -> Option<String> {
    video.url.split_once("v=").map(|(_, id)| id.to_string())
}

type Strip = VideoStrip<Video, ConsoleHost, String, fn(&Video) -> Option<String>>;

fn run_frames(strip: &mut Strip, n: usize) {
    for _ in 0..n {
        let handles = strip.host_mut().scheduler.advance(16);
        let now = strip.host().scheduler.now_ms();
        for h in handles {
            strip.on_frame(h, now);
        }
    }
}

fn main() {
    let videos = vec![
        Video {
            title: "Store tour",
            url: "https://video.example/watch?v=abc123",
        },
        Video {
            title: "Coming soon",
            url: "",
        },
        Video {
            title: "Chef interview",
            url: "https://video.example/watch?v=xyz789",
        },
    ];

    let resolve: fn(&Video) -> Option<String> = embed_id;
    let mut strip = VideoStrip::with_host(ConsoleHost::default(), resolve);
    println!("mount:");
    strip.mount(videos);
    strip.on_track_resize(2_016.0);

    run_frames(&mut strip, 120);
    println!(
        "after 2s: {} active={:?}",
        strip.transform().css(),
        strip.active_index()
    );

    let now = strip.host().scheduler.now_ms();
    strip.dispatch(VideoEvent::Track(InputEvent::PointerDown { x: 200.0 }), now);
    strip.dispatch(VideoEvent::Track(InputEvent::PointerUp { x: 201.0 }), now);
    println!("tap card 2:");
    match strip.click_item(2, now) {
        VideoClick::Opened(i) => println!(
            "playing {:?} ({})",
            strip.overlay().source(),
            strip.looped()[i].item.title
        ),
        other => println!("no player: {other:?}"),
    }

    run_frames(&mut strip, 60);
    println!("while open: {}", strip.transform().css());

    println!("escape:");
    strip.dispatch(VideoEvent::Overlay(OverlayEvent::KeyDown(Key::Escape)), now + 1_000);
    run_frames(&mut strip, 60);
    println!("resumed: {}", strip.transform().css());

    println!("unmount:");
    strip.unmount();
}
