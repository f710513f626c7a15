use std::cell::RefCell;
use std::rc::Rc;

use textbox_core::input::{InputEvent, Key, PointerButton};
use textbox_core::{Color, Scene, SceneNode};
use textbox_platform::{EventQueue, FrameClock};
use textbox_text::{CosmicMetrics, FontMetrics, MonoMetrics};
use textbox_ui::{TextInput, TextInputConfig};

const CONFIG: &str = r#"{
    "x": 40, "y": 40, "width": 220, "height": 32,
    "border_radius": 6,
    "placeholder": "Type a command",
    "font_size": 16,
    "outline_width": 1,
    "padding": 6
}"#;

/// One frame of scripted input.
fn script() -> Vec<Vec<InputEvent>> {
    let mut frames = vec![
        vec![InputEvent::pointer_move(60.0, 50.0)],
        vec![InputEvent::pointer_down(PointerButton::Primary, 60.0, 50.0)],
        InputEvent::typed("hello wrld"),
    ];
    for _ in 0..3 {
        frames.push(vec![InputEvent::key_down(Key::ArrowLeft)]);
    }
    frames.push(InputEvent::typed("o"));
    frames.push(vec![InputEvent::key_down(Key::End)]);
    frames.push(vec![InputEvent::key_down(Key::Backspace)]);
    // held long enough to repeat a few times
    frames.extend((0..20).map(|_| Vec::new()));
    frames.push(vec![InputEvent::key_up(Key::Backspace)]);
    frames.push(vec![InputEvent::key_down(Key::Enter)]);
    frames.push(vec![InputEvent::pointer_move(400.0, 400.0)]);
    frames
}

fn font_for(cfg: &TextInputConfig) -> Rc<dyn FontMetrics> {
    if std::env::var_os("TEXTBOX_MONO").is_some() {
        Rc::new(MonoMetrics::new(cfg.font_size * 0.6, cfg.font_size))
    } else {
        Rc::new(CosmicMetrics::new(cfg.font_size))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = TextInputConfig::from_json(CONFIG)?;
    let font = font_for(&cfg);
    let mut input = TextInput::new(cfg, font)?;
    input.set_hover_background_color(Color::from_hex("#EEF3FF"));
    input.set_active_background_color(Color::from_hex("#FFFFFF"));
    input.set_inactive_background_color(Color::from_hex("#F4F4F4"));

    let submitted = Rc::new(RefCell::new(Vec::<String>::new()));
    {
        let submitted = submitted.clone();
        input.set_on_submit(
            move |ti| submitted.borrow_mut().push(ti.text().to_string()),
            true,
        );
    }
    input.set_on_hover(|_| log::info!("hover"));
    input.set_on_not_hover(|_| log::info!("hover end"));
    input.set_on_active(|_| log::info!("focused"));
    input.set_on_inactive(|_| log::info!("blurred"));

    let mut clock = FrameClock::new();
    let mut queue = EventQueue::new();
    let mut scene = Scene::new(Color::from_hex("#202020"));

    for (frame, events) in script().into_iter().enumerate() {
        queue.extend(events);
        // fixed step keeps the run reproducible; the wall clock is only logged
        let wall_dt = clock.tick();
        let dt = 1.0 / 30.0;

        input.handle_events(&queue.take_frame(), dt);
        scene.clear();
        input.draw(&mut scene);

        log::debug!(
            "frame {frame:>2} (wall {wall_dt:.4}s): text={:?} caret={} scroll={:.1} nodes={}",
            input.text(),
            input.caret(),
            input.scroll_offset(),
            scene.nodes.len()
        );
    }

    for node in &scene.nodes {
        if let SceneNode::Text { text, .. } = node {
            println!("last frame shows: {text:?}");
        }
    }
    for s in submitted.borrow().iter() {
        println!("submitted: {s:?}");
    }
    anyhow::ensure!(scene.is_balanced(), "unbalanced clip stack");
    Ok(())
}
