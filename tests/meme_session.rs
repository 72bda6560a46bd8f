//! End-to-end meme sessions driven purely through `dispatch`.

use memelayout::*;

/// Feed events in order, keeping the last good state and every effect.
fn run(canvas: Size, events: Vec<Event>) -> (AppState, Vec<Effect>, Vec<FitError>) {
    let mut state = AppState::new(canvas);
    let mut effects = Vec::new();
    let mut errors = Vec::new();
    for event in events {
        match dispatch(&state, event) {
            Ok(t) => {
                state = t.state;
                effects.extend(t.effects);
            }
            Err(e) => errors.push(e),
        }
    }
    (state, effects, errors)
}

fn image(name: &str, width: u32, height: u32) -> Event {
    Event::ImageSelected {
        file_name: name.to_string(),
        width,
        height,
    }
}

fn captions(top: &str, bottom: &str) -> Event {
    Event::FormSubmitted {
        top: top.to_string(),
        bottom: bottom.to_string(),
    }
}

#[test]
fn generate_then_read_aloud() {
    let (state, effects, errors) = run(
        Size::new(400, 400),
        vec![
            Event::VoicesChanged(vec![
                Voice::new("Alex", "en-US").default_voice(),
                Voice::new("Fiona", "en-GB"),
            ]),
            image("dog.jpg", 1200, 800),
            captions("WOW", "SUCH LAYOUT"),
            Event::VolumeChanged(100),
            Event::ReadAloudClicked {
                top: "WOW".to_string(),
                bottom: "SUCH LAYOUT".to_string(),
                voice: Some("Fiona".to_string()),
            },
        ],
    );
    assert!(errors.is_empty());

    let image = state.image.as_ref().unwrap();
    assert_eq!(image.placement.width, 400.0);
    assert!((image.placement.height - 266.666_666_666_666_7).abs() < 1e-9);
    assert!(!state.controls.submit);
    assert!(state.controls.reset && state.controls.read_aloud);

    let spoken: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::Speak(u) => Some(u),
            _ => None,
        })
        .collect();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0].text, "WOW SUCH LAYOUT");
    assert_eq!(spoken[0].volume, 1.0);
    assert_eq!(
        spoken[0].voice.as_ref().map(|v| v.lang.as_str()),
        Some("en-GB")
    );
}

#[test]
fn bad_image_keeps_previous_meme() {
    let (state, _effects, errors) = run(
        Size::new(400, 400),
        vec![image("ok.png", 100, 50), image("empty.png", 0, 0)],
    );
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        FitError::InvalidArgument {
            argument: Argument::ContentWidth,
            ..
        }
    ));
    assert_eq!(state.image.unwrap().file_name, "ok.png");
}

#[test]
fn new_image_after_reset_restores_editing() {
    let (state, effects, _) = run(
        Size::new(300, 300),
        vec![
            image("a.png", 10, 20),
            captions("x", "y"),
            Event::ResetClicked,
            image("b.png", 20, 10),
        ],
    );
    assert_eq!(state.controls, Controls::default());
    let controls: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::SetControls(c) => Some((c.submit, c.reset, c.read_aloud)),
            _ => None,
        })
        .collect();
    assert_eq!(
        controls,
        vec![
            (true, false, false),
            (false, true, true),
            (true, false, false),
            (true, false, false),
        ]
    );
}

#[cfg(feature = "svg")]
#[test]
fn session_renders_to_svg() {
    let (state, effects, _) = run(
        Size::new(400, 400),
        vec![image("cat.png", 300, 600), captions("HI", "BYE")],
    );
    let svg = svg::render_effects_svg(state.canvas, &effects);
    assert!(svg.contains(r#"x="100.0" y="0.0" width="200.0" height="400.0""#));
    assert!(svg.contains(">HI</text>"));
    assert!(svg.contains(">BYE</text>"));
}
