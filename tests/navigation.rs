use rand::{Rng, SeedableRng, rngs::StdRng};
use tuneroute::routing::{
    Animation, Entry, GlobalEmitter, NavStack, RenderError, Route0, Route1, Route2,
    RouteHandler, SavedStack, UnmatchedPolicy, required,
};

const ALBUM: Route1<Option<String>> = Route1::new("albumRoute");
const ARTIST: Route1<Option<String>> = Route1::new("artistRoute");
const MOOD: Route2<String, Option<String>> = Route2::new("moodRoute");
const SETTINGS: Route0 = Route0::new("settingsRoute");

#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Host,
    Album(String),
    Artist(String),
    Mood(String, Option<String>),
    Settings,
}

fn router(emitter: Option<&GlobalEmitter>) -> RouteHandler<Screen> {
    let mut builder = RouteHandler::builder(|| Screen::Host)
        .route(&ALBUM, |(id,)| Ok(Screen::Album(required(id, "browseId")?)))
        .route(&ARTIST, |(id,)| Ok(Screen::Artist(required(id, "browseId")?)))
        .route(&MOOD, |(title, params)| Ok(Screen::Mood(title, params)))
        .route(&SETTINGS, |()| Ok(Screen::Settings))
        .unmatched(UnmatchedPolicy::Error);
    if let Some(emitter) = emitter {
        builder = builder.listen_to(emitter);
    }
    builder.build().unwrap()
}

fn screen(router: &mut RouteHandler<Screen>) -> Screen {
    router.render().unwrap().screen
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Album,
    Artist,
    Settings,
    Pop,
}

fn ops(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| match rng.random_range(0..4) {
            0 => Op::Album,
            1 => Op::Artist,
            2 => Op::Settings,
            _ => Op::Pop,
        })
        .collect()
}

#[test]
fn visible_route_is_last_surviving_push() {
    for seed in 0..64 {
        let mut router = router(None);
        let mut model: Vec<Screen> = Vec::new();

        for (i, op) in ops(seed, 40).into_iter().enumerate() {
            match op {
                Op::Album => {
                    router.push(&ALBUM, (Some(format!("al{i}")),)).unwrap();
                    model.push(Screen::Album(format!("al{i}")));
                }
                Op::Artist => {
                    router.push(&ARTIST, (Some(format!("ar{i}")),)).unwrap();
                    model.push(Screen::Artist(format!("ar{i}")));
                }
                Op::Settings => {
                    router.push(&SETTINGS, ()).unwrap();
                    model.push(Screen::Settings);
                }
                Op::Pop => {
                    router.pop();
                    model.pop();
                }
            }
            let expected = model.last().cloned().unwrap_or(Screen::Host);
            assert_eq!(screen(&mut router), expected, "seed {seed} step {i}");
            assert_eq!(router.depth(), model.len());
        }
    }
}

#[test]
fn push_pop_push_nets_depth_one() {
    let mut router = router(None);
    router.push(&ALBUM, (Some("abc123".into()),)).unwrap();
    router.pop();
    router.push(&ARTIST, (Some("xyz".into()),)).unwrap();

    assert_eq!(screen(&mut router), Screen::Artist("xyz".into()));
    assert_eq!(router.depth(), 1);
}

#[test]
fn pop_at_host_is_idempotent() {
    let mut router = router(None);
    assert!(!router.pop());
    assert!(!router.pop());
    assert_eq!(screen(&mut router), Screen::Host);
    assert_eq!(router.depth(), 0);
}

#[test]
fn two_parameter_route_round_trips() {
    let mut router = router(None);
    router.push(&MOOD, ("Chill".into(), None)).unwrap();
    assert_eq!(screen(&mut router), Screen::Mood("Chill".into(), None));
    router
        .push(&MOOD, ("Focus".into(), Some("ggMPO".into())))
        .unwrap();
    assert_eq!(
        screen(&mut router),
        Screen::Mood("Focus".into(), Some("ggMPO".into()))
    );
}

#[test]
fn null_required_parameter_is_a_render_error() {
    let mut router = router(None);
    router.push(&ARTIST, (None,)).unwrap();
    let err = router.render().unwrap_err();
    assert!(matches!(
        err,
        RenderError::MissingParameter { ref route, param: "browseId" } if route == "artistRoute"
    ));
    assert_eq!(err.to_string(), "Route 'artistRoute' requires 'browseId' but it was not provided");
}

#[test]
fn transitions_follow_depth() {
    let mut router = router(None);
    router.render().unwrap();

    router.push(&SETTINGS, ()).unwrap();
    let pushed = router.render().unwrap();
    assert!(pushed.transition.is_stacking());
    assert_eq!(pushed.animation, Animation::SlideFromRight);

    router.pop();
    let popped = router.render().unwrap();
    assert!(popped.transition.is_unstacking());
    assert_eq!(popped.animation, Animation::SlideFromLeft);

    let again = router.render().unwrap();
    assert!(again.transition.is_still());
}

#[test]
fn emission_reaches_only_current_listeners() {
    let emitter = GlobalEmitter::new();
    let mut listening = router(Some(&emitter));
    let mut deaf = router(None);

    assert!(ALBUM.global(&emitter, (Some("g1".into()),)).unwrap());

    assert_eq!(screen(&mut listening), Screen::Album("g1".into()));
    assert_eq!(screen(&mut deaf), Screen::Host);

    let mut late = router(Some(&emitter));
    assert_eq!(screen(&mut late), Screen::Host);
    assert_eq!(listening.depth(), 1);
}

#[test]
fn nested_dispatchers_keep_independent_stacks() {
    let emitter = GlobalEmitter::new();
    let mut outer = router(Some(&emitter));
    let mut tab = router(Some(&emitter));

    tab.push(&SETTINGS, ()).unwrap();
    assert_eq!(outer.depth(), 0);

    ARTIST.global(&emitter, (Some("shared".into()),)).unwrap();
    assert_eq!(screen(&mut outer), Screen::Artist("shared".into()));
    assert_eq!(screen(&mut tab), Screen::Artist("shared".into()));
    assert_eq!(outer.depth(), 1);
    assert_eq!(tab.depth(), 2);
}

#[test]
fn emission_without_listener_is_not_replayed() {
    let emitter = GlobalEmitter::new();
    assert!(!ALBUM.global(&emitter, (Some("lost".into()),)).unwrap());

    let mut router = router(Some(&emitter));
    assert_eq!(screen(&mut router), Screen::Host);
}

#[test]
fn saved_state_restores_screens() {
    let mut router = router(None);
    router.push(&SETTINGS, ()).unwrap();
    router.push(&MOOD, ("Party".into(), Some("p".into()))).unwrap();

    let json = router.save().to_json().unwrap();
    let mut restored = self::router(None);
    assert_eq!(restored.restore(SavedStack::from_json(&json).unwrap()), 0);

    assert_eq!(screen(&mut restored), Screen::Mood("Party".into(), Some("p".into())));
    restored.pop();
    assert_eq!(screen(&mut restored), Screen::Settings);
}

#[test]
fn raw_entries_go_through_the_same_dispatch() {
    let mut stack = NavStack::new();
    stack.push(Entry {
        route: ALBUM.id(),
        params: vec![serde_json::json!("from-link")],
    });

    let mut router = router(None);
    router.restore(stack.save());
    assert_eq!(screen(&mut router), Screen::Album("from-link".into()));
}
