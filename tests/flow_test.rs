use fixfn::{
    flow::{FlowConstructor, WindowSettings, run},
    scenes::{blending, matrices, sprite},
};

#[test]
fn default_window_is_square_at_one_hundred() {
    let settings = WindowSettings::default();
    assert_eq!((settings.width, settings.height), (900, 900));
    assert_eq!((settings.x, settings.y), (100, 100));
    assert_eq!(settings.title, "fixfn");
}

#[test]
fn every_scene_builds_a_constructor_for_the_event_loop() {
    let constructors: Vec<FlowConstructor<()>> =
        vec![matrices::flow(), sprite::flow(), blending::flow()];
    assert_eq!(constructors.len(), 3);

    // instantiates the whole application for a unit state without opening a window
    let entry: fn(WindowSettings, Vec<FlowConstructor<()>>) -> anyhow::Result<()> = run::<()>;
    let _ = entry;
}
