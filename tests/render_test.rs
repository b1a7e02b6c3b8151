use fixfn::render::{Batches, Pass, RenderTree};

fn flatten(flows: Vec<RenderTree<&'static str>>) -> Batches<&'static str> {
    let mut batches = Batches::default();
    flows
        .into_iter()
        .for_each(|render| render.set_pipelines(&mut batches));
    batches
}

fn draw_order(batches: &Batches<&'static str>) -> Vec<(Pass, &'static str)> {
    Pass::ORDER
        .into_iter()
        .flat_map(|pass| batches.draws(pass).iter().map(move |draw| (pass, *draw)))
        .collect()
}

#[test]
fn passes_run_coloured_textured_then_both_blended() {
    assert_eq!(
        Pass::ORDER,
        [Pass::Coloured, Pass::Textured, Pass::BlendedBack, Pass::BlendedFront]
    );
    assert!(!Pass::Coloured.is_textured());
    assert!(Pass::ORDER[1..].iter().all(|pass| pass.is_textured()));
}

#[test]
fn nested_renders_flatten_in_submission_order() {
    let batches = flatten(vec![
        RenderTree::Composed(vec![
            RenderTree::Coloured("triangle 1"),
            RenderTree::None,
            RenderTree::Composed(vec![
                RenderTree::Coloured("triangle 2"),
                RenderTree::Textured("quad"),
            ]),
            RenderTree::Coloured("triangle 3"),
        ]),
        RenderTree::None,
    ]);

    assert_eq!(batches.coloured, vec!["triangle 1", "triangle 2", "triangle 3"]);
    assert_eq!(batches.textured, vec!["quad"]);
    assert!(batches.blended.is_empty());
}

#[test]
fn blended_draws_follow_opaque_ones_twice() {
    // blended is submitted first, coloured last, across two flows
    let batches = flatten(vec![
        RenderTree::Composed(vec![RenderTree::Blended("cube"), RenderTree::Textured("sprite")]),
        RenderTree::Coloured("triangle"),
    ]);

    assert_eq!(
        draw_order(&batches),
        vec![
            (Pass::Coloured, "triangle"),
            (Pass::Textured, "sprite"),
            (Pass::BlendedBack, "cube"),
            (Pass::BlendedFront, "cube"),
        ]
    );
}

#[test]
fn empty_frame_draws_nothing() {
    let batches = flatten(vec![RenderTree::None, RenderTree::Composed(vec![])]);
    assert!(draw_order(&batches).is_empty());
}
