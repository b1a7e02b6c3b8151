#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_draw_coloured_triangles_on_black() {
    use crate::common::test_utils::{TestRender, corners, is_black, pixel_at};
    use fixfn::{
        context::InitContext,
        flow::ImageTestResult,
        scenes::matrices::{self, Matrices},
    };

    golden_image_test!(
        matrices::settings(),
        async move |ctx: InitContext| -> anyhow::Result<TestRender> {
            let scene = Matrices::new(ctx).await?;
            Ok(TestRender::new(
                Some(Box::new(scene)),
                |_| {},
                |_, state, texture| {
                    if state.frame() == 0 {
                        return Ok(ImageTestResult::Waiting);
                    }
                    if !corners(texture).iter().all(is_black) {
                        return Ok(ImageTestResult::Failed);
                    }
                    // the centre triangle spins about the origin, which the
                    // camera looks straight at
                    let centre_lit = [0.49, 0.5, 0.51]
                        .iter()
                        .flat_map(|&fx| [0.49, 0.5, 0.51].map(|fy| pixel_at(texture, fx, fy)))
                        .any(|pixel| !is_black(&pixel));
                    if !centre_lit {
                        return Ok(ImageTestResult::Failed);
                    }
                    Ok(ImageTestResult::Passed)
                },
            ))
        }
    );
}
