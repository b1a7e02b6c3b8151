#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_draw_blank_sprite_up_and_right_of_centre() {
    use crate::common::test_utils::{TestRender, corners, is_black, is_white, pixel_at};
    use fixfn::{
        context::{Context, InitContext},
        flow::ImageTestResult,
        scenes::sprite::{self, Sprite},
    };

    golden_image_test!(
        sprite::settings(),
        async move |ctx: InitContext| -> anyhow::Result<TestRender> {
            // no frame images are shipped, every frame falls back to white
            let scene = Sprite::new(ctx).await?;
            Ok(TestRender::new(
                Some(Box::new(scene)),
                |ctx: &mut Context| ctx.clear_colour = wgpu::Color::BLACK,
                |_, state, texture| {
                    if state.frame() == 0 {
                        return Ok(ImageTestResult::Waiting);
                    }
                    if !corners(texture).iter().all(is_black) {
                        return Ok(ImageTestResult::Failed);
                    }
                    // the quad spans the origin to (1, 1), about 0..0.45 NDC on both axes
                    if !is_white(&pixel_at(texture, 0.6, 0.4)) {
                        return Ok(ImageTestResult::Failed);
                    }
                    if !is_black(&pixel_at(texture, 0.4, 0.6)) {
                        return Ok(ImageTestResult::Failed);
                    }
                    Ok(ImageTestResult::Passed)
                },
            ))
        }
    );
}
