#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_clear_colour() {
    use crate::common::test_utils::{TestRender, f_to_u8};
    use fixfn::{
        context::{Context, InitContext},
        flow::{ImageTestResult, WindowSettings},
    };

    golden_image_test!(
        WindowSettings::default(),
        async move |_: InitContext| -> anyhow::Result<TestRender> {
            Ok(TestRender::new(
                None,
                |ctx: &mut Context| ctx.clear_colour = wgpu::Color::WHITE,
                |_, state, texture| {
                    if state.frame() == 0 {
                        return Ok(ImageTestResult::Waiting);
                    }
                    let colour = wgpu::Color::WHITE;
                    let desired_pixel = image::Rgba([
                        f_to_u8(colour.r),
                        f_to_u8(colour.g),
                        f_to_u8(colour.b),
                        f_to_u8(colour.a),
                    ]);
                    for pixel in texture.pixels() {
                        assert_eq!(*pixel, desired_pixel);
                    }
                    Ok(ImageTestResult::Passed)
                },
            ))
        }
    );
}
